//! `AudioStream` class and the JS side of the callback bridge
//!
//! SDL runs stream callbacks on its audio thread. Each registered
//! direction owns a threadsafe function that the audio thread pokes; the
//! JS turn it schedules drains the direction's mailbox and calls the user
//! callback with the newest `(amount, total)` pair. A turn that finds the
//! mailbox empty calls nothing.

use std::sync::Mutex;

use napi::bindgen_prelude::*;
use napi::threadsafe_function::{ThreadsafeFunction, ThreadsafeFunctionCallMode, UnknownReturnValue};
use napi_derive::napi;

use crate::media::{self, Direction, NativeAudioStream, StreamBridge, Trampoline, Wakeup};

use super::audio_device::AudioSpec;
use super::buffer::ByteView;
use super::error::{destroyed_error, invalid_arg, sdl_status};

/// JS signature of a stream callback: `(amount, total) => void`
type StreamCallbackRef = FunctionRef<FnArgs<(i32, i32)>, UnknownReturnValue>;

/// Threadsafe function over a no-op target; the user callback is invoked
/// from its call-js hook so an empty turn can skip it
type WakeupFunction = ThreadsafeFunction<(), (), (), Status, false, false>;

/// Wakeup backed by a threadsafe function
pub struct JsWakeup {
  tsfn: Mutex<Option<WakeupFunction>>,
}

impl JsWakeup {
  /// Build the threadsafe function around `trampoline`. The trampoline
  /// lives inside the function's callback and is dropped when Node
  /// finalizes it, which is what tells the bridge the handle has closed.
  fn new(
    env: &Env,
    callback: StreamCallbackRef,
    trampoline: Trampoline,
  ) -> media::MediaResult<Self> {
    let bridge_error = |err: Error| media::MediaError::Bridge(err.to_string());
    let target = env
      .create_function_from_closure::<(), (), _>("audioStreamWakeup", |_ctx| Ok(()))
      .map_err(bridge_error)?;
    let tsfn = target
      .build_threadsafe_function::<()>()
      .callee_handled::<false>()
      .weak::<false>()
      .build_callback(move |ctx| {
        trampoline.dispatch(|request| {
          callback
            .borrow_back(&ctx.env)?
            .call((request.amount, request.total).into())?;
          Ok::<(), Error>(())
        })?;
        Ok(())
      })
      .map_err(bridge_error)?;
    Ok(Self {
      tsfn: Mutex::new(Some(tsfn)),
    })
  }
}

impl Wakeup for JsWakeup {
  fn wake(&self) -> bool {
    match self.tsfn.lock() {
      Ok(guard) => match guard.as_ref() {
        Some(tsfn) => tsfn.call((), ThreadsafeFunctionCallMode::NonBlocking) == Status::Ok,
        None => false,
      },
      Err(_) => false,
    }
  }

  fn close(&self) {
    let tsfn = match self.tsfn.lock() {
      Ok(mut guard) => guard.take(),
      Err(poisoned) => poisoned.into_inner().take(),
    };
    // Releasing lets queued turns run; they find the mailbox closed
    drop(tsfn);
  }
}

/// Optional callbacks passed to the `AudioStream` constructor
pub struct AudioStreamCallbacks {
  pub get: Option<StreamCallbackRef>,
  pub put: Option<StreamCallbackRef>,
}

/// Whether a `callbacks` property holds a callback. `undefined`/`null` mean
/// none; anything else must be a function.
fn is_callback(name: &str, value_type: ValueType) -> Result<bool> {
  match value_type {
    ValueType::Undefined | ValueType::Null => Ok(false),
    ValueType::Function => Ok(true),
    other => Err(invalid_arg(format!(
      "callbacks.{} must be a function, got {}",
      name, other
    ))),
  }
}

fn callback_property(obj: &Object, name: &str) -> Result<Option<StreamCallbackRef>> {
  let value = match obj.get::<Unknown>(name)? {
    Some(value) => value,
    None => return Ok(None),
  };
  if !is_callback(name, value.get_type()?)? {
    return Ok(None);
  }
  let func = Function::<FnArgs<(i32, i32)>, UnknownReturnValue>::from_unknown(value)?;
  Ok(Some(func.create_ref()?))
}

impl FromNapiValue for AudioStreamCallbacks {
  unsafe fn from_napi_value(
    env: napi::sys::napi_env,
    value: napi::sys::napi_value,
  ) -> Result<Self> {
    let obj = unsafe { Object::from_napi_value(env, value)? };
    Ok(AudioStreamCallbacks {
      get: callback_property(&obj, "get")?,
      put: callback_property(&obj, "put")?,
    })
  }
}

/// Format converting audio queue
#[napi]
pub struct AudioStream {
  bridge: StreamBridge<NativeAudioStream, JsWakeup>,
  source: AudioSpec,
  target: AudioSpec,
}

#[napi]
impl AudioStream {
  #[napi(
    constructor,
    ts_args_type = "source: AudioSpec, target: AudioSpec, callbacks?: { get?: (amount: number, total: number) => void, put?: (amount: number, total: number) => void }"
  )]
  pub fn new(
    env: Env,
    source: AudioSpec,
    target: AudioSpec,
    callbacks: Option<AudioStreamCallbacks>,
  ) -> Result<Self> {
    let mut stream = Self::create(source, target)?;

    if let Some(callbacks) = callbacks {
      if let Some(get) = callbacks.get {
        stream.register(&env, Direction::Get, get)?;
      }
      if let Some(put) = callbacks.put {
        stream.register(&env, Direction::Put, put)?;
      }
    }

    Ok(stream)
  }

  fn create(source: AudioSpec, target: AudioSpec) -> Result<Self> {
    let native = NativeAudioStream::new(source.into(), target.into())?;
    Ok(Self {
      bridge: StreamBridge::new(native),
      source,
      target,
    })
  }

  fn register(
    &mut self,
    env: &Env,
    direction: Direction,
    callback: StreamCallbackRef,
  ) -> Result<()> {
    if self.bridge.is_destroyed() {
      return Err(destroyed_error("AudioStream"));
    }
    self
      .bridge
      .register(direction, |trampoline| JsWakeup::new(env, callback, trampoline))?;
    Ok(())
  }

  fn set_callback(
    &mut self,
    env: &Env,
    direction: Direction,
    callback: Option<StreamCallbackRef>,
  ) -> Result<()> {
    match callback {
      Some(callback) => self.register(env, direction, callback),
      None => {
        self.bridge.unregister(direction);
        Ok(())
      }
    }
  }

  pub(crate) fn with_native<T>(&self, f: impl FnOnce(&NativeAudioStream) -> T) -> Option<T> {
    self.bridge.with_stream(f)
  }

  /// Called as `(additional, total)` when the stream wants more data
  #[napi(ts_args_type = "callback: ((amount: number, total: number) => void) | null")]
  pub fn set_get_callback(
    &mut self,
    env: &Env,
    callback: Option<StreamCallbackRef>,
  ) -> Result<()> {
    self.set_callback(env, Direction::Get, callback)
  }

  /// Called as `(additional, total)` after data was queued
  #[napi(ts_args_type = "callback: ((amount: number, total: number) => void) | null")]
  pub fn set_put_callback(
    &mut self,
    env: &Env,
    callback: Option<StreamCallbackRef>,
  ) -> Result<()> {
    self.set_callback(env, Direction::Put, callback)
  }

  #[napi(getter)]
  pub fn source(&self) -> AudioSpec {
    self.source
  }

  #[napi(getter)]
  pub fn target(&self) -> AudioSpec {
    self.target
  }

  /// Queue `length` bytes of `data` starting at byte `offset`
  #[napi(
    ts_args_type = "data: ArrayBuffer | ArrayBufferView, offset?: number, length?: number"
  )]
  pub fn put(&self, data: Unknown, offset: Option<u32>, length: Option<u32>) -> Result<bool> {
    if self.bridge.is_destroyed() {
      return Ok(false);
    }
    let view = ByteView::from_unknown(data, "data")?;
    self.put_bytes(view.window(offset, length)?)
  }

  fn put_bytes(&self, bytes: &[u8]) -> Result<bool> {
    match self.with_native(|native| native.put(bytes)) {
      Some(result) => sdl_status(result, "SDL_PutAudioStreamData"),
      None => Ok(false),
    }
  }

  /// Read converted data into `dest`; returns the number of bytes written
  #[napi(
    ts_args_type = "dest: ArrayBuffer | ArrayBufferView, offset?: number, length?: number"
  )]
  pub fn get(&self, dest: Unknown, offset: Option<u32>, length: Option<u32>) -> Result<u32> {
    if self.bridge.is_destroyed() {
      return Ok(0);
    }
    let mut view = ByteView::from_unknown(dest, "dest")?;
    self.get_into(view.window_mut(offset, length)?)
  }

  fn get_into(&self, buf: &mut [u8]) -> Result<u32> {
    match self.with_native(|native| native.get(buf)) {
      Some(result) => Ok(result? as u32),
      None => Ok(0),
    }
  }

  /// Converted bytes ready to be read
  #[napi(getter)]
  pub fn available(&self) -> Result<u32> {
    match self.with_native(|native| native.available()) {
      Some(result) => Ok(result? as u32),
      None => Ok(0),
    }
  }

  /// Bound device id, 0 when unbound
  #[napi(getter)]
  pub fn device(&self) -> u32 {
    self.with_native(|native| native.device()).unwrap_or(0)
  }

  #[napi]
  pub fn flush(&self) -> Result<bool> {
    match self.with_native(|native| native.flush()) {
      Some(result) => sdl_status(result, "SDL_FlushAudioStream"),
      None => Ok(false),
    }
  }

  #[napi]
  pub fn clear(&self) -> Result<bool> {
    match self.with_native(|native| native.clear()) {
      Some(result) => sdl_status(result, "SDL_ClearAudioStream"),
      None => Ok(false),
    }
  }

  /// Resume the device this stream is bound to
  #[napi]
  pub fn resume(&self) -> Result<bool> {
    match self.with_native(|native| native.resume_device()) {
      Some(result) => sdl_status(result, "SDL_ResumeAudioStreamDevice"),
      None => Ok(false),
    }
  }

  #[napi(getter)]
  pub fn destroyed(&self) -> bool {
    self.bridge.is_destroyed()
  }

  /// Unregister both callbacks and release the stream once their wakeups
  /// have closed. Idempotent.
  #[napi]
  pub fn destroy(&mut self) {
    if !self.bridge.is_destroyed() {
      tracing::debug!(target: "sdl", "audio stream destroy requested");
    }
    self.bridge.destroy();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ffi::audio::SDL_AUDIO_S16;

  fn mono_s16() -> AudioSpec {
    AudioSpec {
      format: SDL_AUDIO_S16,
      channels: 1,
      freq: 48000,
    }
  }

  fn stream_or_skip() -> Option<AudioStream> {
    match AudioStream::create(mono_s16(), mono_s16()) {
      Ok(stream) => Some(stream),
      Err(e) => {
        eprintln!("skipping: {}", e);
        None
      }
    }
  }

  #[test]
  fn test_callback_property_types() {
    assert!(!is_callback("get", ValueType::Undefined).unwrap());
    assert!(!is_callback("get", ValueType::Null).unwrap());
    assert!(is_callback("put", ValueType::Function).unwrap());
    for value_type in [ValueType::Number, ValueType::String, ValueType::Object] {
      let err = is_callback("put", value_type).unwrap_err();
      assert_eq!(err.status, Status::InvalidArg);
      assert!(err.reason.starts_with("callbacks.put must be a function"), "{}", err.reason);
    }
  }

  #[test]
  fn test_live_stream_round_trips_bytes() {
    let Some(stream) = stream_or_skip() else {
      return;
    };
    let input: Vec<u8> = (0..32u8).collect();
    assert!(stream.put_bytes(&input).unwrap());
    assert!(stream.flush().unwrap());
    assert_eq!(stream.available().unwrap(), 32);

    let mut output = [0u8; 32];
    assert_eq!(stream.get_into(&mut output).unwrap(), 32);
    assert_eq!(&output[..], &input[..]);
  }

  #[test]
  fn test_destroyed_stream_defaults() {
    let Some(mut stream) = stream_or_skip() else {
      return;
    };
    assert!(stream.put_bytes(&[0u8; 16]).unwrap());

    stream.destroy();
    assert!(stream.destroyed());
    assert!(!stream.put_bytes(&[0u8; 16]).unwrap());
    let mut buf = [0xAAu8; 16];
    assert_eq!(stream.get_into(&mut buf).unwrap(), 0);
    assert_eq!(buf, [0xAAu8; 16]);
    assert_eq!(stream.available().unwrap(), 0);
    assert_eq!(stream.device(), 0);
    assert!(!stream.flush().unwrap());
    assert!(!stream.clear().unwrap());
    assert!(!stream.resume().unwrap());
    assert!(stream.with_native(|_| ()).is_none());
    assert_eq!(stream.source().freq, 48000);

    stream.destroy();
    assert!(stream.destroyed());
  }
}
