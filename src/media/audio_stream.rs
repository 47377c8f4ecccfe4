//! Safe wrapper around SDL_AudioStream
//!
//! SDL locks an audio stream internally for every call, so the wrapper hands
//! out `&self` methods and is `Send`. Callback registration goes through the
//! [`CallbackTarget`] impl and is owned by the
//! [`StreamBridge`](super::StreamBridge).

use std::os::raw::c_void;
use std::ptr::NonNull;

use crate::ffi::{
  self,
  audio::{
    SDL_BindAudioStream, SDL_ClearAudioStream, SDL_CreateAudioStream, SDL_DestroyAudioStream,
    SDL_FlushAudioStream, SDL_GetAudioStreamAvailable, SDL_GetAudioStreamData,
    SDL_GetAudioStreamDevice, SDL_PutAudioStreamData, SDL_ResumeAudioStreamDevice,
    SDL_SetAudioStreamGetCallback, SDL_SetAudioStreamPutCallback, SDL_UnbindAudioStream,
  },
  SDL_AudioDeviceID, SDL_AudioSpec, SDL_AudioStream, SDL_AudioStreamCallback, SdlError,
};

use super::callback_bridge::{CallbackTarget, Direction};
use super::{to_c_int, MediaResult};

/// Owned SDL audio stream; destroyed (and unbound) on drop
pub struct NativeAudioStream {
  ptr: NonNull<SDL_AudioStream>,
}

impl NativeAudioStream {
  /// Create a stream converting from `source` to `target`
  pub fn new(source: SDL_AudioSpec, target: SDL_AudioSpec) -> MediaResult<Self> {
    let ptr = unsafe { SDL_CreateAudioStream(&source, &target) };
    let ptr = ffi::check_ptr(ptr, "SDL_CreateAudioStream")?;
    tracing::debug!(
      target: "sdl",
      src_format = source.format,
      dst_format = target.format,
      "audio stream created"
    );
    Ok(Self { ptr })
  }

  #[inline]
  pub fn as_ptr(&self) -> *mut SDL_AudioStream {
    self.ptr.as_ptr()
  }

  /// Queue `data` for conversion. Fires the put callback synchronously.
  pub fn put(&self, data: &[u8]) -> MediaResult<()> {
    let len = to_c_int(data.len(), "data length")?;
    let ok = unsafe { SDL_PutAudioStreamData(self.as_ptr(), data.as_ptr() as *const c_void, len) };
    Ok(ffi::check_bool(ok, "SDL_PutAudioStreamData")?)
  }

  /// Read converted data into `buf`, returning the byte count.
  /// May fire the get callback synchronously.
  pub fn get(&self, buf: &mut [u8]) -> MediaResult<usize> {
    let len = to_c_int(buf.len(), "buffer length")?;
    let read = unsafe { SDL_GetAudioStreamData(self.as_ptr(), buf.as_mut_ptr() as *mut c_void, len) };
    if read < 0 {
      return Err(SdlError::last_or("SDL_GetAudioStreamData").into());
    }
    Ok(read as usize)
  }

  /// Converted bytes ready to be read
  pub fn available(&self) -> MediaResult<usize> {
    let available = unsafe { SDL_GetAudioStreamAvailable(self.as_ptr()) };
    if available < 0 {
      return Err(SdlError::last_or("SDL_GetAudioStreamAvailable").into());
    }
    Ok(available as usize)
  }

  pub fn flush(&self) -> MediaResult<()> {
    let ok = unsafe { SDL_FlushAudioStream(self.as_ptr()) };
    Ok(ffi::check_bool(ok, "SDL_FlushAudioStream")?)
  }

  pub fn clear(&self) -> MediaResult<()> {
    let ok = unsafe { SDL_ClearAudioStream(self.as_ptr()) };
    Ok(ffi::check_bool(ok, "SDL_ClearAudioStream")?)
  }

  /// Device the stream is bound to, 0 when unbound
  pub fn device(&self) -> SDL_AudioDeviceID {
    unsafe { SDL_GetAudioStreamDevice(self.as_ptr()) }
  }

  /// Resume the device this stream is bound to
  pub fn resume_device(&self) -> MediaResult<()> {
    let ok = unsafe { SDL_ResumeAudioStreamDevice(self.as_ptr()) };
    Ok(ffi::check_bool(ok, "SDL_ResumeAudioStreamDevice")?)
  }

  pub fn bind(&self, device: SDL_AudioDeviceID) -> MediaResult<()> {
    let ok = unsafe { SDL_BindAudioStream(device, self.as_ptr()) };
    Ok(ffi::check_bool(ok, "SDL_BindAudioStream")?)
  }

  pub fn unbind(&self) {
    unsafe { SDL_UnbindAudioStream(self.as_ptr()) }
  }
}

impl CallbackTarget for NativeAudioStream {
  fn set_callback(
    &self,
    direction: Direction,
    callback: SDL_AudioStreamCallback,
    userdata: *mut c_void,
  ) -> MediaResult<()> {
    let ok = unsafe {
      match direction {
        Direction::Get => SDL_SetAudioStreamGetCallback(self.as_ptr(), callback, userdata),
        Direction::Put => SDL_SetAudioStreamPutCallback(self.as_ptr(), callback, userdata),
      }
    };
    Ok(ffi::check_bool(ok, "SDL_SetAudioStreamCallback")?)
  }
}

impl Drop for NativeAudioStream {
  fn drop(&mut self) {
    unsafe { SDL_DestroyAudioStream(self.as_ptr()) };
    tracing::debug!(target: "sdl", "audio stream destroyed");
  }
}

// SDL_AudioStream carries its own lock; every entry point is thread-safe
unsafe impl Send for NativeAudioStream {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ffi::audio::{SDL_AUDIO_F32, SDL_AUDIO_S16};
  use crate::media::callback_bridge::{StreamBridge, Trampoline, Wakeup};
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::{Arc, Mutex};

  fn spec(format: u32, channels: i32, freq: i32) -> SDL_AudioSpec {
    SDL_AudioSpec {
      format,
      channels,
      freq,
    }
  }

  fn stream_or_skip(source: SDL_AudioSpec, target: SDL_AudioSpec) -> Option<NativeAudioStream> {
    match NativeAudioStream::new(source, target) {
      Ok(stream) => Some(stream),
      Err(e) => {
        eprintln!("skipping: {}", e);
        None
      }
    }
  }

  #[test]
  fn test_put_get_same_format() {
    let format = spec(SDL_AUDIO_S16, 1, 48000);
    let Some(stream) = stream_or_skip(format, format) else {
      return;
    };

    let input: Vec<u8> = (0..64u8).collect();
    stream.put(&input).unwrap();
    stream.flush().unwrap();
    assert_eq!(stream.available().unwrap(), input.len());

    let mut output = vec![0u8; 64];
    let read = stream.get(&mut output).unwrap();
    assert_eq!(read, 64);
    assert_eq!(output, input);
    assert_eq!(stream.device(), 0);
  }

  #[test]
  fn test_clear_drops_queued_data() {
    let Some(stream) = stream_or_skip(spec(SDL_AUDIO_F32, 2, 44100), spec(SDL_AUDIO_S16, 2, 44100))
    else {
      return;
    };
    stream.put(&[0u8; 32]).unwrap();
    stream.clear().unwrap();
    assert_eq!(stream.available().unwrap(), 0);
  }

  struct CountingWakeup(Arc<AtomicUsize>);

  impl Wakeup for CountingWakeup {
    fn wake(&self) -> bool {
      self.0.fetch_add(1, Ordering::SeqCst);
      true
    }

    fn close(&self) {}
  }

  #[test]
  fn test_put_callback_reaches_trampoline() {
    let format = spec(SDL_AUDIO_S16, 1, 48000);
    let Some(stream) = stream_or_skip(format, format) else {
      return;
    };

    let wakes = Arc::new(AtomicUsize::new(0));
    let trampoline: Arc<Mutex<Option<Trampoline>>> = Arc::new(Mutex::new(None));
    let mut bridge: StreamBridge<NativeAudioStream, CountingWakeup> = StreamBridge::new(stream);

    let slot = Arc::clone(&trampoline);
    let counter = Arc::clone(&wakes);
    bridge
      .register(Direction::Put, move |t| {
        *slot.lock().unwrap() = Some(t);
        Ok(CountingWakeup(counter))
      })
      .unwrap();

    bridge.with_stream(|s| s.put(&[0u8; 16])).unwrap().unwrap();
    bridge.with_stream(|s| s.put(&[0u8; 16])).unwrap().unwrap();
    assert_eq!(wakes.load(Ordering::SeqCst), 1);

    let delivered = trampoline.lock().unwrap().as_ref().and_then(|t| t.deliver());
    assert!(delivered.map(|r| r.amount > 0).unwrap_or(false));

    bridge.destroy();
    // Trampoline still alive, so the stream is not torn down yet
    assert!(bridge.is_destroyed());
    trampoline.lock().unwrap().take();
  }
}
