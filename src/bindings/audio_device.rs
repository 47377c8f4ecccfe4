//! Audio device functions and the `AudioDevice` class

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::ffi::audio::{SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK, SDL_AUDIO_DEVICE_DEFAULT_RECORDING};
use crate::ffi::SDL_AudioSpec;
use crate::media::{self, audio_device};

use super::audio_stream::AudioStream;
use super::error::{destroyed_error, sdl_status};

/// Fully specified sample format
#[napi(object)]
#[derive(Debug, Clone, Copy)]
pub struct AudioSpec {
  pub format: u32,
  pub channels: i32,
  pub freq: i32,
}

impl From<AudioSpec> for SDL_AudioSpec {
  fn from(spec: AudioSpec) -> Self {
    SDL_AudioSpec {
      format: spec.format,
      channels: spec.channels,
      freq: spec.freq,
    }
  }
}

impl From<SDL_AudioSpec> for AudioSpec {
  fn from(spec: SDL_AudioSpec) -> Self {
    AudioSpec {
      format: spec.format,
      channels: spec.channels,
      freq: spec.freq,
    }
  }
}

/// Requested format when opening a device. Only used when all three
/// fields are present; otherwise the device's preferred format is used.
#[napi(object)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioOpenSpec {
  pub format: Option<u32>,
  pub channels: Option<i32>,
  pub freq: Option<i32>,
}

impl AudioOpenSpec {
  fn complete(self) -> Option<SDL_AudioSpec> {
    match (self.format, self.channels, self.freq) {
      (Some(format), Some(channels), Some(freq)) => Some(SDL_AudioSpec {
        format,
        channels,
        freq,
      }),
      _ => None,
    }
  }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct AudioDeviceFormat {
  pub valid: bool,
  /// Device buffer size in sample frames
  pub sample_frames: i32,
  pub spec: AudioSpec,
}

impl From<media::DeviceFormat> for AudioDeviceFormat {
  fn from(format: media::DeviceFormat) -> Self {
    AudioDeviceFormat {
      valid: format.valid,
      sample_frames: format.sample_frames,
      spec: format.spec.into(),
    }
  }
}

// ============================================================================
// Free functions
// ============================================================================

fn device_list(result: media::MediaResult<Vec<u32>>, kind: &str) -> Vec<u32> {
  result.unwrap_or_else(|err| {
    tracing::debug!(target: "sdl", "no {} devices: {}", kind, err);
    Vec::new()
  })
}

/// Playback device ids; empty when SDL cannot enumerate
#[napi]
pub fn get_audio_playback_devices() -> Vec<u32> {
  device_list(audio_device::playback_devices(), "playback")
}

/// Recording device ids; empty when SDL cannot enumerate
#[napi]
pub fn get_audio_recording_devices() -> Vec<u32> {
  device_list(audio_device::recording_devices(), "recording")
}

#[napi]
pub fn get_audio_device_name(id: u32) -> Option<String> {
  audio_device::device_name(id)
}

#[napi]
pub fn get_audio_device_format(id: u32) -> AudioDeviceFormat {
  audio_device::device_format(id).into()
}

/// Open a logical device and return its id
#[napi]
pub fn open_audio_device(id: u32, spec: Option<AudioOpenSpec>) -> Result<u32> {
  let spec = spec.and_then(AudioOpenSpec::complete);
  Ok(audio_device::open(id, spec)?)
}

#[napi]
pub fn close_audio_device(id: u32) {
  audio_device::close(id);
}

#[napi]
pub fn pause_audio_device(id: u32) -> Result<bool> {
  sdl_status(audio_device::pause(id), "SDL_PauseAudioDevice")
}

#[napi]
pub fn resume_audio_device(id: u32) -> Result<bool> {
  sdl_status(audio_device::resume(id), "SDL_ResumeAudioDevice")
}

#[napi]
pub fn get_audio_device_gain(id: u32) -> Result<f64> {
  Ok(audio_device::device_gain(id)? as f64)
}

#[napi]
pub fn set_audio_device_gain(id: u32, gain: f64) -> Result<bool> {
  sdl_status(audio_device::set_device_gain(id, gain as f32), "SDL_SetAudioDeviceGain")
}

#[napi]
pub fn is_audio_device_physical(id: u32) -> bool {
  audio_device::is_physical(id)
}

#[napi]
pub fn is_audio_device_playback(id: u32) -> bool {
  audio_device::is_playback(id)
}

#[napi]
pub fn is_audio_device_paused(id: u32) -> bool {
  audio_device::is_paused(id)
}

// ============================================================================
// AudioDevice
// ============================================================================

/// An opened logical audio device
#[napi]
pub struct AudioDevice {
  inner: Option<media::AudioDevice>,
}

#[napi]
impl AudioDevice {
  /// Open `id`, the default playback device when omitted
  #[napi(factory)]
  pub fn open(id: Option<u32>, spec: Option<AudioOpenSpec>) -> Result<Self> {
    let id = id.unwrap_or(SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK);
    let device = media::AudioDevice::open(id, spec.and_then(AudioOpenSpec::complete))?;
    Ok(Self {
      inner: Some(device),
    })
  }

  #[napi(factory)]
  pub fn default_playback(spec: Option<AudioOpenSpec>) -> Result<Self> {
    Self::open(Some(SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK), spec)
  }

  #[napi(factory)]
  pub fn default_recording(spec: Option<AudioOpenSpec>) -> Result<Self> {
    Self::open(Some(SDL_AUDIO_DEVICE_DEFAULT_RECORDING), spec)
  }

  /// Formats of every playback device, without opening them
  #[napi]
  pub fn playback_device_formats() -> Vec<AudioDeviceFormat> {
    get_audio_playback_devices()
      .into_iter()
      .map(get_audio_device_format)
      .collect()
  }

  #[napi]
  pub fn recording_device_formats() -> Vec<AudioDeviceFormat> {
    get_audio_recording_devices()
      .into_iter()
      .map(get_audio_device_format)
      .collect()
  }

  fn handle(&self) -> Result<&media::AudioDevice> {
    self.inner.as_ref().ok_or_else(|| destroyed_error("AudioDevice"))
  }

  #[napi(getter)]
  pub fn id(&self) -> Result<u32> {
    Ok(self.handle()?.id())
  }

  #[napi(getter)]
  pub fn name(&self) -> Result<Option<String>> {
    Ok(self.handle()?.name())
  }

  #[napi(getter)]
  pub fn format(&self) -> Result<AudioDeviceFormat> {
    Ok(self.handle()?.format().into())
  }

  /// Sample format the device was opened with
  #[napi(getter)]
  pub fn spec(&self) -> Result<AudioSpec> {
    Ok(self.handle()?.format().spec.into())
  }

  #[napi(getter)]
  pub fn is_playback(&self) -> Result<bool> {
    Ok(self.handle()?.is_playback())
  }

  #[napi(getter)]
  pub fn is_physical(&self) -> Result<bool> {
    Ok(self.handle()?.is_physical())
  }

  #[napi(getter)]
  pub fn is_paused(&self) -> Result<bool> {
    Ok(self.handle()?.is_paused())
  }

  #[napi(getter)]
  pub fn gain(&self) -> Result<f64> {
    Ok(self.handle()?.gain()? as f64)
  }

  /// Assignments SDL rejects leave the gain unchanged; read it back to
  /// check. Throws only when the device is closed.
  #[napi(setter)]
  pub fn set_gain(&self, gain: f64) -> Result<()> {
    settle_gain(self.handle()?.set_gain(gain as f32))
  }

  #[napi]
  pub fn pause(&self) -> Result<bool> {
    sdl_status(self.handle()?.pause(), "SDL_PauseAudioDevice")
  }

  #[napi]
  pub fn resume(&self) -> Result<bool> {
    sdl_status(self.handle()?.resume(), "SDL_ResumeAudioDevice")
  }

  /// Feed `stream` into (playback) or from (recording) this device
  #[napi]
  pub fn bind_stream(&self, stream: &AudioStream) -> Result<bool> {
    let device = self.handle()?;
    match stream.with_native(|native| device.bind(native)) {
      Some(result) => sdl_status(result, "SDL_BindAudioStream"),
      None => Err(destroyed_error("AudioStream")),
    }
  }

  #[napi]
  pub fn unbind_stream(&self, stream: &AudioStream) -> Result<()> {
    self.handle()?;
    stream.with_native(|native| native.unbind());
    Ok(())
  }

  #[napi(getter)]
  pub fn closed(&self) -> bool {
    self.inner.is_none()
  }

  /// Close the device. Idempotent.
  #[napi]
  pub fn close(&mut self) {
    self.inner = None;
  }

  /// Same as `close()`
  #[napi]
  pub fn destroy(&mut self) {
    self.close();
  }
}

/// A property assignment has no return value, so SDL failures are logged
fn settle_gain(result: media::MediaResult<()>) -> Result<()> {
  if !sdl_status(result, "SDL_SetAudioDeviceGain")? {
    tracing::warn!(target: "sdl", "audio device gain unchanged");
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ffi::SdlError;

  #[test]
  fn test_partial_open_spec_uses_device_default() {
    let partial = AudioOpenSpec {
      format: Some(0x8010),
      channels: Some(2),
      freq: None,
    };
    assert!(partial.complete().is_none());
    assert!(AudioOpenSpec::default().complete().is_none());

    let full = AudioOpenSpec {
      freq: Some(48000),
      ..partial
    };
    assert_eq!(
      full.complete(),
      Some(SDL_AudioSpec {
        format: 0x8010,
        channels: 2,
        freq: 48000,
      })
    );
  }

  #[test]
  fn test_gain_setter_settles_sdl_failures() {
    assert!(settle_gain(Ok(())).is_ok());
    assert!(settle_gain(Err(SdlError::new("Invalid audio device ID").into())).is_ok());
    let err = settle_gain(Err(media::MediaError::Destroyed("AudioDevice"))).unwrap_err();
    assert_eq!(err.reason, "AudioDevice is destroyed");
  }

  #[test]
  fn test_closed_device_rejects_access() {
    let mut device = AudioDevice { inner: None };
    assert!(device.closed());
    assert!(device.spec().is_err());
    assert!(device.set_gain(0.5).is_err());
    assert!(device.pause().is_err());
    device.destroy();
    device.close();
    assert!(device.closed());
  }

  #[test]
  fn test_invalid_device_format_is_zeroed() {
    let format = get_audio_device_format(0);
    assert!(!format.valid);
    assert_eq!(format.sample_frames, 0);
    assert_eq!(format.spec.freq, 0);
  }
}
