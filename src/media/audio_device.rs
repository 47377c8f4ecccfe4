//! Audio device enumeration and logical device handles
//!
//! Device ids are opaque `u32`s. Two sentinels open whatever the system
//! default playback or recording device is at the time.

use std::os::raw::c_int;

use crate::ffi::{
  self,
  audio::{
    SDL_AudioDevicePaused, SDL_CloseAudioDevice, SDL_GetAudioDeviceFormat, SDL_GetAudioDeviceGain,
    SDL_GetAudioDeviceName, SDL_GetAudioPlaybackDevices, SDL_GetAudioRecordingDevices,
    SDL_IsAudioDevicePhysical, SDL_IsAudioDevicePlayback, SDL_OpenAudioDevice,
    SDL_PauseAudioDevice, SDL_ResumeAudioDevice, SDL_SetAudioDeviceGain,
  },
  SDL_AudioDeviceID, SDL_AudioSpec, SdlError,
};

use super::{sdl_string, take_sdl_array, MediaResult, NativeAudioStream};

/// Result of `SDL_GetAudioDeviceFormat`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceFormat {
  /// False when SDL could not report a format; the other fields are then zero
  pub valid: bool,
  pub spec: SDL_AudioSpec,
  /// Device buffer size in sample frames
  pub sample_frames: i32,
}

/// Playback device ids, in the order SDL reports them
pub fn playback_devices() -> MediaResult<Vec<SDL_AudioDeviceID>> {
  let mut count: c_int = 0;
  let ptr = unsafe { SDL_GetAudioPlaybackDevices(&mut count) };
  if ptr.is_null() {
    return Err(SdlError::last_or("SDL_GetAudioPlaybackDevices").into());
  }
  Ok(unsafe { take_sdl_array(ptr, count) })
}

/// Recording device ids, in the order SDL reports them
pub fn recording_devices() -> MediaResult<Vec<SDL_AudioDeviceID>> {
  let mut count: c_int = 0;
  let ptr = unsafe { SDL_GetAudioRecordingDevices(&mut count) };
  if ptr.is_null() {
    return Err(SdlError::last_or("SDL_GetAudioRecordingDevices").into());
  }
  Ok(unsafe { take_sdl_array(ptr, count) })
}

pub fn device_name(id: SDL_AudioDeviceID) -> Option<String> {
  unsafe { sdl_string(SDL_GetAudioDeviceName(id)) }
}

pub fn device_format(id: SDL_AudioDeviceID) -> DeviceFormat {
  let mut spec = SDL_AudioSpec::default();
  let mut sample_frames: c_int = 0;
  let valid = unsafe { SDL_GetAudioDeviceFormat(id, &mut spec, &mut sample_frames) };
  if valid {
    DeviceFormat {
      valid,
      spec,
      sample_frames,
    }
  } else {
    DeviceFormat::default()
  }
}

pub fn device_gain(id: SDL_AudioDeviceID) -> MediaResult<f32> {
  let gain = unsafe { SDL_GetAudioDeviceGain(id) };
  if gain < 0.0 {
    return Err(SdlError::last_or("SDL_GetAudioDeviceGain").into());
  }
  Ok(gain)
}

pub fn set_device_gain(id: SDL_AudioDeviceID, gain: f32) -> MediaResult<()> {
  let ok = unsafe { SDL_SetAudioDeviceGain(id, gain) };
  Ok(ffi::check_bool(ok, "SDL_SetAudioDeviceGain")?)
}

pub fn is_physical(id: SDL_AudioDeviceID) -> bool {
  unsafe { SDL_IsAudioDevicePhysical(id) }
}

pub fn is_playback(id: SDL_AudioDeviceID) -> bool {
  unsafe { SDL_IsAudioDevicePlayback(id) }
}

pub fn is_paused(id: SDL_AudioDeviceID) -> bool {
  unsafe { SDL_AudioDevicePaused(id) }
}

pub fn pause(id: SDL_AudioDeviceID) -> MediaResult<()> {
  let ok = unsafe { SDL_PauseAudioDevice(id) };
  Ok(ffi::check_bool(ok, "SDL_PauseAudioDevice")?)
}

pub fn resume(id: SDL_AudioDeviceID) -> MediaResult<()> {
  let ok = unsafe { SDL_ResumeAudioDevice(id) };
  Ok(ffi::check_bool(ok, "SDL_ResumeAudioDevice")?)
}

/// Open a logical device on `id`. Without a spec SDL picks the device's
/// preferred format.
pub fn open(id: SDL_AudioDeviceID, spec: Option<SDL_AudioSpec>) -> MediaResult<SDL_AudioDeviceID> {
  let spec_ptr = spec
    .as_ref()
    .map_or(std::ptr::null(), |spec| spec as *const SDL_AudioSpec);
  let logical = unsafe { SDL_OpenAudioDevice(id, spec_ptr) };
  if logical == 0 {
    return Err(SdlError::last_or("SDL_OpenAudioDevice").into());
  }
  Ok(logical)
}

pub fn close(id: SDL_AudioDeviceID) {
  unsafe { SDL_CloseAudioDevice(id) }
}

/// Logical audio device opened by this process; closed on drop
#[derive(Debug)]
pub struct AudioDevice {
  id: SDL_AudioDeviceID,
}

impl AudioDevice {
  pub fn open(id: SDL_AudioDeviceID, spec: Option<SDL_AudioSpec>) -> MediaResult<Self> {
    let id = open(id, spec)?;
    tracing::debug!(target: "sdl", device = id, "audio device opened");
    Ok(Self { id })
  }

  #[inline]
  pub fn id(&self) -> SDL_AudioDeviceID {
    self.id
  }

  pub fn name(&self) -> Option<String> {
    device_name(self.id)
  }

  pub fn format(&self) -> DeviceFormat {
    device_format(self.id)
  }

  pub fn gain(&self) -> MediaResult<f32> {
    device_gain(self.id)
  }

  pub fn set_gain(&self, gain: f32) -> MediaResult<()> {
    set_device_gain(self.id, gain)
  }

  pub fn pause(&self) -> MediaResult<()> {
    pause(self.id)
  }

  pub fn resume(&self) -> MediaResult<()> {
    resume(self.id)
  }

  pub fn is_paused(&self) -> bool {
    is_paused(self.id)
  }

  pub fn is_playback(&self) -> bool {
    is_playback(self.id)
  }

  pub fn is_physical(&self) -> bool {
    is_physical(self.id)
  }

  pub fn bind(&self, stream: &NativeAudioStream) -> MediaResult<()> {
    stream.bind(self.id)
  }
}

impl Drop for AudioDevice {
  fn drop(&mut self) {
    close(self.id);
    tracing::debug!(target: "sdl", device = self.id, "audio device closed");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_device_format() {
    let format = device_format(0);
    assert!(!format.valid);
    assert_eq!(format, DeviceFormat::default());
  }

  #[test]
  fn test_open_invalid_device_fails() {
    let err = AudioDevice::open(0, None).unwrap_err();
    assert!(err.to_string().contains("SDL_OpenAudioDevice"));
  }

  #[test]
  fn test_invalid_device_queries() {
    assert!(device_name(0).is_none());
    assert!(device_gain(0).is_err());
    assert!(!is_physical(0));
  }
}
