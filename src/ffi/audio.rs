//! Audio device and audio stream function declarations

use std::os::raw::{c_char, c_int, c_void};

use super::types::*;

// ============================================================================
// Audio Formats
// ============================================================================

pub const SDL_AUDIO_UNKNOWN: SDL_AudioFormat = 0x0000;
pub const SDL_AUDIO_U8: SDL_AudioFormat = 0x0008;
pub const SDL_AUDIO_S8: SDL_AudioFormat = 0x8008;
pub const SDL_AUDIO_S16LE: SDL_AudioFormat = 0x8010;
pub const SDL_AUDIO_S16BE: SDL_AudioFormat = 0x9010;
pub const SDL_AUDIO_S32LE: SDL_AudioFormat = 0x8020;
pub const SDL_AUDIO_S32BE: SDL_AudioFormat = 0x9020;
pub const SDL_AUDIO_F32LE: SDL_AudioFormat = 0x8120;
pub const SDL_AUDIO_F32BE: SDL_AudioFormat = 0x9120;

#[cfg(target_endian = "little")]
pub const SDL_AUDIO_S16: SDL_AudioFormat = SDL_AUDIO_S16LE;
#[cfg(target_endian = "little")]
pub const SDL_AUDIO_S32: SDL_AudioFormat = SDL_AUDIO_S32LE;
#[cfg(target_endian = "little")]
pub const SDL_AUDIO_F32: SDL_AudioFormat = SDL_AUDIO_F32LE;

#[cfg(target_endian = "big")]
pub const SDL_AUDIO_S16: SDL_AudioFormat = SDL_AUDIO_S16BE;
#[cfg(target_endian = "big")]
pub const SDL_AUDIO_S32: SDL_AudioFormat = SDL_AUDIO_S32BE;
#[cfg(target_endian = "big")]
pub const SDL_AUDIO_F32: SDL_AudioFormat = SDL_AUDIO_F32BE;

// ============================================================================
// Device Ids
// ============================================================================

/// Open the system's default playback device (follows default changes)
pub const SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK: SDL_AudioDeviceID = 0xFFFF_FFFF;

/// Open the system's default recording device (follows default changes)
pub const SDL_AUDIO_DEVICE_DEFAULT_RECORDING: SDL_AudioDeviceID = 0xFFFF_FFFE;

extern "C" {
  // ========================================================================
  // Device Enumeration
  // ========================================================================

  /// 0-terminated list of playback device ids; free with SDL_free
  pub fn SDL_GetAudioPlaybackDevices(count: *mut c_int) -> *mut SDL_AudioDeviceID;

  /// 0-terminated list of recording device ids; free with SDL_free
  pub fn SDL_GetAudioRecordingDevices(count: *mut c_int) -> *mut SDL_AudioDeviceID;

  pub fn SDL_GetAudioDeviceName(devid: SDL_AudioDeviceID) -> *const c_char;

  pub fn SDL_GetAudioDeviceFormat(
    devid: SDL_AudioDeviceID,
    spec: *mut SDL_AudioSpec,
    sample_frames: *mut c_int,
  ) -> bool;

  // ========================================================================
  // Device Lifecycle
  // ========================================================================

  /// Open a logical device; returns 0 on failure
  pub fn SDL_OpenAudioDevice(
    devid: SDL_AudioDeviceID,
    spec: *const SDL_AudioSpec,
  ) -> SDL_AudioDeviceID;

  pub fn SDL_CloseAudioDevice(devid: SDL_AudioDeviceID);

  pub fn SDL_PauseAudioDevice(devid: SDL_AudioDeviceID) -> bool;

  pub fn SDL_ResumeAudioDevice(devid: SDL_AudioDeviceID) -> bool;

  pub fn SDL_AudioDevicePaused(devid: SDL_AudioDeviceID) -> bool;

  pub fn SDL_IsAudioDevicePhysical(devid: SDL_AudioDeviceID) -> bool;

  pub fn SDL_IsAudioDevicePlayback(devid: SDL_AudioDeviceID) -> bool;

  /// Returns -1.0 on failure
  pub fn SDL_GetAudioDeviceGain(devid: SDL_AudioDeviceID) -> f32;

  pub fn SDL_SetAudioDeviceGain(devid: SDL_AudioDeviceID, gain: f32) -> bool;

  // ========================================================================
  // Streams
  // ========================================================================

  pub fn SDL_CreateAudioStream(
    src_spec: *const SDL_AudioSpec,
    dst_spec: *const SDL_AudioSpec,
  ) -> *mut SDL_AudioStream;

  /// Unbinds the stream if bound and frees it
  pub fn SDL_DestroyAudioStream(stream: *mut SDL_AudioStream);

  pub fn SDL_PutAudioStreamData(stream: *mut SDL_AudioStream, buf: *const c_void, len: c_int) -> bool;

  /// Returns bytes read, or -1 on failure
  pub fn SDL_GetAudioStreamData(stream: *mut SDL_AudioStream, buf: *mut c_void, len: c_int) -> c_int;

  pub fn SDL_GetAudioStreamAvailable(stream: *mut SDL_AudioStream) -> c_int;

  pub fn SDL_FlushAudioStream(stream: *mut SDL_AudioStream) -> bool;

  pub fn SDL_ClearAudioStream(stream: *mut SDL_AudioStream) -> bool;

  /// Device the stream is bound to, 0 if unbound
  pub fn SDL_GetAudioStreamDevice(stream: *mut SDL_AudioStream) -> SDL_AudioDeviceID;

  pub fn SDL_ResumeAudioStreamDevice(stream: *mut SDL_AudioStream) -> bool;

  pub fn SDL_BindAudioStream(devid: SDL_AudioDeviceID, stream: *mut SDL_AudioStream) -> bool;

  pub fn SDL_UnbindAudioStream(stream: *mut SDL_AudioStream);

  /// Install (or with `None`, remove) the get callback.
  /// SDL takes the stream lock, so no callback is running once this returns.
  pub fn SDL_SetAudioStreamGetCallback(
    stream: *mut SDL_AudioStream,
    callback: SDL_AudioStreamCallback,
    userdata: *mut c_void,
  ) -> bool;

  /// Install (or with `None`, remove) the put callback
  pub fn SDL_SetAudioStreamPutCallback(
    stream: *mut SDL_AudioStream,
    callback: SDL_AudioStreamCallback,
    userdata: *mut c_void,
  ) -> bool;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_bits() {
    // Low byte is the sample size, bit 15 signedness, bit 12 big endian
    assert_eq!(SDL_AUDIO_U8 & 0xFF, 8);
    assert_eq!(SDL_AUDIO_S16BE ^ SDL_AUDIO_S16LE, 0x1000);
    assert_ne!(SDL_AUDIO_S8 & 0x8000, 0);
  }

  #[test]
  fn test_native_formats() {
    assert_eq!(SDL_AUDIO_F32 & 0xFF, 32);
    assert_ne!(SDL_AUDIO_F32, SDL_AUDIO_S32);
  }
}
