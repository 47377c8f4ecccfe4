//! Safe Rust wrappers for SDL3 resources
//!
//! This module provides RAII owners for SDL handles, the process runtime
//! (init latch and configuration) and the audio stream callback bridge.

pub mod audio_device;
pub mod audio_stream;
pub mod callback_bridge;
pub mod camera;
pub mod event;
pub mod renderer;
pub mod runtime;
pub mod texture;
pub mod window;

pub use audio_device::{AudioDevice, DeviceFormat};
pub use audio_stream::NativeAudioStream;
pub use callback_bridge::{Direction, StreamBridge, StreamRequest, Trampoline, Wakeup};
pub use camera::{Camera, CameraFrame, FormatStatus};
pub use event::Event;
pub use renderer::Renderer;
pub use runtime::RuntimeConfig;
pub use texture::Texture;
pub use window::Window;

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};

use crate::ffi::{stdinc::SDL_free, SdlError};

/// Media error type
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
  #[error("{0}")]
  Sdl(#[from] SdlError),

  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("{0} is destroyed")]
  Destroyed(&'static str),

  /// The loop-side wakeup for a stream callback could not be created
  #[error("Callback bridge: {0}")]
  Bridge(String),
}

pub type MediaResult<T> = Result<T, MediaError>;

/// Convert a JS-provided dimension or length to the `c_int` SDL expects
pub(crate) fn to_c_int(value: impl TryInto<i32>, what: &str) -> MediaResult<i32> {
  value
    .try_into()
    .map_err(|_| MediaError::InvalidArgument(format!("{} out of range", what)))
}

/// Copy an SDL-allocated array out and free it with `SDL_free`
///
/// # Safety
/// `ptr` must be null or point to `count` initialized `T` allocated by SDL
pub(crate) unsafe fn take_sdl_array<T: Copy>(ptr: *mut T, count: c_int) -> Vec<T> {
  if ptr.is_null() {
    return Vec::new();
  }
  let items = std::slice::from_raw_parts(ptr, count.max(0) as usize).to_vec();
  SDL_free(ptr as *mut c_void);
  items
}

/// Copy an SDL-owned C string, `None` for null
///
/// # Safety
/// `ptr` must be null or a valid NUL-terminated string
pub(crate) unsafe fn sdl_string(ptr: *const c_char) -> Option<String> {
  if ptr.is_null() {
    None
  } else {
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_messages() {
    assert_eq!(
      MediaError::Destroyed("AudioStream").to_string(),
      "AudioStream is destroyed"
    );
    assert_eq!(
      MediaError::from(SdlError::new("Parameter 'window' is invalid")).to_string(),
      "SDL error: Parameter 'window' is invalid"
    );
  }

  #[test]
  fn test_to_c_int() {
    assert_eq!(to_c_int(640u32, "width").unwrap(), 640);
    assert!(to_c_int(u32::MAX, "width").is_err());
  }
}
