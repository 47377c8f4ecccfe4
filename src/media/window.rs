//! Safe wrapper around `SDL_Window`

use std::ffi::CString;
use std::os::raw::c_int;
use std::ptr::NonNull;

use crate::ffi::{
  self,
  video::{SDL_CreateWindow, SDL_DestroyWindow, SDL_GetWindowID, SDL_GetWindowSize, SDL_SetWindowTitle},
  SDL_Window, SDL_WindowFlags, SDL_WindowID,
};

use super::{to_c_int, MediaError, MediaResult};

/// Owned SDL window, destroyed on drop
pub struct Window {
  ptr: NonNull<SDL_Window>,
}

impl Window {
  pub fn new(title: &str, width: u32, height: u32, flags: SDL_WindowFlags) -> MediaResult<Self> {
    let title = CString::new(title)
      .map_err(|_| MediaError::InvalidArgument("window title contains a NUL byte".into()))?;
    let w = to_c_int(width, "window width")?;
    let h = to_c_int(height, "window height")?;

    let ptr = unsafe { SDL_CreateWindow(title.as_ptr(), w, h, flags) };
    let ptr = ffi::check_ptr(ptr, "SDL_CreateWindow")?;

    let window = Self { ptr };
    tracing::debug!(target: "sdl", window_id = window.id(), width, height, flags, "window created");
    Ok(window)
  }

  #[inline]
  pub fn as_ptr(&self) -> *mut SDL_Window {
    self.ptr.as_ptr()
  }

  pub fn id(&self) -> SDL_WindowID {
    unsafe { SDL_GetWindowID(self.as_ptr()) }
  }

  /// Client area size in window coordinates
  pub fn size(&self) -> MediaResult<(i32, i32)> {
    let mut w: c_int = 0;
    let mut h: c_int = 0;
    let ok = unsafe { SDL_GetWindowSize(self.as_ptr(), &mut w, &mut h) };
    ffi::check_bool(ok, "SDL_GetWindowSize")?;
    Ok((w, h))
  }

  pub fn set_title(&self, title: &str) -> MediaResult<()> {
    let title = CString::new(title)
      .map_err(|_| MediaError::InvalidArgument("window title contains a NUL byte".into()))?;
    let ok = unsafe { SDL_SetWindowTitle(self.as_ptr(), title.as_ptr()) };
    Ok(ffi::check_bool(ok, "SDL_SetWindowTitle")?)
  }
}

impl Drop for Window {
  fn drop(&mut self) {
    tracing::debug!(target: "sdl", window_id = self.id(), "window destroyed");
    unsafe { SDL_DestroyWindow(self.as_ptr()) }
  }
}

impl std::fmt::Debug for Window {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Window").field("id", &self.id()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ffi::video::SDL_WINDOW_HIDDEN;

  #[test]
  fn test_title_with_nul_is_rejected() {
    let err = Window::new("bad\0title", 64, 64, SDL_WINDOW_HIDDEN).unwrap_err();
    assert!(matches!(err, MediaError::InvalidArgument(_)));
  }

  #[test]
  fn test_oversized_dimensions_are_rejected() {
    let err = Window::new("big", u32::MAX, 64, SDL_WINDOW_HIDDEN).unwrap_err();
    assert!(matches!(err, MediaError::InvalidArgument(_)));
  }
}
