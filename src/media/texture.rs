//! Safe wrapper around `SDL_Texture`

use std::os::raw::{c_int, c_void};
use std::ptr::NonNull;
use std::sync::Arc;

use crate::ffi::{
  self,
  pixels::{min_row_len, min_update_len},
  video::{SDL_CreateTexture, SDL_DestroyTexture, SDL_UpdateTexture},
  SDL_PixelFormat, SDL_Rect, SDL_Texture,
};

use super::{to_c_int, MediaError, MediaResult, Renderer};

pub struct Texture {
  ptr: NonNull<SDL_Texture>,
  /// SDL destroys a renderer's textures along with it
  _renderer: Arc<Renderer>,
  format: SDL_PixelFormat,
  access: c_int,
  width: u32,
  height: u32,
}

impl Texture {
  pub fn new(
    renderer: Arc<Renderer>,
    format: SDL_PixelFormat,
    access: c_int,
    width: u32,
    height: u32,
  ) -> MediaResult<Self> {
    let w = to_c_int(width, "texture width")?;
    let h = to_c_int(height, "texture height")?;
    let ptr = unsafe { SDL_CreateTexture(renderer.as_ptr(), format, access, w, h) };
    let ptr = ffi::check_ptr(ptr, "SDL_CreateTexture")?;
    tracing::debug!(target: "sdl", format, access, width, height, "texture created");
    Ok(Self {
      ptr,
      _renderer: renderer,
      format,
      access,
      width,
      height,
    })
  }

  #[inline]
  pub fn as_ptr(&self) -> *mut SDL_Texture {
    self.ptr.as_ptr()
  }

  pub fn format(&self) -> SDL_PixelFormat {
    self.format
  }

  pub fn access(&self) -> c_int {
    self.access
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  /// Upload `pixels` into `rect` (whole texture when `None`).
  ///
  /// SDL reads rows `pitch` bytes apart without knowing the buffer length,
  /// so short buffers are rejected here.
  pub fn update(&self, pixels: &[u8], pitch: u32, rect: Option<SDL_Rect>) -> MediaResult<()> {
    let pitch_c = to_c_int(pitch, "pitch")?;
    let (width, rows) = match rect {
      Some(r) => {
        if r.w < 0 || r.h < 0 {
          return Err(MediaError::InvalidArgument(
            "update rectangle has a negative size".into(),
          ));
        }
        (r.w as usize, r.h as usize)
      }
      None => (self.width as usize, self.height as usize),
    };
    check_update_len(self.format, width, rows, pitch as usize, pixels.len())?;

    let rect_ptr = rect.as_ref().map_or(std::ptr::null(), |r| r as *const SDL_Rect);
    let ok = unsafe {
      SDL_UpdateTexture(
        self.as_ptr(),
        rect_ptr,
        pixels.as_ptr() as *const c_void,
        pitch_c,
      )
    };
    Ok(ffi::check_bool(ok, "SDL_UpdateTexture")?)
  }
}

/// Reject uploads that would make SDL read past the end of `len` bytes
fn check_update_len(
  format: SDL_PixelFormat,
  width: usize,
  rows: usize,
  pitch: usize,
  len: usize,
) -> MediaResult<()> {
  let row = min_row_len(format, width);
  if rows > 0 && pitch < row {
    return Err(MediaError::InvalidArgument(format!(
      "pitch {} is smaller than a {} byte row",
      pitch, row
    )));
  }
  let needed = min_update_len(format, width, pitch, rows);
  if len < needed {
    return Err(MediaError::InvalidArgument(format!(
      "pixel buffer too small: need {} bytes, got {}",
      needed, len
    )));
  }
  Ok(())
}

impl Drop for Texture {
  fn drop(&mut self) {
    unsafe { SDL_DestroyTexture(self.as_ptr()) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ffi::pixels::{SDL_PIXELFORMAT_IYUV, SDL_PIXELFORMAT_RGBA8888};

  fn rejected(result: MediaResult<()>) -> String {
    match result {
      Err(MediaError::InvalidArgument(msg)) => msg,
      other => panic!("expected an argument error, got {:?}", other),
    }
  }

  #[test]
  fn test_pitch_smaller_than_row_is_rejected() {
    // 64x64 RGBA with pitch 4: pitch * rows is 256 bytes, but row 0 alone is 256
    let msg = rejected(check_update_len(SDL_PIXELFORMAT_RGBA8888, 64, 64, 4, 256));
    assert!(msg.contains("pitch 4"), "{}", msg);
    let msg = rejected(check_update_len(SDL_PIXELFORMAT_RGBA8888, 64, 64, 4, 1 << 20));
    assert!(msg.contains("256 byte row"), "{}", msg);
  }

  #[test]
  fn test_short_last_row_is_rejected() {
    // 4x2 RGBA, padded pitch 32: 32 + 16 bytes needed
    assert!(check_update_len(SDL_PIXELFORMAT_RGBA8888, 4, 2, 32, 48).is_ok());
    let msg = rejected(check_update_len(SDL_PIXELFORMAT_RGBA8888, 4, 2, 32, 47));
    assert_eq!(msg, "pixel buffer too small: need 48 bytes, got 47");
  }

  #[test]
  fn test_tight_and_empty_updates() {
    assert!(check_update_len(SDL_PIXELFORMAT_RGBA8888, 64, 64, 256, 64 * 256).is_ok());
    assert!(check_update_len(SDL_PIXELFORMAT_RGBA8888, 64, 64, 256, 64 * 256 - 1).is_err());
    assert!(check_update_len(SDL_PIXELFORMAT_RGBA8888, 0, 0, 0, 0).is_ok());
  }

  #[test]
  fn test_planar_update_needs_chroma() {
    assert!(check_update_len(SDL_PIXELFORMAT_IYUV, 4, 4, 4, 24).is_ok());
    assert!(check_update_len(SDL_PIXELFORMAT_IYUV, 4, 4, 4, 16).is_err());
    assert!(check_update_len(SDL_PIXELFORMAT_IYUV, 4, 4, 2, 1024).is_err());
  }
}
