//! Safe wrapper around `SDL_Renderer`
//!
//! A renderer keeps its window alive through an `Arc`, so a window handle
//! destroyed from JS while a renderer still draws into it stays valid
//! until the renderer goes away.

use std::ptr::NonNull;
use std::sync::Arc;

use crate::ffi::{
  self,
  video::{
    SDL_CreateRenderer, SDL_DestroyRenderer, SDL_RenderClear, SDL_RenderPresent, SDL_RenderTexture,
    SDL_SetRenderDrawColor,
  },
  SDL_FRect, SDL_Renderer,
};

use super::{MediaResult, Texture, Window};

pub struct Renderer {
  ptr: NonNull<SDL_Renderer>,
  window: Arc<Window>,
}

impl Renderer {
  /// Create a renderer with SDL's preferred driver
  pub fn new(window: Arc<Window>) -> MediaResult<Self> {
    let ptr = unsafe { SDL_CreateRenderer(window.as_ptr(), std::ptr::null()) };
    let ptr = ffi::check_ptr(ptr, "SDL_CreateRenderer")?;
    tracing::debug!(target: "sdl", window_id = window.id(), "renderer created");
    Ok(Self { ptr, window })
  }

  #[inline]
  pub fn as_ptr(&self) -> *mut SDL_Renderer {
    self.ptr.as_ptr()
  }

  pub fn set_draw_color(&self, r: u8, g: u8, b: u8, a: u8) -> MediaResult<()> {
    let ok = unsafe { SDL_SetRenderDrawColor(self.as_ptr(), r, g, b, a) };
    Ok(ffi::check_bool(ok, "SDL_SetRenderDrawColor")?)
  }

  pub fn clear(&self) -> MediaResult<()> {
    let ok = unsafe { SDL_RenderClear(self.as_ptr()) };
    Ok(ffi::check_bool(ok, "SDL_RenderClear")?)
  }

  pub fn present(&self) -> MediaResult<()> {
    let ok = unsafe { SDL_RenderPresent(self.as_ptr()) };
    Ok(ffi::check_bool(ok, "SDL_RenderPresent")?)
  }

  /// Copy `src` of the texture (whole texture when `None`) into `dst` of the
  /// target (whole target when `None`)
  pub fn render_texture(
    &self,
    texture: &Texture,
    src: Option<SDL_FRect>,
    dst: Option<SDL_FRect>,
  ) -> MediaResult<()> {
    let src_ptr = src.as_ref().map_or(std::ptr::null(), |r| r as *const SDL_FRect);
    let dst_ptr = dst.as_ref().map_or(std::ptr::null(), |r| r as *const SDL_FRect);
    let ok = unsafe { SDL_RenderTexture(self.as_ptr(), texture.as_ptr(), src_ptr, dst_ptr) };
    Ok(ffi::check_bool(ok, "SDL_RenderTexture")?)
  }
}

impl Drop for Renderer {
  fn drop(&mut self) {
    unsafe { SDL_DestroyRenderer(self.as_ptr()) }
    tracing::debug!(target: "sdl", window_id = self.window.id(), "renderer destroyed");
  }
}
