use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::ffi::SDL_FRect;
use crate::media;

use super::error::{destroyed_error, sdl_status};
use super::texture::Texture;
use super::window::Window;

/// Floating point rectangle for texture copies
#[napi(object)]
#[derive(Debug, Clone, Copy)]
pub struct FRect {
  pub x: f64,
  pub y: f64,
  pub w: f64,
  pub h: f64,
}

impl From<FRect> for SDL_FRect {
  fn from(rect: FRect) -> Self {
    SDL_FRect {
      x: rect.x as f32,
      y: rect.y as f32,
      w: rect.w as f32,
      h: rect.h as f32,
    }
  }
}

/// 2D renderer drawing into a window
#[napi]
pub struct Renderer {
  inner: Option<Arc<media::Renderer>>,
}

#[napi]
impl Renderer {
  #[napi(constructor)]
  pub fn new(window: &Window) -> Result<Self> {
    let renderer = media::Renderer::new(Arc::clone(window.handle()?))?;
    Ok(Self {
      inner: Some(Arc::new(renderer)),
    })
  }

  pub(crate) fn handle(&self) -> Result<&Arc<media::Renderer>> {
    self.inner.as_ref().ok_or_else(|| destroyed_error("Renderer"))
  }

  #[napi]
  pub fn set_draw_color(&self, r: u8, g: u8, b: u8, a: Option<u8>) -> Result<bool> {
    let result = self.handle()?.set_draw_color(r, g, b, a.unwrap_or(u8::MAX));
    sdl_status(result, "SDL_SetRenderDrawColor")
  }

  #[napi]
  pub fn clear(&self) -> Result<bool> {
    sdl_status(self.handle()?.clear(), "SDL_RenderClear")
  }

  #[napi]
  pub fn present(&self) -> Result<bool> {
    sdl_status(self.handle()?.present(), "SDL_RenderPresent")
  }

  /// Copy a texture to the target. Omitted rectangles mean the whole
  /// texture and the whole target.
  #[napi]
  pub fn texture(&self, texture: &Texture, src: Option<FRect>, dst: Option<FRect>) -> Result<bool> {
    let result = self.handle()?.render_texture(
      texture.handle()?,
      src.map(Into::into),
      dst.map(Into::into),
    );
    sdl_status(result, "SDL_RenderTexture")
  }

  #[napi(getter)]
  pub fn destroyed(&self) -> bool {
    self.inner.is_none()
  }

  #[napi]
  pub fn destroy(&mut self) {
    self.inner = None;
  }
}
