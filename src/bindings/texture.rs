use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::ffi::SDL_Rect;
use crate::media;

use super::buffer::ByteView;
use super::error::{destroyed_error, sdl_status};
use super::renderer::Renderer;

/// Integer rectangle for texture updates
#[napi(object)]
#[derive(Debug, Clone, Copy)]
pub struct Rect {
  pub x: i32,
  pub y: i32,
  pub w: i32,
  pub h: i32,
}

impl From<Rect> for SDL_Rect {
  fn from(rect: Rect) -> Self {
    SDL_Rect {
      x: rect.x,
      y: rect.y,
      w: rect.w,
      h: rect.h,
    }
  }
}

#[napi]
pub struct Texture {
  inner: Option<media::Texture>,
}

#[napi]
impl Texture {
  #[napi(constructor)]
  pub fn new(renderer: &Renderer, format: u32, access: i32, width: u32, height: u32) -> Result<Self> {
    let texture = media::Texture::new(Arc::clone(renderer.handle()?), format, access, width, height)?;
    Ok(Self {
      inner: Some(texture),
    })
  }

  pub(crate) fn handle(&self) -> Result<&media::Texture> {
    self.inner.as_ref().ok_or_else(|| destroyed_error("Texture"))
  }

  /// Upload pixels starting `offset` bytes into `pixels`, into `rect` or
  /// the whole texture
  #[napi(
    ts_args_type = "pixels: ArrayBuffer | ArrayBufferView, pitch: number, offset?: number, rect?: Rect"
  )]
  pub fn update(
    &self,
    pixels: Unknown,
    pitch: u32,
    offset: Option<u32>,
    rect: Option<Rect>,
  ) -> Result<bool> {
    let texture = self.handle()?;
    let view = ByteView::from_unknown(pixels, "pixels")?;
    let result = texture.update(view.window(offset, None)?, pitch, rect.map(Into::into));
    sdl_status(result, "SDL_UpdateTexture")
  }

  #[napi(getter)]
  pub fn width(&self) -> Result<u32> {
    Ok(self.handle()?.width())
  }

  #[napi(getter)]
  pub fn height(&self) -> Result<u32> {
    Ok(self.handle()?.height())
  }

  #[napi(getter)]
  pub fn format(&self) -> Result<u32> {
    Ok(self.handle()?.format())
  }

  #[napi(getter)]
  pub fn access(&self) -> Result<i32> {
    Ok(self.handle()?.access())
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
