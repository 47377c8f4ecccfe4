use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::media;

use super::error::destroyed_error;

#[napi(object)]
pub struct WindowSize {
  pub width: i32,
  pub height: i32,
}

/// A native window
#[napi]
pub struct Window {
  inner: Option<Arc<media::Window>>,
}

#[napi]
impl Window {
  #[napi(constructor)]
  pub fn new(title: String, width: u32, height: u32, flags: Option<i64>) -> Result<Self> {
    let flags = flags.unwrap_or(0) as u64;
    let window = media::Window::new(&title, width, height, flags)?;
    Ok(Self {
      inner: Some(Arc::new(window)),
    })
  }

  pub(crate) fn handle(&self) -> Result<&Arc<media::Window>> {
    self.inner.as_ref().ok_or_else(|| destroyed_error("Window"))
  }

  #[napi(getter)]
  pub fn id(&self) -> Result<u32> {
    Ok(self.handle()?.id())
  }

  #[napi(getter)]
  pub fn size(&self) -> Result<WindowSize> {
    let (width, height) = self.handle()?.size()?;
    Ok(WindowSize { width, height })
  }

  #[napi]
  pub fn set_title(&self, title: String) -> Result<()> {
    Ok(self.handle()?.set_title(&title)?)
  }

  #[napi(getter)]
  pub fn destroyed(&self) -> bool {
    self.inner.is_none()
  }

  /// Release this handle. The native window stays alive while a renderer
  /// created from it exists.
  #[napi]
  pub fn destroy(&mut self) {
    self.inner = None;
  }
}
