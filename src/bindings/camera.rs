//! Camera functions, `Camera` and `CameraFrame`

use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::ffi::camera::{
  SDL_CAMERA_PERMISSION_STATE_APPROVED, SDL_CAMERA_PERMISSION_STATE_DENIED,
  SDL_CAMERA_PERMISSION_STATE_PENDING,
};
use crate::ffi::SDL_CameraSpec;
use crate::media::{self, camera, FormatStatus};

use super::error::destroyed_error;

/// One format a camera can produce
#[napi(object)]
#[derive(Debug, Clone)]
pub struct CameraFormat {
  pub format: u32,
  pub colorspace: u32,
  pub width: i32,
  pub height: i32,
  pub framerate_numerator: i32,
  pub framerate_denominator: i32,
  pub fps: f64,
}

impl From<SDL_CameraSpec> for CameraFormat {
  fn from(spec: SDL_CameraSpec) -> Self {
    CameraFormat {
      format: spec.format,
      colorspace: spec.colorspace,
      width: spec.width,
      height: spec.height,
      framerate_numerator: spec.framerate_numerator,
      framerate_denominator: spec.framerate_denominator,
      fps: camera::spec_fps(&spec),
    }
  }
}

/// Negotiated format of an open camera. `status` is one of the
/// `CAMERA_FORMAT_*` constants; the other fields are 0 unless it is OK.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct CameraSpec {
  pub status: u32,
  pub valid: bool,
  pub format: u32,
  pub colorspace: u32,
  pub width: i32,
  pub height: i32,
  pub framerate_numerator: i32,
  pub framerate_denominator: i32,
  pub fps: f64,
}

/// Requested capture format. Used only when format, width and height are
/// all given.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct CameraOpenSpec {
  pub format: Option<u32>,
  pub width: Option<i32>,
  pub height: Option<i32>,
  pub colorspace: Option<u32>,
  pub framerate_numerator: Option<i32>,
  pub framerate_denominator: Option<i32>,
}

impl CameraOpenSpec {
  fn complete(&self) -> Option<SDL_CameraSpec> {
    match (self.format, self.width, self.height) {
      (Some(format), Some(width), Some(height)) => Some(SDL_CameraSpec {
        format,
        colorspace: self.colorspace.unwrap_or(0),
        width,
        height,
        framerate_numerator: self.framerate_numerator.unwrap_or(30),
        framerate_denominator: self.framerate_denominator.unwrap_or(1),
      }),
      _ => None,
    }
  }
}

// ============================================================================
// Free functions
// ============================================================================

#[napi]
pub fn get_cameras() -> Result<Vec<u32>> {
  Ok(camera::cameras()?)
}

#[napi]
pub fn get_camera_name(id: u32) -> Option<String> {
  camera::camera_name(id)
}

/// One of the `SDL_CAMERA_POSITION_*` constants
#[napi]
pub fn get_camera_position(id: u32) -> i32 {
  camera::camera_position(id)
}

#[napi]
pub fn get_camera_supported_formats(id: u32) -> Result<Vec<CameraFormat>> {
  Ok(
    camera::supported_formats(id)?
      .into_iter()
      .map(CameraFormat::from)
      .collect(),
  )
}

// ============================================================================
// Camera
// ============================================================================

#[napi]
pub struct Camera {
  inner: Option<Arc<media::Camera>>,
}

#[napi]
impl Camera {
  #[napi(constructor)]
  pub fn new(id: u32, spec: Option<CameraOpenSpec>) -> Result<Self> {
    let spec = spec.as_ref().and_then(CameraOpenSpec::complete);
    let camera = media::Camera::open(id, spec)?;
    Ok(Self {
      inner: Some(Arc::new(camera)),
    })
  }

  fn handle(&self) -> Result<&Arc<media::Camera>> {
    self.inner.as_ref().ok_or_else(|| destroyed_error("Camera"))
  }

  #[napi(getter)]
  pub fn id(&self) -> Result<u32> {
    Ok(self.handle()?.id())
  }

  #[napi(getter)]
  pub fn properties(&self) -> Result<u32> {
    Ok(self.handle()?.properties())
  }

  /// -1 denied, 0 pending, 1 approved
  #[napi(getter)]
  pub fn permission_state(&self) -> Result<i32> {
    Ok(self.handle()?.permission_state())
  }

  #[napi(getter)]
  pub fn is_approved(&self) -> Result<bool> {
    Ok(self.permission_state()? == SDL_CAMERA_PERMISSION_STATE_APPROVED)
  }

  #[napi(getter)]
  pub fn is_denied(&self) -> Result<bool> {
    Ok(self.permission_state()? == SDL_CAMERA_PERMISSION_STATE_DENIED)
  }

  #[napi(getter)]
  pub fn is_pending(&self) -> Result<bool> {
    Ok(self.permission_state()? == SDL_CAMERA_PERMISSION_STATE_PENDING)
  }

  #[napi(getter)]
  pub fn format(&self) -> Result<CameraSpec> {
    let (status, spec) = self.handle()?.format();
    Ok(CameraSpec {
      status: status as u32,
      valid: status == FormatStatus::Ok,
      format: spec.format,
      colorspace: spec.colorspace,
      width: spec.width,
      height: spec.height,
      framerate_numerator: spec.framerate_numerator,
      framerate_denominator: spec.framerate_denominator,
      fps: camera::spec_fps(&spec),
    })
  }

  /// Take the next frame. Check `valid`: no frame being ready yet is not
  /// an error.
  #[napi]
  pub fn acquire_frame(&self) -> Result<CameraFrame> {
    let frame = camera::acquire_frame(self.handle()?);
    Ok(CameraFrame { inner: frame })
  }

  #[napi(getter)]
  pub fn closed(&self) -> bool {
    self.inner.is_none()
  }

  /// Close the camera. Frames still held keep the device open until they
  /// are released.
  #[napi]
  pub fn close(&mut self) {
    self.inner = None;
  }

  #[napi]
  pub fn destroy(&mut self) {
    self.close();
  }
}

// ============================================================================
// CameraFrame
// ============================================================================

#[napi]
pub struct CameraFrame {
  inner: Option<media::CameraFrame>,
}

#[napi]
impl CameraFrame {
  #[napi(getter)]
  pub fn valid(&self) -> bool {
    self.inner.is_some()
  }

  /// Capture time in nanoseconds, 0 when invalid
  #[napi(getter)]
  pub fn timestamp(&self) -> i64 {
    self
      .inner
      .as_ref()
      .map_or(0, |frame| frame.timestamp_ns() as i64)
  }

  #[napi(getter)]
  pub fn width(&self) -> i32 {
    self.inner.as_ref().map_or(0, |frame| frame.width())
  }

  #[napi(getter)]
  pub fn height(&self) -> i32 {
    self.inner.as_ref().map_or(0, |frame| frame.height())
  }

  #[napi(getter)]
  pub fn pitch(&self) -> i32 {
    self.inner.as_ref().map_or(0, |frame| frame.pitch())
  }

  #[napi(getter)]
  pub fn format(&self) -> u32 {
    self.inner.as_ref().map_or(0, |frame| frame.format())
  }

  /// Copy of the frame's `pitch * height` bytes, null when invalid
  #[napi(getter)]
  pub fn pixels(&self) -> Option<Uint8Array> {
    self
      .inner
      .as_ref()
      .map(|frame| Uint8Array::new(frame.copy_pixels()))
  }

  /// Hand the frame back to the camera. Idempotent.
  #[napi]
  pub fn release(&mut self) {
    self.inner = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_open_spec_defaults() {
    let spec = CameraOpenSpec {
      format: Some(0x3231_564e),
      width: Some(1280),
      height: Some(720),
      ..Default::default()
    };
    let full = spec.complete().unwrap();
    assert_eq!(full.colorspace, 0);
    assert_eq!(full.framerate_numerator, 30);
    assert_eq!(full.framerate_denominator, 1);
  }

  #[test]
  fn test_incomplete_open_spec_is_ignored() {
    let spec = CameraOpenSpec {
      format: Some(0x3231_564e),
      width: Some(1280),
      ..Default::default()
    };
    assert!(spec.complete().is_none());
  }

  #[test]
  fn test_camera_format_fps() {
    let format = CameraFormat::from(SDL_CameraSpec {
      framerate_numerator: 60,
      framerate_denominator: 2,
      ..Default::default()
    });
    assert_eq!(format.fps, 30.0);
  }
}
