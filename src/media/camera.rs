//! Camera enumeration, open cameras and acquired frames
//!
//! Opening a camera may trigger a platform permission prompt. Until the
//! user answers, the format is not known and frames are not produced;
//! both are reported as values rather than errors.

use std::os::raw::c_int;
use std::ptr::NonNull;
use std::sync::Arc;

use crate::ffi::{
  self,
  camera::{
    SDL_AcquireCameraFrame, SDL_CloseCamera, SDL_GetCameraFormat, SDL_GetCameraID,
    SDL_GetCameraName, SDL_GetCameraPermissionState, SDL_GetCameraPosition,
    SDL_GetCameraProperties, SDL_GetCameraSupportedFormats, SDL_GetCameras, SDL_OpenCamera,
    SDL_ReleaseCameraFrame, SDL_CAMERA_PERMISSION_STATE_PENDING,
  },
  stdinc::SDL_free,
  SDL_Camera, SDL_CameraID, SDL_CameraSpec, SDL_PropertiesID, SDL_Surface, SdlError,
};

use super::{sdl_string, take_sdl_array, MediaResult};

/// Outcome of asking an open camera for its negotiated format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FormatStatus {
  Ok = 0,
  /// Permission not answered yet
  Pending = 1,
  Error = 2,
}

impl FormatStatus {
  fn from_permission(state: c_int) -> Self {
    if state == SDL_CAMERA_PERMISSION_STATE_PENDING {
      Self::Pending
    } else {
      Self::Error
    }
  }
}

/// Frames per second of a spec, 0 when the denominator is 0
pub fn spec_fps(spec: &SDL_CameraSpec) -> f64 {
  if spec.framerate_denominator == 0 {
    0.0
  } else {
    spec.framerate_numerator as f64 / spec.framerate_denominator as f64
  }
}

pub fn cameras() -> MediaResult<Vec<SDL_CameraID>> {
  let mut count: c_int = 0;
  let ptr = unsafe { SDL_GetCameras(&mut count) };
  if ptr.is_null() {
    return Err(SdlError::last_or("SDL_GetCameras").into());
  }
  Ok(unsafe { take_sdl_array(ptr, count) })
}

pub fn camera_name(id: SDL_CameraID) -> Option<String> {
  unsafe { sdl_string(SDL_GetCameraName(id)) }
}

pub fn camera_position(id: SDL_CameraID) -> c_int {
  unsafe { SDL_GetCameraPosition(id) }
}

pub fn supported_formats(id: SDL_CameraID) -> MediaResult<Vec<SDL_CameraSpec>> {
  let mut count: c_int = 0;
  let specs = unsafe { SDL_GetCameraSupportedFormats(id, &mut count) };
  if specs.is_null() {
    return Err(SdlError::last_or("SDL_GetCameraSupportedFormats").into());
  }

  // One allocation holds the pointer array and the specs it points into
  let formats = unsafe {
    std::slice::from_raw_parts(specs, count.max(0) as usize)
      .iter()
      .filter(|spec| !spec.is_null())
      .map(|spec| **spec)
      .collect()
  };
  unsafe { SDL_free(specs as *mut _) };
  Ok(formats)
}

/// An opened camera device, closed on drop
pub struct Camera {
  ptr: NonNull<SDL_Camera>,
}

impl Camera {
  /// Open `id`, optionally requesting a spec. SDL converts to the requested
  /// spec when the device cannot produce it natively.
  pub fn open(id: SDL_CameraID, spec: Option<SDL_CameraSpec>) -> MediaResult<Self> {
    let spec_ptr = spec
      .as_ref()
      .map_or(std::ptr::null(), |spec| spec as *const SDL_CameraSpec);
    let ptr = unsafe { SDL_OpenCamera(id, spec_ptr) };
    let ptr = ffi::check_ptr(ptr, "SDL_OpenCamera")?;
    tracing::debug!(target: "sdl", camera = id, "camera opened");
    Ok(Self { ptr })
  }

  #[inline]
  pub fn as_ptr(&self) -> *mut SDL_Camera {
    self.ptr.as_ptr()
  }

  pub fn id(&self) -> SDL_CameraID {
    unsafe { SDL_GetCameraID(self.as_ptr()) }
  }

  pub fn properties(&self) -> SDL_PropertiesID {
    unsafe { SDL_GetCameraProperties(self.as_ptr()) }
  }

  /// -1 denied, 0 pending, 1 approved
  pub fn permission_state(&self) -> c_int {
    unsafe { SDL_GetCameraPermissionState(self.as_ptr()) }
  }

  pub fn format(&self) -> (FormatStatus, SDL_CameraSpec) {
    let mut spec = SDL_CameraSpec::default();
    if unsafe { SDL_GetCameraFormat(self.as_ptr(), &mut spec) } {
      (FormatStatus::Ok, spec)
    } else {
      let status = FormatStatus::from_permission(self.permission_state());
      (status, SDL_CameraSpec::default())
    }
  }
}

impl Drop for Camera {
  fn drop(&mut self) {
    let id = self.id();
    unsafe { SDL_CloseCamera(self.as_ptr()) }
    tracing::debug!(target: "sdl", camera = id, "camera closed");
  }
}

/// Try to take the next frame. `None` means no new frame is ready, which is
/// the normal state while permission is pending or between frames.
pub fn acquire_frame(camera: &Arc<Camera>) -> Option<CameraFrame> {
  let mut timestamp_ns: u64 = 0;
  let surface = unsafe { SDL_AcquireCameraFrame(camera.as_ptr(), &mut timestamp_ns) };
  NonNull::new(surface).map(|surface| CameraFrame {
    camera: Arc::clone(camera),
    surface,
    timestamp_ns,
  })
}

/// A frame borrowed from a camera. Holding it keeps the camera open; it is
/// handed back to SDL on drop.
pub struct CameraFrame {
  camera: Arc<Camera>,
  surface: NonNull<SDL_Surface>,
  timestamp_ns: u64,
}

impl CameraFrame {
  #[inline]
  fn surface(&self) -> &SDL_Surface {
    unsafe { self.surface.as_ref() }
  }

  pub fn timestamp_ns(&self) -> u64 {
    self.timestamp_ns
  }

  pub fn width(&self) -> i32 {
    self.surface().w
  }

  pub fn height(&self) -> i32 {
    self.surface().h
  }

  pub fn pitch(&self) -> i32 {
    self.surface().pitch
  }

  pub fn format(&self) -> u32 {
    self.surface().format
  }

  /// Copy of `pitch * height` bytes of pixel data
  pub fn copy_pixels(&self) -> Vec<u8> {
    let surface = self.surface();
    if surface.pixels.is_null() || surface.pitch <= 0 || surface.h <= 0 {
      return Vec::new();
    }
    let len = surface.pitch as usize * surface.h as usize;
    unsafe { std::slice::from_raw_parts(surface.pixels as *const u8, len).to_vec() }
  }
}

impl Drop for CameraFrame {
  fn drop(&mut self) {
    unsafe { SDL_ReleaseCameraFrame(self.camera.as_ptr(), self.surface.as_ptr()) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ffi::camera::{SDL_CAMERA_PERMISSION_STATE_APPROVED, SDL_CAMERA_PERMISSION_STATE_DENIED};

  #[test]
  fn test_format_status_codes() {
    assert_eq!(FormatStatus::Ok as u8, 0);
    assert_eq!(FormatStatus::Pending as u8, 1);
    assert_eq!(FormatStatus::Error as u8, 2);
  }

  #[test]
  fn test_status_from_permission() {
    assert_eq!(
      FormatStatus::from_permission(SDL_CAMERA_PERMISSION_STATE_PENDING),
      FormatStatus::Pending
    );
    assert_eq!(
      FormatStatus::from_permission(SDL_CAMERA_PERMISSION_STATE_DENIED),
      FormatStatus::Error
    );
    assert_eq!(
      FormatStatus::from_permission(SDL_CAMERA_PERMISSION_STATE_APPROVED),
      FormatStatus::Error
    );
  }

  #[test]
  fn test_spec_fps() {
    let spec = SDL_CameraSpec {
      framerate_numerator: 30000,
      framerate_denominator: 1001,
      ..Default::default()
    };
    assert!((spec_fps(&spec) - 29.97).abs() < 0.01);
    assert_eq!(spec_fps(&SDL_CameraSpec::default()), 0.0);
  }

  #[test]
  fn test_unknown_camera_has_no_name() {
    assert!(camera_name(0).is_none());
  }
}
