//! Camera function declarations

use std::os::raw::{c_char, c_int};

use super::types::*;

// ============================================================================
// Camera Positions
// ============================================================================

pub const SDL_CAMERA_POSITION_UNKNOWN: c_int = 0;
pub const SDL_CAMERA_POSITION_FRONT_FACING: c_int = 1;
pub const SDL_CAMERA_POSITION_BACK_FACING: c_int = 2;

// ============================================================================
// Permission States
// ============================================================================

pub const SDL_CAMERA_PERMISSION_STATE_DENIED: c_int = -1;
pub const SDL_CAMERA_PERMISSION_STATE_PENDING: c_int = 0;
pub const SDL_CAMERA_PERMISSION_STATE_APPROVED: c_int = 1;

extern "C" {
  /// List of camera ids; free with SDL_free
  pub fn SDL_GetCameras(count: *mut c_int) -> *mut SDL_CameraID;

  pub fn SDL_GetCameraName(instance_id: SDL_CameraID) -> *const c_char;

  pub fn SDL_GetCameraPosition(instance_id: SDL_CameraID) -> c_int;

  /// NULL-terminated array of spec pointers in one allocation; free with SDL_free
  pub fn SDL_GetCameraSupportedFormats(
    instance_id: SDL_CameraID,
    count: *mut c_int,
  ) -> *mut *mut SDL_CameraSpec;

  pub fn SDL_OpenCamera(instance_id: SDL_CameraID, spec: *const SDL_CameraSpec) -> *mut SDL_Camera;

  pub fn SDL_CloseCamera(camera: *mut SDL_Camera);

  pub fn SDL_GetCameraPermissionState(camera: *mut SDL_Camera) -> c_int;

  pub fn SDL_GetCameraID(camera: *mut SDL_Camera) -> SDL_CameraID;

  pub fn SDL_GetCameraProperties(camera: *mut SDL_Camera) -> SDL_PropertiesID;

  /// Fails until the user approved access and the format was negotiated
  pub fn SDL_GetCameraFormat(camera: *mut SDL_Camera, spec: *mut SDL_CameraSpec) -> bool;

  /// NULL with no error when no new frame is ready yet
  pub fn SDL_AcquireCameraFrame(camera: *mut SDL_Camera, timestamp_ns: *mut u64) -> *mut SDL_Surface;

  pub fn SDL_ReleaseCameraFrame(camera: *mut SDL_Camera, frame: *mut SDL_Surface);
}
