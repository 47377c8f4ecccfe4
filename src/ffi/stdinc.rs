//! SDL initialization, hints and memory helpers

use std::ffi::CStr;
use std::os::raw::{c_char, c_void};

use super::types::SDL_InitFlags;

// ============================================================================
// Init Flags
// ============================================================================

pub const SDL_INIT_AUDIO: SDL_InitFlags = 0x0000_0010;
pub const SDL_INIT_VIDEO: SDL_InitFlags = 0x0000_0020;
pub const SDL_INIT_EVENTS: SDL_InitFlags = 0x0000_4000;
pub const SDL_INIT_CAMERA: SDL_InitFlags = 0x0001_0000;

// ============================================================================
// Hints
// ============================================================================

/// Stop SDL from installing SIGINT/SIGTERM handlers; the host process owns them
pub const SDL_HINT_NO_SIGNAL_HANDLERS: &CStr = c"SDL_NO_SIGNAL_HANDLERS";

extern "C" {
  /// Initialize the given subsystems; returns false on failure
  pub fn SDL_Init(flags: SDL_InitFlags) -> bool;

  /// Subsystems currently initialized, masked by `flags`
  pub fn SDL_WasInit(flags: SDL_InitFlags) -> SDL_InitFlags;

  pub fn SDL_SetHint(name: *const c_char, value: *const c_char) -> bool;

  /// Message for the last error on the calling thread (never null)
  pub fn SDL_GetError() -> *const c_char;

  /// Free memory SDL returned to the caller (device lists, format lists)
  pub fn SDL_free(mem: *mut c_void);
}
