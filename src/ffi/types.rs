//! Core SDL3 type definitions
//!
//! Handle types are opaque. Value types mirror the SDL3 headers field for
//! field so they can be passed by pointer across the FFI boundary.

use std::marker::PhantomData;
use std::os::raw::{c_int, c_void};

// ============================================================================
// Opaque Handles
// ============================================================================

macro_rules! opaque {
  ($($name:ident),* $(,)?) => {
    $(
      #[repr(C)]
      pub struct $name {
        _data: [u8; 0],
        _marker: PhantomData<(*mut u8, std::marker::PhantomPinned)>,
      }
    )*
  };
}

opaque!(SDL_Window, SDL_Renderer, SDL_Texture, SDL_AudioStream, SDL_Camera);

// ============================================================================
// Id Types
// ============================================================================

pub type SDL_WindowID = u32;
pub type SDL_AudioDeviceID = u32;
pub type SDL_CameraID = u32;
pub type SDL_PropertiesID = u32;
pub type SDL_KeyboardID = u32;

pub type SDL_InitFlags = u32;
pub type SDL_WindowFlags = u64;
pub type SDL_PixelFormat = u32;
pub type SDL_Colorspace = u32;
pub type SDL_AudioFormat = u32;
pub type SDL_Scancode = u32;
pub type SDL_Keycode = u32;
pub type SDL_Keymod = u16;

// ============================================================================
// Geometry
// ============================================================================

/// Integer rectangle, used for texture update regions
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SDL_Rect {
  pub x: c_int,
  pub y: c_int,
  pub w: c_int,
  pub h: c_int,
}

/// Floating point rectangle, used for render source/destination
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SDL_FRect {
  pub x: f32,
  pub y: f32,
  pub w: f32,
  pub h: f32,
}

// ============================================================================
// Audio
// ============================================================================

/// Format specifier for audio data
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SDL_AudioSpec {
  pub format: SDL_AudioFormat,
  pub channels: c_int,
  pub freq: c_int,
}

/// Invoked by SDL when a stream wants more data (get) or has consumed data (put).
///
/// Runs on whatever thread touched the stream, usually SDL's audio thread.
pub type SDL_AudioStreamCallback = Option<
  unsafe extern "C" fn(
    userdata: *mut c_void,
    stream: *mut SDL_AudioStream,
    additional_amount: c_int,
    total_amount: c_int,
  ),
>;

// ============================================================================
// Camera
// ============================================================================

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SDL_CameraSpec {
  pub format: SDL_PixelFormat,
  pub colorspace: SDL_Colorspace,
  pub width: c_int,
  pub height: c_int,
  pub framerate_numerator: c_int,
  pub framerate_denominator: c_int,
}

/// Public part of `SDL_Surface`; camera frames are handed out as surfaces
#[repr(C)]
pub struct SDL_Surface {
  pub flags: u32,
  pub format: SDL_PixelFormat,
  pub w: c_int,
  pub h: c_int,
  pub pitch: c_int,
  pub pixels: *mut c_void,
  pub refcount: c_int,
  pub reserved: *mut c_void,
}

// ============================================================================
// Events
// ============================================================================

/// Keyboard button event structure (`event.key.*`)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct SDL_KeyboardEvent {
  pub type_: u32,
  pub reserved: u32,
  /// Nanoseconds, from SDL_GetTicksNS()
  pub timestamp: u64,
  pub window_id: SDL_WindowID,
  pub which: SDL_KeyboardID,
  pub scancode: SDL_Scancode,
  pub key: SDL_Keycode,
  pub mod_: SDL_Keymod,
  pub raw: u16,
  pub down: bool,
  pub repeat: bool,
}

/// The general event union. Only the variants we read are spelled out;
/// the padding keeps the size at the 128 bytes SDL writes into.
#[repr(C)]
#[derive(Clone, Copy)]
pub union SDL_Event {
  pub type_: u32,
  pub key: SDL_KeyboardEvent,
  pub padding: [u8; 128],
}

impl Default for SDL_Event {
  fn default() -> Self {
    Self { padding: [0; 128] }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::mem::{align_of, size_of};

  #[test]
  fn test_event_layout() {
    assert_eq!(size_of::<SDL_Event>(), 128);
    assert_eq!(align_of::<SDL_Event>(), 8);
    assert_eq!(size_of::<SDL_KeyboardEvent>(), 40);
  }

  #[test]
  fn test_spec_layouts() {
    assert_eq!(size_of::<SDL_AudioSpec>(), 12);
    assert_eq!(size_of::<SDL_CameraSpec>(), 24);
    assert_eq!(size_of::<SDL_Rect>(), 16);
    assert_eq!(size_of::<SDL_FRect>(), 16);
  }

  #[test]
  fn test_event_type_overlaps_key_type() {
    let mut event = SDL_Event::default();
    event.key = SDL_KeyboardEvent {
      type_: 0x300,
      scancode: 4,
      ..Default::default()
    };
    assert_eq!(unsafe { event.type_ }, 0x300);
  }
}
