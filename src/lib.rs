#![deny(clippy::all)]

//! SDL3 bindings for Node.js
//!
//! Windows, 2D rendering, textures, event polling, audio devices and
//! streams (with callbacks forwarded from SDL's audio thread) and cameras.

// SDL3 C bindings (hand-written, no bindgen)
pub mod ffi;

// Safe SDL wrappers (RAII) and the audio callback bridge
pub mod media;

// JS API surface (NAPI classes)
pub mod bindings;

pub use bindings::{
  // Video
  FRect, Rect, Renderer, Texture, Window, WindowSize,
  // Events
  Event, KeyboardEvent, Poller,
  // Audio
  AudioDevice, AudioDeviceFormat, AudioOpenSpec, AudioSpec, AudioStream,
  // Camera
  Camera, CameraFormat, CameraFrame, CameraOpenSpec, CameraSpec,
};
