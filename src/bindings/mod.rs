//! JavaScript API surface (NAPI classes and functions)
//!
//! Every class here owns a `media` handle and forwards to it. Handles are
//! released by `destroy()`/`close()` or when the JS object is collected.

pub mod audio_device;
pub mod audio_stream;
pub mod buffer;
pub mod camera;
pub mod constants;
pub mod error;
pub mod event;
pub mod renderer;
pub mod texture;
pub mod window;

use std::collections::HashMap;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::media::runtime::{self, RuntimeConfig};

pub use audio_device::{AudioDevice, AudioDeviceFormat, AudioOpenSpec, AudioSpec};
pub use audio_stream::AudioStream;
pub use camera::{Camera, CameraFormat, CameraFrame, CameraOpenSpec, CameraSpec};
pub use event::{Event, KeyboardEvent, Poller};
pub use renderer::{FRect, Renderer};
pub use texture::{Rect, Texture};
pub use window::{Window, WindowSize};

/// Runs once per process when the addon is loaded
#[napi(module_exports)]
pub fn init(mut exports: Object) -> Result<()> {
  runtime::init_logging();

  let report = runtime::ensure_initialized(&RuntimeConfig::from_env());
  for (subsystem, err) in &report.failures {
    tracing::debug!(target: "sdl", subsystem, "unavailable: {}", err);
  }

  let constants: HashMap<String, i64> = constants::CONSTANTS
    .iter()
    .map(|(name, value)| (name.to_string(), *value))
    .collect();
  exports.set_named_property("constants", constants)?;
  Ok(())
}
