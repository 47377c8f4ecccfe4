//! Hand-written SDL3 C bindings (no bindgen)
//!
//! Only the slice of SDL3 the addon exposes is declared here. Structs that
//! SDL hands back by pointer and that we read fields from are laid out with
//! `#[repr(C)]`; everything else stays opaque.

#![allow(non_camel_case_types)]

pub mod audio;
pub mod camera;
pub mod error;
pub mod events;
pub mod pixels;
pub mod scancode;
pub mod stdinc;
pub mod types;
pub mod video;

pub use error::{check_bool, check_ptr, SdlError, SdlResult};
pub use types::*;
