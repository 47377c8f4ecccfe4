//! SDL error handling
//!
//! SDL reports failure through a `false`/null return and a thread-local
//! message retrieved with `SDL_GetError()`. This module turns that pair into
//! a Rust error value at the failure site.

use std::ffi::CStr;
use std::fmt;
use std::ptr::NonNull;

use super::stdinc::SDL_GetError;

// ============================================================================
// SDL Error Type
// ============================================================================

/// SDL error carrying the message SDL reported for the last failed call
#[derive(Clone, PartialEq, Eq)]
pub struct SdlError {
  /// Human-readable message
  pub message: String,
}

impl SdlError {
  /// Create error with custom message
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  /// Capture the SDL message, falling back to `context` when SDL left none
  pub fn last_or(context: &str) -> Self {
    let message = last_error_message();
    if message.is_empty() {
      Self::new(context)
    } else {
      Self::new(format!("{}: {}", context, message))
    }
  }
}

impl fmt::Debug for SdlError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SdlError")
      .field("message", &self.message)
      .finish()
  }
}

impl fmt::Display for SdlError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "SDL error: {}", self.message)
  }
}

impl std::error::Error for SdlError {}

// ============================================================================
// Result Type
// ============================================================================

/// Result type for SDL operations
pub type SdlResult<T> = Result<T, SdlError>;

// ============================================================================
// Error Checking
// ============================================================================

/// Check an SDL `bool` return and convert to Result
#[inline]
pub fn check_bool(ok: bool, context: &str) -> SdlResult<()> {
  if ok {
    Ok(())
  } else {
    Err(SdlError::last_or(context))
  }
}

/// Check an SDL pointer return; null means failure
#[inline]
pub fn check_ptr<T>(ptr: *mut T, context: &str) -> SdlResult<NonNull<T>> {
  NonNull::new(ptr).ok_or_else(|| SdlError::last_or(context))
}

/// Read `SDL_GetError()` into an owned string
pub fn last_error_message() -> String {
  unsafe {
    let ptr = SDL_GetError();
    if ptr.is_null() {
      return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    let err = SdlError::new("Invalid renderer");
    assert_eq!(err.to_string(), "SDL error: Invalid renderer");
  }

  #[test]
  fn test_check_bool_ok() {
    assert!(check_bool(true, "SDL_RenderClear").is_ok());
  }

  #[test]
  fn test_check_ptr_ok() {
    let mut value = 7u8;
    let ptr = check_ptr(&mut value as *mut u8, "alloc").unwrap();
    assert_eq!(unsafe { *ptr.as_ptr() }, 7);
  }

  #[test]
  fn test_check_ptr_null_keeps_context() {
    let err = check_ptr(std::ptr::null_mut::<u8>(), "SDL_CreateWindow").unwrap_err();
    assert!(err.message.starts_with("SDL_CreateWindow"));
  }
}
