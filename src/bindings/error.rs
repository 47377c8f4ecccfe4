//! Conversion from media errors to JavaScript exceptions

use napi::bindgen_prelude::*;

use crate::media::{MediaError, MediaResult};

impl From<MediaError> for Error {
  fn from(err: MediaError) -> Self {
    let status = match err {
      MediaError::InvalidArgument(_) => Status::InvalidArg,
      _ => Status::GenericFailure,
    };
    Error::new(status, err.to_string())
  }
}

/// Error for use of a handle after `destroy()`
pub(crate) fn destroyed_error(what: &'static str) -> Error {
  MediaError::Destroyed(what).into()
}

pub(crate) fn invalid_arg(message: impl Into<String>) -> Error {
  Error::new(Status::InvalidArg, message.into())
}

/// Report an SDL call as a boolean, the way the C API does.
///
/// SDL failures become `false` (the reason is logged); argument and state
/// errors still throw.
pub(crate) fn sdl_status(result: MediaResult<()>, op: &'static str) -> Result<bool> {
  match result {
    Ok(()) => Ok(true),
    Err(MediaError::Sdl(err)) => {
      tracing::debug!(target: "sdl", op, "{}", err);
      Ok(false)
    }
    Err(err) => Err(err.into()),
  }
}

/// Resolve an optional `(offset, length)` window into `len` bytes
pub(crate) fn byte_window(
  len: usize,
  offset: Option<u32>,
  length: Option<u32>,
) -> Result<std::ops::Range<usize>> {
  let start = offset.unwrap_or(0) as usize;
  if start > len {
    return Err(invalid_arg(format!(
      "offset {} is past the end of a {} byte buffer",
      start, len
    )));
  }
  let end = match length {
    Some(length) => start
      .checked_add(length as usize)
      .filter(|end| *end <= len)
      .ok_or_else(|| {
        invalid_arg(format!(
          "range {}+{} exceeds a {} byte buffer",
          start, length, len
        ))
      })?,
    None => len,
  };
  Ok(start..end)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ffi::SdlError;

  #[test]
  fn test_status_mapping() {
    let err: Error = MediaError::InvalidArgument("bad".into()).into();
    assert_eq!(err.status, Status::InvalidArg);
    let err: Error = MediaError::Destroyed("Window").into();
    assert_eq!(err.status, Status::GenericFailure);
    assert_eq!(err.reason, "Window is destroyed");
  }

  #[test]
  fn test_sdl_status() {
    assert!(sdl_status(Ok(()), "test").unwrap());
    assert!(!sdl_status(Err(SdlError::new("nope").into()), "test").unwrap());
    assert!(sdl_status(Err(MediaError::Destroyed("AudioStream")), "test").is_err());
  }

  #[test]
  fn test_byte_window() {
    assert_eq!(byte_window(10, None, None).unwrap(), 0..10);
    assert_eq!(byte_window(10, Some(4), None).unwrap(), 4..10);
    assert_eq!(byte_window(10, Some(4), Some(2)).unwrap(), 4..6);
    assert_eq!(byte_window(10, Some(10), None).unwrap(), 10..10);
    assert!(byte_window(10, Some(11), None).is_err());
    assert!(byte_window(10, Some(4), Some(7)).is_err());
  }
}
