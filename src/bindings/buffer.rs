//! BufferSource arguments
//!
//! Byte-oriented methods accept an `ArrayBuffer` or any `ArrayBufferView`
//! (`Buffer`, every TypedArray, `DataView`). A view is resolved to its
//! window of the backing `ArrayBuffer`; `offset`/`length` arguments then
//! count bytes inside that window regardless of the view's element size.

use std::ops::Range;

use napi::bindgen_prelude::*;

use super::error::{byte_window, invalid_arg};

/// Byte window of a JS `ArrayBuffer` or `ArrayBufferView`
pub(crate) struct ByteView<'env> {
  buffer: ArrayBuffer<'env>,
  view: Range<usize>,
}

impl<'env> ByteView<'env> {
  pub(crate) fn from_unknown(value: Unknown<'env>, name: &str) -> Result<Self> {
    if value.is_arraybuffer()? {
      let buffer = ArrayBuffer::from_unknown(value)?;
      let view = 0..buffer.len();
      return Ok(Self { buffer, view });
    }
    if !(value.is_typedarray()? || value.is_dataview()?) {
      return Err(invalid_arg(format!(
        "{} must be an ArrayBuffer or ArrayBufferView",
        name
      )));
    }

    let obj = value.coerce_to_object()?;
    let byte_offset: u32 = obj.get("byteOffset")?.unwrap_or(0);
    let byte_length: u32 = obj.get("byteLength")?.unwrap_or(0);
    let buffer: ArrayBuffer = obj
      .get("buffer")?
      .ok_or_else(|| invalid_arg(format!("{} has no backing ArrayBuffer", name)))?;
    let view = byte_window(buffer.len(), Some(byte_offset), Some(byte_length))?;
    Ok(Self { buffer, view })
  }

  /// Bytes `offset..offset + length` of the view; the rest of it when
  /// `length` is omitted
  pub(crate) fn window(&self, offset: Option<u32>, length: Option<u32>) -> Result<&[u8]> {
    let range = sub_window(&self.view, offset, length)?;
    Ok(&self.buffer[range])
  }

  pub(crate) fn window_mut(&mut self, offset: Option<u32>, length: Option<u32>) -> Result<&mut [u8]> {
    let range = sub_window(&self.view, offset, length)?;
    // JS cannot run while the native call holds this slice
    let bytes = unsafe { self.buffer.as_mut() };
    Ok(&mut bytes[range])
  }
}

/// Resolve `offset`/`length` inside `view`, as a range of the backing buffer
fn sub_window(view: &Range<usize>, offset: Option<u32>, length: Option<u32>) -> Result<Range<usize>> {
  let inner = byte_window(view.len(), offset, length)?;
  Ok(view.start + inner.start..view.start + inner.end)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sub_window_is_relative_to_view() {
    // A Float32Array of 4 elements at byte 8 of a 32 byte buffer
    let view = 8..24;
    assert_eq!(sub_window(&view, None, None).unwrap(), 8..24);
    assert_eq!(sub_window(&view, Some(4), None).unwrap(), 12..24);
    assert_eq!(sub_window(&view, Some(4), Some(8)).unwrap(), 12..20);
    assert_eq!(sub_window(&view, Some(16), None).unwrap(), 24..24);
  }

  #[test]
  fn test_sub_window_stays_inside_view() {
    let view = 8..24;
    let err = sub_window(&view, Some(17), None).unwrap_err();
    assert_eq!(err.status, Status::InvalidArg);
    // In range of the backing buffer but past the view
    assert!(sub_window(&view, Some(4), Some(16)).is_err());
  }
}
