//! Pixel format codes
//!
//! SDL packs a pixel format into a single `u32`. Non-FourCC formats are built
//! from type/order/layout/bits/bytes fields, FourCC formats from four ASCII
//! bytes. The constants below are computed with the same packing rules the
//! SDL3 headers use so they match bit for bit.

use super::types::SDL_PixelFormat;

// ============================================================================
// Packing Helpers
// ============================================================================

/// Equivalent of `SDL_DEFINE_PIXELFORMAT`
pub const fn define_pixelformat(
  pixel_type: u32,
  order: u32,
  layout: u32,
  bits: u32,
  bytes: u32,
) -> SDL_PixelFormat {
  (1 << 28) | (pixel_type << 24) | (order << 20) | (layout << 16) | (bits << 8) | bytes
}

/// Equivalent of `SDL_DEFINE_PIXELFOURCC`
pub const fn define_fourcc(a: u8, b: u8, c: u8, d: u8) -> SDL_PixelFormat {
  (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

/// True for FourCC codes (YUV and compressed formats)
pub const fn is_fourcc(format: SDL_PixelFormat) -> bool {
  format != 0 && ((format >> 28) & 0x0F) != 1
}

/// Bytes per pixel for non-FourCC formats, 0 for FourCC formats
pub const fn bytes_per_pixel(format: SDL_PixelFormat) -> u32 {
  if is_fourcc(format) {
    0
  } else {
    format & 0xFF
  }
}

// Pixel types
const TYPE_INDEX1: u32 = 1;
const TYPE_INDEX4: u32 = 2;
const TYPE_INDEX8: u32 = 3;
const TYPE_PACKED8: u32 = 4;
const TYPE_PACKED16: u32 = 5;
const TYPE_PACKED32: u32 = 6;
const TYPE_ARRAYU8: u32 = 7;
const TYPE_ARRAYU16: u32 = 8;
const TYPE_ARRAYF16: u32 = 10;
const TYPE_ARRAYF32: u32 = 11;
const TYPE_INDEX2: u32 = 12;

// Bitmap orders
const BITMAP_4321: u32 = 1;
const BITMAP_1234: u32 = 2;

// Packed orders
const PACKED_XRGB: u32 = 1;
const PACKED_RGBX: u32 = 2;
const PACKED_ARGB: u32 = 3;
const PACKED_RGBA: u32 = 4;
const PACKED_XBGR: u32 = 5;
const PACKED_BGRX: u32 = 6;
const PACKED_ABGR: u32 = 7;
const PACKED_BGRA: u32 = 8;

// Array orders
const ARRAY_RGB: u32 = 1;
const ARRAY_RGBA: u32 = 2;
const ARRAY_ARGB: u32 = 3;
const ARRAY_BGR: u32 = 4;
const ARRAY_BGRA: u32 = 5;
const ARRAY_ABGR: u32 = 6;

// Packed layouts
const LAYOUT_332: u32 = 1;
const LAYOUT_4444: u32 = 2;
const LAYOUT_1555: u32 = 3;
const LAYOUT_5551: u32 = 4;
const LAYOUT_565: u32 = 5;
const LAYOUT_8888: u32 = 6;
const LAYOUT_2101010: u32 = 7;

// ============================================================================
// Formats
// ============================================================================

pub const SDL_PIXELFORMAT_UNKNOWN: SDL_PixelFormat = 0;
pub const SDL_PIXELFORMAT_INDEX1LSB: SDL_PixelFormat = define_pixelformat(TYPE_INDEX1, BITMAP_4321, 0, 1, 0);
pub const SDL_PIXELFORMAT_INDEX1MSB: SDL_PixelFormat = define_pixelformat(TYPE_INDEX1, BITMAP_1234, 0, 1, 0);
pub const SDL_PIXELFORMAT_INDEX2LSB: SDL_PixelFormat = define_pixelformat(TYPE_INDEX2, BITMAP_4321, 0, 2, 0);
pub const SDL_PIXELFORMAT_INDEX2MSB: SDL_PixelFormat = define_pixelformat(TYPE_INDEX2, BITMAP_1234, 0, 2, 0);
pub const SDL_PIXELFORMAT_INDEX4LSB: SDL_PixelFormat = define_pixelformat(TYPE_INDEX4, BITMAP_4321, 0, 4, 0);
pub const SDL_PIXELFORMAT_INDEX4MSB: SDL_PixelFormat = define_pixelformat(TYPE_INDEX4, BITMAP_1234, 0, 4, 0);
pub const SDL_PIXELFORMAT_INDEX8: SDL_PixelFormat = define_pixelformat(TYPE_INDEX8, 0, 0, 8, 1);
pub const SDL_PIXELFORMAT_RGB332: SDL_PixelFormat = define_pixelformat(TYPE_PACKED8, PACKED_XRGB, LAYOUT_332, 8, 1);
pub const SDL_PIXELFORMAT_XRGB4444: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_XRGB, LAYOUT_4444, 12, 2);
pub const SDL_PIXELFORMAT_XBGR4444: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_XBGR, LAYOUT_4444, 12, 2);
pub const SDL_PIXELFORMAT_XRGB1555: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_XRGB, LAYOUT_1555, 15, 2);
pub const SDL_PIXELFORMAT_XBGR1555: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_XBGR, LAYOUT_1555, 15, 2);
pub const SDL_PIXELFORMAT_ARGB4444: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_ARGB, LAYOUT_4444, 16, 2);
pub const SDL_PIXELFORMAT_RGBA4444: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_RGBA, LAYOUT_4444, 16, 2);
pub const SDL_PIXELFORMAT_ABGR4444: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_ABGR, LAYOUT_4444, 16, 2);
pub const SDL_PIXELFORMAT_BGRA4444: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_BGRA, LAYOUT_4444, 16, 2);
pub const SDL_PIXELFORMAT_ARGB1555: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_ARGB, LAYOUT_1555, 16, 2);
pub const SDL_PIXELFORMAT_RGBA5551: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_RGBA, LAYOUT_5551, 16, 2);
pub const SDL_PIXELFORMAT_ABGR1555: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_ABGR, LAYOUT_1555, 16, 2);
pub const SDL_PIXELFORMAT_BGRA5551: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_BGRA, LAYOUT_5551, 16, 2);
pub const SDL_PIXELFORMAT_RGB565: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_XRGB, LAYOUT_565, 16, 2);
pub const SDL_PIXELFORMAT_BGR565: SDL_PixelFormat = define_pixelformat(TYPE_PACKED16, PACKED_XBGR, LAYOUT_565, 16, 2);
pub const SDL_PIXELFORMAT_RGB24: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU8, ARRAY_RGB, 0, 24, 3);
pub const SDL_PIXELFORMAT_BGR24: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU8, ARRAY_BGR, 0, 24, 3);
pub const SDL_PIXELFORMAT_XRGB8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_XRGB, LAYOUT_8888, 24, 4);
pub const SDL_PIXELFORMAT_RGBX8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_RGBX, LAYOUT_8888, 24, 4);
pub const SDL_PIXELFORMAT_XBGR8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_XBGR, LAYOUT_8888, 24, 4);
pub const SDL_PIXELFORMAT_BGRX8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_BGRX, LAYOUT_8888, 24, 4);
pub const SDL_PIXELFORMAT_ARGB8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_ARGB, LAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_RGBA8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_RGBA, LAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_ABGR8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_ABGR, LAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_BGRA8888: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_BGRA, LAYOUT_8888, 32, 4);
pub const SDL_PIXELFORMAT_XRGB2101010: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_XRGB, LAYOUT_2101010, 32, 4);
pub const SDL_PIXELFORMAT_XBGR2101010: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_XBGR, LAYOUT_2101010, 32, 4);
pub const SDL_PIXELFORMAT_ARGB2101010: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_ARGB, LAYOUT_2101010, 32, 4);
pub const SDL_PIXELFORMAT_ABGR2101010: SDL_PixelFormat = define_pixelformat(TYPE_PACKED32, PACKED_ABGR, LAYOUT_2101010, 32, 4);
pub const SDL_PIXELFORMAT_RGB48: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU16, ARRAY_RGB, 0, 48, 6);
pub const SDL_PIXELFORMAT_BGR48: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU16, ARRAY_BGR, 0, 48, 6);
pub const SDL_PIXELFORMAT_RGBA64: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU16, ARRAY_RGBA, 0, 64, 8);
pub const SDL_PIXELFORMAT_ARGB64: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU16, ARRAY_ARGB, 0, 64, 8);
pub const SDL_PIXELFORMAT_BGRA64: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU16, ARRAY_BGRA, 0, 64, 8);
pub const SDL_PIXELFORMAT_ABGR64: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYU16, ARRAY_ABGR, 0, 64, 8);
pub const SDL_PIXELFORMAT_RGB48_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF16, ARRAY_RGB, 0, 48, 6);
pub const SDL_PIXELFORMAT_BGR48_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF16, ARRAY_BGR, 0, 48, 6);
pub const SDL_PIXELFORMAT_RGBA64_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF16, ARRAY_RGBA, 0, 64, 8);
pub const SDL_PIXELFORMAT_ARGB64_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF16, ARRAY_ARGB, 0, 64, 8);
pub const SDL_PIXELFORMAT_BGRA64_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF16, ARRAY_BGRA, 0, 64, 8);
pub const SDL_PIXELFORMAT_ABGR64_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF16, ARRAY_ABGR, 0, 64, 8);
pub const SDL_PIXELFORMAT_RGB96_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF32, ARRAY_RGB, 0, 96, 12);
pub const SDL_PIXELFORMAT_BGR96_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF32, ARRAY_BGR, 0, 96, 12);
pub const SDL_PIXELFORMAT_RGBA128_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF32, ARRAY_RGBA, 0, 128, 16);
pub const SDL_PIXELFORMAT_ARGB128_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF32, ARRAY_ARGB, 0, 128, 16);
pub const SDL_PIXELFORMAT_BGRA128_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF32, ARRAY_BGRA, 0, 128, 16);
pub const SDL_PIXELFORMAT_ABGR128_FLOAT: SDL_PixelFormat = define_pixelformat(TYPE_ARRAYF32, ARRAY_ABGR, 0, 128, 16);

// Planar and packed YUV
pub const SDL_PIXELFORMAT_YV12: SDL_PixelFormat = define_fourcc(b'Y', b'V', b'1', b'2');
pub const SDL_PIXELFORMAT_IYUV: SDL_PixelFormat = define_fourcc(b'I', b'Y', b'U', b'V');
pub const SDL_PIXELFORMAT_YUY2: SDL_PixelFormat = define_fourcc(b'Y', b'U', b'Y', b'2');
pub const SDL_PIXELFORMAT_UYVY: SDL_PixelFormat = define_fourcc(b'U', b'Y', b'V', b'Y');
pub const SDL_PIXELFORMAT_YVYU: SDL_PixelFormat = define_fourcc(b'Y', b'V', b'Y', b'U');
pub const SDL_PIXELFORMAT_NV12: SDL_PixelFormat = define_fourcc(b'N', b'V', b'1', b'2');
pub const SDL_PIXELFORMAT_NV21: SDL_PixelFormat = define_fourcc(b'N', b'V', b'2', b'1');
pub const SDL_PIXELFORMAT_P010: SDL_PixelFormat = define_fourcc(b'P', b'0', b'1', b'0');
pub const SDL_PIXELFORMAT_EXTERNAL_OES: SDL_PixelFormat = define_fourcc(b'O', b'E', b'S', b' ');
pub const SDL_PIXELFORMAT_MJPG: SDL_PixelFormat = define_fourcc(b'M', b'J', b'P', b'G');

// Byte-order aliases
#[cfg(target_endian = "little")]
mod byte_order {
  use super::*;
  pub const SDL_PIXELFORMAT_RGBA32: SDL_PixelFormat = SDL_PIXELFORMAT_ABGR8888;
  pub const SDL_PIXELFORMAT_ARGB32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRA8888;
  pub const SDL_PIXELFORMAT_BGRA32: SDL_PixelFormat = SDL_PIXELFORMAT_ARGB8888;
  pub const SDL_PIXELFORMAT_ABGR32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBA8888;
  pub const SDL_PIXELFORMAT_RGBX32: SDL_PixelFormat = SDL_PIXELFORMAT_XBGR8888;
  pub const SDL_PIXELFORMAT_XRGB32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRX8888;
  pub const SDL_PIXELFORMAT_BGRX32: SDL_PixelFormat = SDL_PIXELFORMAT_XRGB8888;
  pub const SDL_PIXELFORMAT_XBGR32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBX8888;
}

#[cfg(target_endian = "big")]
mod byte_order {
  use super::*;
  pub const SDL_PIXELFORMAT_RGBA32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBA8888;
  pub const SDL_PIXELFORMAT_ARGB32: SDL_PixelFormat = SDL_PIXELFORMAT_ARGB8888;
  pub const SDL_PIXELFORMAT_BGRA32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRA8888;
  pub const SDL_PIXELFORMAT_ABGR32: SDL_PixelFormat = SDL_PIXELFORMAT_ABGR8888;
  pub const SDL_PIXELFORMAT_RGBX32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBX8888;
  pub const SDL_PIXELFORMAT_XRGB32: SDL_PixelFormat = SDL_PIXELFORMAT_XRGB8888;
  pub const SDL_PIXELFORMAT_BGRX32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRX8888;
  pub const SDL_PIXELFORMAT_XBGR32: SDL_PixelFormat = SDL_PIXELFORMAT_XBGR8888;
}

pub use byte_order::*;

/// Bytes occupied by one row of `width` pixels, without padding
pub fn min_row_len(format: SDL_PixelFormat, width: usize) -> usize {
  match format {
    SDL_PIXELFORMAT_YV12 | SDL_PIXELFORMAT_IYUV | SDL_PIXELFORMAT_NV12 | SDL_PIXELFORMAT_NV21 => {
      width
    }
    SDL_PIXELFORMAT_P010 => width * 2,
    SDL_PIXELFORMAT_YUY2 | SDL_PIXELFORMAT_UYVY | SDL_PIXELFORMAT_YVYU => width.div_ceil(2) * 4,
    _ if is_fourcc(format) => 0,
    _ => match bytes_per_pixel(format) {
      // Sub-byte indexed formats
      0 => (width * ((format >> 8) & 0xFF) as usize).div_ceil(8),
      bytes => width * bytes as usize,
    },
  }
}

/// Smallest buffer `SDL_UpdateTexture` reads for `rows` rows of `width`
/// pixels laid out `pitch` bytes apart.
///
/// The last row only needs its pixel bytes. Planar YUV formats carry chroma
/// planes after a full luma plane; SDL derives their pitch from the luma
/// pitch.
pub fn min_update_len(format: SDL_PixelFormat, width: usize, pitch: usize, rows: usize) -> usize {
  if rows == 0 {
    return 0;
  }
  let half_rows = rows.div_ceil(2);
  let half_pitch = pitch.div_ceil(2);
  match format {
    SDL_PIXELFORMAT_YV12 | SDL_PIXELFORMAT_IYUV | SDL_PIXELFORMAT_NV12 | SDL_PIXELFORMAT_NV21 => {
      pitch * rows + 2 * half_pitch * half_rows
    }
    SDL_PIXELFORMAT_P010 => pitch * rows + pitch * half_rows,
    _ => (rows - 1) * pitch + min_row_len(format, width),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_packed_formats_match_headers() {
    assert_eq!(SDL_PIXELFORMAT_INDEX1LSB, 0x1110_0100);
    assert_eq!(SDL_PIXELFORMAT_RGB24, 0x1710_1803);
    assert_eq!(SDL_PIXELFORMAT_ARGB8888, 0x1636_2004);
    assert_eq!(SDL_PIXELFORMAT_ABGR8888, 0x1676_2004);
    assert_eq!(SDL_PIXELFORMAT_RGB565, 0x1515_1002);
  }

  #[test]
  fn test_fourcc_formats_match_headers() {
    assert_eq!(SDL_PIXELFORMAT_YV12, 0x3231_5659);
    assert_eq!(SDL_PIXELFORMAT_NV12, 0x3231_564e);
    assert_eq!(SDL_PIXELFORMAT_P010, 0x3031_3050);
    assert_eq!(SDL_PIXELFORMAT_MJPG, 0x4750_4a4d);
    assert_eq!(SDL_PIXELFORMAT_EXTERNAL_OES, 0x2053_454f);
  }

  #[test]
  fn test_fourcc_detection() {
    assert!(is_fourcc(SDL_PIXELFORMAT_NV12));
    assert!(!is_fourcc(SDL_PIXELFORMAT_RGBA8888));
    assert!(!is_fourcc(SDL_PIXELFORMAT_UNKNOWN));
    assert_eq!(bytes_per_pixel(SDL_PIXELFORMAT_RGB24), 3);
    assert_eq!(bytes_per_pixel(SDL_PIXELFORMAT_YV12), 0);
  }

  #[test]
  fn test_min_row_len() {
    assert_eq!(min_row_len(SDL_PIXELFORMAT_RGBA8888, 64), 256);
    assert_eq!(min_row_len(SDL_PIXELFORMAT_RGB24, 5), 15);
    assert_eq!(min_row_len(SDL_PIXELFORMAT_INDEX1LSB, 9), 2);
    assert_eq!(min_row_len(SDL_PIXELFORMAT_INDEX4MSB, 3), 2);
    assert_eq!(min_row_len(SDL_PIXELFORMAT_YUY2, 3), 8);
    assert_eq!(min_row_len(SDL_PIXELFORMAT_NV12, 6), 6);
  }

  #[test]
  fn test_min_update_len() {
    assert_eq!(min_update_len(SDL_PIXELFORMAT_RGBA8888, 4, 16, 4), 64);
    // Padded rows: the last row stops after its pixels
    assert_eq!(min_update_len(SDL_PIXELFORMAT_RGBA8888, 4, 20, 4), 3 * 20 + 16);
    assert_eq!(min_update_len(SDL_PIXELFORMAT_RGBA8888, 4, 16, 0), 0);
    // 4x4 I420: 16 luma + 2 * 2x2 chroma
    assert_eq!(min_update_len(SDL_PIXELFORMAT_IYUV, 4, 4, 4), 24);
    assert_eq!(min_update_len(SDL_PIXELFORMAT_NV12, 4, 4, 4), 24);
  }
}
