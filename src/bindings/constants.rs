//! Named integer constants exported to JS as `constants`

use crate::ffi::audio::*;
use crate::ffi::camera::*;
use crate::ffi::events::*;
use crate::ffi::pixels::*;
use crate::ffi::scancode::*;
use crate::ffi::video::*;
use crate::media::FormatStatus;

const CAMERA_FORMAT_OK: u8 = FormatStatus::Ok as u8;
const CAMERA_FORMAT_PENDING: u8 = FormatStatus::Pending as u8;
const CAMERA_FORMAT_ERROR: u8 = FormatStatus::Error as u8;
// Names existing scripts already use
const BARE_CAMERA_FORMAT_OK: u8 = CAMERA_FORMAT_OK;
const BARE_CAMERA_FORMAT_PENDING: u8 = CAMERA_FORMAT_PENDING;
const BARE_CAMERA_FORMAT_ERROR: u8 = CAMERA_FORMAT_ERROR;

/// `[(name, value)]` from a list of constant identifiers
macro_rules! constant_table {
  ($($name:ident),* $(,)?) => {
    &[$((stringify!($name), $name as i64)),*]
  };
}

pub static CONSTANTS: &[(&str, i64)] = constant_table![
  // Window flags
  SDL_WINDOW_FULLSCREEN, SDL_WINDOW_OPENGL, SDL_WINDOW_OCCLUDED, SDL_WINDOW_HIDDEN,
  SDL_WINDOW_BORDERLESS, SDL_WINDOW_RESIZABLE, SDL_WINDOW_MINIMIZED, SDL_WINDOW_MAXIMIZED,
  SDL_WINDOW_MOUSE_GRABBED, SDL_WINDOW_INPUT_FOCUS, SDL_WINDOW_MOUSE_FOCUS, SDL_WINDOW_EXTERNAL,
  SDL_WINDOW_MODAL, SDL_WINDOW_HIGH_PIXEL_DENSITY, SDL_WINDOW_MOUSE_CAPTURE,
  SDL_WINDOW_MOUSE_RELATIVE_MODE, SDL_WINDOW_ALWAYS_ON_TOP, SDL_WINDOW_UTILITY, SDL_WINDOW_TOOLTIP,
  SDL_WINDOW_POPUP_MENU, SDL_WINDOW_KEYBOARD_GRABBED, SDL_WINDOW_VULKAN, SDL_WINDOW_METAL,
  SDL_WINDOW_TRANSPARENT, SDL_WINDOW_NOT_FOCUSABLE,
  // Texture access
  SDL_TEXTUREACCESS_STATIC, SDL_TEXTUREACCESS_STREAMING, SDL_TEXTUREACCESS_TARGET,
  // Pixel formats
  SDL_PIXELFORMAT_UNKNOWN, SDL_PIXELFORMAT_INDEX1LSB, SDL_PIXELFORMAT_INDEX1MSB,
  SDL_PIXELFORMAT_INDEX2LSB, SDL_PIXELFORMAT_INDEX2MSB, SDL_PIXELFORMAT_INDEX4LSB,
  SDL_PIXELFORMAT_INDEX4MSB, SDL_PIXELFORMAT_INDEX8, SDL_PIXELFORMAT_RGB332,
  SDL_PIXELFORMAT_XRGB4444, SDL_PIXELFORMAT_XBGR4444, SDL_PIXELFORMAT_XRGB1555,
  SDL_PIXELFORMAT_XBGR1555, SDL_PIXELFORMAT_ARGB4444, SDL_PIXELFORMAT_RGBA4444,
  SDL_PIXELFORMAT_ABGR4444, SDL_PIXELFORMAT_BGRA4444, SDL_PIXELFORMAT_ARGB1555,
  SDL_PIXELFORMAT_RGBA5551, SDL_PIXELFORMAT_ABGR1555, SDL_PIXELFORMAT_BGRA5551,
  SDL_PIXELFORMAT_RGB565, SDL_PIXELFORMAT_BGR565, SDL_PIXELFORMAT_RGB24, SDL_PIXELFORMAT_BGR24,
  SDL_PIXELFORMAT_XRGB8888, SDL_PIXELFORMAT_RGBX8888, SDL_PIXELFORMAT_XBGR8888,
  SDL_PIXELFORMAT_BGRX8888, SDL_PIXELFORMAT_ARGB8888, SDL_PIXELFORMAT_RGBA8888,
  SDL_PIXELFORMAT_ABGR8888, SDL_PIXELFORMAT_BGRA8888, SDL_PIXELFORMAT_XRGB2101010,
  SDL_PIXELFORMAT_XBGR2101010, SDL_PIXELFORMAT_ARGB2101010, SDL_PIXELFORMAT_ABGR2101010,
  SDL_PIXELFORMAT_RGB48, SDL_PIXELFORMAT_BGR48, SDL_PIXELFORMAT_RGBA64, SDL_PIXELFORMAT_ARGB64,
  SDL_PIXELFORMAT_BGRA64, SDL_PIXELFORMAT_ABGR64, SDL_PIXELFORMAT_RGB48_FLOAT,
  SDL_PIXELFORMAT_BGR48_FLOAT, SDL_PIXELFORMAT_RGBA64_FLOAT, SDL_PIXELFORMAT_ARGB64_FLOAT,
  SDL_PIXELFORMAT_BGRA64_FLOAT, SDL_PIXELFORMAT_ABGR64_FLOAT, SDL_PIXELFORMAT_RGB96_FLOAT,
  SDL_PIXELFORMAT_BGR96_FLOAT, SDL_PIXELFORMAT_RGBA128_FLOAT, SDL_PIXELFORMAT_ARGB128_FLOAT,
  SDL_PIXELFORMAT_BGRA128_FLOAT, SDL_PIXELFORMAT_ABGR128_FLOAT, SDL_PIXELFORMAT_YV12,
  SDL_PIXELFORMAT_IYUV, SDL_PIXELFORMAT_YUY2, SDL_PIXELFORMAT_UYVY, SDL_PIXELFORMAT_YVYU,
  SDL_PIXELFORMAT_NV12, SDL_PIXELFORMAT_NV21, SDL_PIXELFORMAT_P010, SDL_PIXELFORMAT_EXTERNAL_OES,
  SDL_PIXELFORMAT_MJPG, SDL_PIXELFORMAT_RGBA32, SDL_PIXELFORMAT_ARGB32, SDL_PIXELFORMAT_BGRA32,
  SDL_PIXELFORMAT_ABGR32, SDL_PIXELFORMAT_RGBX32, SDL_PIXELFORMAT_XRGB32, SDL_PIXELFORMAT_BGRX32,
  SDL_PIXELFORMAT_XBGR32,
  // Events
  SDL_EVENT_QUIT, SDL_EVENT_TERMINATING, SDL_EVENT_LOW_MEMORY, SDL_EVENT_WILL_ENTER_BACKGROUND,
  SDL_EVENT_DID_ENTER_BACKGROUND, SDL_EVENT_WILL_ENTER_FOREGROUND, SDL_EVENT_DID_ENTER_FOREGROUND,
  SDL_EVENT_LOCALE_CHANGED, SDL_EVENT_SYSTEM_THEME_CHANGED, SDL_EVENT_DISPLAY_ORIENTATION,
  SDL_EVENT_DISPLAY_ADDED, SDL_EVENT_DISPLAY_REMOVED, SDL_EVENT_DISPLAY_MOVED,
  SDL_EVENT_DISPLAY_DESKTOP_MODE_CHANGED, SDL_EVENT_DISPLAY_CURRENT_MODE_CHANGED,
  SDL_EVENT_DISPLAY_CONTENT_SCALE_CHANGED, SDL_EVENT_WINDOW_SHOWN, SDL_EVENT_WINDOW_HIDDEN,
  SDL_EVENT_WINDOW_EXPOSED, SDL_EVENT_WINDOW_MOVED, SDL_EVENT_WINDOW_RESIZED,
  SDL_EVENT_WINDOW_PIXEL_SIZE_CHANGED, SDL_EVENT_WINDOW_METAL_VIEW_RESIZED,
  SDL_EVENT_WINDOW_MINIMIZED, SDL_EVENT_WINDOW_MAXIMIZED, SDL_EVENT_WINDOW_RESTORED,
  SDL_EVENT_WINDOW_MOUSE_ENTER, SDL_EVENT_WINDOW_MOUSE_LEAVE, SDL_EVENT_WINDOW_FOCUS_GAINED,
  SDL_EVENT_WINDOW_FOCUS_LOST, SDL_EVENT_WINDOW_CLOSE_REQUESTED, SDL_EVENT_WINDOW_HIT_TEST,
  SDL_EVENT_WINDOW_ICCPROF_CHANGED, SDL_EVENT_WINDOW_DISPLAY_CHANGED,
  SDL_EVENT_WINDOW_DISPLAY_SCALE_CHANGED, SDL_EVENT_WINDOW_SAFE_AREA_CHANGED,
  SDL_EVENT_WINDOW_OCCLUDED, SDL_EVENT_WINDOW_ENTER_FULLSCREEN, SDL_EVENT_WINDOW_LEAVE_FULLSCREEN,
  SDL_EVENT_WINDOW_DESTROYED, SDL_EVENT_WINDOW_HDR_STATE_CHANGED, SDL_EVENT_KEY_DOWN,
  SDL_EVENT_KEY_UP, SDL_EVENT_TEXT_EDITING, SDL_EVENT_TEXT_INPUT, SDL_EVENT_KEYMAP_CHANGED,
  SDL_EVENT_KEYBOARD_ADDED, SDL_EVENT_KEYBOARD_REMOVED, SDL_EVENT_TEXT_EDITING_CANDIDATES,
  SDL_EVENT_MOUSE_MOTION, SDL_EVENT_MOUSE_BUTTON_DOWN, SDL_EVENT_MOUSE_BUTTON_UP,
  SDL_EVENT_MOUSE_WHEEL, SDL_EVENT_MOUSE_ADDED, SDL_EVENT_MOUSE_REMOVED,
  SDL_EVENT_CAMERA_DEVICE_ADDED, SDL_EVENT_CAMERA_DEVICE_REMOVED, SDL_EVENT_CAMERA_DEVICE_APPROVED,
  SDL_EVENT_CAMERA_DEVICE_DENIED,
  // Scancodes
  SDL_SCANCODE_UNKNOWN, SDL_SCANCODE_A, SDL_SCANCODE_B, SDL_SCANCODE_C, SDL_SCANCODE_D,
  SDL_SCANCODE_E, SDL_SCANCODE_F, SDL_SCANCODE_G, SDL_SCANCODE_H, SDL_SCANCODE_I, SDL_SCANCODE_J,
  SDL_SCANCODE_K, SDL_SCANCODE_L, SDL_SCANCODE_M, SDL_SCANCODE_N, SDL_SCANCODE_O, SDL_SCANCODE_P,
  SDL_SCANCODE_Q, SDL_SCANCODE_R, SDL_SCANCODE_S, SDL_SCANCODE_T, SDL_SCANCODE_U, SDL_SCANCODE_V,
  SDL_SCANCODE_W, SDL_SCANCODE_X, SDL_SCANCODE_Y, SDL_SCANCODE_Z, SDL_SCANCODE_1, SDL_SCANCODE_2,
  SDL_SCANCODE_3, SDL_SCANCODE_4, SDL_SCANCODE_5, SDL_SCANCODE_6, SDL_SCANCODE_7, SDL_SCANCODE_8,
  SDL_SCANCODE_9, SDL_SCANCODE_0, SDL_SCANCODE_RETURN, SDL_SCANCODE_ESCAPE, SDL_SCANCODE_BACKSPACE,
  SDL_SCANCODE_TAB, SDL_SCANCODE_SPACE, SDL_SCANCODE_MINUS, SDL_SCANCODE_EQUALS,
  SDL_SCANCODE_LEFTBRACKET, SDL_SCANCODE_RIGHTBRACKET, SDL_SCANCODE_BACKSLASH,
  SDL_SCANCODE_NONUSHASH, SDL_SCANCODE_SEMICOLON, SDL_SCANCODE_APOSTROPHE, SDL_SCANCODE_GRAVE,
  SDL_SCANCODE_COMMA, SDL_SCANCODE_PERIOD, SDL_SCANCODE_SLASH, SDL_SCANCODE_CAPSLOCK,
  SDL_SCANCODE_F1, SDL_SCANCODE_F2, SDL_SCANCODE_F3, SDL_SCANCODE_F4, SDL_SCANCODE_F5,
  SDL_SCANCODE_F6, SDL_SCANCODE_F7, SDL_SCANCODE_F8, SDL_SCANCODE_F9, SDL_SCANCODE_F10,
  SDL_SCANCODE_F11, SDL_SCANCODE_F12, SDL_SCANCODE_PRINTSCREEN, SDL_SCANCODE_SCROLLLOCK,
  SDL_SCANCODE_PAUSE, SDL_SCANCODE_INSERT, SDL_SCANCODE_HOME, SDL_SCANCODE_PAGEUP,
  SDL_SCANCODE_DELETE, SDL_SCANCODE_END, SDL_SCANCODE_PAGEDOWN, SDL_SCANCODE_RIGHT,
  SDL_SCANCODE_LEFT, SDL_SCANCODE_DOWN, SDL_SCANCODE_UP, SDL_SCANCODE_NUMLOCKCLEAR,
  SDL_SCANCODE_KP_DIVIDE, SDL_SCANCODE_KP_MULTIPLY, SDL_SCANCODE_KP_MINUS, SDL_SCANCODE_KP_PLUS,
  SDL_SCANCODE_KP_ENTER, SDL_SCANCODE_KP_1, SDL_SCANCODE_KP_2, SDL_SCANCODE_KP_3,
  SDL_SCANCODE_KP_4, SDL_SCANCODE_KP_5, SDL_SCANCODE_KP_6, SDL_SCANCODE_KP_7, SDL_SCANCODE_KP_8,
  SDL_SCANCODE_KP_9, SDL_SCANCODE_KP_0, SDL_SCANCODE_KP_PERIOD, SDL_SCANCODE_NONUSBACKSLASH,
  SDL_SCANCODE_APPLICATION, SDL_SCANCODE_POWER, SDL_SCANCODE_KP_EQUALS, SDL_SCANCODE_F13,
  SDL_SCANCODE_F14, SDL_SCANCODE_F15, SDL_SCANCODE_F16, SDL_SCANCODE_F17, SDL_SCANCODE_F18,
  SDL_SCANCODE_F19, SDL_SCANCODE_F20, SDL_SCANCODE_F21, SDL_SCANCODE_F22, SDL_SCANCODE_F23,
  SDL_SCANCODE_F24, SDL_SCANCODE_EXECUTE, SDL_SCANCODE_HELP, SDL_SCANCODE_MENU,
  SDL_SCANCODE_SELECT, SDL_SCANCODE_STOP, SDL_SCANCODE_AGAIN, SDL_SCANCODE_UNDO, SDL_SCANCODE_CUT,
  SDL_SCANCODE_COPY, SDL_SCANCODE_PASTE, SDL_SCANCODE_FIND, SDL_SCANCODE_MUTE,
  SDL_SCANCODE_VOLUMEUP, SDL_SCANCODE_VOLUMEDOWN, SDL_SCANCODE_KP_COMMA,
  SDL_SCANCODE_KP_EQUALSAS400, SDL_SCANCODE_INTERNATIONAL1, SDL_SCANCODE_INTERNATIONAL2,
  SDL_SCANCODE_INTERNATIONAL3, SDL_SCANCODE_INTERNATIONAL4, SDL_SCANCODE_INTERNATIONAL5,
  SDL_SCANCODE_INTERNATIONAL6, SDL_SCANCODE_INTERNATIONAL7, SDL_SCANCODE_INTERNATIONAL8,
  SDL_SCANCODE_INTERNATIONAL9, SDL_SCANCODE_LANG1, SDL_SCANCODE_LANG2, SDL_SCANCODE_LANG3,
  SDL_SCANCODE_LANG4, SDL_SCANCODE_LANG5, SDL_SCANCODE_LANG6, SDL_SCANCODE_LANG7,
  SDL_SCANCODE_LANG8, SDL_SCANCODE_LANG9, SDL_SCANCODE_ALTERASE, SDL_SCANCODE_SYSREQ,
  SDL_SCANCODE_CANCEL, SDL_SCANCODE_CLEAR, SDL_SCANCODE_PRIOR, SDL_SCANCODE_RETURN2,
  SDL_SCANCODE_SEPARATOR, SDL_SCANCODE_OUT, SDL_SCANCODE_OPER, SDL_SCANCODE_CLEARAGAIN,
  SDL_SCANCODE_CRSEL, SDL_SCANCODE_EXSEL, SDL_SCANCODE_KP_00, SDL_SCANCODE_KP_000,
  SDL_SCANCODE_THOUSANDSSEPARATOR, SDL_SCANCODE_DECIMALSEPARATOR, SDL_SCANCODE_CURRENCYUNIT,
  SDL_SCANCODE_CURRENCYSUBUNIT, SDL_SCANCODE_KP_LEFTPAREN, SDL_SCANCODE_KP_RIGHTPAREN,
  SDL_SCANCODE_KP_LEFTBRACE, SDL_SCANCODE_KP_RIGHTBRACE, SDL_SCANCODE_KP_TAB,
  SDL_SCANCODE_KP_BACKSPACE, SDL_SCANCODE_KP_A, SDL_SCANCODE_KP_B, SDL_SCANCODE_KP_C,
  SDL_SCANCODE_KP_D, SDL_SCANCODE_KP_E, SDL_SCANCODE_KP_F, SDL_SCANCODE_KP_XOR,
  SDL_SCANCODE_KP_POWER, SDL_SCANCODE_KP_PERCENT, SDL_SCANCODE_KP_LESS, SDL_SCANCODE_KP_GREATER,
  SDL_SCANCODE_KP_AMPERSAND, SDL_SCANCODE_KP_DBLAMPERSAND, SDL_SCANCODE_KP_VERTICALBAR,
  SDL_SCANCODE_KP_DBLVERTICALBAR, SDL_SCANCODE_KP_COLON, SDL_SCANCODE_KP_HASH,
  SDL_SCANCODE_KP_SPACE, SDL_SCANCODE_KP_AT, SDL_SCANCODE_KP_EXCLAM, SDL_SCANCODE_KP_MEMSTORE,
  SDL_SCANCODE_KP_MEMRECALL, SDL_SCANCODE_KP_MEMCLEAR, SDL_SCANCODE_KP_MEMADD,
  SDL_SCANCODE_KP_MEMSUBTRACT, SDL_SCANCODE_KP_MEMMULTIPLY, SDL_SCANCODE_KP_MEMDIVIDE,
  SDL_SCANCODE_KP_PLUSMINUS, SDL_SCANCODE_KP_CLEAR, SDL_SCANCODE_KP_CLEARENTRY,
  SDL_SCANCODE_KP_BINARY, SDL_SCANCODE_KP_OCTAL, SDL_SCANCODE_KP_DECIMAL,
  SDL_SCANCODE_KP_HEXADECIMAL, SDL_SCANCODE_LCTRL, SDL_SCANCODE_LSHIFT, SDL_SCANCODE_LALT,
  SDL_SCANCODE_LGUI, SDL_SCANCODE_RCTRL, SDL_SCANCODE_RSHIFT, SDL_SCANCODE_RALT, SDL_SCANCODE_RGUI,
  SDL_SCANCODE_MODE, SDL_SCANCODE_SLEEP, SDL_SCANCODE_WAKE, SDL_SCANCODE_CHANNEL_INCREMENT,
  SDL_SCANCODE_CHANNEL_DECREMENT, SDL_SCANCODE_MEDIA_PLAY, SDL_SCANCODE_MEDIA_PAUSE,
  SDL_SCANCODE_MEDIA_RECORD, SDL_SCANCODE_MEDIA_FAST_FORWARD, SDL_SCANCODE_MEDIA_REWIND,
  SDL_SCANCODE_MEDIA_NEXT_TRACK, SDL_SCANCODE_MEDIA_PREVIOUS_TRACK, SDL_SCANCODE_MEDIA_STOP,
  SDL_SCANCODE_MEDIA_EJECT, SDL_SCANCODE_MEDIA_PLAY_PAUSE, SDL_SCANCODE_MEDIA_SELECT,
  SDL_SCANCODE_AC_NEW, SDL_SCANCODE_AC_OPEN, SDL_SCANCODE_AC_CLOSE, SDL_SCANCODE_AC_EXIT,
  SDL_SCANCODE_AC_SAVE, SDL_SCANCODE_AC_PRINT, SDL_SCANCODE_AC_PROPERTIES, SDL_SCANCODE_AC_SEARCH,
  SDL_SCANCODE_AC_HOME, SDL_SCANCODE_AC_BACK, SDL_SCANCODE_AC_FORWARD, SDL_SCANCODE_AC_STOP,
  SDL_SCANCODE_AC_REFRESH, SDL_SCANCODE_AC_BOOKMARKS, SDL_SCANCODE_SOFTLEFT,
  SDL_SCANCODE_SOFTRIGHT, SDL_SCANCODE_CALL, SDL_SCANCODE_ENDCALL, SDL_SCANCODE_RESERVED,
  SDL_SCANCODE_COUNT,
  // Audio
  SDL_AUDIO_UNKNOWN, SDL_AUDIO_U8, SDL_AUDIO_S8, SDL_AUDIO_S16LE, SDL_AUDIO_S16BE, SDL_AUDIO_S32LE,
  SDL_AUDIO_S32BE, SDL_AUDIO_F32LE, SDL_AUDIO_F32BE, SDL_AUDIO_S16, SDL_AUDIO_S32, SDL_AUDIO_F32,
  SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK, SDL_AUDIO_DEVICE_DEFAULT_RECORDING,
  // Camera
  SDL_CAMERA_POSITION_UNKNOWN, SDL_CAMERA_POSITION_FRONT_FACING, SDL_CAMERA_POSITION_BACK_FACING,
  SDL_CAMERA_PERMISSION_STATE_DENIED, SDL_CAMERA_PERMISSION_STATE_PENDING,
  SDL_CAMERA_PERMISSION_STATE_APPROVED,
  // Camera format status
  CAMERA_FORMAT_OK, CAMERA_FORMAT_PENDING, CAMERA_FORMAT_ERROR,
  BARE_CAMERA_FORMAT_OK, BARE_CAMERA_FORMAT_PENDING, BARE_CAMERA_FORMAT_ERROR,
];

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  fn lookup(name: &str) -> Option<i64> {
    CONSTANTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
  }

  #[test]
  fn test_names_are_unique() {
    let mut seen = HashSet::new();
    for (name, _) in CONSTANTS {
      assert!(seen.insert(*name), "duplicate constant {}", name);
    }
  }

  #[test]
  fn test_known_values() {
    assert_eq!(lookup("SDL_EVENT_KEY_DOWN"), Some(0x300));
    assert_eq!(lookup("SDL_SCANCODE_A"), Some(4));
    assert_eq!(lookup("SDL_WINDOW_RESIZABLE"), Some(0x20));
    assert_eq!(lookup("SDL_TEXTUREACCESS_STREAMING"), Some(1));
    assert_eq!(lookup("SDL_PIXELFORMAT_RGB24"), Some(0x1710_1803));
    assert_eq!(lookup("SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK"), Some(0xFFFF_FFFF));
    assert_eq!(lookup("SDL_AUDIO_DEVICE_DEFAULT_RECORDING"), Some(0xFFFF_FFFE));
    assert_eq!(lookup("SDL_CAMERA_POSITION_BACK_FACING"), Some(2));
  }

  #[test]
  fn test_camera_format_status() {
    assert_eq!(lookup("CAMERA_FORMAT_OK"), Some(0));
    assert_eq!(lookup("CAMERA_FORMAT_PENDING"), Some(1));
    assert_eq!(lookup("CAMERA_FORMAT_ERROR"), Some(2));
    for status in ["OK", "PENDING", "ERROR"] {
      let plain = format!("CAMERA_FORMAT_{}", status);
      let bare = format!("BARE_CAMERA_FORMAT_{}", status);
      assert_eq!(lookup(&bare), lookup(&plain), "{}", bare);
    }
  }

  #[test]
  fn test_native_endian_aliases() {
    assert!(lookup("SDL_PIXELFORMAT_RGBA32").is_some());
    assert!(lookup("SDL_AUDIO_F32").is_some());
  }
}
