//! Event polling and event type codes

use super::types::SDL_Event;

// ============================================================================
// Event Types
// ============================================================================

// Application events
pub const SDL_EVENT_QUIT: u32 = 0x100;
pub const SDL_EVENT_TERMINATING: u32 = 0x101;
pub const SDL_EVENT_LOW_MEMORY: u32 = 0x102;
pub const SDL_EVENT_WILL_ENTER_BACKGROUND: u32 = 0x103;
pub const SDL_EVENT_DID_ENTER_BACKGROUND: u32 = 0x104;
pub const SDL_EVENT_WILL_ENTER_FOREGROUND: u32 = 0x105;
pub const SDL_EVENT_DID_ENTER_FOREGROUND: u32 = 0x106;
pub const SDL_EVENT_LOCALE_CHANGED: u32 = 0x107;
pub const SDL_EVENT_SYSTEM_THEME_CHANGED: u32 = 0x108;

// Display events
pub const SDL_EVENT_DISPLAY_ORIENTATION: u32 = 0x151;
pub const SDL_EVENT_DISPLAY_ADDED: u32 = 0x152;
pub const SDL_EVENT_DISPLAY_REMOVED: u32 = 0x153;
pub const SDL_EVENT_DISPLAY_MOVED: u32 = 0x154;
pub const SDL_EVENT_DISPLAY_DESKTOP_MODE_CHANGED: u32 = 0x155;
pub const SDL_EVENT_DISPLAY_CURRENT_MODE_CHANGED: u32 = 0x156;
pub const SDL_EVENT_DISPLAY_CONTENT_SCALE_CHANGED: u32 = 0x157;

// Window events
pub const SDL_EVENT_WINDOW_SHOWN: u32 = 0x202;
pub const SDL_EVENT_WINDOW_HIDDEN: u32 = 0x203;
pub const SDL_EVENT_WINDOW_EXPOSED: u32 = 0x204;
pub const SDL_EVENT_WINDOW_MOVED: u32 = 0x205;
pub const SDL_EVENT_WINDOW_RESIZED: u32 = 0x206;
pub const SDL_EVENT_WINDOW_PIXEL_SIZE_CHANGED: u32 = 0x207;
pub const SDL_EVENT_WINDOW_METAL_VIEW_RESIZED: u32 = 0x208;
pub const SDL_EVENT_WINDOW_MINIMIZED: u32 = 0x209;
pub const SDL_EVENT_WINDOW_MAXIMIZED: u32 = 0x20A;
pub const SDL_EVENT_WINDOW_RESTORED: u32 = 0x20B;
pub const SDL_EVENT_WINDOW_MOUSE_ENTER: u32 = 0x20C;
pub const SDL_EVENT_WINDOW_MOUSE_LEAVE: u32 = 0x20D;
pub const SDL_EVENT_WINDOW_FOCUS_GAINED: u32 = 0x20E;
pub const SDL_EVENT_WINDOW_FOCUS_LOST: u32 = 0x20F;
pub const SDL_EVENT_WINDOW_CLOSE_REQUESTED: u32 = 0x210;
pub const SDL_EVENT_WINDOW_HIT_TEST: u32 = 0x211;
pub const SDL_EVENT_WINDOW_ICCPROF_CHANGED: u32 = 0x212;
pub const SDL_EVENT_WINDOW_DISPLAY_CHANGED: u32 = 0x213;
pub const SDL_EVENT_WINDOW_DISPLAY_SCALE_CHANGED: u32 = 0x214;
pub const SDL_EVENT_WINDOW_SAFE_AREA_CHANGED: u32 = 0x215;
pub const SDL_EVENT_WINDOW_OCCLUDED: u32 = 0x216;
pub const SDL_EVENT_WINDOW_ENTER_FULLSCREEN: u32 = 0x217;
pub const SDL_EVENT_WINDOW_LEAVE_FULLSCREEN: u32 = 0x218;
pub const SDL_EVENT_WINDOW_DESTROYED: u32 = 0x219;
pub const SDL_EVENT_WINDOW_HDR_STATE_CHANGED: u32 = 0x21A;

// Keyboard events
pub const SDL_EVENT_KEY_DOWN: u32 = 0x300;
pub const SDL_EVENT_KEY_UP: u32 = 0x301;
pub const SDL_EVENT_TEXT_EDITING: u32 = 0x302;
pub const SDL_EVENT_TEXT_INPUT: u32 = 0x303;
pub const SDL_EVENT_KEYMAP_CHANGED: u32 = 0x304;
pub const SDL_EVENT_KEYBOARD_ADDED: u32 = 0x305;
pub const SDL_EVENT_KEYBOARD_REMOVED: u32 = 0x306;
pub const SDL_EVENT_TEXT_EDITING_CANDIDATES: u32 = 0x307;

// Mouse events
pub const SDL_EVENT_MOUSE_MOTION: u32 = 0x400;
pub const SDL_EVENT_MOUSE_BUTTON_DOWN: u32 = 0x401;
pub const SDL_EVENT_MOUSE_BUTTON_UP: u32 = 0x402;
pub const SDL_EVENT_MOUSE_WHEEL: u32 = 0x403;
pub const SDL_EVENT_MOUSE_ADDED: u32 = 0x404;
pub const SDL_EVENT_MOUSE_REMOVED: u32 = 0x405;

// Camera hotplug events
pub const SDL_EVENT_CAMERA_DEVICE_ADDED: u32 = 0x1400;
pub const SDL_EVENT_CAMERA_DEVICE_REMOVED: u32 = 0x1401;
pub const SDL_EVENT_CAMERA_DEVICE_APPROVED: u32 = 0x1402;
pub const SDL_EVENT_CAMERA_DEVICE_DENIED: u32 = 0x1403;

extern "C" {
  /// Poll for currently pending events without blocking.
  /// Returns true and fills `event` when one was dequeued.
  pub fn SDL_PollEvent(event: *mut SDL_Event) -> bool;
}
