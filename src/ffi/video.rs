//! Window, renderer and texture function declarations

use std::os::raw::{c_char, c_int, c_void};

use super::types::*;

// ============================================================================
// Window Flags
// ============================================================================

pub const SDL_WINDOW_FULLSCREEN: SDL_WindowFlags = 0x0000_0000_0000_0001;
pub const SDL_WINDOW_OPENGL: SDL_WindowFlags = 0x0000_0000_0000_0002;
pub const SDL_WINDOW_OCCLUDED: SDL_WindowFlags = 0x0000_0000_0000_0004;
pub const SDL_WINDOW_HIDDEN: SDL_WindowFlags = 0x0000_0000_0000_0008;
pub const SDL_WINDOW_BORDERLESS: SDL_WindowFlags = 0x0000_0000_0000_0010;
pub const SDL_WINDOW_RESIZABLE: SDL_WindowFlags = 0x0000_0000_0000_0020;
pub const SDL_WINDOW_MINIMIZED: SDL_WindowFlags = 0x0000_0000_0000_0040;
pub const SDL_WINDOW_MAXIMIZED: SDL_WindowFlags = 0x0000_0000_0000_0080;
pub const SDL_WINDOW_MOUSE_GRABBED: SDL_WindowFlags = 0x0000_0000_0000_0100;
pub const SDL_WINDOW_INPUT_FOCUS: SDL_WindowFlags = 0x0000_0000_0000_0200;
pub const SDL_WINDOW_MOUSE_FOCUS: SDL_WindowFlags = 0x0000_0000_0000_0400;
pub const SDL_WINDOW_EXTERNAL: SDL_WindowFlags = 0x0000_0000_0000_0800;
pub const SDL_WINDOW_MODAL: SDL_WindowFlags = 0x0000_0000_0000_1000;
pub const SDL_WINDOW_HIGH_PIXEL_DENSITY: SDL_WindowFlags = 0x0000_0000_0000_2000;
pub const SDL_WINDOW_MOUSE_CAPTURE: SDL_WindowFlags = 0x0000_0000_0000_4000;
pub const SDL_WINDOW_MOUSE_RELATIVE_MODE: SDL_WindowFlags = 0x0000_0000_0000_8000;
pub const SDL_WINDOW_ALWAYS_ON_TOP: SDL_WindowFlags = 0x0000_0000_0001_0000;
pub const SDL_WINDOW_UTILITY: SDL_WindowFlags = 0x0000_0000_0002_0000;
pub const SDL_WINDOW_TOOLTIP: SDL_WindowFlags = 0x0000_0000_0004_0000;
pub const SDL_WINDOW_POPUP_MENU: SDL_WindowFlags = 0x0000_0000_0008_0000;
pub const SDL_WINDOW_KEYBOARD_GRABBED: SDL_WindowFlags = 0x0000_0000_0010_0000;
pub const SDL_WINDOW_VULKAN: SDL_WindowFlags = 0x0000_0000_1000_0000;
pub const SDL_WINDOW_METAL: SDL_WindowFlags = 0x0000_0000_2000_0000;
pub const SDL_WINDOW_TRANSPARENT: SDL_WindowFlags = 0x0000_0000_4000_0000;
pub const SDL_WINDOW_NOT_FOCUSABLE: SDL_WindowFlags = 0x0000_0000_8000_0000;

// ============================================================================
// Texture Access
// ============================================================================

pub const SDL_TEXTUREACCESS_STATIC: c_int = 0;
pub const SDL_TEXTUREACCESS_STREAMING: c_int = 1;
pub const SDL_TEXTUREACCESS_TARGET: c_int = 2;

extern "C" {
  // ========================================================================
  // Window
  // ========================================================================

  pub fn SDL_CreateWindow(
    title: *const c_char,
    w: c_int,
    h: c_int,
    flags: SDL_WindowFlags,
  ) -> *mut SDL_Window;

  pub fn SDL_DestroyWindow(window: *mut SDL_Window);

  pub fn SDL_GetWindowID(window: *mut SDL_Window) -> SDL_WindowID;

  pub fn SDL_GetWindowSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;

  pub fn SDL_SetWindowTitle(window: *mut SDL_Window, title: *const c_char) -> bool;

  // ========================================================================
  // Renderer
  // ========================================================================

  /// Create a 2D rendering context; `name` NULL lets SDL pick the driver
  pub fn SDL_CreateRenderer(window: *mut SDL_Window, name: *const c_char) -> *mut SDL_Renderer;

  pub fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);

  pub fn SDL_SetRenderDrawColor(renderer: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> bool;

  pub fn SDL_RenderClear(renderer: *mut SDL_Renderer) -> bool;

  pub fn SDL_RenderPresent(renderer: *mut SDL_Renderer) -> bool;

  /// Copy a portion of the texture to the current rendering target.
  /// NULL rectangles mean the entire texture / the entire target.
  pub fn SDL_RenderTexture(
    renderer: *mut SDL_Renderer,
    texture: *mut SDL_Texture,
    srcrect: *const SDL_FRect,
    dstrect: *const SDL_FRect,
  ) -> bool;

  // ========================================================================
  // Texture
  // ========================================================================

  pub fn SDL_CreateTexture(
    renderer: *mut SDL_Renderer,
    format: SDL_PixelFormat,
    access: c_int,
    w: c_int,
    h: c_int,
  ) -> *mut SDL_Texture;

  pub fn SDL_DestroyTexture(texture: *mut SDL_Texture);

  /// Update the given texture rectangle (NULL for the whole texture) with new pixel data
  pub fn SDL_UpdateTexture(
    texture: *mut SDL_Texture,
    rect: *const SDL_Rect,
    pixels: *const c_void,
    pitch: c_int,
  ) -> bool;
}
