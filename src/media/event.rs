//! Event record and non-blocking polling

use crate::ffi::{
  events::{SDL_PollEvent, SDL_EVENT_KEY_DOWN, SDL_EVENT_KEY_UP},
  SDL_Event, SDL_KeyboardEvent,
};

/// Caller-owned event record that [`Event::poll`] overwrites in place
#[derive(Clone, Copy, Default)]
pub struct Event {
  raw: SDL_Event,
}

impl Event {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pop one pending event into this record. Returns false, leaving the
  /// record untouched, when the queue is empty.
  pub fn poll(&mut self) -> bool {
    unsafe { SDL_PollEvent(&mut self.raw) }
  }

  pub fn event_type(&self) -> u32 {
    // Every variant of the union starts with the type tag
    unsafe { self.raw.type_ }
  }

  pub fn is_keyboard(&self) -> bool {
    matches!(self.event_type(), SDL_EVENT_KEY_DOWN | SDL_EVENT_KEY_UP)
  }

  /// Keyboard view of the record. The fields are only meaningful when
  /// [`Event::is_keyboard`] holds.
  pub fn keyboard(&self) -> SDL_KeyboardEvent {
    unsafe { self.raw.key }
  }
}

impl std::fmt::Debug for Event {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Event").field("type", &self.event_type()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_event_is_zeroed() {
    let event = Event::new();
    assert_eq!(event.event_type(), 0);
    assert!(!event.is_keyboard());
    let key = event.keyboard();
    assert_eq!(key.scancode, 0);
    assert!(!key.down);
  }

  #[test]
  fn test_keyboard_view_reads_union() {
    let mut event = Event::new();
    event.raw.key = SDL_KeyboardEvent {
      type_: SDL_EVENT_KEY_DOWN,
      scancode: 4,
      key: 'a' as u32,
      down: true,
      ..Default::default()
    };
    assert!(event.is_keyboard());
    assert_eq!(event.keyboard().scancode, 4);
    assert_eq!(event.keyboard().key, 'a' as u32);
  }
}
