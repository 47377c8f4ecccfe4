use napi_derive::napi;

use crate::media;

/// Keyboard fields copied out of an event record
#[napi(object)]
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
  pub scancode: u32,
  pub keycode: u32,
  pub modifiers: u32,
  pub down: bool,
  pub repeat: bool,
  pub window_id: u32,
  /// Nanoseconds since SDL initialization
  pub timestamp: i64,
}

/// Reusable event record filled by `poll`
#[napi]
pub struct Event {
  inner: media::Event,
}

#[napi]
impl Event {
  #[napi(constructor)]
  pub fn new() -> Self {
    Self {
      inner: media::Event::new(),
    }
  }

  #[napi(getter, js_name = "type")]
  pub fn event_type(&self) -> u32 {
    self.inner.event_type()
  }

  #[napi(getter)]
  pub fn key(&self) -> KeyboardEvent {
    let key = self.inner.keyboard();
    KeyboardEvent {
      scancode: key.scancode,
      keycode: key.key,
      modifiers: key.mod_ as u32,
      down: key.down,
      repeat: key.repeat,
      window_id: key.window_id,
      timestamp: key.timestamp as i64,
    }
  }
}

impl Default for Event {
  fn default() -> Self {
    Self::new()
  }
}

/// Pop one pending event into `event` without blocking
#[napi]
pub fn poll(event: &mut Event) -> bool {
  event.inner.poll()
}

#[napi]
#[derive(Default)]
pub struct Poller {}

#[napi]
impl Poller {
  #[napi(constructor)]
  pub fn new() -> Self {
    Self {}
  }

  #[napi]
  pub fn poll(&self, event: &mut Event) -> bool {
    event.inner.poll()
  }
}
