//! Audio stream callback bridge
//!
//! SDL invokes a stream's get/put callbacks on its audio thread, while JS may
//! only run on the event loop thread. The bridge passes the latest byte
//! counts across through a single-slot [`Mailbox`] per direction and asks
//! the loop for a turn through a [`Wakeup`]. At most one wakeup is
//! outstanding per direction: signals that arrive before the loop drains
//! overwrite the slot, so the loop sees the newest counts and never an older
//! count after a newer one.
//!
//! Teardown runs through a [`ShutdownGate`]. Every wakeup handle holds a
//! [`CloseToken`]; the native stream is dropped once the bridge is retired
//! and the last token is gone.
//!
//! ```text
//! Active --retire--> Draining { open_handles } --last token dropped--> Closed
//! ```

use std::any::Any;
use std::os::raw::{c_int, c_void};
use std::ptr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ffi::{SDL_AudioStream, SDL_AudioStreamCallback};

use super::{MediaError, MediaResult};

/// Which stream callback a registration belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
  /// The stream wants more input data
  Get,
  /// The stream consumed data that was put into it
  Put,
}

impl Direction {
  pub fn as_str(&self) -> &'static str {
    match self {
      Direction::Get => "get",
      Direction::Put => "put",
    }
  }
}

/// Byte counts reported by one native callback invocation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamRequest {
  /// Bytes needed (get) or bytes just added (put)
  pub amount: i32,
  /// Total bytes involved in the stream operation that fired the callback
  pub total: i32,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  // Nothing panics while these locks are held; recover rather than poison the audio thread
  mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Mailbox
// ============================================================================

#[derive(Debug)]
struct Slot {
  latest: Option<StreamRequest>,
  wake_pending: bool,
  open: bool,
}

/// Single-slot, last-write-wins record shared by the audio thread and the loop
#[derive(Debug)]
pub struct Mailbox {
  slot: Mutex<Slot>,
}

impl Default for Mailbox {
  fn default() -> Self {
    Self::new()
  }
}

impl Mailbox {
  pub fn new() -> Self {
    Self {
      slot: Mutex::new(Slot {
        latest: None,
        wake_pending: false,
        open: true,
      }),
    }
  }

  /// Overwrite the slot with `request`.
  ///
  /// Returns true when the caller has to signal a wakeup, i.e. no wakeup is
  /// already on its way to the loop.
  pub fn post(&self, request: StreamRequest) -> bool {
    let mut slot = lock(&self.slot);
    if !slot.open {
      return false;
    }
    slot.latest = Some(request);
    !std::mem::replace(&mut slot.wake_pending, true)
  }

  /// Take the newest request and re-arm the wakeup
  pub fn take(&self) -> Option<StreamRequest> {
    let mut slot = lock(&self.slot);
    slot.wake_pending = false;
    slot.latest.take()
  }

  /// The wakeup for a posted request could not be sent
  pub fn disarm(&self) {
    lock(&self.slot).wake_pending = false;
  }

  /// Reject further posts and drop anything undelivered
  pub fn close(&self) {
    let mut slot = lock(&self.slot);
    slot.open = false;
    slot.latest = None;
    slot.wake_pending = false;
  }

  pub fn is_open(&self) -> bool {
    lock(&self.slot).open
  }
}

// ============================================================================
// Wakeup
// ============================================================================

/// Loop-integrated wakeup primitive, signalled from the audio thread
pub trait Wakeup: Send + Sync + 'static {
  /// Ask the loop for one turn. Returns false if the handle no longer accepts signals.
  fn wake(&self) -> bool;

  /// Begin closing the handle.
  ///
  /// Closing completes asynchronously; completion is reported by dropping the
  /// [`Trampoline`] the handle was built around.
  fn close(&self);
}

/// Target of the native callback's userdata pointer
pub struct CallbackChannel<W: Wakeup> {
  mailbox: Arc<Mailbox>,
  wakeup: W,
}

impl<W: Wakeup> CallbackChannel<W> {
  /// Called on the audio thread. Never blocks beyond the slot lock.
  pub fn signal(&self, request: StreamRequest) {
    if self.mailbox.post(request) && !self.wakeup.wake() {
      self.mailbox.disarm();
    }
  }

  fn shut(&self) {
    self.mailbox.close();
    self.wakeup.close();
  }
}

/// Loop-side end of one registered direction.
///
/// Owned by the wakeup handle; dropping it tells the gate the handle closed.
pub struct Trampoline {
  mailbox: Arc<Mailbox>,
  _token: CloseToken,
}

impl Trampoline {
  /// Drain the mailbox. `None` once the direction was unregistered.
  pub fn deliver(&self) -> Option<StreamRequest> {
    self.mailbox.take()
  }

  /// Hand the newest request to `f`. A wakeup that finds the mailbox empty
  /// (the direction was unregistered after it was queued) does not call `f`.
  ///
  /// Returns whether `f` ran.
  pub fn dispatch<E>(&self, f: impl FnOnce(StreamRequest) -> Result<(), E>) -> Result<bool, E> {
    match self.deliver() {
      Some(request) => f(request).map(|()| true),
      None => Ok(false),
    }
  }
}

// ============================================================================
// Shutdown Gate
// ============================================================================

/// Lifecycle phase of a gated resource
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
  Active,
  Draining { open_handles: usize },
  Closed,
}

type Parked = Vec<Box<dyn Any + Send>>;

struct GateState<R> {
  resource: Option<R>,
  open_handles: usize,
  retiring: bool,
  /// Values that must outlive the resource (channels whose detach failed)
  parked: Parked,
}

impl<R> GateState<R> {
  fn release_if_drained(&mut self) -> Option<(R, Parked)> {
    if self.retiring && self.open_handles == 0 {
      self
        .resource
        .take()
        .map(|resource| (resource, std::mem::take(&mut self.parked)))
    } else {
      None
    }
  }
}

fn release<R>(released: Option<(R, Parked)>) {
  if let Some((resource, parked)) = released {
    drop(resource);
    drop(parked);
    tracing::debug!(target: "sdl", "gated resource released");
  }
}

struct GateInner<R> {
  state: Mutex<GateState<R>>,
}

trait HandleCounter: Send + Sync {
  fn handle_closed(&self);
}

impl<R: Send + 'static> HandleCounter for GateInner<R> {
  fn handle_closed(&self) {
    let released = {
      let mut state = lock(&self.state);
      state.open_handles = state.open_handles.saturating_sub(1);
      state.release_if_drained()
    };
    // Teardown runs outside the lock
    release(released);
  }
}

/// Proof that one wakeup handle is still open
pub struct CloseToken {
  counter: Arc<dyn HandleCounter>,
}

impl Drop for CloseToken {
  fn drop(&mut self) {
    self.counter.handle_closed();
  }
}

/// Defers dropping a resource until it is retired and every handle closed
pub struct ShutdownGate<R: Send + 'static> {
  inner: Arc<GateInner<R>>,
}

impl<R: Send + 'static> ShutdownGate<R> {
  pub fn new(resource: R) -> Self {
    Self {
      inner: Arc::new(GateInner {
        state: Mutex::new(GateState {
          resource: Some(resource),
          open_handles: 0,
          retiring: false,
          parked: Vec::new(),
        }),
      }),
    }
  }

  /// Count a new handle against the resource
  pub fn open_handle(&self) -> MediaResult<CloseToken> {
    let mut state = lock(&self.inner.state);
    if state.retiring || state.resource.is_none() {
      return Err(MediaError::Destroyed("AudioStream"));
    }
    state.open_handles += 1;
    let counter: Arc<dyn HandleCounter> = self.inner.clone();
    Ok(CloseToken { counter })
  }

  /// Run `f` against the resource while it is active
  pub fn with_resource<T>(&self, f: impl FnOnce(&R) -> T) -> Option<T> {
    let state = lock(&self.inner.state);
    if state.retiring {
      return None;
    }
    state.resource.as_ref().map(f)
  }

  /// Keep `value` alive until the resource itself is dropped
  pub fn park(&self, value: Box<dyn Any + Send>) {
    lock(&self.inner.state).parked.push(value);
  }

  /// Stop accepting work; drop the resource now or when the last handle closes
  pub fn retire(&self) {
    let released = {
      let mut state = lock(&self.inner.state);
      state.retiring = true;
      state.release_if_drained()
    };
    release(released);
  }

  pub fn phase(&self) -> Phase {
    let state = lock(&self.inner.state);
    if !state.retiring {
      Phase::Active
    } else if state.resource.is_some() {
      Phase::Draining {
        open_handles: state.open_handles,
      }
    } else {
      Phase::Closed
    }
  }
}

// ============================================================================
// Bridge
// ============================================================================

/// A native stream the bridge can attach callbacks to
pub trait CallbackTarget: Send + 'static {
  /// Install `callback` with `userdata`, or detach with `None`.
  ///
  /// After a detach returns, the previous callback is neither running nor
  /// going to run again.
  fn set_callback(
    &self,
    direction: Direction,
    callback: SDL_AudioStreamCallback,
    userdata: *mut c_void,
  ) -> MediaResult<()>;
}

/// Owns a native stream and its get/put callback registrations
pub struct StreamBridge<S: CallbackTarget, W: Wakeup> {
  gate: ShutdownGate<S>,
  get: Option<Arc<CallbackChannel<W>>>,
  put: Option<Arc<CallbackChannel<W>>>,
}

impl<S: CallbackTarget, W: Wakeup> StreamBridge<S, W> {
  pub fn new(stream: S) -> Self {
    Self {
      gate: ShutdownGate::new(stream),
      get: None,
      put: None,
    }
  }

  fn slot_mut(&mut self, direction: Direction) -> &mut Option<Arc<CallbackChannel<W>>> {
    match direction {
      Direction::Get => &mut self.get,
      Direction::Put => &mut self.put,
    }
  }

  pub fn is_registered(&self, direction: Direction) -> bool {
    match direction {
      Direction::Get => self.get.is_some(),
      Direction::Put => self.put.is_some(),
    }
  }

  /// Register a callback direction, replacing any previous registration.
  ///
  /// `make_wakeup` builds the loop-side handle around the trampoline. On any
  /// failure the direction is left unregistered.
  pub fn register<F>(&mut self, direction: Direction, make_wakeup: F) -> MediaResult<()>
  where
    F: FnOnce(Trampoline) -> MediaResult<W>,
  {
    self.unregister(direction);

    let mailbox = Arc::new(Mailbox::new());
    let token = self.gate.open_handle()?;
    let wakeup = make_wakeup(Trampoline {
      mailbox: Arc::clone(&mailbox),
      _token: token,
    })?;
    let channel = Arc::new(CallbackChannel { mailbox, wakeup });

    let userdata = Arc::as_ptr(&channel) as *mut c_void;
    let attached = self
      .gate
      .with_resource(|stream| {
        stream.set_callback(direction, Some(on_stream_callback::<W>), userdata)
      })
      .unwrap_or(Err(MediaError::Destroyed("AudioStream")));

    if let Err(e) = attached {
      channel.shut();
      return Err(e);
    }

    tracing::debug!(target: "sdl", direction = direction.as_str(), "audio stream callback registered");
    *self.slot_mut(direction) = Some(channel);
    Ok(())
  }

  /// Detach the native callback, close the mailbox, then close the wakeup
  pub fn unregister(&mut self, direction: Direction) {
    let channel = match self.slot_mut(direction).take() {
      Some(channel) => channel,
      None => return,
    };

    let detached = self
      .gate
      .with_resource(|stream| stream.set_callback(direction, None, ptr::null_mut()));
    channel.shut();

    match detached {
      Some(Ok(())) => drop(channel),
      Some(Err(e)) => {
        tracing::warn!(target: "sdl", direction = direction.as_str(), "failed to detach audio stream callback: {}", e);
        self.gate.park(Box::new(channel));
      }
      None => self.gate.park(Box::new(channel)),
    }

    tracing::debug!(target: "sdl", direction = direction.as_str(), "audio stream callback unregistered");
  }

  /// Unregister both directions and retire the stream. Idempotent.
  pub fn destroy(&mut self) {
    self.unregister(Direction::Get);
    self.unregister(Direction::Put);
    self.gate.retire();
  }

  /// Run `f` against the native stream unless the bridge was destroyed
  pub fn with_stream<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T> {
    self.gate.with_resource(f)
  }

  pub fn phase(&self) -> Phase {
    self.gate.phase()
  }

  pub fn is_destroyed(&self) -> bool {
    self.phase() != Phase::Active
  }
}

impl<S: CallbackTarget, W: Wakeup> Drop for StreamBridge<S, W> {
  fn drop(&mut self) {
    self.destroy();
  }
}

/// Native get/put callback. `userdata` is the registered [`CallbackChannel`].
unsafe extern "C" fn on_stream_callback<W: Wakeup>(
  userdata: *mut c_void,
  _stream: *mut SDL_AudioStream,
  additional_amount: c_int,
  total_amount: c_int,
) {
  if userdata.is_null() {
    return;
  }
  // SAFETY: the channel outlives its native registration; unregister detaches
  // before the channel is dropped, or parks it until the stream is gone
  let channel = unsafe { &*(userdata as *const CallbackChannel<W>) };
  channel.signal(StreamRequest {
    amount: additional_amount,
    total: total_amount,
  });
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossbeam::channel::{self, Receiver, Sender};
  use std::collections::HashMap;
  use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
  use std::time::Duration;

  type RawCallback = unsafe extern "C" fn(*mut c_void, *mut SDL_AudioStream, c_int, c_int);

  /// Test-side view of a fake native stream
  #[derive(Clone, Default)]
  struct NativeSide {
    installed: Arc<Mutex<HashMap<Direction, (RawCallback, usize)>>>,
    destroyed: Arc<AtomicUsize>,
  }

  impl NativeSide {
    /// Invoke the installed callback the way SDL does, under the stream lock
    fn fire(&self, direction: Direction, amount: i32, total: i32) -> bool {
      let installed = self.installed.lock().unwrap();
      match installed.get(&direction) {
        Some(&(callback, userdata)) => {
          unsafe { callback(userdata as *mut c_void, ptr::null_mut(), amount, total) };
          true
        }
        None => false,
      }
    }

    fn destroyed(&self) -> usize {
      self.destroyed.load(Ordering::SeqCst)
    }
  }

  struct FakeStream {
    native: NativeSide,
  }

  impl CallbackTarget for FakeStream {
    fn set_callback(
      &self,
      direction: Direction,
      callback: SDL_AudioStreamCallback,
      userdata: *mut c_void,
    ) -> MediaResult<()> {
      let mut installed = self.native.installed.lock().unwrap();
      match callback {
        Some(callback) => {
          installed.insert(direction, (callback, userdata as usize));
        }
        None => {
          installed.remove(&direction);
        }
      }
      Ok(())
    }
  }

  impl Drop for FakeStream {
    fn drop(&mut self) {
      self.native.destroyed.fetch_add(1, Ordering::SeqCst);
    }
  }

  enum LoopMsg {
    Wake(u64),
    Close(u64),
  }

  struct FakeWakeup {
    id: u64,
    tx: Sender<LoopMsg>,
    closing: AtomicBool,
  }

  impl Wakeup for FakeWakeup {
    fn wake(&self) -> bool {
      if self.closing.load(Ordering::SeqCst) {
        return false;
      }
      self.tx.send(LoopMsg::Wake(self.id)).is_ok()
    }

    fn close(&self) {
      if !self.closing.swap(true, Ordering::SeqCst) {
        let _ = self.tx.send(LoopMsg::Close(self.id));
      }
    }
  }

  /// Single-threaded stand-in for the JS event loop.
  ///
  /// Queued wakeups still run after a close request, as they do once a
  /// threadsafe function is released, so the tests exercise the mailbox
  /// rather than relying on the loop to cancel them.
  struct FakeLoop {
    tx: Sender<LoopMsg>,
    rx: Receiver<LoopMsg>,
    handles: Arc<Mutex<HashMap<u64, (Direction, Trampoline)>>>,
    next_id: u64,
  }

  impl FakeLoop {
    fn new() -> Self {
      let (tx, rx) = channel::unbounded();
      Self {
        tx,
        rx,
        handles: Arc::new(Mutex::new(HashMap::new())),
        next_id: 0,
      }
    }

    fn wakeup(
      &mut self,
      direction: Direction,
    ) -> impl FnOnce(Trampoline) -> MediaResult<FakeWakeup> {
      self.next_id += 1;
      let id = self.next_id;
      let tx = self.tx.clone();
      let handles = Arc::clone(&self.handles);
      move |trampoline| {
        handles.lock().unwrap().insert(id, (direction, trampoline));
        Ok(FakeWakeup {
          id,
          tx,
          closing: AtomicBool::new(false),
        })
      }
    }

    fn turn(&self, msg: LoopMsg) -> Option<(Direction, StreamRequest)> {
      match msg {
        LoopMsg::Wake(id) => {
          let handles = self.handles.lock().unwrap();
          let (direction, trampoline) = handles.get(&id)?;
          // Same path the JS wakeup takes
          let mut call = None;
          let _ = trampoline.dispatch(|request| {
            call = Some((*direction, request));
            Ok::<(), ()>(())
          });
          call
        }
        LoopMsg::Close(id) => {
          let closed = self.handles.lock().unwrap().remove(&id);
          drop(closed);
          None
        }
      }
    }

    fn run_until_idle(&self) -> Vec<(Direction, StreamRequest)> {
      let mut delivered = Vec::new();
      while let Ok(msg) = self.rx.try_recv() {
        if let Some(call) = self.turn(msg) {
          delivered.push(call);
        }
      }
      delivered
    }
  }

  fn bridge() -> (StreamBridge<FakeStream, FakeWakeup>, NativeSide) {
    let native = NativeSide::default();
    let stream = FakeStream {
      native: native.clone(),
    };
    (StreamBridge::new(stream), native)
  }

  fn request(amount: i32, total: i32) -> StreamRequest {
    StreamRequest { amount, total }
  }

  #[test]
  fn test_mailbox_keeps_latest() {
    let mailbox = Mailbox::new();
    assert!(mailbox.post(request(1, 10)));
    assert!(!mailbox.post(request(2, 20)));
    assert!(!mailbox.post(request(3, 30)));

    assert_eq!(mailbox.take(), Some(request(3, 30)));
    assert_eq!(mailbox.take(), None);

    // Draining re-arms the wakeup
    assert!(mailbox.post(request(4, 40)));
  }

  #[test]
  fn test_mailbox_closed_rejects_posts() {
    let mailbox = Mailbox::new();
    assert!(mailbox.post(request(1, 1)));
    mailbox.close();
    assert!(!mailbox.is_open());
    assert_eq!(mailbox.take(), None);
    assert!(!mailbox.post(request(2, 2)));
    assert_eq!(mailbox.take(), None);
  }

  #[test]
  fn test_disarm_allows_next_wake() {
    let mailbox = Mailbox::new();
    assert!(mailbox.post(request(1, 1)));
    mailbox.disarm();
    assert!(mailbox.post(request(2, 2)));
  }

  #[test]
  fn test_get_signal_delivers_once() {
    let (mut bridge, native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge
      .register(Direction::Get, event_loop.wakeup(Direction::Get))
      .unwrap();
    bridge
      .register(Direction::Put, event_loop.wakeup(Direction::Put))
      .unwrap();

    assert!(native.fire(Direction::Get, 512, 4096));

    let delivered = event_loop.run_until_idle();
    assert_eq!(delivered, vec![(Direction::Get, request(512, 4096))]);
  }

  #[test]
  fn test_no_callbacks_no_delivery() {
    let (bridge, native) = bridge();
    let event_loop = FakeLoop::new();

    assert!(!native.fire(Direction::Get, 512, 4096));
    assert!(event_loop.run_until_idle().is_empty());
    assert_eq!(bridge.phase(), Phase::Active);
  }

  #[test]
  fn test_stale_signal_after_unregister() {
    let (mut bridge, native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge
      .register(Direction::Get, event_loop.wakeup(Direction::Get))
      .unwrap();

    // Wakeup is queued but not yet drained
    assert!(native.fire(Direction::Get, 256, 1024));
    bridge.unregister(Direction::Get);

    assert!(!bridge.is_registered(Direction::Get));
    assert!(!native.fire(Direction::Get, 128, 512));
    assert!(event_loop.run_until_idle().is_empty());
  }

  #[test]
  fn test_dispatch_skips_unregistered_direction() {
    let (mut bridge, native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge
      .register(Direction::Get, event_loop.wakeup(Direction::Get))
      .unwrap();
    let calls = AtomicUsize::new(0);
    let dispatch = |event_loop: &FakeLoop| {
      let handles = event_loop.handles.lock().unwrap();
      let (_, trampoline) = handles.values().next().unwrap();
      trampoline.dispatch(|delivered| {
        calls.fetch_add(1, Ordering::SeqCst);
        if delivered.amount < 0 {
          Err("negative")
        } else {
          Ok(())
        }
      })
    };

    assert!(native.fire(Direction::Get, 256, 1024));
    assert_eq!(dispatch(&event_loop), Ok(true));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Empty mailbox: the wakeup turn is a no-op
    assert_eq!(dispatch(&event_loop), Ok(false));

    assert!(native.fire(Direction::Get, -1, 0));
    assert_eq!(dispatch(&event_loop), Err("negative"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // Queued wakeup outlives the registration
    assert!(native.fire(Direction::Get, 128, 512));
    bridge.unregister(Direction::Get);
    assert_eq!(dispatch(&event_loop), Ok(false));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn test_destroyed_bridge_refuses_stream_access() {
    let (mut bridge, native) = bridge();
    assert_eq!(bridge.with_stream(|_| 7), Some(7));
    assert!(!bridge.is_destroyed());

    bridge.destroy();
    assert!(bridge.is_destroyed());
    assert_eq!(bridge.with_stream(|_| 7), None);
    assert!(!bridge.is_registered(Direction::Get));
    assert!(!bridge.is_registered(Direction::Put));
    assert!(!native.fire(Direction::Put, 1, 1));
  }

  #[test]
  fn test_coalesced_signals_deliver_newest() {
    let (mut bridge, native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge
      .register(Direction::Put, event_loop.wakeup(Direction::Put))
      .unwrap();

    native.fire(Direction::Put, 100, 100);
    native.fire(Direction::Put, 200, 300);
    native.fire(Direction::Put, 50, 350);

    let delivered = event_loop.run_until_idle();
    assert_eq!(delivered, vec![(Direction::Put, request(50, 350))]);
  }

  #[test]
  fn test_destroy_waits_for_wakeup_close() {
    let (mut bridge, native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge
      .register(Direction::Get, event_loop.wakeup(Direction::Get))
      .unwrap();
    bridge
      .register(Direction::Put, event_loop.wakeup(Direction::Put))
      .unwrap();

    bridge.destroy();
    assert_eq!(bridge.phase(), Phase::Draining { open_handles: 2 });
    assert_eq!(native.destroyed(), 0);
    assert!(bridge.with_stream(|_| ()).is_none());

    event_loop.run_until_idle();
    assert_eq!(bridge.phase(), Phase::Closed);
    assert_eq!(native.destroyed(), 1);

    bridge.destroy();
    drop(bridge);
    assert_eq!(native.destroyed(), 1);
  }

  #[test]
  fn test_destroy_without_callbacks_is_immediate() {
    let (mut bridge, native) = bridge();
    bridge.destroy();
    assert_eq!(bridge.phase(), Phase::Closed);
    assert_eq!(native.destroyed(), 1);
  }

  #[test]
  fn test_register_after_destroy_fails() {
    let (mut bridge, _native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge.destroy();
    let result = bridge.register(Direction::Get, event_loop.wakeup(Direction::Get));
    assert!(matches!(result, Err(MediaError::Destroyed(_))));
  }

  #[test]
  fn test_failed_wakeup_leaves_direction_unregistered() {
    let (mut bridge, native) = bridge();
    let result = bridge.register(Direction::Get, |_trampoline| {
      Err::<FakeWakeup, _>(MediaError::InvalidArgument("no loop".into()))
    });
    assert!(result.is_err());
    assert!(!bridge.is_registered(Direction::Get));

    // The dropped trampoline released its handle
    bridge.destroy();
    assert_eq!(native.destroyed(), 1);
  }

  #[test]
  fn test_register_replaces_previous() {
    let (mut bridge, native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge
      .register(Direction::Get, event_loop.wakeup(Direction::Get))
      .unwrap();
    native.fire(Direction::Get, 1, 1);
    bridge
      .register(Direction::Get, event_loop.wakeup(Direction::Get))
      .unwrap();
    native.fire(Direction::Get, 2, 2);

    let delivered = event_loop.run_until_idle();
    assert_eq!(delivered, vec![(Direction::Get, request(2, 2))]);
  }

  #[test]
  fn test_shutdown_gate_phases() {
    let released = Arc::new(AtomicUsize::new(0));

    struct Resource(Arc<AtomicUsize>);
    impl Drop for Resource {
      fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
      }
    }

    let gate = ShutdownGate::new(Resource(Arc::clone(&released)));
    let first = gate.open_handle().unwrap();
    let second = gate.open_handle().unwrap();
    assert_eq!(gate.phase(), Phase::Active);

    gate.retire();
    assert_eq!(gate.phase(), Phase::Draining { open_handles: 2 });
    assert!(gate.open_handle().is_err());

    drop(first);
    assert_eq!(gate.phase(), Phase::Draining { open_handles: 1 });
    assert_eq!(released.load(Ordering::SeqCst), 0);

    drop(second);
    assert_eq!(gate.phase(), Phase::Closed);
    assert_eq!(released.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn test_concurrent_signals_are_monotonic() {
    const SIGNALS: i32 = 10_000;

    let (mut bridge, native) = bridge();
    let mut event_loop = FakeLoop::new();
    bridge
      .register(Direction::Get, event_loop.wakeup(Direction::Get))
      .unwrap();

    let audio_side = native.clone();
    let audio_thread = std::thread::spawn(move || {
      for amount in 1..=SIGNALS {
        audio_side.fire(Direction::Get, amount, amount * 2);
      }
    });

    let mut last = 0;
    let mut deliveries = 0;
    while last < SIGNALS {
      let msg = event_loop
        .rx
        .recv_timeout(Duration::from_secs(5))
        .expect("audio thread stalled");
      if let Some((direction, delivered)) = event_loop.turn(msg) {
        assert_eq!(direction, Direction::Get);
        assert!(delivered.amount > last, "{} after {}", delivered.amount, last);
        assert_eq!(delivered.total, delivered.amount * 2);
        last = delivered.amount;
        deliveries += 1;
      }
    }

    audio_thread.join().unwrap();
    assert!(deliveries <= SIGNALS);
    assert_eq!(last, SIGNALS);
  }
}
