//! Keyboard events and scoped listener subscriptions.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::sync::Mutex;

/// Non-character keys reported on key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape.
    Escape,
    /// Delete.
    Delete,
    /// Backspace.
    Backspace,
    /// Any other key.
    Other,
}

/// A keyboard notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Key-down channel, carrying editing keys.
    Down(KeyCode),
    /// Key-press channel, carrying the typed character.
    Press(char),
}

type Listener = Arc<dyn Fn(KeyEvent) -> bool + Send + Sync>;

/// A source of key events that listeners subscribe to for a bounded time.
///
/// Listeners return `true` when they consumed an event.
pub struct KeyBus {
    next_id: AtomicUsize,
    listeners: Mutex<Vec<(usize, Listener)>>,
}

impl KeyBus {
    /// Creates a bus with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(0),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Registers `listener` until the returned [`Subscription`] is released
    /// or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<'_>
    where
        F: Fn(KeyEvent) -> bool + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let listener: Listener = Arc::new(listener);
        self.listeners.lock().push((id, listener));
        log::debug!("key listener {id} subscribed");
        Subscription {
            bus: self,
            id: Some(id),
        }
    }

    /// Delivers `event` to every current listener.
    ///
    /// Returns whether any listener consumed the event. Listeners may
    /// subscribe or release while being called.
    pub fn dispatch(&self, event: KeyEvent) -> bool {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        log::trace!("dispatching {event:?} to {} listener(s)", listeners.len());

        let mut consumed = false;
        for listener in listeners {
            consumed |= listener(event);
        }
        consumed
    }

    /// Returns the number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn release(&self, id: usize) {
        self.listeners.lock().retain(|(listener_id, _)| *listener_id != id);
        log::debug!("key listener {id} released");
    }
}

impl Default for KeyBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeyBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBus")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

/// Guard for a listener registered on a [`KeyBus`].
///
/// The listener stays registered while the guard is alive.
#[must_use = "dropping a subscription immediately releases its listener"]
#[derive(Debug)]
pub struct Subscription<'a> {
    bus: &'a KeyBus,
    id: Option<usize>,
}

impl Subscription<'_> {
    /// Unregisters the listener. Releasing twice is a no-op.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.bus.release(id);
        }
    }

    /// Returns whether the listener is still registered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.id.is_some()
    }
}

impl Drop for Subscription<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
