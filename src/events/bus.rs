//! Event bus using mpsc channels.
//!
//! The bus provides a simple publish/consume mechanism where:
//! - Producers publish events via `EventPublisher::publish()`
//! - The poll tick collects them via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::trace;

use super::types::AppEvent;

/// Event queue owned by the application context.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
/// Every producer holds its own publisher; the poll tick is the only
/// consumer.
///
/// # Example
///
/// ```
/// use cursor_trail::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::ToggleTrail);
///
/// let events = bus.drain();
/// assert_eq!(events, vec![AppEvent::ToggleTrail]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Publishers are cheap to clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus owns a sender, so Disconnected cannot happen while it lives.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the bus has been dropped (app shutting down) the
    /// event is discarded.
    pub fn publish(&self, event: AppEvent) {
        trace!(?event, "publish");
        let _ = self.sender.send(event);
    }
}
