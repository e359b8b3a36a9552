//! Seams between the controller and the windowing system.
//!
//! The AppKit layer implements these for the real overlay panel and run
//! loop timers; tests implement them with recording fakes.

use std::time::Duration;

use crate::model::Point;

/// The overlay window as the controller sees it.
pub trait OverlaySurface {
    /// Make the overlay visible and order it front-most.
    fn show(&mut self);

    /// Remove the overlay from the screen.
    fn hide(&mut self);

    /// Move the overlay's frame origin.
    fn reposition(&mut self, origin: Point);

    /// Order the overlay above every other window without activating the app.
    fn order_front(&mut self);

    /// Whether the overlay is currently on screen.
    fn is_visible(&self) -> bool;
}

/// Deferred work on the main run loop.
pub trait Scheduler {
    /// Arrange for a `ReassertFront` event to be published after `delay`.
    fn schedule_reassert(&mut self, delay: Duration);

    /// Stop the poll timer and every pending reassertion.
    fn cancel_all(&mut self);
}
