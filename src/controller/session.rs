//! The controller wired to its event plumbing.
//!
//! A session owns the event bus and the subscription registry next to the
//! controller, so the per-tick order (drain, dispatch, then track) lives in
//! one place that does not depend on AppKit.

use tracing::debug;

use crate::events::{AppEvent, EventBus, Flow, Subscriptions};
use crate::model::Point;

use super::{OverlaySurface, Scheduler, TrailController};

pub struct TrailSession<S, T> {
    controller: TrailController<S, T>,
    subscriptions: Subscriptions<TrailController<S, T>>,
    bus: EventBus,
}

impl<S: OverlaySurface + 'static, T: Scheduler + 'static> TrailSession<S, T> {
    /// Wire `controller` to the default subscriptions. Producers publish on
    /// `bus` through publishers taken before it is handed over.
    pub fn new(controller: TrailController<S, T>, bus: EventBus) -> Self {
        Self {
            controller,
            subscriptions: TrailController::subscriptions(),
            bus,
        }
    }

    pub fn controller(&self) -> &TrailController<S, T> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TrailController<S, T> {
        &mut self.controller
    }

    /// One poll tick: handle queued events, then follow the cursor unless a
    /// handler asked to terminate.
    pub fn tick(&mut self, cursor: Point) -> Flow {
        let events = self.bus.drain();
        let flow = self
            .subscriptions
            .dispatch_all(events, &mut self.controller);
        if flow == Flow::Continue {
            self.controller.track(cursor);
        }
        flow
    }

    /// The application is exiting. Runs the `WillTerminate` subscribers
    /// right away; queued events are dropped.
    pub fn will_terminate(&mut self) {
        let dropped = self.bus.drain().len();
        if dropped > 0 {
            debug!(dropped, "queued events dropped at termination");
        }
        self.subscriptions
            .dispatch(AppEvent::WillTerminate, &mut self.controller);
    }
}
