//! Overlay controller.
//!
//! Owns the overlay surface and the scheduler and implements every
//! reaction of the app: cursor tracking, the toggle and quit menu actions,
//! and front-most reassertion after display or space changes.

pub mod seams;
pub mod session;

pub use seams::{OverlaySurface, Scheduler};
pub use session::TrailSession;

use tracing::{debug, info, trace};

use crate::config::{AppConfig, ReassertPolicy};
use crate::events::{AppEvent, Flow, Subscriptions};
use crate::model::{ring_origin, Point};

/// Lifecycle of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// What a reassertion did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReassertOutcome {
    /// The overlay was ordered front.
    OrderedFront,
    /// The user hid the overlay; nothing was done.
    SkippedHidden,
    /// The controller has shut down; nothing was done.
    SkippedTerminated,
}

/// Controller state for the single overlay of the process.
pub struct TrailController<S, T> {
    config: AppConfig,
    surface: S,
    scheduler: T,
    /// What the user last asked for through the toggle.
    wants_visible: bool,
    phase: Phase,
    last_origin: Option<Point>,
}

impl<S: OverlaySurface, T: Scheduler> TrailController<S, T> {
    pub fn new(config: AppConfig, surface: S, scheduler: T) -> Self {
        Self {
            config,
            surface,
            scheduler,
            wants_visible: true,
            phase: Phase::Running,
            last_origin: None,
        }
    }

    /// Put the overlay on screen for the first time.
    pub fn launch(&mut self) {
        info!(diameter = self.config.diameter, "overlay launched");
        self.surface.show();
    }

    /// One poll tick: centre the ring on `cursor`.
    ///
    /// Returns the frame origin sent to the surface, or `None` when nothing
    /// moved or the controller has shut down.
    pub fn track(&mut self, cursor: Point) -> Option<Point> {
        if self.phase == Phase::Terminated {
            return None;
        }
        let origin = ring_origin(cursor, self.config.diameter);
        if self.last_origin == Some(origin) {
            return None;
        }
        trace!(x = origin.x, y = origin.y, "reposition");
        self.surface.reposition(origin);
        self.last_origin = Some(origin);
        Some(origin)
    }

    /// Hide the overlay if it is visible, otherwise show it front-most.
    /// Returns the new visibility.
    pub fn toggle_trail(&mut self) -> bool {
        if self.phase == Phase::Terminated {
            return self.surface.is_visible();
        }
        if self.surface.is_visible() {
            self.surface.hide();
            self.wants_visible = false;
        } else {
            self.surface.show();
            self.wants_visible = true;
        }
        info!(visible = self.wants_visible, "trail toggled");
        self.wants_visible
    }

    /// Stop tracking and cancel everything pending. Idempotent.
    pub fn shutdown(&mut self) {
        if self.phase == Phase::Terminated {
            return;
        }
        self.phase = Phase::Terminated;
        self.scheduler.cancel_all();
        info!("controller shut down");
    }

    /// Quit from the menu: shut down and ask the platform to terminate.
    pub fn quit(&mut self) -> Flow {
        self.shutdown();
        Flow::Terminate
    }

    /// Display configuration changed: reassert once, right away.
    ///
    /// The window server may have moved the panel, so the next tick resends
    /// the origin even if the pointer stayed put.
    pub fn screen_parameters_changed(&mut self) -> ReassertOutcome {
        self.last_origin = None;
        self.reassert_front()
    }

    /// Active space changed: schedule the whole reassertion ladder.
    pub fn active_space_changed(&mut self) {
        if self.phase == Phase::Terminated {
            return;
        }
        debug!(steps = self.config.space_switch_ladder.len(), "space switch ladder");
        for &delay in &self.config.space_switch_ladder {
            self.scheduler.schedule_reassert(delay);
        }
    }

    /// Order the overlay front unless the user's intent says otherwise.
    pub fn reassert_front(&mut self) -> ReassertOutcome {
        if self.phase == Phase::Terminated {
            return ReassertOutcome::SkippedTerminated;
        }
        if !self.wants_visible && self.config.reassert_policy == ReassertPolicy::RespectUserHide {
            debug!("reassert skipped, overlay hidden by user");
            return ReassertOutcome::SkippedHidden;
        }
        if !self.wants_visible {
            // Unconditional policy re-shows a hidden overlay.
            self.wants_visible = true;
        }
        self.surface.order_front();
        self.last_origin = None;
        ReassertOutcome::OrderedFront
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn wants_visible(&self) -> bool {
        self.wants_visible
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

impl<S: OverlaySurface + 'static, T: Scheduler + 'static> TrailController<S, T> {
    /// The app's reactions, one subscription per event kind.
    pub fn subscriptions() -> Subscriptions<Self> {
        let mut subs = Subscriptions::new();
        subs.on(AppEvent::ToggleTrail, |c: &mut Self| {
            c.toggle_trail();
            Flow::Continue
        })
        .on(AppEvent::QuitApp, |c: &mut Self| c.quit())
        .on(AppEvent::ScreenParametersChanged, |c: &mut Self| {
            c.screen_parameters_changed();
            Flow::Continue
        })
        .on(AppEvent::ActiveSpaceChanged, |c: &mut Self| {
            c.active_space_changed();
            Flow::Continue
        })
        .on(AppEvent::ReassertFront, |c: &mut Self| {
            c.reassert_front();
            Flow::Continue
        })
        .on(AppEvent::WillTerminate, |c: &mut Self| {
            c.shutdown();
            Flow::Continue
        });
        subs
    }
}
