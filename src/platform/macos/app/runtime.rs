//! The application context: everything the running app owns.
//!
//! Created once at bootstrap and shared with run loop callbacks as
//! `Rc<RefCell<Runtime>>`. There is no global state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{info, warn};

use crate::controller::{TrailController, TrailSession};
use crate::error::Result;
use crate::events::{EventBus, Flow};
use crate::model::Point;
use crate::platform::macos::input::{default_center, Observers};
use crate::platform::macos::input::observers::WILL_TERMINATE;
use crate::platform::macos::ui::{MacOverlayPanel, StatusMenu};

use super::timers::RunLoopScheduler;

/// The controller bound to the AppKit overlay and run loop timers.
pub type MacController = TrailController<MacOverlayPanel, RunLoopScheduler>;

pub struct Runtime {
    session: TrailSession<MacOverlayPanel, RunLoopScheduler>,
    observers: Observers,
    status_menu: Option<StatusMenu>,
    torn_down: bool,
}

impl Runtime {
    pub fn new(
        controller: MacController,
        bus: EventBus,
        observers: Observers,
        status_menu: StatusMenu,
    ) -> Self {
        Self {
            session: TrailSession::new(controller, bus),
            observers,
            status_menu: Some(status_menu),
            torn_down: false,
        }
    }

    pub fn controller_mut(&mut self) -> &mut MacController {
        self.session.controller_mut()
    }

    /// One poll tick: handle queued events, then follow the cursor.
    pub fn tick(&mut self, cursor: Point) -> Flow {
        self.session.tick(cursor)
    }

    /// Release everything the app registered with the system. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.session.will_terminate();
        self.observers.remove_all();
        drop(self.status_menu.take());
        self.session.controller_mut().surface_mut().close();
        info!("runtime torn down");
    }
}

/// Tear the runtime down when the application is about to exit, whatever
/// triggered the exit.
pub fn install_termination_observer(runtime: &Rc<RefCell<Runtime>>) -> Result<()> {
    let weak: Weak<RefCell<Runtime>> = Rc::downgrade(runtime);
    let mut observers = Observers::new();
    unsafe {
        observers.observe(default_center()?, WILL_TERMINATE, move || {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            match runtime.try_borrow_mut() {
                Ok(mut rt) => rt.teardown(),
                Err(_) => warn!("runtime busy during termination, teardown skipped"),
            };
        })?;
    }
    // Keep the token with the others so teardown removes it too.
    runtime.borrow_mut().observers.adopt(observers);
    Ok(())
}
