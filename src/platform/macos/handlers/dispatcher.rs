//! Poll tick dispatch.
//!
//! The poll timer calls [`pump`] every tick. It drains the event bus into
//! the subscription registry, moves the ring to the cursor, and performs
//! the termination the handlers asked for.
//!
//! ```text
//! NSTimer (16 ms) → pump() → Runtime::tick() → Subscriptions::dispatch_all()
//!                                            → TrailController::track()
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, trace};

use crate::events::Flow;
use crate::platform::macos::app::Runtime;
use crate::platform::macos::ffi::bridge::{msg_send, nil, sel, NSApp};
use crate::platform::macos::ffi::mouse_location;

/// Run one tick of the application.
pub fn pump(runtime: &Rc<RefCell<Runtime>>) {
    let flow = match runtime.try_borrow_mut() {
        Ok(mut rt) => rt.tick(mouse_location()),
        Err(_) => {
            // Re-entered from inside a callback; the next tick catches up.
            trace!("runtime busy, tick skipped");
            return;
        }
    };

    if flow == Flow::Terminate {
        request_termination();
    }
}

/// Ask NSApplication to terminate once the current callback has returned.
fn request_termination() {
    info!("terminating");
    unsafe {
        let _: () = msg_send![
            NSApp(),
            performSelector: sel!(terminate:),
            withObject: nil,
            afterDelay: 0.0f64
        ];
    }
}
