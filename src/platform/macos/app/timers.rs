//! Run loop timers: the cursor poll timer and the one-shot reassertion
//! timers of the space-switch ladder.
//!
//! All timers are added in the common modes so they keep firing while the
//! status menu is open.

use std::time::Duration;

use block2::RcBlock;
use objc2::runtime::AnyObject;
use objc2_foundation::MainThreadMarker;
use tracing::{debug, warn};

use crate::controller::Scheduler;
use crate::error::{Result, TrailError};
use crate::events::{AppEvent, EventPublisher};
use crate::platform::macos::ffi::bridge::{
    as_id, get_class, id, msg_send, nil, nsstring, retained, sel, Bool, Retained,
};

/// [`Scheduler`] backed by `NSTimer`s on the main run loop.
pub struct RunLoopScheduler {
    publisher: EventPublisher,
    poll_timer: Option<Retained<AnyObject>>,
    /// One-shot reassertion timers that may not have fired yet.
    pending: Vec<Retained<AnyObject>>,
    _mtm: MainThreadMarker,
}

impl RunLoopScheduler {
    pub fn new(mtm: MainThreadMarker, publisher: EventPublisher) -> Self {
        Self {
            publisher,
            poll_timer: None,
            pending: Vec::new(),
            _mtm: mtm,
        }
    }

    /// Start the repeating poll timer. A previous poll timer is invalidated,
    /// so at most one exists.
    pub fn start_polling(&mut self, interval: Duration, tick: impl Fn() + 'static) -> Result<()> {
        if let Some(previous) = self.poll_timer.take() {
            invalidate_later(&previous);
        }
        let timer = unsafe { add_block_timer(interval, true, tick)? };
        debug!(interval_ms = interval.as_millis() as u64, "poll timer started");
        self.poll_timer = Some(timer);
        Ok(())
    }

    fn prune(&mut self) {
        self.pending.retain(|timer| unsafe { msg_send![as_id(timer), isValid] });
    }
}

impl Scheduler for RunLoopScheduler {
    fn schedule_reassert(&mut self, delay: Duration) {
        self.prune();
        let publisher = self.publisher.clone();
        let fire = move || publisher.publish(AppEvent::ReassertFront);
        match unsafe { add_block_timer(delay, false, fire) } {
            Ok(timer) => self.pending.push(timer),
            Err(err) => warn!(%err, delay_ms = delay.as_millis() as u64, "reassertion not scheduled"),
        }
    }

    fn cancel_all(&mut self) {
        let timers = self.poll_timer.take().into_iter().chain(self.pending.drain(..));
        let mut cancelled = 0usize;
        for timer in timers {
            invalidate_later(&timer);
            cancelled += 1;
        }
        debug!(cancelled, "timers cancelled");
    }
}

/// Create a block-based `NSTimer` and add it to the current run loop in the
/// common modes.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn add_block_timer(
    interval: Duration,
    repeats: bool,
    f: impl Fn() + 'static,
) -> Result<Retained<AnyObject>> {
    let block = RcBlock::new(move |_timer: id| f());

    let ns_timer = get_class(c"NSTimer")?;
    let timer: id = msg_send![
        ns_timer,
        timerWithTimeInterval: interval.as_secs_f64(),
        repeats: Bool::new(repeats),
        block: &*block
    ];
    let timer = retained(timer).ok_or(TrailError::Timer)?;

    let ns_run_loop = get_class(c"NSRunLoop")?;
    let run_loop: id = msg_send![ns_run_loop, currentRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: as_id(&timer), forMode: &*common_modes];

    Ok(timer)
}

/// Invalidate on the next run loop turn. Deferred so a timer can cancel
/// itself from inside its own block.
fn invalidate_later(timer: &Retained<AnyObject>) {
    unsafe {
        let _: () = msg_send![
            as_id(timer),
            performSelector: sel!(invalidate),
            withObject: nil,
            afterDelay: 0.0f64
        ];
    }
}
