//! System notification observers.
//!
//! Observers only publish events; the reaction is whatever the
//! subscription registry wires to that event.

use objc2::runtime::AnyObject;
use tracing::debug;

use block2::RcBlock;

use crate::error::Result;
use crate::events::{AppEvent, EventPublisher};
use crate::platform::macos::ffi::bridge::{
    as_id, get_class, id, msg_send, nil, nsstring, retained, Retained,
};

/// Posted by NSApplication when displays are added, removed or rearranged.
pub const SCREEN_PARAMETERS_CHANGED: &str = "NSApplicationDidChangeScreenParametersNotification";

/// Posted on the workspace center when the active space changes.
pub const ACTIVE_SPACE_CHANGED: &str = "NSWorkspaceActiveSpaceDidChangeNotification";

/// Posted by NSApplication right before the process exits.
pub const WILL_TERMINATE: &str = "NSApplicationWillTerminateNotification";

/// Registered block observers, removed together at teardown.
#[derive(Default)]
pub struct Observers {
    /// (center, token) pairs.
    entries: Vec<(Retained<AnyObject>, Retained<AnyObject>)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the screen-parameter and active-space notifications.
    pub fn install_system(publisher: &EventPublisher) -> Result<Self> {
        let mut observers = Self::new();
        unsafe {
            let p = publisher.clone();
            observers.observe(default_center()?, SCREEN_PARAMETERS_CHANGED, move || {
                p.publish(AppEvent::ScreenParametersChanged)
            })?;

            let p = publisher.clone();
            observers.observe(workspace_center()?, ACTIVE_SPACE_CHANGED, move || {
                p.publish(AppEvent::ActiveSpaceChanged)
            })?;
        }
        Ok(observers)
    }

    /// Call `f` on the main queue every time `name` is posted on `center`.
    ///
    /// # Safety
    /// `center` must be a valid NSNotificationCenter. Main thread only.
    pub unsafe fn observe(&mut self, center: id, name: &str, f: impl Fn() + 'static) -> Result<()> {
        let ns_queue = get_class(c"NSOperationQueue")?;
        let main_queue: id = msg_send![ns_queue, mainQueue];
        let name_ns = nsstring(name);
        let block = RcBlock::new(move |_note: id| f());

        let token: id = msg_send![
            center,
            addObserverForName: &*name_ns,
            object: nil,
            queue: main_queue,
            usingBlock: &*block
        ];
        if let (Some(center), Some(token)) = (retained(center), retained(token)) {
            self.entries.push((center, token));
        }
        debug!(notification = name, "observer installed");
        Ok(())
    }

    /// Take over the observers registered in `other`.
    pub fn adopt(&mut self, mut other: Observers) {
        self.entries.append(&mut other.entries);
    }

    /// Unregister every observer. Idempotent.
    pub fn remove_all(&mut self) {
        for (center, token) in self.entries.drain(..) {
            unsafe {
                let _: () = msg_send![as_id(&center), removeObserver: as_id(&token)];
            }
        }
    }
}

/// `NSNotificationCenter.defaultCenter`.
///
/// # Safety
/// Main thread only.
pub unsafe fn default_center() -> Result<id> {
    let cls = get_class(c"NSNotificationCenter")?;
    let center: id = msg_send![cls, defaultCenter];
    Ok(center)
}

/// `NSWorkspace.sharedWorkspace.notificationCenter`.
///
/// # Safety
/// Main thread only.
pub unsafe fn workspace_center() -> Result<id> {
    let cls = get_class(c"NSWorkspace")?;
    let ws: id = msg_send![cls, sharedWorkspace];
    let center: id = msg_send![ws, notificationCenter];
    Ok(center)
}
