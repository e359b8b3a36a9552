//! The overlay panel: borderless, transparent, click-through, non-activating,
//! above every window on every space.

use objc2::runtime::{AnyObject, Sel};
use objc2_foundation::MainThreadMarker;
use tracing::debug;

use crate::config::AppConfig;
use crate::controller::OverlaySurface;
use crate::error::{Result, TrailError};
use crate::model::constants::*;
use crate::model::Point;
use crate::platform::macos::ffi::bridge::{
    as_id, declare_class, get_class, id, msg_send, nil, owned, sel, Bool, ClassBuilder,
    NSPoint, NSRect, NSSize, Retained, NO, YES,
};

use super::ring_view::create_ring_view;

/// The single overlay window of the process.
pub struct MacOverlayPanel {
    panel: Retained<AnyObject>,
    // Held so the content view lives as long as the panel.
    _view: Retained<AnyObject>,
    _mtm: MainThreadMarker,
}

impl MacOverlayPanel {
    /// Build the panel and its ring view. The panel starts ordered out;
    /// [`OverlaySurface::show`] puts it on screen.
    pub fn create(mtm: MainThreadMarker, config: &AppConfig) -> Result<Self> {
        unsafe {
            let cls = declare_class(c"CursorTrailPanel", c"NSPanel", |builder| {
                register_methods(builder);
            })?;

            let frame = NSRect::new(
                NSPoint::new(0.0, 0.0),
                NSSize::new(config.diameter, config.diameter),
            );
            let panel: id = msg_send![cls, alloc];
            let panel: id = msg_send![
                panel,
                initWithContentRect: frame,
                styleMask: OVERLAY_STYLE_MASK,
                backing: BACKING_STORE_BUFFERED,
                defer: NO
            ];
            let panel = owned(panel).ok_or(TrailError::PanelCreation)?;
            let p = as_id(&panel);

            // NSPanel defaults that would hide or release the overlay.
            let _: () = msg_send![p, setWorksWhenModal: YES];
            let _: () = msg_send![p, setHidesOnDeactivate: NO];
            let _: () = msg_send![p, setReleasedWhenClosed: NO];
            let _: () = msg_send![p, setBecomesKeyOnlyIfNeeded: YES];

            let _: () = msg_send![p, setOpaque: NO];
            let ns_color = get_class(c"NSColor")?;
            let clear_color: id = msg_send![ns_color, clearColor];
            let _: () = msg_send![p, setBackgroundColor: clear_color];
            let _: () = msg_send![p, setHasShadow: NO];
            let _: () = msg_send![p, setIgnoresMouseEvents: YES];
            let _: () = msg_send![p, setLevel: SCREEN_SAVER_WINDOW_LEVEL];
            let _: () = msg_send![p, setCollectionBehavior: OVERLAY_COLLECTION_BEHAVIOR];

            let view = create_ring_view(config)?;
            let _: () = msg_send![p, setContentView: as_id(&view)];

            debug!(
                level = SCREEN_SAVER_WINDOW_LEVEL,
                behavior = OVERLAY_COLLECTION_BEHAVIOR,
                "overlay panel created"
            );

            Ok(Self {
                panel,
                _view: view,
                _mtm: mtm,
            })
        }
    }

    /// Take the panel off screen for good.
    pub fn close(&mut self) {
        unsafe {
            let _: () = msg_send![as_id(&self.panel), orderOut: nil];
        }
    }
}

impl OverlaySurface for MacOverlayPanel {
    fn show(&mut self) {
        unsafe {
            let p = as_id(&self.panel);
            let _: () = msg_send![p, setIsVisible: YES];
            let _: () = msg_send![p, orderFrontRegardless];
        }
    }

    fn hide(&mut self) {
        unsafe {
            let _: () = msg_send![as_id(&self.panel), orderOut: nil];
        }
    }

    fn reposition(&mut self, origin: Point) {
        unsafe {
            let _: () = msg_send![
                as_id(&self.panel),
                setFrameOrigin: NSPoint::new(origin.x, origin.y)
            ];
        }
    }

    fn order_front(&mut self) {
        unsafe {
            let _: () = msg_send![as_id(&self.panel), orderFrontRegardless];
        }
    }

    fn is_visible(&self) -> bool {
        unsafe { msg_send![as_id(&self.panel), isVisible] }
    }
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    builder.add_method(
        sel!(canBecomeKeyWindow),
        refuse as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(canBecomeMainWindow),
        refuse as unsafe extern "C-unwind" fn(_, _) -> _,
    );
}

// The overlay never takes focus.
unsafe extern "C-unwind" fn refuse(_this: &mut AnyObject, _cmd: Sel) -> Bool {
    NO
}
