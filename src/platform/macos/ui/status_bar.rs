//! Status bar (menu bar) item with its two-entry menu:
//! - Toggle Trail (t)
//! - Quit CursorTrail (q)
//!
//! Menu actions publish events; they never touch the overlay directly.

use std::ffi::c_void;

use objc2::runtime::{AnyObject, Sel};
use objc2_foundation::MainThreadMarker;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::{Result, TrailError};
use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::*;
use crate::platform::macos::ffi::bridge::{
    as_id, declare_class, get_class, id, msg_send, nil, nsstring, owned, retained, sel,
    ClassBuilder, ObjectExt, Retained, YES,
};

const PUBLISHER_IVAR: &std::ffi::CStr = c"_publisher";

/// The installed status item. Removing it (or dropping it) takes the icon
/// out of the menu bar.
pub struct StatusMenu {
    item: Option<Retained<AnyObject>>,
    target: Retained<AnyObject>,
    publisher: *mut EventPublisher,
    _mtm: MainThreadMarker,
}

impl StatusMenu {
    /// Install the status bar item with its menu.
    pub fn install(
        mtm: MainThreadMarker,
        config: &AppConfig,
        publisher: EventPublisher,
    ) -> Result<Self> {
        unsafe {
            let target = create_menu_target()?;
            let publisher = Box::into_raw(Box::new(publisher));
            (*as_id(&target)).store_ivar::<*mut c_void>(PUBLISHER_IVAR, publisher.cast());

            // From here on `menu` owns the publisher box, so errors free it.
            let mut menu = Self {
                item: None,
                target,
                publisher,
                _mtm: mtm,
            };

            let ns_status_bar = get_class(c"NSStatusBar")?;
            let status_bar: id = msg_send![ns_status_bar, systemStatusBar];
            let item: id = msg_send![status_bar, statusItemWithLength: SQUARE_STATUS_ITEM_LENGTH];
            let item = retained(item).ok_or(TrailError::StatusItem)?;
            let item_id = as_id(&item);
            menu.item = Some(item);

            set_button_image(item_id, config)?;

            let ns_menu = create_status_menu(as_id(&menu.target), config)?;
            let _: () = msg_send![item_id, setMenu: as_id(&ns_menu)];

            debug!("status item installed");
            Ok(menu)
        }
    }

    /// Remove the item from the menu bar. Idempotent.
    pub fn remove(&mut self) {
        let Some(item) = self.item.take() else {
            return;
        };
        unsafe {
            if let Ok(cls) = get_class(c"NSStatusBar") {
                let status_bar: id = msg_send![cls, systemStatusBar];
                let _: () = msg_send![status_bar, removeStatusItem: as_id(&item)];
            }
        }
        debug!("status item removed");
    }
}

impl Drop for StatusMenu {
    fn drop(&mut self) {
        self.remove();
        unsafe {
            (*as_id(&self.target)).store_ivar::<*mut c_void>(PUBLISHER_IVAR, std::ptr::null_mut());
            drop(Box::from_raw(self.publisher));
        }
    }
}

/// Set the SF Symbol on the status button, falling back to a text title on
/// systems without SF Symbols.
unsafe fn set_button_image(item: id, config: &AppConfig) -> Result<()> {
    let button: id = msg_send![item, button];
    if button == nil {
        warn!("status item has no button");
        return Ok(());
    }

    let symbol = nsstring(config.status_symbol);
    let description = nsstring(STATUS_ACCESSIBILITY_DESCRIPTION);
    let ns_image = get_class(c"NSImage")?;
    let image: id = msg_send![
        ns_image,
        imageWithSystemSymbolName: &*symbol,
        accessibilityDescription: &*description
    ];

    if image != nil {
        // Template images adapt to light/dark menu bars
        let _: () = msg_send![image, setTemplate: YES];
        let _: () = msg_send![button, setImage: image];
    } else {
        warn!(symbol = config.status_symbol, "SF Symbol unavailable, using text title");
        let title = nsstring(STATUS_FALLBACK_TITLE);
        let _: () = msg_send![button, setTitle: &*title];
    }
    Ok(())
}

/// Create the dropdown menu for the status bar item.
unsafe fn create_status_menu(target: id, config: &AppConfig) -> Result<Retained<AnyObject>> {
    let ns_menu = get_class(c"NSMenu")?;
    let ns_menu_item = get_class(c"NSMenuItem")?;
    let menu: id = msg_send![ns_menu, alloc];
    let menu: id = msg_send![menu, init];
    let menu = owned(menu).ok_or(TrailError::StatusItem)?;

    add_item(
        as_id(&menu),
        target,
        config.toggle_title,
        sel!(toggleTrail:),
        MENU_TOGGLE_KEY,
    )?;

    let separator: id = msg_send![ns_menu_item, separatorItem];
    let _: () = msg_send![as_id(&menu), addItem: separator];

    add_item(
        as_id(&menu),
        target,
        config.quit_title,
        sel!(quitApp:),
        MENU_QUIT_KEY,
    )?;

    Ok(menu)
}

unsafe fn add_item(menu: id, target: id, title: &str, action: Sel, key: &str) -> Result<()> {
    let title = nsstring(title);
    let key = nsstring(key);
    let ns_menu_item = get_class(c"NSMenuItem")?;
    let item: id = msg_send![ns_menu_item, alloc];
    let item: id = msg_send![
        item,
        initWithTitle: &*title,
        action: action,
        keyEquivalent: &*key
    ];
    // The menu keeps the item alive; our reference is released on drop.
    let item = owned(item).ok_or(TrailError::StatusItem)?;
    let _: () = msg_send![as_id(&item), setTarget: target];
    let _: () = msg_send![menu, addItem: as_id(&item)];
    Ok(())
}

/// NSObject subclass receiving the menu actions.
unsafe fn create_menu_target() -> Result<Retained<AnyObject>> {
    let cls = declare_class(c"CursorTrailMenuTarget", c"NSObject", |builder| {
        register_target(builder);
    })?;
    let target: id = msg_send![cls, new];
    if target == nil {
        return Err(TrailError::StatusItem);
    }
    (*target).store_ivar::<*mut c_void>(PUBLISHER_IVAR, std::ptr::null_mut());
    owned(target).ok_or(TrailError::StatusItem)
}

unsafe fn register_target(builder: &mut ClassBuilder) {
    builder.add_ivar::<*mut c_void>(PUBLISHER_IVAR);
    builder.add_method(
        sel!(toggleTrail:),
        toggle_trail as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(quitApp:),
        quit_app as unsafe extern "C-unwind" fn(_, _, _),
    );
}

unsafe fn publish_from(this: &AnyObject, event: AppEvent) {
    let publisher = *this.load_ivar::<*mut c_void>(PUBLISHER_IVAR) as *const EventPublisher;
    if let Some(publisher) = publisher.as_ref() {
        publisher.publish(event);
    }
}

unsafe extern "C-unwind" fn toggle_trail(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_from(this, AppEvent::ToggleTrail);
}

unsafe extern "C-unwind" fn quit_app(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_from(this, AppEvent::QuitApp);
}
