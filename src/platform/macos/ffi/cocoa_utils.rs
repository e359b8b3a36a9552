//! Small Cocoa queries used by the poll loop.

use objc2_app_kit::NSEvent;

use crate::model::Point;

/// Global mouse position in Cocoa coordinates (origin bottom-left).
#[allow(unused_unsafe)]
pub fn mouse_location() -> Point {
    let p = unsafe { NSEvent::mouseLocation() };
    Point::new(p.x, p.y)
}
