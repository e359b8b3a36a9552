//! Drawing of the ring inside the overlay view.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSPoint, NSRect, NSSize};

use crate::config::StrokeColor;
use crate::model::stroke_square;

/// Drawing parameters read from the view's ivars.
#[derive(Clone, Copy)]
pub struct RingParams {
    /// Ring diameter (the view is a square of this side).
    pub diameter: f64,
    /// Stroke width in points.
    pub line_width: f64,
    pub stroke: StrokeColor,
}

/// Stroke the ring outline. The ring is never filled.
///
/// # Safety
///
/// Must be called from the main thread within a valid drawing context.
pub unsafe fn draw_ring(params: &RingParams) {
    let (Ok(ns_color), Ok(ns_bezier)) = (get_class(c"NSColor"), get_class(c"NSBezierPath")) else {
        return;
    };

    let (origin, side) = stroke_square(params.diameter, params.line_width);
    let rect = NSRect::new(NSPoint::new(origin.x, origin.y), NSSize::new(side, side));

    let circle: id = msg_send![ns_bezier, bezierPathWithOvalInRect: rect];

    let stroke: id = msg_send![
        ns_color,
        colorWithCalibratedRed: params.stroke.r,
        green: params.stroke.g,
        blue: params.stroke.b,
        alpha: params.stroke.a
    ];
    let _: () = msg_send![stroke, set];
    let _: () = msg_send![circle, setLineWidth: params.line_width];
    let _: () = msg_send![circle, stroke];
}
