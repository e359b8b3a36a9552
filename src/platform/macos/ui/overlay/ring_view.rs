//! NSView subclass that draws the cursor ring.

use objc2::runtime::{AnyObject, Sel};

use crate::config::AppConfig;
use crate::error::{Result, TrailError};
use crate::platform::macos::ffi::bridge::{
    declare_class, id, msg_send, nil, owned, sel, Bool, ClassBuilder, NSPoint, NSRect, NSSize,
    ObjectExt, Retained, NO,
};

use super::drawing::{draw_ring, RingParams};

/// Register the ring view class (once) and create an instance sized to the
/// ring, carrying the configured stroke.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_ring_view(config: &AppConfig) -> Result<Retained<AnyObject>> {
    let cls = declare_class(c"CursorTrailRingView", c"NSView", |builder| {
        register_ivars(builder);
        register_methods(builder);
    })?;

    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(config.diameter, config.diameter),
    );
    let view: id = msg_send![view, initWithFrame: frame];
    if view == nil {
        return Err(TrailError::PanelCreation);
    }

    (*view).store_ivar::<f64>(c"_diameter", config.diameter);
    (*view).store_ivar::<f64>(c"_lineWidth", config.line_width);
    (*view).store_ivar::<f64>(c"_strokeR", config.stroke.r);
    (*view).store_ivar::<f64>(c"_strokeG", config.stroke.g);
    (*view).store_ivar::<f64>(c"_strokeB", config.stroke.b);
    (*view).store_ivar::<f64>(c"_strokeA", config.stroke.a);

    owned(view).ok_or(TrailError::PanelCreation)
}

unsafe fn register_ivars(builder: &mut ClassBuilder) {
    builder.add_ivar::<f64>(c"_diameter");
    builder.add_ivar::<f64>(c"_lineWidth");
    builder.add_ivar::<f64>(c"_strokeR");
    builder.add_ivar::<f64>(c"_strokeG");
    builder.add_ivar::<f64>(c"_strokeB");
    builder.add_ivar::<f64>(c"_strokeA");
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(isOpaque),
        is_opaque as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(hitTest:),
        hit_test as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
}

unsafe extern "C-unwind" fn draw_rect(this: &mut AnyObject, _cmd: Sel, _dirty: NSRect) {
    let params = RingParams {
        diameter: *this.load_ivar::<f64>(c"_diameter"),
        line_width: *this.load_ivar::<f64>(c"_lineWidth"),
        stroke: (
            *this.load_ivar::<f64>(c"_strokeR"),
            *this.load_ivar::<f64>(c"_strokeG"),
            *this.load_ivar::<f64>(c"_strokeB"),
            *this.load_ivar::<f64>(c"_strokeA"),
        )
            .into(),
    };
    draw_ring(&params);
}

unsafe extern "C-unwind" fn is_opaque(_this: &mut AnyObject, _cmd: Sel) -> Bool {
    NO
}

// Never the target of a click.
unsafe extern "C-unwind" fn hit_test(_this: &mut AnyObject, _cmd: Sel, _point: NSPoint) -> id {
    nil
}
