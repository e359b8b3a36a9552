//! Thin layer over the objc2 runtime.
//!
//! Most AppKit calls in this crate go through `msg_send!` on raw object
//! pointers; this module gathers the aliases and helpers they share.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CStr;

pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use objc2::encode::Encode;
use objc2_app_kit::NSApplication;

use crate::error::{Result, TrailError};

/// Objective-C object pointer.
///
/// Use `Retained<AnyObject>` for objects this crate keeps alive.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Look up a class by name.
pub fn get_class(name: &CStr) -> Result<&'static AnyClass> {
    AnyClass::get(name)
        .ok_or_else(|| TrailError::MissingClass(name.to_string_lossy().into_owned()))
}

/// Return the already registered class `name`, or declare it as a subclass
/// of `superclass` with `declare` adding ivars and methods.
///
/// # Safety
/// `declare` must only add ivars/methods whose signatures match the
/// selectors they implement.
pub unsafe fn declare_class(
    name: &'static CStr,
    superclass: &CStr,
    declare: impl FnOnce(&mut ClassBuilder),
) -> Result<&'static AnyClass> {
    if let Some(cls) = AnyClass::get(name) {
        return Ok(cls);
    }
    let superclass = get_class(superclass)?;
    let label = name.to_str().unwrap_or("<non-utf8>");
    let mut builder =
        ClassBuilder::new(name, superclass).ok_or(TrailError::ClassRegistration(label))?;
    declare(&mut builder);
    Ok(builder.register())
}

/// Take ownership of a +1 pointer returned by `alloc`/`init`/`new`.
///
/// # Safety
/// `obj` must be nil or a pointer the caller owns one reference to.
pub unsafe fn owned(obj: id) -> Option<Retained<AnyObject>> {
    Retained::from_raw(obj)
}

/// Retain a +0 pointer (autoreleased or borrowed) so it outlives the pool.
///
/// # Safety
/// `obj` must be nil or a valid object pointer.
pub unsafe fn retained(obj: id) -> Option<Retained<AnyObject>> {
    Retained::retain(obj)
}

/// Raw pointer of a retained object, for `msg_send!` arguments.
#[inline]
pub fn as_id(obj: &Retained<AnyObject>) -> id {
    Retained::as_ptr(obj) as id
}

/// Instance variable access on objects of classes declared by this crate.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T.
    unsafe fn load_ivar<T: Encode>(&self, name: &CStr) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &CStr, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &CStr) -> &T {
        let ivar = self
            .class()
            .instance_variable(name)
            .unwrap_or_else(|| panic!("ivar {name:?} not found"));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &CStr, value: T) {
        let ivar = self
            .class()
            .instance_variable(name)
            .unwrap_or_else(|| panic!("ivar {name:?} not found"));
        *ivar.load_mut::<T>(self) = value;
    }
}
