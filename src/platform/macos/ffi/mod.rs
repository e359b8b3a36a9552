//! FFI helpers for AppKit / Foundation.

pub mod bridge;
pub mod cocoa_utils;

pub use cocoa_utils::mouse_location;
