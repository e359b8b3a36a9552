//! macOS implementation using AppKit via objc2.
//!
//! - `ffi`: objc2 helpers and Cocoa queries
//! - `ui`: the overlay panel and the status bar menu
//! - `input`: system notification observers
//! - `app`: the application context and run loop timers
//! - `handlers`: the poll tick

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod ui;

pub use app::{install_termination_observer, MacController, RunLoopScheduler, Runtime};
pub use ffi::bridge;
pub use handlers::pump;
pub use input::Observers;
pub use ui::{MacOverlayPanel, StatusMenu};
