#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Cursor ring overlay for the macOS menu bar.
//!
//! Everything outside [`platform`] is pure Rust with no FFI so it can be
//! tested as normal unit and integration tests on any host.

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod platform;

pub use config::{AppConfig, ReassertPolicy};
pub use controller::{OverlaySurface, Scheduler, TrailController, TrailSession};
pub use error::{Result, TrailError};
pub use events::{AppEvent, EventBus, EventPublisher, Flow, Subscriptions};
