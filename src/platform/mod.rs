//! Platform-specific implementations.
//!
//! Only macOS is supported. Everything outside this module is
//! platform-independent.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
