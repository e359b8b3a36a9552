//! Application context and run loop timers.

pub mod runtime;
pub mod timers;

pub use runtime::{install_termination_observer, MacController, Runtime};
pub use timers::RunLoopScheduler;
