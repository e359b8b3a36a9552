//! Input from the system: notification observers.

pub mod observers;

pub use observers::{default_center, workspace_center, Observers};
