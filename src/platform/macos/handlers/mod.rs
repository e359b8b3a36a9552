//! Event dispatch on the poll tick.

pub mod dispatcher;

pub use dispatcher::pump;
