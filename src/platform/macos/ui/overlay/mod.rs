//! Overlay panel and the ring view it hosts.

pub mod drawing;
pub mod panel;
pub mod ring_view;

pub use drawing::{draw_ring, RingParams};
pub use panel::MacOverlayPanel;
pub use ring_view::create_ring_view;
