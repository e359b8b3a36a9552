//! AppKit UI: the overlay panel and the status bar menu.

pub mod overlay;
pub mod status_bar;

pub use overlay::MacOverlayPanel;
pub use status_bar::StatusMenu;
