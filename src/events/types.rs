//! Application events for inter-module communication.
//!
//! These events represent everything that happens to the app from the
//! outside: menu actions, system notifications and scheduled timers.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events, published by producers (status menu,
/// notification observers, reassertion timers) and handled on the next
/// poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppEvent {
    // === Menu Events ===
    /// "Toggle Trail" menu entry.
    ToggleTrail,

    /// "Quit CursorTrail" menu entry.
    QuitApp,

    // === System Events ===
    /// Display configuration changed (screens added, removed, rearranged).
    ScreenParametersChanged,

    /// The active space (virtual desktop) changed.
    ActiveSpaceChanged,

    /// A delayed front-most reassertion is due.
    ReassertFront,

    /// The application is about to terminate. Dispatched synchronously
    /// from the termination observer, never queued on the bus.
    WillTerminate,
}

impl AppEvent {
    /// Every event, in declaration order.
    pub const ALL: [AppEvent; 6] = [
        AppEvent::ToggleTrail,
        AppEvent::QuitApp,
        AppEvent::ScreenParametersChanged,
        AppEvent::ActiveSpaceChanged,
        AppEvent::ReassertFront,
        AppEvent::WillTerminate,
    ];

    /// Returns a human-readable description of the event for logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleTrail => "Toggle trail visibility",
            AppEvent::QuitApp => "Quit application",
            AppEvent::ScreenParametersChanged => "Screen parameters changed",
            AppEvent::ActiveSpaceChanged => "Active space changed",
            AppEvent::ReassertFront => "Reassert front-most ordering",
            AppEvent::WillTerminate => "Application will terminate",
        }
    }
}
