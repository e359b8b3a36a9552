//! Configuration constants and default values.
//!
//! This module contains all application constants including the ring
//! geometry, timing of the poll loop and reassertion ladder, AppKit raw
//! values and the strings shown in the menu bar.

// === Ring Geometry ===

/// Diameter of the ring (and of the overlay panel) in points.
pub const DEFAULT_DIAMETER: f64 = 32.0;

/// Stroke width of the ring in points.
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;

/// Default stroke color (R, G, B, A) - system blue at 70% opacity.
pub const DEFAULT_COLOR: (f64, f64, f64, f64) = (0.0, 0.478, 1.0, 0.7);

// === Validation Limits ===

/// Minimum ring diameter in points.
pub const MIN_DIAMETER: f64 = 8.0;

/// Maximum ring diameter in points.
pub const MAX_DIAMETER: f64 = 400.0;

/// Minimum stroke width in points.
pub const MIN_LINE_WIDTH: f64 = 0.5;

/// Maximum stroke width in points.
pub const MAX_LINE_WIDTH: f64 = 20.0;

// === Timing ===

/// Poll interval of the cursor tracker in milliseconds (~60 Hz).
pub const POLL_INTERVAL_MS: u64 = 16;

/// Delays (ms) after an active-space change at which the overlay is
/// ordered front again. Window ordering settles asynchronously during the
/// space transition animation.
pub const SPACE_SWITCH_REASSERT_MS: [u64; 4] = [50, 200, 400, 600];

// === AppKit Raw Values ===

/// `NSWindowStyleMaskBorderless`.
pub const STYLE_MASK_BORDERLESS: u64 = 0;

/// `NSWindowStyleMaskNonactivatingPanel`.
pub const STYLE_MASK_NONACTIVATING_PANEL: u64 = 1 << 7;

/// Style mask of the overlay panel.
pub const OVERLAY_STYLE_MASK: u64 = STYLE_MASK_BORDERLESS | STYLE_MASK_NONACTIVATING_PANEL;

/// `NSBackingStoreBuffered`.
pub const BACKING_STORE_BUFFERED: u64 = 2;

/// `NSScreenSaverWindowLevel` (`kCGScreenSaverWindowLevel`).
pub const SCREEN_SAVER_WINDOW_LEVEL: i64 = 1000;

/// `NSWindowCollectionBehaviorCanJoinAllSpaces`.
pub const COLLECTION_CAN_JOIN_ALL_SPACES: u64 = 1 << 0;

/// `NSWindowCollectionBehaviorStationary`.
pub const COLLECTION_STATIONARY: u64 = 1 << 4;

/// `NSWindowCollectionBehaviorFullScreenAuxiliary`.
pub const COLLECTION_FULL_SCREEN_AUXILIARY: u64 = 1 << 8;

/// Collection behavior of the overlay panel.
pub const OVERLAY_COLLECTION_BEHAVIOR: u64 =
    COLLECTION_CAN_JOIN_ALL_SPACES | COLLECTION_STATIONARY | COLLECTION_FULL_SCREEN_AUXILIARY;

/// `NSApplicationActivationPolicyAccessory`.
pub const ACTIVATION_POLICY_ACCESSORY: i64 = 1;

/// `NSSquareStatusItemLength`.
pub const SQUARE_STATUS_ITEM_LENGTH: f64 = -2.0;

// === Status Bar ===

/// SF Symbol used for the status bar button.
pub const STATUS_SYMBOL: &str = "circle.dashed";

/// Accessibility description of the status bar button.
pub const STATUS_ACCESSIBILITY_DESCRIPTION: &str = "Cursor Outline";

/// Title used when the SF Symbol is unavailable.
pub const STATUS_FALLBACK_TITLE: &str = "◌";

/// Title of the visibility toggle menu entry.
pub const MENU_TOGGLE_TITLE: &str = "Toggle Trail";

/// Key equivalent of the visibility toggle menu entry.
pub const MENU_TOGGLE_KEY: &str = "t";

/// Title of the quit menu entry.
pub const MENU_QUIT_TITLE: &str = "Quit CursorTrail";

/// Key equivalent of the quit menu entry.
pub const MENU_QUIT_KEY: &str = "q";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_style_mask_is_non_activating() {
        assert_ne!(OVERLAY_STYLE_MASK & STYLE_MASK_NONACTIVATING_PANEL, 0);
    }

    #[test]
    fn overlay_joins_all_spaces_and_full_screen() {
        assert_ne!(OVERLAY_COLLECTION_BEHAVIOR & COLLECTION_CAN_JOIN_ALL_SPACES, 0);
        assert_ne!(OVERLAY_COLLECTION_BEHAVIOR & COLLECTION_FULL_SCREEN_AUXILIARY, 0);
        assert_ne!(OVERLAY_COLLECTION_BEHAVIOR & COLLECTION_STATIONARY, 0);
    }

    #[test]
    fn reassert_ladder_is_strictly_increasing() {
        assert!(SPACE_SWITCH_REASSERT_MS.windows(2).all(|w| w[0] < w[1]));
    }
}
