//! Runtime configuration.
//!
//! Nothing is persisted: every value comes from [`crate::model::constants`]
//! and is validated once at startup.

use std::time::Duration;

use tracing::warn;

use crate::error::{Result, TrailError};
use crate::model::constants::*;

/// What a scheduled front-most reassertion does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReassertPolicy {
    /// Skip the reassertion if the user hid the overlay in the meantime.
    #[default]
    RespectUserHide,
    /// Always order the overlay front, even if the user hid it.
    Unconditional,
}

/// RGBA stroke color, components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl From<(f64, f64, f64, f64)> for StrokeColor {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Self { r, g, b, a }
    }
}

/// Everything the controller and the AppKit layer are tuned with.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Ring diameter; also the size of the overlay panel.
    pub diameter: f64,
    /// Stroke width of the ring.
    pub line_width: f64,
    pub stroke: StrokeColor,
    /// Interval of the cursor poll timer.
    pub poll_interval: Duration,
    /// Delays after a space switch at which the overlay is ordered front.
    pub space_switch_ladder: Vec<Duration>,
    pub reassert_policy: ReassertPolicy,
    pub status_symbol: &'static str,
    pub toggle_title: &'static str,
    pub quit_title: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER,
            line_width: DEFAULT_LINE_WIDTH,
            stroke: DEFAULT_COLOR.into(),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            space_switch_ladder: SPACE_SWITCH_REASSERT_MS
                .iter()
                .copied()
                .map(Duration::from_millis)
                .collect(),
            reassert_policy: ReassertPolicy::default(),
            status_symbol: STATUS_SYMBOL,
            toggle_title: MENU_TOGGLE_TITLE,
            quit_title: MENU_QUIT_TITLE,
        }
    }
}

impl AppConfig {
    /// Clamps visual values into range and rejects unusable timing.
    pub fn validate(&mut self) -> Result<()> {
        if self.diameter.is_nan() || self.diameter <= 0.0 {
            return Err(TrailError::InvalidConfig(format!(
                "diameter must be positive, got {}",
                self.diameter
            )));
        }
        if self.poll_interval.is_zero() {
            return Err(TrailError::InvalidConfig(
                "poll interval must be positive".into(),
            ));
        }
        if self.space_switch_ladder.is_empty() {
            return Err(TrailError::InvalidConfig(
                "space switch ladder needs at least one delay".into(),
            ));
        }

        let diameter = self.diameter.clamp(MIN_DIAMETER, MAX_DIAMETER);
        if diameter != self.diameter {
            warn!(requested = self.diameter, used = diameter, "ring diameter clamped");
            self.diameter = diameter;
        }

        // The stroke has to fit inside the ring.
        let max_line = (self.diameter / 2.0).min(MAX_LINE_WIDTH);
        self.line_width = self.line_width.clamp(MIN_LINE_WIDTH, max_line);

        self.stroke.r = self.stroke.r.clamp(0.0, 1.0);
        self.stroke.g = self.stroke.g.clamp(0.0, 1.0);
        self.stroke.b = self.stroke.b.clamp(0.0, 1.0);
        self.stroke.a = self.stroke.a.clamp(0.0, 1.0);

        self.space_switch_ladder.sort();
        Ok(())
    }
}
