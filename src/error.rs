//! Setup errors
//!
//! Everything inside a running session is infallible. Inconsistent geometry
//! and unreadable config files are rejected before the first step.

use std::path::PathBuf;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A dimension was zero, negative or not finite.
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// Serve budget too small to ever clear the minimum serve speed.
    #[error("serve speed {speed} must be at least {min}")]
    ServeTooSlow { speed: f32, min: f32 },

    /// Goal space must leave room for play in the middle.
    #[error("goal space width {goal} must be less than half the field width {width}")]
    GoalSpaceTooWide { goal: f32, width: f32 },

    /// Paddle cannot fit between the walls.
    #[error("paddle height {paddle} does not fit in field height {field} with walls of {wall}")]
    PaddleTooTall { paddle: f32, field: f32, wall: f32 },

    /// Ball cannot fit between the walls.
    #[error("ball diameter {diameter} does not fit in field height {field} with walls of {wall}")]
    BallTooLarge { diameter: f32, field: f32, wall: f32 },

    /// Left and right paddles would overlap or cross.
    #[error("field width {width} leaves no room between the paddles")]
    PaddlesOverlap { width: f32 },

    /// Win score of zero would end the game before it starts.
    #[error("win score must be at least 1")]
    ZeroWinScore,

    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`crate::GameConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
