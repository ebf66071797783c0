//! Duel Pong - a two-paddle arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, scoring)
//! - `settings`: Session configuration loaded from JSON
//! - `error`: Configuration errors raised at session setup
//!
//! Rendering and keyboard plumbing live outside this crate. A host polls
//! [`sim::SimulationSession::snapshot`] after each step and feeds
//! [`sim::InputState`] through an [`sim::InputSource`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{GameConfig, GameMode};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the stepper will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 1920.0;
    pub const FIELD_HEIGHT: f32 = 1080.0;
    pub const WALL_THICKNESS: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    /// Gap between the goal line and the paddle's outer face
    pub const PADDLE_GOAL_GAP: f32 = 4.0;
    /// Paddle speed in pixels/second (5 pixels per step at SIM_DT)
    pub const PADDLE_SPEED: f32 = 300.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    /// Serve speed budget; each axis is drawn from [-SERVE_SPEED/2, SERVE_SPEED/2)
    pub const SERVE_SPEED: f32 = 1200.0;
    /// Serves slower than this are redrawn (pixels/second)
    pub const SERVE_MIN_SPEED: f32 = 1.0;
    /// Smallest accepted serve budget (a draw can then still clear SERVE_MIN_SPEED)
    pub const MIN_SERVE_BUDGET: f32 = 2.0 * SERVE_MIN_SPEED;

    /// Extra distance the ball must travel past the left goal line to score
    pub const GOAL_FORGIVENESS: f32 = 5.0;
}
