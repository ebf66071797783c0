//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed collision order (walls, goals, left paddle, right paddle)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod input;
pub mod playfield;
pub mod state;
pub mod tick;

pub use clock::FixedStepper;
pub use collision::{CollisionResult, resolve};
pub use input::{Controls, InputSource, InputState, SharedControls};
pub use playfield::Playfield;
pub use state::{Ball, GamePhase, Paddle, ScoreBoard, Side};
pub use tick::{SimulationSession, Snapshot, StepResult, is_ai};

pub use crate::settings::CollisionTiming;
