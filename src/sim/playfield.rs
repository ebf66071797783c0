//! Playfield geometry
//!
//! The field is an axis-aligned rectangle in screen space (y grows downward):
//! - walls of `wall_thickness` run along the top and bottom edges
//! - a goal space of `goal_space_width` sits behind each paddle
//! - paddles stand `PADDLE_GOAL_GAP` inside their goal line

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::positive;

/// Immutable per-session field geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Width of the scoring zone behind each paddle, `ceil(width / 10)`
    pub goal_space_width: f32,
    pub wall_thickness: f32,
}

impl Playfield {
    /// Build a field of the given size, rejecting geometry the standard
    /// paddles and ball cannot play on
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        positive("field_width", width)?;
        positive("field_height", height)?;

        let field = Self {
            width,
            height,
            goal_space_width: (width / 10.0).ceil(),
            wall_thickness: WALL_THICKNESS,
        };

        if field.goal_space_width >= width / 2.0 {
            return Err(ConfigError::GoalSpaceTooWide {
                goal: field.goal_space_width,
                width,
            });
        }
        if PADDLE_HEIGHT > field.playable_height() {
            return Err(ConfigError::PaddleTooTall {
                paddle: PADDLE_HEIGHT,
                field: height,
                wall: field.wall_thickness,
            });
        }
        if 2.0 * BALL_RADIUS > field.playable_height() {
            return Err(ConfigError::BallTooLarge {
                diameter: 2.0 * BALL_RADIUS,
                field: height,
                wall: field.wall_thickness,
            });
        }
        if field.paddle_x(Side::Left) + PADDLE_WIDTH >= field.paddle_x(Side::Right) {
            return Err(ConfigError::PaddlesOverlap { width });
        }

        Ok(field)
    }

    /// The standard 1920x1080 field
    pub fn standard() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            goal_space_width: (FIELD_WIDTH / 10.0).ceil(),
            wall_thickness: WALL_THICKNESS,
        }
    }

    /// Vertical space between the two walls
    #[inline]
    pub fn playable_height(&self) -> f32 {
        self.height - 2.0 * self.wall_thickness
    }

    /// Where a freshly served ball is placed
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).round(), (self.height / 2.0).round())
    }

    /// X of the goal line on the given side
    #[inline]
    pub fn goal_line(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.goal_space_width,
            Side::Right => self.width - self.goal_space_width,
        }
    }

    /// Fixed x of a paddle's left face
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.goal_space_width + PADDLE_GOAL_GAP,
            Side::Right => self.width - self.goal_space_width - PADDLE_WIDTH - PADDLE_GOAL_GAP,
        }
    }

    /// Paddle y when vertically centered
    #[inline]
    pub fn paddle_center_y(&self) -> f32 {
        (self.height / 2.0).round() - (PADDLE_HEIGHT / 2.0).round()
    }

    /// Lowest and highest legal paddle y
    #[inline]
    pub fn paddle_y_bounds(&self) -> (f32, f32) {
        (
            self.wall_thickness,
            self.height - PADDLE_HEIGHT - self.wall_thickness,
        )
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::standard()
    }
}
