//! Collision detection and response for the rectangular field
//!
//! All checks are axis-aligned and run against the positions the ball and
//! paddles hold when [`resolve`] is called. Responses only flip velocity signs;
//! nothing is pushed out of overlap.

use super::playfield::Playfield;
use super::state::{Ball, Paddle, Side};
use crate::consts::GOAL_FORGIVENESS;

/// What a collision pass found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Side that scored, if the ball crossed a goal
    pub goal: Option<Side>,
    /// Paddle that turned the ball around
    pub paddle_hit: Option<Side>,
}

/// Run one collision pass, flipping the ball's velocity in place.
///
/// Checks run in a fixed order: walls, left goal, right goal, left paddle,
/// right paddle. A goal ends the pass, since the caller re-serves the ball.
pub fn resolve(ball: &mut Ball, field: &Playfield, left: &Paddle, right: &Paddle) -> CollisionResult {
    let mut result = CollisionResult {
        wall_bounce: bounce_off_walls(ball, field),
        ..Default::default()
    };

    if let Some(scorer) = goal_scored(ball, field) {
        result.goal = Some(scorer);
        return result;
    }

    for paddle in [left, right] {
        if bounce_off_paddle(ball, paddle) {
            result.paddle_hit = Some(paddle.side);
        }
    }

    result
}

/// Invert vy when the ball reaches a wall while moving into it
pub fn bounce_off_walls(ball: &mut Ball, field: &Playfield) -> bool {
    let top = ball.pos.y <= field.wall_thickness;
    let bottom = ball.pos.y + ball.diameter() >= field.height - field.wall_thickness;

    // A ball already leaving the wall keeps its vy; flipping it again would
    // trap a ball that overlaps the wall in a per-step flip-flop
    if (top && ball.vel.y < 0.0) || (bottom && ball.vel.y > 0.0) {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Which side scored, if any.
///
/// The left goal needs the whole ball plus `GOAL_FORGIVENESS` past the line;
/// the right goal counts once the ball's left edge crosses its line.
pub fn goal_scored(ball: &Ball, field: &Playfield) -> Option<Side> {
    if ball.pos.x + ball.diameter() + GOAL_FORGIVENESS < field.goal_line(Side::Left) {
        Some(Side::Right)
    } else if ball.pos.x > field.goal_line(Side::Right) {
        Some(Side::Left)
    } else {
        None
    }
}

/// Ball's leading edge has reached the paddle face and its vertical center
/// is within the paddle's height
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let reached = match paddle.side {
        Side::Left => ball.pos.x <= paddle.pos.x + paddle.width,
        Side::Right => ball.pos.x + ball.diameter() >= paddle.pos.x,
    };
    let center_y = ball.center_y();
    reached && center_y >= paddle.pos.y && center_y <= paddle.pos.y + paddle.height
}

/// Send the ball back toward the opponent. A ball already heading away is
/// left alone, so a ball overlapping the paddle for several steps is not
/// flipped back and forth.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !touches_paddle(ball, paddle) {
        return false;
    }
    if ball.vel.x * paddle.side.toward() > 0.0 {
        ball.vel.x = -ball.vel.x;
        return true;
    }
    false
}
