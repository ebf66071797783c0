//! Game state and core simulation types
//!
//! Positions are screen-space pixels with y growing downward. Both the ball
//! and the paddles are positioned by the top-left corner of their bounding box.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::input::InputState;
use super::playfield::Playfield;
use crate::consts::*;

/// A side of the field, and the player defending it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of a ball's x velocity when it travels toward this side
    #[inline]
    pub fn toward(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the host's start signal
    StartScreen,
    /// Active gameplay
    InGame,
    /// Simulation frozen, rendering continues
    Paused,
    /// A side reached the win score; terminal until restart
    GameOver { winner: Side },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// A ball at rest in the field center. Call [`Ball::serve`] before play.
    pub fn new(field: &Playfield) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    /// Vertical center of the ball
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Recenter and launch in a random direction.
    ///
    /// Each axis is drawn independently from `[-speed/2, speed/2)`. Draws
    /// slower than `SERVE_MIN_SPEED` are redrawn so the ball never sits still.
    pub fn serve<R: Rng>(&mut self, field: &Playfield, rng: &mut R, speed: f32) {
        self.pos = field.center();
        loop {
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * speed,
                (rng.random::<f32>() - 0.5) * speed,
            );
            if vel.length() >= SERVE_MIN_SPEED {
                self.vel = vel;
                break;
            }
        }
    }

    /// Explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner; x never changes after placement
    pub pos: Vec2,
    /// Vertical velocity (pixels/second)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Place a paddle at its side's post, vertically centered
    pub fn new(side: Side, field: &Playfield) -> Self {
        Self {
            side,
            pos: Vec2::new(field.paddle_x(side), field.paddle_center_y()),
            vel_y: 0.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Move back to vertical center and stop
    pub fn reset(&mut self, field: &Playfield) {
        self.pos.y = field.paddle_center_y();
        self.vel_y = 0.0;
    }

    /// Vertical center, rounded the way the tracking AI measures it
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + (self.height / 2.0).round()
    }

    /// Set velocity from held keys; up wins when both are held
    pub fn steer(&mut self, input: InputState, speed: f32) {
        self.vel_y = if input.move_up {
            -speed
        } else if input.move_down {
            speed
        } else {
            0.0
        };
    }

    /// Track the ball while it approaches, idle while it moves away
    pub fn track(&mut self, ball: &Ball, speed: f32) {
        self.vel_y = 0.0;
        if ball.vel.x * self.side.toward() <= 0.0 {
            return;
        }
        let target = ball.center_y();
        let center = self.center_y();
        if center < target {
            self.vel_y = speed;
        } else if center > target {
            self.vel_y = -speed;
        }
    }

    /// Integrate velocity, then clamp between the walls
    pub fn integrate(&mut self, dt: f32, field: &Playfield) {
        let (min_y, max_y) = field.paddle_y_bounds();
        self.pos.y = (self.pos.y + self.vel_y * dt).clamp(min_y, max_y);
    }
}

/// Per-session score counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub left: u32,
    pub right: u32,
}

impl ScoreBoard {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_serve_recenters_within_budget() {
        let field = Playfield::standard();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(&field);
        ball.pos = Vec2::new(3.0, 900.0);

        for _ in 0..200 {
            ball.serve(&field, &mut rng, SERVE_SPEED);
            assert_eq!(ball.pos, Vec2::new(960.0, 540.0));
            assert!(ball.vel.x.abs() <= 600.0);
            assert!(ball.vel.y.abs() <= 600.0);
            assert!(ball.vel.length() >= SERVE_MIN_SPEED);
        }
    }

    #[test]
    fn test_serve_is_reproducible() {
        let field = Playfield::standard();
        let mut a = Ball::new(&field);
        let mut b = Ball::new(&field);
        a.serve(&field, &mut Pcg32::seed_from_u64(99), SERVE_SPEED);
        b.serve(&field, &mut Pcg32::seed_from_u64(99), SERVE_SPEED);
        assert_eq!(a, b);
    }

    #[test]
    fn test_steer_from_input() {
        let field = Playfield::standard();
        let mut paddle = Paddle::new(Side::Left, &field);

        paddle.steer(InputState { move_up: true, move_down: false }, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, -PADDLE_SPEED);
        paddle.steer(InputState { move_up: false, move_down: true }, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, PADDLE_SPEED);
        paddle.steer(InputState { move_up: true, move_down: true }, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, -PADDLE_SPEED);
        paddle.steer(InputState::default(), PADDLE_SPEED);
        assert_eq!(paddle.vel_y, 0.0);
    }

    #[test]
    fn test_track_only_when_approaching() {
        let field = Playfield::standard();
        let mut paddle = Paddle::new(Side::Right, &field);
        let mut ball = Ball::new(&field);

        // Ball below the paddle center, heading right
        ball.pos.y = 800.0;
        ball.vel = Vec2::new(300.0, 0.0);
        paddle.track(&ball, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, PADDLE_SPEED);

        // Ball above
        ball.pos.y = 100.0;
        paddle.track(&ball, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, -PADDLE_SPEED);

        // Moving away: idle
        ball.vel.x = -300.0;
        paddle.track(&ball, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, 0.0);
    }

    #[test]
    fn test_track_tie_idles() {
        let field = Playfield::standard();
        let mut paddle = Paddle::new(Side::Right, &field);
        let mut ball = Ball::new(&field);
        ball.vel = Vec2::new(300.0, 0.0);
        // Paddle center 465 + 75 = 540, ball center 510 + 30 = 540
        ball.pos.y = 510.0;
        paddle.track(&ball, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, 0.0);
    }

    #[test]
    fn test_left_ai_mirrors_right() {
        let field = Playfield::standard();
        let mut paddle = Paddle::new(Side::Left, &field);
        let mut ball = Ball::new(&field);
        ball.pos.y = 800.0;
        ball.vel = Vec2::new(-300.0, 0.0);
        paddle.track(&ball, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, PADDLE_SPEED);

        ball.vel.x = 300.0;
        paddle.track(&ball, PADDLE_SPEED);
        assert_eq!(paddle.vel_y, 0.0);
    }

    #[test]
    fn test_reset_paddle_keeps_x() {
        let field = Playfield::standard();
        let mut paddle = Paddle::new(Side::Right, &field);
        paddle.pos.y = 12.0;
        paddle.vel_y = -PADDLE_SPEED;
        paddle.reset(&field);
        assert_eq!(paddle.pos, Vec2::new(1704.0, 465.0));
        assert_eq!(paddle.vel_y, 0.0);
    }

    #[test]
    fn test_scoreboard_increment() {
        let mut score = ScoreBoard::default();
        score.increment(Side::Right);
        score.increment(Side::Right);
        score.increment(Side::Left);
        assert_eq!(score, ScoreBoard { left: 1, right: 2 });
        assert_eq!(score.get(Side::Right), 2);
    }

    proptest! {
        #[test]
        fn prop_paddle_clamp_stays_in_bounds(
            y in -5000.0f32..5000.0,
            vel in -1.0e6f32..1.0e6,
            dt in 0.0f32..10.0,
        ) {
            let field = Playfield::standard();
            let mut paddle = Paddle::new(Side::Left, &field);
            paddle.pos.y = y;
            paddle.vel_y = vel;
            paddle.integrate(dt, &field);
            let (min_y, max_y) = field.paddle_y_bounds();
            prop_assert!(paddle.pos.y >= min_y && paddle.pos.y <= max_y);
            prop_assert_eq!(paddle.pos.x, 196.0);
        }

        #[test]
        fn prop_serve_bounded(seed in any::<u64>()) {
            let field = Playfield::standard();
            let mut ball = Ball::new(&field);
            ball.serve(&field, &mut Pcg32::seed_from_u64(seed), SERVE_SPEED);
            prop_assert!(ball.vel.x.abs() <= 600.0 && ball.vel.y.abs() <= 600.0);
            prop_assert!(ball.vel != Vec2::ZERO);
        }
    }
}
