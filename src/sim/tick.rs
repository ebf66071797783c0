//! Fixed timestep simulation step
//!
//! [`SimulationSession`] owns the ball, both paddles and the score, and
//! advances them one step per call to [`SimulationSession::advance`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionResult};
use super::input::InputSource;
use super::playfield::Playfield;
use super::state::{Ball, GamePhase, Paddle, ScoreBoard, Side};
use crate::error::ConfigError;
use crate::settings::{CollisionTiming, GameConfig, GameMode};

/// Events from a single step, for sound and visual feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Side that scored this step
    pub goal_scored: Option<Side>,
    pub wall_bounce: bool,
    /// Paddle that returned the ball this step
    pub paddle_hit: Option<Side>,
    /// Set on the step that ends the game
    pub winner: Option<Side>,
}

/// Read-only view of everything a renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub ball: glam::Vec2,
    pub left_paddle: glam::Vec2,
    pub right_paddle: glam::Vec2,
    pub score: ScoreBoard,
    pub time_ticks: u64,
}

/// One game session
#[derive(Debug, Clone)]
pub struct SimulationSession<I> {
    config: GameConfig,
    field: Playfield,
    input: I,
    rng: Pcg32,
    seed: u64,
    phase: GamePhase,
    ball: Ball,
    left: Paddle,
    right: Paddle,
    score: ScoreBoard,
    time_ticks: u64,
}

impl<I: InputSource> SimulationSession<I> {
    /// Validate the config and lay out the field. The session waits on the
    /// start screen until [`SimulationSession::start`] is called.
    pub fn new(config: GameConfig, input: I) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Playfield::new(config.field_width, config.field_height)?;
        let seed = config.resolve_seed();

        log::info!(
            "New session: {} on {}x{}, seed {}",
            config.mode.as_str(),
            field.width,
            field.height,
            seed
        );

        Ok(Self {
            config,
            input,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::StartScreen,
            ball: Ball::new(&field),
            left: Paddle::new(Side::Left, &field),
            right: Paddle::new(Side::Right, &field),
            score: ScoreBoard::default(),
            time_ticks: 0,
            field,
        })
    }

    /// Leave the start screen and serve. Ignored in any other phase.
    pub fn start(&mut self) {
        if self.phase != GamePhase::StartScreen {
            return;
        }
        self.serve();
        self.phase = GamePhase::InGame;
        log::info!("Game started");
    }

    /// Zero the score and serve a fresh rally, from any phase
    pub fn restart(&mut self) {
        self.score = ScoreBoard::default();
        self.time_ticks = 0;
        self.serve();
        self.phase = GamePhase::InGame;
        log::info!("Game restarted");
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::InGame {
            self.phase = GamePhase::Paused;
            log::info!("Paused at tick {}", self.time_ticks);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::InGame;
            log::info!("Resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::InGame => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => {}
        }
    }

    /// Advance the game by one fixed timestep. A no-op outside `InGame`.
    pub fn advance(&mut self, dt: f32) -> StepResult {
        if self.phase != GamePhase::InGame {
            return StepResult::default();
        }
        self.time_ticks += 1;

        let collided = match self.config.collision_timing {
            CollisionTiming::PreStep => {
                let collided = self.collide();
                if collided.goal.is_none() {
                    self.move_paddles(dt);
                }
                collided
            }
            CollisionTiming::PostStep => {
                self.move_paddles(dt);
                self.collide()
            }
        };

        let mut result = StepResult {
            goal_scored: collided.goal,
            wall_bounce: collided.wall_bounce,
            paddle_hit: collided.paddle_hit,
            winner: None,
        };

        match collided.goal {
            Some(scorer) => result.winner = self.award_goal(scorer),
            None => self.ball.integrate(dt),
        }

        if let Some(side) = result.paddle_hit {
            log::debug!("{:?} paddle hit at tick {}", side, self.time_ticks);
        }

        result
    }

    fn collide(&mut self) -> CollisionResult {
        collision::resolve(&mut self.ball, &self.field, &self.left, &self.right)
    }

    /// Steer both paddles for this step, then integrate and clamp them.
    /// AI paddles read the ball after this step's collisions.
    fn move_paddles(&mut self, dt: f32) {
        let speed = self.config.paddle_speed;
        for paddle in [&mut self.left, &mut self.right] {
            if is_ai(self.config.mode, paddle.side) {
                paddle.track(&self.ball, speed);
            } else {
                paddle.steer(self.input.poll(paddle.side), speed);
            }
            paddle.integrate(dt, &self.field);
        }
    }

    /// Score, reset the rally and check for a winner
    fn award_goal(&mut self, scorer: Side) -> Option<Side> {
        self.score.increment(scorer);
        log::info!(
            "{:?} scores: {} - {}",
            scorer,
            self.score.left,
            self.score.right
        );

        self.left.reset(&self.field);
        self.right.reset(&self.field);
        self.serve();

        match self.config.win_score {
            Some(target) if self.score.get(scorer) >= target => {
                self.phase = GamePhase::GameOver { winner: scorer };
                log::info!("Game over, {:?} wins", scorer);
                Some(scorer)
            }
            _ => None,
        }
    }

    fn serve(&mut self) {
        self.ball
            .serve(&self.field, &mut self.rng, self.config.serve_speed);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            ball: self.ball.pos,
            left_paddle: self.left.pos,
            right_paddle: self.right.pos,
            score: self.score,
            time_ticks: self.time_ticks,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn score(&self) -> ScoreBoard {
        self.score
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the serve RNG was created from, for replays
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Direct access for hosts that script a rally (tutorials, tests)
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Whether the given side is computer-controlled in this mode
pub fn is_ai(mode: GameMode, side: Side) -> bool {
    match mode {
        GameMode::OnePlayer => side == Side::Right,
        GameMode::TwoPlayer => false,
        GameMode::Demo => true,
    }
}
