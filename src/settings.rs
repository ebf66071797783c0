//! Session configuration
//!
//! Loaded from a JSON file by the host. Every field has a default matching the
//! standard game, so an empty object `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Who controls each paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Left paddle human, right paddle AI
    #[default]
    OnePlayer,
    /// Both paddles human
    TwoPlayer,
    /// Both paddles AI (attract mode)
    Demo,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::OnePlayer => "one_player",
            GameMode::TwoPlayer => "two_player",
            GameMode::Demo => "demo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "one_player" | "one" | "1p" => Some(GameMode::OnePlayer),
            "two_player" | "two" | "2p" => Some(GameMode::TwoPlayer),
            "demo" | "idle" => Some(GameMode::Demo),
            _ => None,
        }
    }
}

/// When paddle collisions are resolved relative to paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollisionTiming {
    /// Collide against last step's paddle positions (one-frame lag)
    #[default]
    PreStep,
    /// Move paddles first, then collide against their new positions
    PostStep,
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Tuning ===
    /// Paddle speed (pixels/second)
    pub paddle_speed: f32,
    /// Serve speed budget (pixels/second)
    pub serve_speed: f32,

    // === Rules ===
    /// First side to reach this score wins; `None` plays forever
    pub win_score: Option<u32>,
    /// Serve RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    pub collision_timing: CollisionTiming,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::OnePlayer,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_speed: PADDLE_SPEED,
            serve_speed: SERVE_SPEED,

            win_score: None,
            seed: None,
            collision_timing: CollisionTiming::PreStep,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {} ({})", path.display(), config.mode.as_str());
        Ok(config)
    }

    /// Check tuning and rule values. Geometry is checked by
    /// [`crate::sim::Playfield::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("paddle_speed", self.paddle_speed)?;
        positive("serve_speed", self.serve_speed)?;
        // Serve draws reach at most speed * sqrt(2) / 2, so this keeps the
        // redraw floor in Ball::serve reachable
        if self.serve_speed < MIN_SERVE_BUDGET {
            return Err(ConfigError::ServeTooSlow {
                speed: self.serve_speed,
                min: MIN_SERVE_BUDGET,
            });
        }
        if self.win_score == Some(0) {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Seed to use for this session, drawing one from entropy if unset
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.field_width, 1920.0);
        assert_eq!(config.field_height, 1080.0);
        assert_eq!(config.collision_timing, CollisionTiming::PreStep);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = GameConfig::from_json(
            r#"{ "mode": "two_player", "win_score": 7, "seed": 42, "collision_timing": "post_step" }"#,
        )
        .unwrap();
        assert_eq!(config.mode, GameMode::TwoPlayer);
        assert_eq!(config.win_score, Some(7));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.resolve_seed(), 42);
        assert_eq!(config.collision_timing, CollisionTiming::PostStep);
        assert_eq!(config.paddle_speed, PADDLE_SPEED);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "win_score": 0 }"#),
            Err(ConfigError::ZeroWinScore)
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "paddle_speed": -1.0 }"#),
            Err(ConfigError::NonPositive { name: "paddle_speed", .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "serve_speed": 1.0, "seed": 3 }"#),
            Err(ConfigError::ServeTooSlow { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "mode": "solo" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_smallest_serve_speed_starts() {
        use crate::sim::{Controls, GamePhase, SimulationSession};

        let config = GameConfig {
            serve_speed: MIN_SERVE_BUDGET,
            seed: Some(3),
            ..Default::default()
        };
        let mut session = SimulationSession::new(config, Controls::default()).unwrap();
        session.start();
        assert_eq!(session.phase(), GamePhase::InGame);
        assert!(session.ball().vel.length() >= SERVE_MIN_SPEED);
        session.restart();
        assert!(session.ball().vel.length() >= SERVE_MIN_SPEED);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/duel-pong.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(GameMode::from_str("2P"), Some(GameMode::TwoPlayer));
        assert_eq!(GameMode::from_str("demo"), Some(GameMode::Demo));
        assert_eq!(GameMode::from_str("x"), None);
        for mode in [GameMode::OnePlayer, GameMode::TwoPlayer, GameMode::Demo] {
            assert_eq!(GameMode::from_str(mode.as_str()), Some(mode));
        }
    }
}
