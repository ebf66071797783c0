//! Duel Pong headless driver
//!
//! Runs a session without a renderer: frames are fed through the fixed-step
//! clock, goals are logged, and the final snapshot is printed as JSON.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use duel_pong::consts::SIM_DT;
    use duel_pong::sim::{Controls, FixedStepper, GamePhase, SimulationSession};
    use duel_pong::{GameConfig, GameMode};

    #[derive(Parser, Debug)]
    #[command(name = "duel-pong")]
    #[command(about = "Run a headless Duel Pong session and print the final snapshot")]
    pub struct Args {
        /// JSON config file (defaults to a demo session)
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// Paddle control: one_player, two_player or demo
        #[arg(long, value_parser = parse_mode)]
        pub mode: Option<GameMode>,
        /// Simulated seconds to run
        #[arg(long, default_value_t = 60.0)]
        pub seconds: f32,
        /// Serve RNG seed
        #[arg(long)]
        pub seed: Option<u64>,
    }

    fn parse_mode(raw: &str) -> Result<GameMode, String> {
        GameMode::from_str(raw).ok_or_else(|| format!("unknown mode {raw}"))
    }

    fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
        let mut config = match &args.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig {
                mode: GameMode::Demo,
                ..Default::default()
            },
        };
        if let Some(mode) = args.mode {
            config.mode = mode;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }

        let mut session = SimulationSession::new(config, Controls::default())?;
        session.start();

        // Slightly uneven frame times, the way a real display delivers them
        let frames = [SIM_DT * 0.9, SIM_DT * 1.1, SIM_DT, SIM_DT * 1.3, SIM_DT * 0.7];
        let mut stepper = FixedStepper::new();
        let mut elapsed = 0.0;
        let mut rallies = 0u32;

        'frames: for frame_time in frames.iter().cycle() {
            if elapsed >= args.seconds {
                break;
            }
            elapsed += frame_time;

            for result in stepper.frame(*frame_time, &mut session) {
                if result.goal_scored.is_some() {
                    rallies += 1;
                }
                if result.winner.is_some() {
                    break 'frames;
                }
            }
        }

        if let GamePhase::GameOver { winner } = session.phase() {
            log::info!("{:?} won after {} rallies", winner, rallies);
        } else {
            log::info!("Stopped after {:.1}s, {} rallies", elapsed, rallies);
        }

        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        Ok(())
    }

    pub fn main() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        match run(Args::parse()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_args_defaults() {
            let args = Args::try_parse_from(["duel-pong"]).unwrap();
            assert!(args.config.is_none());
            assert!(args.mode.is_none());
            assert_eq!(args.seconds, 60.0);
            assert!(args.seed.is_none());
        }

        #[test]
        fn test_args_all_flags() {
            let args = Args::try_parse_from([
                "duel-pong", "--config", "game.json", "--mode", "2p", "--seconds", "5", "--seed", "9",
            ])
            .unwrap();
            assert_eq!(args.config, Some(PathBuf::from("game.json")));
            assert_eq!(args.mode, Some(GameMode::TwoPlayer));
            assert_eq!(args.seconds, 5.0);
            assert_eq!(args.seed, Some(9));
        }

        #[test]
        fn test_args_reject_unknown() {
            assert!(Args::try_parse_from(["duel-pong", "--mode", "solo"]).is_err());
            assert!(Args::try_parse_from(["duel-pong", "--speed", "3"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the session through the library
}
