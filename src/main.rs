//! Infinite Dodge headless entry point
//!
//! Runs one autopiloted game on simulated 60 Hz frames and logs the result.
//!
//! Usage: `infinite-dodge [CONFIG] [--seed SEED]`

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use infinite_dodge::autopilot::Autopilot;
use infinite_dodge::gate::format_clock;
use infinite_dodge::sim::{Game, InputEvent};
use infinite_dodge::{GameConfig, Result, RunLoop};

const FRAME: Duration = Duration::from_millis(16);
/// Ten simulated minutes
const MAX_FRAMES: u32 = 37_500;
const DEFAULT_SEED: u64 = 0x5EED;

#[derive(Parser, Debug)]
#[command(name = "infinite-dodge")]
#[command(about = "Run one autopiloted infinite dodge game headlessly", long_about = None)]
#[command(version)]
struct Args {
    /// JSON config file (defaults are used when omitted)
    config: Option<PathBuf>,

    /// Seed for the obstacle stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    env_logger::init();
    log::info!("Infinite Dodge (headless) starting...");

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed;
    log::info!(
        "Play area {}x{}, tick {} ms, seed {}",
        config.width,
        config.height,
        config.tick_ms,
        seed
    );

    let mut run_loop = RunLoop::new(Game::with_seed(config.clone(), seed)?);
    run_loop.push_input(InputEvent::HoldBegin);

    for frame_index in 0..MAX_FRAMES {
        if let Some(input) = Autopilot::steer(&run_loop.game().frame(), &config) {
            run_loop.push_input(input);
        }
        run_loop.advance_clock(FRAME);

        if let Some(report) = run_loop.run_pending().into_iter().next() {
            let elapsed = (FRAME * frame_index).as_secs();
            println!(
                "Game over after {} ({}): final score {}",
                format_clock(Some(elapsed)),
                report.reason.as_str(),
                report.final_score
            );
            return Ok(());
        }
    }

    println!(
        "Autopilot survived the time limit with score {}",
        run_loop.game().score()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["infinite-dodge"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_args_config_and_seed() {
        let args =
            Args::try_parse_from(["infinite-dodge", "dodge.json", "--seed", "42"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("dodge.json")));
        assert_eq!(args.seed, 42);
    }

    #[test]
    fn test_args_reject_bad_seed() {
        assert!(Args::try_parse_from(["infinite-dodge", "--seed", "notanumber"]).is_err());
    }

    #[test]
    fn test_args_reject_extra_positionals() {
        assert!(Args::try_parse_from(["infinite-dodge", "a.json", "extra"]).is_err());
    }
}
