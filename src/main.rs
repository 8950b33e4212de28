//! Lava Leap entry point
//!
//! Headless runner: parses level plans and drives the simulation at the
//! fixed timestep, logging each level's outcome. Takes an optional path to a
//! JSON file holding an array of plans (each an array of row strings) and an
//! optional seed; with no arguments it runs the built-in demo plan.

use std::env;
use std::error::Error;
use std::fs;
use std::process::ExitCode;

use lava_leap::consts::SIM_DT;
use lava_leap::parse::LevelParser;
use lava_leap::sim::{Status, tick};

/// Ticks before an unfinished level is abandoned. The player is a collision
/// placeholder without movement, so a headless run needs a cap.
const MAX_TICKS: u64 = 60 * 60;
/// Attempts per level before moving on (lost levels restart, like a player
/// retrying)
const MAX_ATTEMPTS: u32 = 3;

const DEMO_PLAN: &[&str] = &[
    "                    ",
    "          o         ",
    "   @    xxxxx   o   ",
    "  xxx           x   ",
    "  x         o   x   ",
    "  x    =    x   x   ",
    "  x  o  x!!!x   x   ",
    "  xxxxxxxxxxxxxxx   ",
];

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let plans = match args.next() {
        Some(path) => match load_plans(&path) {
            Ok(plans) => plans,
            Err(e) => {
                log::error!("failed to load plans from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => vec![DEMO_PLAN.iter().map(|row| row.to_string()).collect()],
    };

    let seed: u64 = match args.next().map(|s| s.parse()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("seed must be an unsigned integer: {e}");
            return ExitCode::FAILURE;
        }
        None => 1,
    };

    let parser = LevelParser::default();
    for (index, plan) in plans.iter().enumerate() {
        run_level(&parser, plan, seed, index + 1);
    }
    ExitCode::SUCCESS
}

fn load_plans(path: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn run_level(parser: &LevelParser, plan: &[String], seed: u64, number: usize) {
    for attempt in 1..=MAX_ATTEMPTS {
        let mut level = parser.parse(plan, seed);
        log::info!(
            "level {number} attempt {attempt}: {}x{} cells, {} actors",
            level.grid.width(),
            level.grid.height(),
            level.actors.len()
        );

        let mut ticks = 0u64;
        while !level.is_finished() && ticks < MAX_TICKS {
            tick(&mut level, SIM_DT);
            ticks += 1;
        }

        match level.status {
            Status::Won => {
                log::info!("level {number} won after {ticks} ticks");
                return;
            }
            Status::Lost => {
                log::info!("level {number} lost after {ticks} ticks");
            }
            Status::Playing => {
                log::warn!("level {number} hit the tick cap, moving on");
                return;
            }
        }
    }
    log::info!("level {number} abandoned after {MAX_ATTEMPTS} attempts");
}
