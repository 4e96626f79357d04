//! Open Road entry point
//!
//! Headless runner: plays autopilot sessions against the simulation core and
//! prints the resulting leaderboard.
//!
//! Usage: `open-road [seed] [runs] [tuning.json]`

use std::process::ExitCode;

use open_road::consts::SIM_DT_MS;
use open_road::highscores::HighScoreEntry;
use open_road::sim::{GameEvent, Session, autopilot, hud_line};
use open_road::{HighScores, Tuning};

/// Give up on a run after this much simulated time
const MAX_RUN_MS: f32 = 5.0 * 60.0 * 1000.0;

fn load_tuning(path: Option<&String>) -> Result<Tuning, String> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    Tuning::from_json(&json).map_err(|e| format!("{}: {}", path, e))
}

fn play_run(tuning: &Tuning, seed: u64) -> HighScoreEntry {
    let mut session = Session::new(tuning.clone(), seed);
    while !session.state().is_game_over() && session.state().elapsed_ms < MAX_RUN_MS {
        let input = autopilot::plan(session.state());
        for event in session.step(&input, SIM_DT_MS) {
            match event {
                GameEvent::CheckpointCollected { bonus } => log::debug!("+{} bonus", bonus),
                GameEvent::Crashed => log::info!("{}", hud_line(session.state())),
                _ => {}
            }
        }
    }
    HighScoreEntry::from_run(session.state())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Open Road (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.first().and_then(|s| s.parse::<u64>().ok()).unwrap_or(1);
    let runs = args.get(1).and_then(|s| s.parse::<u64>().ok()).unwrap_or(5);

    let tuning = match load_tuning(args.get(2)) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut scores = HighScores::new();
    for run in 0..runs {
        let entry = play_run(&tuning, seed.wrapping_add(run));
        log::info!(
            "Run {}: score {} ({} checkpoints, {:.1}s)",
            run + 1,
            entry.score,
            entry.checkpoints,
            entry.elapsed_ms / 1000.0
        );
        if let Some(rank) = scores.add_score(entry) {
            log::info!("New high score at rank {}", rank);
        }
    }

    println!("RANK  SCORE  CHECKPOINTS  TIME");
    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "{:>4}  {:>5}  {:>11}  {:>5.1}s",
            i + 1,
            entry.score,
            entry.checkpoints,
            entry.elapsed_ms / 1000.0
        );
    }

    ExitCode::SUCCESS
}
