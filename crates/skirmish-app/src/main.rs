//! SKIRMISH headless host binary.
//!
//! Runs the simulation at 60Hz and reads newline-delimited JSON
//! `PlayerCommand`s from stdin, e.g.:
//!
//! ```text
//! {"type":"SetThrust","x":1.0,"y":0.0}
//! {"type":"ToggleShield"}
//! ```
//!
//! An optional argument names a JSON file with `ShipTuning` overrides.
//! Type `quit` (or close stdin) to exit.

use std::fs;
use std::io::BufRead;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info, warn};

use skirmish_app::game_loop;
use skirmish_app::state::GameLoopCommand;
use skirmish_core::commands::PlayerCommand;
use skirmish_core::config::ShipTuning;
use skirmish_sim::engine::SimConfig;

fn main() -> Result<()> {
    let env = Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let tuning = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path)?,
        None => ShipTuning::default(),
    };

    let host = game_loop::spawn_game_loop(SimConfig { tuning })
        .context("Failed to spawn game loop thread")?;

    info!("session starting; reading JSON commands from stdin");
    host.command_tx
        .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
        .map_err(|_| anyhow::anyhow!("game loop thread exited before start"))?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => {
                if host
                    .command_tx
                    .send(GameLoopCommand::PlayerCommand(command))
                    .is_err()
                {
                    error!("game loop thread is gone, exiting");
                    break;
                }
            }
            Err(err) => warn!("ignoring invalid command {line:?}: {err}"),
        }
    }

    let _ = host.command_tx.send(GameLoopCommand::Shutdown);
    info!("shutting down");
    Ok(())
}

/// Load tuning overrides from a JSON file. Unspecified fields keep
/// their defaults.
fn load_tuning(path: &str) -> Result<ShipTuning> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read tuning file {path}"))?;
    let tuning: ShipTuning =
        serde_json::from_str(&raw).with_context(|| format!("Invalid tuning file {path}"))?;
    Ok(tuning)
}
