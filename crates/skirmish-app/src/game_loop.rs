//! Game loop thread — runs the simulation engine at 60Hz.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. The latest snapshot is
//! stored in shared state for synchronous polling, and a HUD line is
//! logged once per second.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::info;

use skirmish_core::constants::TICK_RATE;
use skirmish_sim::engine::{SimConfig, SimulationEngine};

use crate::hud;
use crate::state::{GameLoopCommand, HostState, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig) -> std::io::Result<HostState> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = SharedSnapshot::default();
    let snapshot_slot = latest_snapshot.clone();

    std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &snapshot_slot);
        })?;

    Ok(HostState {
        command_tx: cmd_tx,
        latest_snapshot,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. HUD refresh once per second
        if snapshot.time.tick > 0 && snapshot.time.tick % TICK_RATE as u64 == 0 {
            info!("{}", hud::format_hud(&snapshot));
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
