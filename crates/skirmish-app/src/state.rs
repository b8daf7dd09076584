//! Shared state between the stdin reader and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::GameStateSnapshot;

/// Commands sent from the host I/O layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, shared with the game loop thread.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Host-side handles for a running game loop.
pub struct HostState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot for synchronous polling.
    pub latest_snapshot: SharedSnapshot,
}
