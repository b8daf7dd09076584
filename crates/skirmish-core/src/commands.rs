//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Continuous inputs (thrust, aim) arrive as already-composed values:
//! the input layer has summed digital/analog axes before they get here.

use serde::{Deserialize, Serialize};

/// All possible host/player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Spawn the ship and start ticking.
    StartSession,
    /// Freeze simulation time.
    Pause,
    /// Resume from pause.
    Resume,

    // --- Continuous inputs ---
    /// Set the raw thrust input vector. Each axis is expected in [-1, 1];
    /// the flight model normalizes, so larger values do not mean more thrust.
    SetThrust { x: f64, y: f64 },
    /// Set the world-space point the ship should rotate toward.
    SetAimPoint { x: f64, y: f64 },

    // --- Weapons ---
    /// Hold or release the laser trigger.
    SetFiring { firing: bool },
    /// The host's collision query hit something along the beam at this
    /// world-space point; the beam endpoint shortens to it.
    ReportBeamHit { x: f64, y: f64 },
    /// The beam is no longer obstructed.
    ClearBeamHit,

    // --- Shield ---
    /// Toggle the energy shield (edge-triggered).
    ToggleShield,

    // --- Energy ---
    /// Restore energy (clamped to capacity). Clears the depleted flag
    /// and re-arms the depletion edge when the result is positive.
    Recharge { amount: f64 },
}
