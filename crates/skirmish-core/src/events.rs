//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// One-shot events drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShipEvent {
    /// Energy crossed from positive to zero. Fires exactly once per
    /// crossing; ticks spent at zero do not re-fire it.
    EnergyDepleted { tick: u64 },
    /// The host restored energy via a recharge command.
    EnergyRecharged { amount: f64 },
    /// The laser beam started firing.
    LaserOn,
    /// The laser beam stopped firing.
    LaserOff,
    /// The energy shield was raised.
    ShieldRaised,
    /// The energy shield was lowered.
    ShieldLowered,
}
