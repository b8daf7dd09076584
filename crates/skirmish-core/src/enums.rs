//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session running yet.
    #[default]
    Idle,
    /// Simulation ticking normally.
    Active,
    /// Session exists but time is frozen.
    Paused,
}

/// Velocity integration strategy for the flight model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    /// First-order drag: commanded acceleration is blended toward
    /// `-velocity` with weight `dt * dampening_factor` before applying.
    #[default]
    Realistic,
    /// Velocity steps straight toward `thrust * max_speed`, with the
    /// per-tick delta capped at `acceleration * dt`.
    Arcade,
}

/// How the ship reorients toward the aim point while thrusting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationPolicy {
    /// Rotation lerps toward the aim angle at `dt * rotation_acceleration_factor`.
    #[default]
    Smoothed,
    /// Angle-to-aim applied directly as angular velocity, saturated to
    /// the configured bounds.
    Clamped,
}

/// Frame of reference for the thrust input vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlFrame {
    /// Thrust input is in the ship frame and gets rotated into world space.
    #[default]
    ShipRelative,
    /// Thrust input is already in world space.
    Absolute,
}

/// Energy restoration policy.
///
/// The simulation never regenerates energy on its own; depletion is
/// permanent for the session unless the host issues recharge commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RechargePolicy {
    /// `Recharge` commands from the host are accepted.
    #[default]
    External,
    /// Recharge commands are ignored; depletion is permanent.
    Disabled,
}
