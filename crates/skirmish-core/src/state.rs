//! Game state snapshot — the complete visible state sent to the host each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::ShipEvent;
use crate::types::{Rgba, SimTime};

/// Complete game state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: ShipView,
    pub laser: LaserView,
    pub shield: ShieldView,
    pub aim: AimLineView,
    /// One-shot events since the previous snapshot.
    pub events: Vec<ShipEvent>,
}

/// Ship state for the HUD: velocity readout, direction arrow, energy bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: DVec2,
    /// Radians, counter-clockwise, 0 = facing +X.
    pub rotation: f64,
    pub linear_velocity: DVec2,
    /// Velocity magnitude, precomputed for the speed label.
    pub speed: f64,
    pub angular_velocity: f64,
    pub current_energy: f64,
    pub total_energy: f64,
    pub energy_depleted: bool,
    /// Thrust vector applied this tick (zero while depleted).
    pub thrust: DVec2,
}

/// Laser beam state for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaserView {
    pub firing: bool,
    /// Animated width (0 when idle, ramps to full power).
    pub beam_width: f64,
    /// Beam endpoints in world space.
    pub beam_start: DVec2,
    pub beam_end: DVec2,
    pub power: f64,
    pub color: Rgba,
}

/// Shield state for rendering and collision wiring.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShieldView {
    pub raised: bool,
    pub collider_enabled: bool,
    pub sprite_visible: bool,
}

/// Aim guide line endpoints in world space.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AimLineView {
    pub start: DVec2,
    pub end: DVec2,
}
