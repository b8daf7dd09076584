//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Marks an entity as the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Pose owned by the integrator. The flight model reads rotation but
/// never writes position directly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Transform2 {
    pub position: DVec2,
    /// Radians, counter-clockwise, 0 = facing +X.
    pub rotation: f64,
}

/// Rigid body state mutated by the flight model and integrated by the
/// movement system.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Body {
    pub linear_velocity: DVec2,
    /// rad/s. Only meaningful under the clamped rotation policy.
    pub angular_velocity: f64,
}

/// Finite energy resource gating thrust availability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyBank {
    /// Capacity (constant per ship).
    pub total: f64,
    /// Always within [0, total].
    pub current: f64,
    /// True iff current == 0. Cleared only by an external recharge.
    pub depleted: bool,
}

impl EnergyBank {
    pub fn new(total: f64, current: f64) -> Self {
        let current = current.clamp(0.0, total);
        Self {
            total,
            current,
            depleted: current == 0.0,
        }
    }
}

/// Thrust computed by the flight model this tick, for display and
/// downstream effects (engine glow, HUD).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Thruster {
    /// Normalized, lateral-scaled thrust vector (ship frame).
    pub thrust: DVec2,
}

/// Laser weapon state. The beam width animates toward full power while
/// the trigger is held and back to zero when released.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaserWeapon {
    /// Trigger currently held.
    pub firing: bool,
    /// Current animated beam width.
    pub beam_width: f64,
    /// World-space obstruction point reported by the host, if any.
    pub hit_point: Option<DVec2>,
}

impl Default for LaserWeapon {
    fn default() -> Self {
        Self {
            firing: false,
            beam_width: 0.0,
            hit_point: None,
        }
    }
}

/// Energy shield toggle state and the visual/collision flags it owns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnergyShield {
    pub raised: bool,
    pub collider_enabled: bool,
    pub sprite_visible: bool,
}

/// Aim guide line endpoints in world space.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AimLine {
    pub start: DVec2,
    pub end: DVec2,
}
