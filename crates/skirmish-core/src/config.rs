//! Ship tuning parameters.
//!
//! Everything the prototype exposed as an editor-tunable export lives
//! here, with the observed defaults. The host may deserialize overrides
//! from JSON at startup.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ControlFrame, FlightMode, RechargePolicy, RotationPolicy};
use crate::types::Rgba;

/// Tunable parameters for the player ship and its subsystems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    // --- Flight ---
    /// Arcade-mode target speed (units/s).
    pub max_speed: f64,
    /// Instant thruster acceleration magnitude.
    pub acceleration: f64,
    /// Friction coefficient (realistic mode).
    pub dampening_factor: f64,
    /// Rotation approach rate (smoothed policy).
    pub rotation_acceleration_factor: f64,
    /// Angular velocity saturation bounds (clamped policy, rad/s).
    pub angular_velocity_min: f64,
    pub angular_velocity_max: f64,
    /// Scale on the strafe axis so forward/back thrust dominates.
    pub lateral_thrust_factor: f64,

    // --- Strategy selection ---
    pub flight_mode: FlightMode,
    pub rotation_policy: RotationPolicy,
    pub control_frame: ControlFrame,
    pub recharge_policy: RechargePolicy,

    // --- Energy ---
    pub total_energy: f64,
    pub initial_energy: f64,
    /// Engine drain per unit thrust per second.
    pub consumption_rate: f64,

    // --- Aim guide ---
    pub max_aim_length: f64,
    pub aim_offset: f64,

    // --- Laser ---
    pub laser_power: f64,
    pub laser_range: f64,
    pub full_power_laser_width: f64,
    pub beam_ramp_secs: f64,
    pub laser_color: Rgba,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            max_speed: SHIP_MAX_SPEED,
            acceleration: SHIP_ACCELERATION,
            dampening_factor: DAMPENING_FACTOR,
            rotation_acceleration_factor: ROTATION_ACCELERATION_FACTOR,
            angular_velocity_min: ANGULAR_VELOCITY_MIN,
            angular_velocity_max: ANGULAR_VELOCITY_MAX,
            lateral_thrust_factor: LATERAL_THRUST_FACTOR,
            flight_mode: FlightMode::default(),
            rotation_policy: RotationPolicy::default(),
            control_frame: ControlFrame::default(),
            recharge_policy: RechargePolicy::default(),
            total_energy: SHIP_TOTAL_ENERGY,
            initial_energy: SHIP_INITIAL_ENERGY,
            consumption_rate: ENGINE_CONSUMPTION_RATE,
            max_aim_length: MAX_AIM_LENGTH,
            aim_offset: AIM_OFFSET,
            laser_power: LASER_POWER,
            laser_range: LASER_RANGE,
            full_power_laser_width: FULL_POWER_LASER_WIDTH,
            beam_ramp_secs: BEAM_RAMP_SECS,
            laser_color: Rgba::RED,
        }
    }
}
