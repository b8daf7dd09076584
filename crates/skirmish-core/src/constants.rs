//! Simulation constants and default tuning values.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Flight ---

/// Top speed used as the arcade-mode velocity target (units/s).
pub const SHIP_MAX_SPEED: f64 = 40.0;

/// Instant thruster acceleration magnitude.
pub const SHIP_ACCELERATION: f64 = 5.0;

/// Friction coefficient pulling velocity back toward zero each tick.
pub const DAMPENING_FACTOR: f64 = 2.0;

/// How quickly the model rotates toward the aim point (smoothed policy).
pub const ROTATION_ACCELERATION_FACTOR: f64 = 2.0;

/// Angular velocity saturation bounds (rad/s, clamped policy).
pub const ANGULAR_VELOCITY_MIN: f64 = -3.0;
pub const ANGULAR_VELOCITY_MAX: f64 = 3.0;

/// Scale applied to the strafe axis so forward/back thrust dominates.
pub const LATERAL_THRUST_FACTOR: f64 = 0.3;

// --- Energy ---

/// Ship energy capacity (abstract units).
pub const SHIP_TOTAL_ENERGY: f64 = 130.0;

/// Energy at spawn. Deliberately below capacity.
pub const SHIP_INITIAL_ENERGY: f64 = 90.0;

/// Engine energy drain per unit thrust per second.
pub const ENGINE_CONSUMPTION_RATE: f64 = 0.02;

// --- Aim guide ---

/// Max length of the aim helper line.
pub const MAX_AIM_LENGTH: f64 = 150.0;

/// Offset of the aim line start from the ship origin.
pub const AIM_OFFSET: f64 = 25.0;

// --- Laser ---

/// Damage per second delivered by the beam at full power.
pub const LASER_POWER: f64 = 1.0;

/// Beam reach along the ship's facing.
pub const LASER_RANGE: f64 = 10_000.0;

/// Beam width at full power.
pub const FULL_POWER_LASER_WIDTH: f64 = 15.0;

/// Seconds for the beam width to ramp between zero and full power.
pub const BEAM_RAMP_SECS: f64 = 0.1;
