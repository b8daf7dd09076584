//! Flight-and-energy model.
//!
//! Pure functions that turn per-tick input into thrust, velocity, rotation,
//! and energy updates for the player ship. No ECS dependency — operates on
//! plain data, which keeps every numeric property directly testable.
//!
//! The ship frame has +X as the facing direction; the input vector's x axis
//! is forward/back thrust and its y axis is strafe.

use glam::DVec2;

use skirmish_core::components::EnergyBank;
use skirmish_core::config::ShipTuning;
use skirmish_core::enums::{ControlFrame, FlightMode, RotationPolicy};
use skirmish_core::math;

/// Input to the flight model for a single tick.
pub struct FlightContext {
    /// Raw axis-summed input, each axis in [-1, 1].
    pub raw_input: DVec2,
    /// World-space point the ship reorients toward while thrusting.
    pub aim_point: DVec2,
    pub position: DVec2,
    /// Radians, counter-clockwise, 0 = facing +X.
    pub rotation: f64,
    pub linear_velocity: DVec2,
    pub energy: EnergyBank,
    /// Seconds since the previous tick, > 0.
    pub dt: f64,
}

/// Rotation output. The integrator applies whichever form the active
/// policy produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationCommand {
    /// Thrust was zero (or the aim point coincides with the ship):
    /// the rotation update is skipped entirely.
    Hold,
    /// Clamped policy: angular velocity in rad/s, saturated to bounds.
    AngularVelocity(f64),
    /// Smoothed policy: absolute rotation value for this tick.
    Face(f64),
}

/// Output from the flight model.
pub struct FlightUpdate {
    /// Normalized, lateral-scaled thrust vector (ship frame).
    pub thrust: DVec2,
    pub linear_velocity: DVec2,
    pub rotation: RotationCommand,
    pub energy: EnergyBank,
    /// True exactly once, on the tick energy crossed from >0 to 0.
    pub depleted_edge: bool,
}

/// Evaluate one tick of the flight model.
pub fn evaluate(ctx: &FlightContext, tuning: &ShipTuning) -> FlightUpdate {
    let thrust = thrust_vector(
        ctx.raw_input,
        ctx.energy.depleted,
        tuning.lateral_thrust_factor,
    );
    let (energy, depleted_edge) = drain_energy(
        ctx.energy,
        thrust.length(),
        tuning.consumption_rate,
        ctx.dt,
    );

    // Thrust into world space, per the configured control frame.
    let world_thrust = match tuning.control_frame {
        ControlFrame::ShipRelative => DVec2::from_angle(ctx.rotation).rotate(thrust),
        ControlFrame::Absolute => thrust,
    };

    let linear_velocity = match tuning.flight_mode {
        FlightMode::Realistic => {
            // Near-instant torque: the commanded acceleration is reached
            // immediately, then blended toward -velocity for drag.
            let commanded = world_thrust * tuning.acceleration;
            let accel = commanded.lerp(-ctx.linear_velocity, ctx.dt * tuning.dampening_factor);
            ctx.linear_velocity + accel
        }
        FlightMode::Arcade => {
            let target = world_thrust * tuning.max_speed;
            math::move_toward(ctx.linear_velocity, target, tuning.acceleration * ctx.dt)
        }
    };

    let rotation = rotation_command(ctx, tuning, thrust);

    FlightUpdate {
        thrust,
        linear_velocity,
        rotation,
        energy,
        depleted_edge,
    }
}

/// Normalize the raw input and scale the strafe axis.
///
/// The zero vector stays zero — never normalized into NaN. A depleted
/// energy bank forces zero thrust regardless of input.
pub fn thrust_vector(raw_input: DVec2, depleted: bool, lateral_factor: f64) -> DVec2 {
    if depleted {
        return DVec2::ZERO;
    }
    let mut dir = raw_input.normalize_or_zero();
    dir.y *= lateral_factor;
    dir
}

/// Drain energy proportional to thrust magnitude, clamped at zero.
///
/// Returns the updated bank and whether this tick crossed the >0 → 0
/// boundary. The edge fires at most once: once `depleted` is set, further
/// ticks at zero are no-ops.
pub fn drain_energy(
    mut energy: EnergyBank,
    thrust_magnitude: f64,
    consumption_rate: f64,
    dt: f64,
) -> (EnergyBank, bool) {
    if energy.depleted {
        return (energy, false);
    }
    let drained = (energy.current - consumption_rate * thrust_magnitude * dt).max(0.0);
    let edge = energy.current > 0.0 && drained == 0.0;
    energy.depleted = drained == 0.0;
    energy.current = drained;
    (energy, edge)
}

/// Compute the rotation output for this tick.
///
/// The ship only reorients while thrust is applied; with zero thrust the
/// rotation state is left untouched.
fn rotation_command(ctx: &FlightContext, tuning: &ShipTuning, thrust: DVec2) -> RotationCommand {
    if thrust.length_squared() < f64::EPSILON {
        return RotationCommand::Hold;
    }
    let Some(aim_angle) = math::angle_to_point(ctx.position, ctx.aim_point) else {
        return RotationCommand::Hold;
    };
    match tuning.rotation_policy {
        RotationPolicy::Clamped => {
            let to_aim = math::wrap_angle(aim_angle - ctx.rotation);
            RotationCommand::AngularVelocity(
                to_aim.clamp(tuning.angular_velocity_min, tuning.angular_velocity_max),
            )
        }
        RotationPolicy::Smoothed => RotationCommand::Face(math::lerp_angle(
            ctx.rotation,
            aim_angle,
            ctx.dt * tuning.rotation_acceleration_factor,
        )),
    }
}
