//! Flight system: feeds the flight-and-energy model and applies its output.
//!
//! The model itself (`crate::flight`) is pure; this system is the thin
//! ECS adapter around it. Position is never written here — integration
//! belongs to the movement system.

use hecs::World;
use log::debug;

use skirmish_core::components::{Body, EnergyBank, PlayerShip, Thruster, Transform2};
use skirmish_core::config::ShipTuning;
use skirmish_core::constants::DT;
use skirmish_core::events::ShipEvent;

use crate::engine::InputState;
use crate::flight::{self, FlightContext, RotationCommand};

/// Run the flight model for the player ship.
pub fn run(
    world: &mut World,
    tuning: &ShipTuning,
    input: &InputState,
    current_tick: u64,
    events: &mut Vec<ShipEvent>,
) {
    for (_entity, (_ship, transform, body, energy, thruster)) in world.query_mut::<(
        &PlayerShip,
        &mut Transform2,
        &mut Body,
        &mut EnergyBank,
        &mut Thruster,
    )>() {
        let ctx = FlightContext {
            raw_input: input.thrust,
            aim_point: input.aim_point,
            position: transform.position,
            rotation: transform.rotation,
            linear_velocity: body.linear_velocity,
            energy: *energy,
            dt: DT,
        };

        let update = flight::evaluate(&ctx, tuning);

        thruster.thrust = update.thrust;
        body.linear_velocity = update.linear_velocity;
        *energy = update.energy;

        match update.rotation {
            RotationCommand::Hold => {}
            RotationCommand::AngularVelocity(omega) => body.angular_velocity = omega,
            RotationCommand::Face(rotation) => transform.rotation = rotation,
        }

        if update.depleted_edge {
            debug!("energy depleted at tick {current_tick}");
            events.push(ShipEvent::EnergyDepleted { tick: current_tick });
        }
    }
}
