//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use glam::DVec2;
use hecs::World;

use skirmish_core::components::*;
use skirmish_core::config::ShipTuning;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::ShipEvent;
use skirmish_core::state::*;
use skirmish_core::types::SimTime;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    tuning: &ShipTuning,
    events: Vec<ShipEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        laser: build_laser(world, tuning),
        shield: build_shield(world),
        aim: build_aim(world),
        events,
    }
}

/// Build ShipView from the player ship's kinematic and energy components.
fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&PlayerShip, &Transform2, &Body, &EnergyBank, &Thruster)>()
        .iter()
        .next()
        .map(|(_, (_, transform, body, energy, thruster))| ShipView {
            position: transform.position,
            rotation: transform.rotation,
            linear_velocity: body.linear_velocity,
            speed: body.linear_velocity.length(),
            angular_velocity: body.angular_velocity,
            current_energy: energy.current,
            total_energy: energy.total,
            energy_depleted: energy.depleted,
            thrust: thruster.thrust,
        })
        .unwrap_or_default()
}

/// Build LaserView. The beam endpoint is the reported obstruction point
/// when one exists, otherwise full range along the ship's facing.
fn build_laser(world: &World, tuning: &ShipTuning) -> LaserView {
    world
        .query::<(&PlayerShip, &Transform2, &LaserWeapon)>()
        .iter()
        .next()
        .map(|(_, (_, transform, laser))| {
            let facing = DVec2::from_angle(transform.rotation);
            let beam_end = match laser.hit_point {
                Some(hit) if laser.firing => hit,
                _ => transform.position + facing * tuning.laser_range,
            };
            LaserView {
                firing: laser.firing,
                beam_width: laser.beam_width,
                beam_start: transform.position,
                beam_end,
                power: tuning.laser_power,
                color: tuning.laser_color,
            }
        })
        .unwrap_or_default()
}

/// Build ShieldView from the shield component.
fn build_shield(world: &World) -> ShieldView {
    world
        .query::<(&PlayerShip, &EnergyShield)>()
        .iter()
        .next()
        .map(|(_, (_, shield))| ShieldView {
            raised: shield.raised,
            collider_enabled: shield.collider_enabled,
            sprite_visible: shield.sprite_visible,
        })
        .unwrap_or_default()
}

/// Build AimLineView from the aim line component.
fn build_aim(world: &World) -> AimLineView {
    world
        .query::<(&PlayerShip, &AimLine)>()
        .iter()
        .next()
        .map(|(_, (_, aim))| AimLineView {
            start: aim.start,
            end: aim.end,
        })
        .unwrap_or_default()
}
