//! Entity spawn factories for setting up the simulation world.

use hecs::World;

use skirmish_core::components::*;
use skirmish_core::config::ShipTuning;

/// Set up a fresh session: one player ship with all subsystems.
pub fn setup_session(world: &mut World, tuning: &ShipTuning) -> hecs::Entity {
    world.clear();
    spawn_player_ship(world, tuning)
}

/// Spawn the player ship at the origin with the full component bundle.
pub fn spawn_player_ship(world: &mut World, tuning: &ShipTuning) -> hecs::Entity {
    world.spawn((
        PlayerShip,
        Transform2::default(),
        Body::default(),
        EnergyBank::new(tuning.total_energy, tuning.initial_energy),
        Thruster::default(),
        LaserWeapon::default(),
        EnergyShield::default(),
        AimLine::default(),
    ))
}
