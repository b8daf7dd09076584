//! Laser weapon system.
//!
//! Tracks the held-fire trigger and animates the beam width toward full
//! power while firing and back to zero when released — a fixed-rate ramp
//! standing in for the original tween.

use hecs::World;

use skirmish_core::components::{LaserWeapon, PlayerShip};
use skirmish_core::config::ShipTuning;
use skirmish_core::constants::DT;
use skirmish_core::events::ShipEvent;
use skirmish_core::math;

/// Update trigger state and beam width for the player's laser.
pub fn run(world: &mut World, tuning: &ShipTuning, firing: bool, events: &mut Vec<ShipEvent>) {
    for (_entity, (_ship, laser)) in world.query_mut::<(&PlayerShip, &mut LaserWeapon)>() {
        if firing != laser.firing {
            laser.firing = firing;
            events.push(if firing {
                ShipEvent::LaserOn
            } else {
                ShipEvent::LaserOff
            });
            if !firing {
                // Obstruction reports are only meaningful while the beam is on
                laser.hit_point = None;
            }
        }

        let target_width = if laser.firing {
            tuning.full_power_laser_width
        } else {
            0.0
        };
        let ramp_rate = tuning.full_power_laser_width / tuning.beam_ramp_secs;
        laser.beam_width = math::move_toward_scalar(laser.beam_width, target_width, ramp_rate * DT);
    }
}
