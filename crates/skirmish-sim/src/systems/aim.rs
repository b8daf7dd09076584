//! Aim guide line system.
//!
//! Recomputes the helper line from the ship toward the aim point each
//! tick: length clamped to the configured maximum, start point pushed
//! out from the ship origin by the aim offset.

use glam::DVec2;
use hecs::World;

use skirmish_core::components::{AimLine, PlayerShip, Transform2};
use skirmish_core::config::ShipTuning;

/// Update the aim line endpoints in world space.
pub fn run(world: &mut World, tuning: &ShipTuning, aim_point: DVec2) {
    for (_entity, (_ship, transform, aim)) in
        world.query_mut::<(&PlayerShip, &Transform2, &mut AimLine)>()
    {
        let line = aim_point - transform.position;
        if line.length_squared() < f64::EPSILON {
            // Aim point on top of the ship: collapse the line
            aim.start = transform.position;
            aim.end = transform.position;
            continue;
        }

        let clamped = line.clamp_length_max(tuning.max_aim_length);
        let direction = line.normalize();
        aim.start = transform.position + direction * tuning.aim_offset;
        aim.end = transform.position + clamped;
    }
}
