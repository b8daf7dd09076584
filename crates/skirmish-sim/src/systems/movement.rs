//! Pose integration system.
//!
//! Stand-in for the host engine's rigid-body solver: updates position from
//! linear velocity and rotation from angular velocity each tick. The flight
//! model only ever produces velocities; this is the single place position
//! is written.

use hecs::World;

use skirmish_core::components::{Body, Transform2};
use skirmish_core::constants::DT;

/// Run pose integration for all entities with Transform2 + Body.
pub fn run(world: &mut World) {
    for (_entity, (transform, body)) in world.query_mut::<(&mut Transform2, &Body)>() {
        transform.position += body.linear_velocity * DT;
        transform.rotation += body.angular_velocity * DT;
    }
}
