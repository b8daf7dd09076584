//! Energy shield toggle.
//!
//! An independent ON/OFF state machine driven by edge-triggered toggle
//! commands. The shield owns its collider-enabled and sprite-visible
//! flags; the host mirrors them onto the actual scene nodes.

use hecs::World;

use skirmish_core::components::{EnergyShield, PlayerShip};
use skirmish_core::events::ShipEvent;

/// Toggle the shield. Called at the command boundary, not per tick.
pub fn toggle(world: &mut World, events: &mut Vec<ShipEvent>) {
    for (_entity, (_ship, shield)) in world.query_mut::<(&PlayerShip, &mut EnergyShield)>() {
        if shield.raised {
            lower(shield);
            events.push(ShipEvent::ShieldLowered);
        } else {
            raise(shield);
            events.push(ShipEvent::ShieldRaised);
        }
    }
}

fn raise(shield: &mut EnergyShield) {
    shield.raised = true;
    shield.collider_enabled = true;
    shield.sprite_visible = true;
}

fn lower(shield: &mut EnergyShield) {
    shield.raised = false;
    shield.collider_enabled = false;
    shield.sprite_visible = false;
}
