//! Text HUD formatting.
//!
//! Renders the same readouts the prototype HUD showed: speed label,
//! direction arrow (as a rotation readout), and the energy bar.

use skirmish_core::state::GameStateSnapshot;

/// Width of the text energy bar in characters.
const ENERGY_BAR_WIDTH: usize = 20;

/// Format a one-line HUD readout for a snapshot.
pub fn format_hud(snapshot: &GameStateSnapshot) -> String {
    let ship = &snapshot.ship;
    format!(
        "t={:.1}s | {:.3} µ/s | dir {:>6.1}° | energy {:.2}/{:.0} [{}]{}{}",
        snapshot.time.elapsed_secs,
        ship.speed,
        ship.rotation.to_degrees(),
        ship.current_energy,
        ship.total_energy,
        energy_bar(ship.current_energy, ship.total_energy),
        if ship.energy_depleted { " DEPLETED" } else { "" },
        if snapshot.laser.firing { " FIRING" } else { "" },
    )
}

/// Render the energy bar as filled/empty characters.
fn energy_bar(current: f64, total: f64) -> String {
    let fraction = if total > 0.0 {
        (current / total).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * ENERGY_BAR_WIDTH as f64).round() as usize;
    let mut bar = String::with_capacity(ENERGY_BAR_WIDTH);
    for i in 0..ENERGY_BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::state::GameStateSnapshot;

    #[test]
    fn test_energy_bar_bounds() {
        assert_eq!(energy_bar(0.0, 130.0), "-".repeat(20));
        assert_eq!(energy_bar(130.0, 130.0), "#".repeat(20));
        // Degenerate capacity must not divide by zero
        assert_eq!(energy_bar(10.0, 0.0), "-".repeat(20));
    }

    #[test]
    fn test_format_hud_contains_readouts() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.ship.current_energy = 90.0;
        snapshot.ship.total_energy = 130.0;
        snapshot.ship.speed = 12.345;

        let line = format_hud(&snapshot);
        assert!(line.contains("12.345 µ/s"));
        assert!(line.contains("90.00/130"));
        assert!(!line.contains("DEPLETED"));

        snapshot.ship.energy_depleted = true;
        assert!(format_hud(&snapshot).contains("DEPLETED"));
    }
}
