#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::config::ShipTuning;
    use crate::enums::*;
    use crate::events::ShipEvent;
    use crate::math;
    use crate::state::GameStateSnapshot;
    use crate::types::{Rgba, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Idle, GamePhase::Active, GamePhase::Paused];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_strategy_enums_serde() {
        for v in [FlightMode::Realistic, FlightMode::Arcade] {
            let json = serde_json::to_string(&v).unwrap();
            let back: FlightMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        for v in [RotationPolicy::Smoothed, RotationPolicy::Clamped] {
            let json = serde_json::to_string(&v).unwrap();
            let back: RotationPolicy = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        for v in [ControlFrame::ShipRelative, ControlFrame::Absolute] {
            let json = serde_json::to_string(&v).unwrap();
            let back: ControlFrame = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        for v in [RechargePolicy::External, RechargePolicy::Disabled] {
            let json = serde_json::to_string(&v).unwrap();
            let back: RechargePolicy = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartSession,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::SetThrust { x: 0.5, y: -1.0 },
            PlayerCommand::SetAimPoint { x: 120.0, y: -35.0 },
            PlayerCommand::SetFiring { firing: true },
            PlayerCommand::ReportBeamHit { x: 300.0, y: 40.0 },
            PlayerCommand::ClearBeamHit,
            PlayerCommand::ToggleShield,
            PlayerCommand::Recharge { amount: 25.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify ShipEvent round-trips through serde.
    #[test]
    fn test_ship_event_serde() {
        let events = vec![
            ShipEvent::EnergyDepleted { tick: 42 },
            ShipEvent::EnergyRecharged { amount: 10.0 },
            ShipEvent::LaserOn,
            ShipEvent::LaserOff,
            ShipEvent::ShieldRaised,
            ShipEvent::ShieldLowered,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: ShipEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Tuning deserializes from partial JSON, filling the rest with defaults.
    #[test]
    fn test_tuning_partial_overrides() {
        let tuning: ShipTuning =
            serde_json::from_str(r#"{"total_energy": 200.0, "flight_mode": "Arcade"}"#).unwrap();
        assert_eq!(tuning.total_energy, 200.0);
        assert_eq!(tuning.flight_mode, FlightMode::Arcade);
        // Untouched fields keep their defaults
        assert_eq!(tuning.initial_energy, 90.0);
        assert_eq!(tuning.consumption_rate, 0.02);
        assert_eq!(tuning.laser_color, Rgba::RED);
    }

    #[test]
    fn test_tuning_defaults_match_observed() {
        let tuning = ShipTuning::default();
        assert_eq!(tuning.total_energy, 130.0);
        assert_eq!(tuning.initial_energy, 90.0);
        assert_eq!(tuning.lateral_thrust_factor, 0.3);
        assert_eq!(tuning.max_aim_length, 150.0);
        assert_eq!(tuning.aim_offset, 25.0);
        assert_eq!(tuning.laser_range, 10_000.0);
        assert_eq!(tuning.full_power_laser_width, 15.0);
    }

    // ---- Math helpers ----

    #[test]
    fn test_move_toward_caps_step() {
        let from = DVec2::ZERO;
        let to = DVec2::new(10.0, 0.0);
        let stepped = math::move_toward(from, to, 3.0);
        assert!((stepped.x - 3.0).abs() < 1e-12);

        // Within range: lands exactly on target, no overshoot
        let close = math::move_toward(DVec2::new(9.5, 0.0), to, 3.0);
        assert_eq!(close, to);
    }

    #[test]
    fn test_move_toward_zero_distance() {
        let p = DVec2::new(2.0, -7.0);
        assert_eq!(math::move_toward(p, p, 1.0), p);
    }

    #[test]
    fn test_move_toward_scalar() {
        assert_eq!(math::move_toward_scalar(0.0, 10.0, 4.0), 4.0);
        assert_eq!(math::move_toward_scalar(8.0, 10.0, 4.0), 10.0);
        assert_eq!(math::move_toward_scalar(10.0, 0.0, 4.0), 6.0);
    }

    #[test]
    fn test_wrap_angle() {
        use std::f64::consts::PI;
        assert!((math::wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert!((math::wrap_angle(-3.0 * PI) - PI).abs() < 1e-12);
        assert!((math::wrap_angle(0.5) - 0.5).abs() < 1e-12);
        assert!((math::wrap_angle(-0.5) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_angle_shortest_path() {
        use std::f64::consts::PI;
        // From just below TAU toward just above zero: should cross zero,
        // not sweep the long way around.
        let from = 2.0 * PI - 0.1;
        let to = 0.1;
        let mid = math::lerp_angle(from, to, 0.5);
        assert!((math::wrap_angle(mid)).abs() < 1e-9);
    }

    #[test]
    fn test_angle_to_point() {
        use std::f64::consts::FRAC_PI_2;
        let origin = DVec2::ZERO;
        let up = DVec2::new(0.0, 10.0);
        let angle = math::angle_to_point(origin, up).unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-12);

        // Coincident points have no direction
        assert!(math::angle_to_point(origin, origin).is_none());
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }
}
