//! Simulation engine — the core of the prototype.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use log::{debug, info};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{EnergyBank, LaserWeapon};
use skirmish_core::config::ShipTuning;
use skirmish_core::enums::{GamePhase, RechargePolicy};
use skirmish_core::events::ShipEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub tuning: ShipTuning,
}

/// Continuous input state, updated by commands and consumed by systems
/// each tick. Discrete actions (shield toggle, recharge) are handled at
/// the command boundary instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Raw axis-summed thrust input.
    pub thrust: DVec2,
    /// World-space aim point (e.g. the mouse cursor).
    pub aim_point: DVec2,
    /// Laser trigger held.
    pub firing: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: ShipTuning,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<ShipEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            tuning: config.tuning,
            input: InputState::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.tuning, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the active tuning.
    pub fn tuning(&self) -> &ShipTuning {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::Idle {
                    world_setup::setup_session(&mut self.world, &self.tuning);
                    self.time = SimTime::default();
                    self.input = InputState::default();
                    self.phase = GamePhase::Active;
                    info!("session started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetThrust { x, y } => {
                self.input.thrust = DVec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
            }
            PlayerCommand::SetAimPoint { x, y } => {
                self.input.aim_point = DVec2::new(x, y);
            }
            PlayerCommand::SetFiring { firing } => {
                self.input.firing = firing;
            }
            PlayerCommand::ReportBeamHit { x, y } => {
                for (_entity, laser) in self.world.query_mut::<&mut LaserWeapon>() {
                    laser.hit_point = Some(DVec2::new(x, y));
                }
            }
            PlayerCommand::ClearBeamHit => {
                for (_entity, laser) in self.world.query_mut::<&mut LaserWeapon>() {
                    laser.hit_point = None;
                }
            }
            PlayerCommand::ToggleShield => {
                systems::shield::toggle(&mut self.world, &mut self.events);
            }
            PlayerCommand::Recharge { amount } => {
                self.handle_recharge(amount);
            }
        }
    }

    /// Restore energy from an external source. The sim never recharges on
    /// its own; this is the host-driven hook that clears depletion.
    fn handle_recharge(&mut self, amount: f64) {
        if self.tuning.recharge_policy == RechargePolicy::Disabled || amount <= 0.0 {
            return;
        }
        for (_entity, energy) in self.world.query_mut::<&mut EnergyBank>() {
            let before = energy.current;
            energy.current = (energy.current + amount).clamp(0.0, energy.total);
            let applied = energy.current - before;
            if applied > 0.0 {
                // Re-arm the depletion edge
                energy.depleted = false;
                self.events.push(ShipEvent::EnergyRecharged { amount: applied });
                debug!("recharged {applied:.2} energy");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Flight + energy model
        systems::flight::run(
            &mut self.world,
            &self.tuning,
            &self.input,
            self.time.tick,
            &mut self.events,
        );
        // 2. Pose integration
        systems::movement::run(&mut self.world);
        // 3. Laser trigger edges + beam width animation
        systems::weapon::run(&mut self.world, &self.tuning, self.input.firing, &mut self.events);
        // 4. Aim guide line
        systems::aim::run(&mut self.world, &self.tuning, self.input.aim_point);
    }
}
