//! SKIRMISH headless host.
//!
//! This crate wires the simulation crates to a minimal host: a fixed-rate
//! game loop thread, a JSON command channel on stdin, and a text HUD
//! rendered through the logger.

pub mod game_loop;
pub mod hud;
pub mod state;

pub use skirmish_core as core;
