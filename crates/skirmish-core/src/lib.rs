//! Core types and definitions for the SKIRMISH prototype.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, tuning, and constants.
//! It has no dependency on any runtime framework or renderer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod math;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
