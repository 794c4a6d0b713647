//! Core types and definitions for the SKYSHIELD interception simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, ids, commands, state snapshots, events, scenario configuration
//! and constants. It holds no simulation state of its own.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
