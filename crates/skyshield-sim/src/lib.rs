//! Interception simulation engine for SKYSHIELD.
//!
//! Owns the hecs world of threats and interceptors, runs the radar
//! controller at a fixed tick, and produces snapshots and event batches for
//! external consumers.

pub mod controller;
pub mod engine;
pub mod interceptor;
pub mod scenario;
pub mod systems;
pub mod threat;
pub mod world_setup;

pub use controller::RadarController;
pub use engine::{SimulationEngine, TickReport};
pub use skyshield_core as core;
