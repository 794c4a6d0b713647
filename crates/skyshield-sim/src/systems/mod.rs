//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; the controller calls them in a fixed order.

pub mod arrival;
pub mod cleanup;
pub mod fire_control;
pub mod intercept;
pub mod movement;
pub mod radar;
pub mod snapshot;
