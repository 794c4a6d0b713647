//! Simulation constants and default tuning parameters.
//!
//! These seed `ScenarioConfig::default()`; a running simulation reads its
//! values from the constructed config, never from here directly.

/// Default tick duration (seconds).
pub const DEFAULT_TICK_SECS: f64 = 1.0;

/// Default tick budget before a run is forcibly ended.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;

// --- Geometry ---

/// Default protected-target point.
pub const DEFAULT_TARGET_X: f64 = 50.0;
pub const DEFAULT_TARGET_Y: f64 = 50.0;

/// Default sensor radius around the radar.
pub const DEFAULT_SENSOR_RADIUS: f64 = 15.0;

/// Distance below which a threat has reached its target.
pub const DEFAULT_ARRIVAL_THRESHOLD: f64 = 5.0;

/// Distance below which an interceptor destroys its threat.
pub const DEFAULT_INTERCEPTION_THRESHOLD: f64 = 1.5;

// --- Interceptor performance ---

/// Interceptor speed (units/second). Independent of threat speed.
pub const DEFAULT_INTERCEPTOR_SPEED: f64 = 1.0;

/// Distance an interceptor may fly before it is expired.
pub const DEFAULT_INTERCEPTOR_MAX_RANGE: f64 = 60.0;

// --- Threat speed bounds (units/second) ---

pub const ROCKET_SPEED_MIN: f64 = 0.1;
pub const ROCKET_SPEED_MAX: f64 = 0.5;

pub const MORTAR_SPEED_MIN: f64 = 0.05;
pub const MORTAR_SPEED_MAX: f64 = 0.2;

pub const CRUISE_MISSILE_SPEED_MIN: f64 = 0.5;
pub const CRUISE_MISSILE_SPEED_MAX: f64 = 1.5;

// --- Spawn region ---

/// Default random-start box: both coordinates drawn from `[MIN, MAX)`.
pub const DEFAULT_SPAWN_MIN: f64 = 0.0;
pub const DEFAULT_SPAWN_MAX: f64 = 20.0;

// --- Sweep radar ---

/// Sweep rate (radians per second): one full rotation every 8 seconds.
pub const SWEEP_RATE: f64 = std::f64::consts::TAU / 8.0;

/// Beam half-width (radians, ~30°).
pub const SWEEP_BEAM_HALF_WIDTH: f64 = std::f64::consts::PI / 6.0;
