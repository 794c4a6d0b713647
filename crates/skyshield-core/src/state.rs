//! Simulation snapshot: the complete visible state handed to consumers each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{InterceptorId, Position, SimTime, ThreatId};

/// Immutable per-tick view of the world, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub target: Position,
    pub threats: Vec<ThreatView>,
    pub interceptors: Vec<InterceptorView>,
    pub radar: RadarView,
    pub score: ScoreView,
}

/// A live threat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatView {
    pub threat_id: ThreatId,
    pub position: Position,
    pub classification: ThreatClass,
    pub state: ThreatState,
    /// Heading (radians, counter-clockwise from +x).
    pub heading: f64,
    pub speed: f64,
    /// Remaining distance to the protected point.
    pub range_to_target: f64,
}

/// A live interceptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterceptorView {
    pub interceptor_id: InterceptorId,
    pub position: Position,
    pub target_id: ThreatId,
    /// Fixed aim point chosen at launch.
    pub aim_point: Option<Position>,
    pub distance_flown: f64,
}

/// Radar / launcher status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarView {
    pub position: Position,
    pub sensor_radius: f64,
    pub mode: DetectionMode,
    /// Current sweep angle (radians); stays 0 in radius mode.
    pub sweep_angle: f64,
}

/// Running score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub threats_spawned: u32,
    pub threats_intercepted: u32,
    pub threats_arrived: u32,
    pub interceptors_launched: u32,
    pub interceptors_expired: u32,
}
