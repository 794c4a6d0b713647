//! Discrete events emitted by the simulation, in emission order, once per tick.
//!
//! Consumers (renderer, scorer, logger) read these; none of them feed back.

use serde::{Deserialize, Serialize};

use crate::enums::{EndReason, ThreatClass};
use crate::types::{InterceptorId, Position, ThreatId};

/// Everything the core reports about a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A threat entered the world (manifest entry or spawn command).
    ThreatSpawned {
        threat_id: ThreatId,
        class: ThreatClass,
        position: Position,
        speed: f64,
    },
    /// Radar picked up an unengaged threat.
    ThreatDetected { threat_id: ThreatId },
    /// An interceptor left the launcher, aimed at the threat's current position.
    InterceptorLaunched {
        interceptor_id: InterceptorId,
        threat_id: ThreatId,
        aim_point: Position,
    },
    /// Interceptor and threat destroyed together.
    ThreatIntercepted {
        threat_id: ThreatId,
        interceptor_id: InterceptorId,
        position: Position,
    },
    /// Threat got through to the protected point.
    ThreatArrived {
        threat_id: ThreatId,
        position: Position,
    },
    /// Interceptor flew past its maximum range without a kill.
    InterceptorExpired {
        interceptor_id: InterceptorId,
        threat_id: ThreatId,
    },
    /// The run is over; always the last event of a run.
    SimulationEnded { reason: EndReason },
}

impl SimEvent {
    /// Threat this event refers to, if any.
    pub fn threat_id(&self) -> Option<ThreatId> {
        match self {
            SimEvent::ThreatSpawned { threat_id, .. }
            | SimEvent::ThreatDetected { threat_id }
            | SimEvent::InterceptorLaunched { threat_id, .. }
            | SimEvent::ThreatIntercepted { threat_id, .. }
            | SimEvent::ThreatArrived { threat_id, .. }
            | SimEvent::InterceptorExpired { threat_id, .. } => Some(*threat_id),
            SimEvent::SimulationEnded { .. } => None,
        }
    }
}

/// An event stamped with the tick it was emitted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: u64,
    pub event: SimEvent,
}
