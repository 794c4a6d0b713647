//! Snapshot system: queries the world and builds a complete `SimSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skyshield_core::enums::SimPhase;
use skyshield_core::state::*;
use skyshield_core::types::{Position, SimTime};

use super::radar::Radar;
use crate::controller::ScoreState;
use crate::interceptor::Interceptor;
use crate::threat::Threat;

/// Build a snapshot of the current world state, ordered by id.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    target: &Position,
    radar: &Radar,
    score: &ScoreState,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        target: *target,
        threats: build_threats(world),
        interceptors: build_interceptors(world),
        radar: radar.view(),
        score: score.view(),
    }
}

fn build_threats(world: &World) -> Vec<ThreatView> {
    let mut threats: Vec<ThreatView> = world
        .query::<&Threat>()
        .iter()
        .map(|(_, threat)| ThreatView {
            threat_id: threat.id,
            position: threat.position,
            classification: threat.class,
            state: threat.state,
            heading: threat.heading(),
            speed: threat.speed(),
            range_to_target: threat.distance_to(&threat.target),
        })
        .collect();

    threats.sort_by_key(|t| t.threat_id);
    threats
}

fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<&Interceptor>()
        .iter()
        .map(|(_, interceptor)| InterceptorView {
            interceptor_id: interceptor.id,
            position: interceptor.position,
            target_id: interceptor.threat_id,
            aim_point: interceptor.aim().map(|aim| aim.point),
            distance_flown: interceptor.distance_flown(),
        })
        .collect();

    interceptors.sort_by_key(|i| i.interceptor_id);
    interceptors
}
