//! Arrival system: threats that reached the protected point got through.

use hecs::World;

use skyshield_core::enums::ThreatState;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::controller::ScoreState;
use crate::threat::Threat;

/// Mark every live threat strictly inside `threshold` of `target` as arrived.
///
/// Arrived threats stay in the world until cleanup, but no later pass in the
/// tick treats them as live.
pub fn run(
    world: &mut World,
    target: &Position,
    threshold: f64,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    let mut arrived = Vec::new();
    for (_entity, threat) in world.query_mut::<&mut Threat>() {
        if threat.is_live() && threat.has_arrived(target, threshold) {
            threat.state = ThreatState::Arrived;
            arrived.push((threat.id, threat.position));
        }
    }

    arrived.sort_by_key(|(id, _)| *id);
    for (threat_id, position) in arrived {
        log::debug!("{threat_id} arrived at {position}");
        score.threats_arrived += 1;
        events.push(SimEvent::ThreatArrived {
            threat_id,
            position,
        });
    }
}
