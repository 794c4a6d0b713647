//! Intercept evaluation system: proximity kills, range expiry, orphan removal.

use hecs::{Entity, World};

use skyshield_core::enums::ThreatState;
use skyshield_core::events::SimEvent;
use skyshield_core::types::{InterceptorId, Position, ThreatId};

use crate::controller::ScoreState;
use crate::interceptor::Interceptor;
use crate::threat::Threat;

/// What happened to one interceptor this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    /// Within the interception threshold of its threat.
    Hit(Position),
    /// Flew past its maximum range.
    Expired,
    /// Its threat is gone or no longer engaged (e.g. arrived this tick).
    Orphaned,
}

/// Run the intercept system.
///
/// Evaluation is read-only over the world; state changes and despawn requests
/// are applied afterwards in interceptor id order.
pub fn run(
    world: &mut World,
    interception_threshold: f64,
    max_range: f64,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut outcomes: Vec<(InterceptorId, Entity, ThreatId, Entity, Outcome)> = Vec::new();
    {
        let mut query = world.query::<&Interceptor>();
        for (entity, interceptor) in query.iter() {
            let outcome = match world.get::<&Threat>(interceptor.threat_entity) {
                Ok(threat)
                    if threat.id == interceptor.threat_id
                        && threat.state == ThreatState::Engaged =>
                {
                    if interceptor.has_intercepted(&threat.position, interception_threshold) {
                        Outcome::Hit(threat.position)
                    } else if interceptor.is_spent(max_range) {
                        Outcome::Expired
                    } else {
                        continue;
                    }
                }
                _ => Outcome::Orphaned,
            };
            outcomes.push((
                interceptor.id,
                entity,
                interceptor.threat_id,
                interceptor.threat_entity,
                outcome,
            ));
        }
    }

    outcomes.sort_by_key(|(id, ..)| *id);

    for (interceptor_id, entity, threat_id, threat_entity, outcome) in outcomes {
        despawn_buffer.push(entity);
        match outcome {
            Outcome::Hit(position) => {
                if let Ok(mut threat) = world.get::<&mut Threat>(threat_entity) {
                    threat.state = ThreatState::Destroyed;
                }
                score.threats_intercepted += 1;
                log::debug!("{interceptor_id} destroyed {threat_id} at {position}");
                events.push(SimEvent::ThreatIntercepted {
                    threat_id,
                    interceptor_id,
                    position,
                });
            }
            Outcome::Expired => {
                // The threat becomes eligible for a fresh launch next tick.
                if let Ok(mut threat) = world.get::<&mut Threat>(threat_entity) {
                    threat.state = ThreatState::Unengaged;
                }
                score.interceptors_expired += 1;
                log::debug!("{interceptor_id} expired chasing {threat_id}");
                events.push(SimEvent::InterceptorExpired {
                    interceptor_id,
                    threat_id,
                });
            }
            Outcome::Orphaned => {
                log::trace!("{interceptor_id} lost {threat_id}, removing");
            }
        }
    }
}
