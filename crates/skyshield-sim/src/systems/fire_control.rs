//! Fire control system: turns radar contacts into launched interceptors.
//!
//! Exactly one interceptor per engagement: a contact is only acted on while its
//! threat is still `Unengaged` and no interceptor already carries its id.

use std::collections::HashSet;

use hecs::World;

use skyshield_core::enums::ThreatState;
use skyshield_core::events::SimEvent;
use skyshield_core::types::{InterceptorId, Position, ThreatId};

use super::radar::detection::Contact;
use crate::controller::ScoreState;
use crate::interceptor::Interceptor;
use crate::threat::Threat;

/// Launcher parameters needed to fire.
#[derive(Debug, Clone, Copy)]
pub struct Launcher {
    pub position: Position,
    pub interceptor_speed: f64,
}

/// Engage each contact: mark its threat `Engaged`, then spawn one interceptor
/// at the launcher aimed at the contact's current position.
pub fn run(
    world: &mut World,
    contacts: &[Contact],
    launcher: &Launcher,
    next_interceptor_id: &mut u32,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
    current_tick: u64,
) {
    if contacts.is_empty() {
        return;
    }

    let pursued: HashSet<ThreatId> = world
        .query::<&Interceptor>()
        .iter()
        .map(|(_, interceptor)| interceptor.threat_id)
        .collect();

    for contact in contacts {
        if pursued.contains(&contact.threat_id) {
            continue;
        }

        // Identity check, not position: the contact must still name an
        // unengaged threat.
        match world.get::<&mut Threat>(contact.entity) {
            Ok(mut threat) if threat.id == contact.threat_id => {
                if threat.state != ThreatState::Unengaged {
                    continue;
                }
                threat.state = ThreatState::Engaged;
            }
            _ => continue,
        }
        events.push(SimEvent::ThreatDetected {
            threat_id: contact.threat_id,
        });

        let interceptor_id = InterceptorId(*next_interceptor_id);
        *next_interceptor_id += 1;

        let mut interceptor = Interceptor::new(
            interceptor_id,
            contact.threat_id,
            contact.entity,
            launcher.position,
            launcher.interceptor_speed,
            current_tick,
        );
        interceptor.aim_at(contact.position);
        world.spawn((interceptor,));

        score.interceptors_launched += 1;
        log::debug!(
            "tick {current_tick}: {interceptor_id} launched at {} aiming {}",
            contact.threat_id,
            contact.position
        );
        events.push(SimEvent::InterceptorLaunched {
            interceptor_id,
            threat_id: contact.threat_id,
            aim_point: contact.position,
        });
    }
}
