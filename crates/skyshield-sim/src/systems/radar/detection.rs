//! Radar detection system.
//!
//! Each tick, finds every `Unengaged` threat the radar currently covers.
//! Engaged threats are never reported again, which is what keeps a threat
//! from drawing a second interceptor while it stays in range.

use hecs::{Entity, World};

use skyshield_core::enums::ThreatState;
use skyshield_core::types::{Position, ThreatId};

use super::Radar;
use crate::threat::Threat;

/// A newly detected threat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub entity: Entity,
    pub threat_id: ThreatId,
    /// Threat position at detection; becomes the interceptor's aim point.
    pub position: Position,
}

/// Collect covered, unengaged threats in ascending id order.
pub fn run(world: &World, radar: &Radar) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = world
        .query::<&Threat>()
        .iter()
        .filter(|(_, threat)| threat.state == ThreatState::Unengaged)
        .filter(|(_, threat)| radar.covers(&threat.position))
        .map(|(entity, threat)| Contact {
            entity,
            threat_id: threat.id,
            position: threat.position,
        })
        .collect();

    contacts.sort_by_key(|c| c.threat_id);
    contacts
}
