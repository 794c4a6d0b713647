//! Cleanup system: the only place entities leave the world.
//!
//! Passes earlier in the tick mark threats dead or queue interceptors for
//! removal; nothing is despawned while a query over the world is live.

use hecs::{Entity, World};

use crate::threat::Threat;

/// Despawn dead threats plus everything queued in `despawn_buffer`.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, threat) in world.query_mut::<&Threat>() {
        if !threat.is_live() {
            despawn_buffer.push(entity);
        }
    }

    // An entity can be queued twice (e.g. orphan + dead threat); the second
    // despawn fails harmlessly.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
