//! Kinematic integration system.
//!
//! Every live threat and every aimed interceptor advances by one tick.

use hecs::World;

use crate::interceptor::Interceptor;
use crate::threat::Threat;

/// Advance all threats and interceptors by `dt` seconds.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, threat) in world.query_mut::<&mut Threat>() {
        if threat.is_live() {
            threat.advance(dt);
        }
    }

    for (_entity, interceptor) in world.query_mut::<&mut Interceptor>() {
        interceptor.advance(dt);
    }
}
