//! Interceptor entity model: a defensive projectile flying at a fixed aim point.
//!
//! The aim point is the threat's position at the instant of launch. It is set
//! once and never updated, even as the threat keeps moving.

use skyshield_core::geometry;
use skyshield_core::types::{InterceptorId, Position, ThreatId};

/// Fixed aim chosen at launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub point: Position,
    /// Heading in radians from the launch position to `point`.
    pub heading: f64,
}

/// Kinematic state of a defensive projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct Interceptor {
    pub id: InterceptorId,
    /// Identity of the threat this interceptor was launched against.
    pub threat_id: ThreatId,
    /// ECS handle of that threat; used for lookups only, never owns it.
    pub threat_entity: hecs::Entity,
    pub position: Position,
    pub launched_tick: u64,
    speed: f64,
    aim: Option<Aim>,
    distance_flown: f64,
}

impl Interceptor {
    /// A new, unarmed interceptor sitting on the launcher.
    pub fn new(
        id: InterceptorId,
        threat_id: ThreatId,
        threat_entity: hecs::Entity,
        launcher: Position,
        speed: f64,
        launched_tick: u64,
    ) -> Self {
        Self {
            id,
            threat_id,
            threat_entity,
            position: launcher,
            launched_tick,
            speed,
            aim: None,
            distance_flown: 0.0,
        }
    }

    /// Fix the aim point. Only the first call has any effect; returns whether
    /// this call armed the interceptor.
    pub fn aim_at(&mut self, point: Position) -> bool {
        if self.aim.is_some() {
            return false;
        }
        self.aim = Some(Aim {
            point,
            heading: geometry::direction_angle(&self.position, &point),
        });
        true
    }

    pub fn aim(&self) -> Option<Aim> {
        self.aim
    }

    pub fn is_aimed(&self) -> bool {
        self.aim.is_some()
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn distance_flown(&self) -> f64 {
        self.distance_flown
    }

    /// Fly one step along the fixed heading. No-op while unarmed.
    pub fn advance(&mut self, dt: f64) {
        let Some(aim) = self.aim else {
            return;
        };
        let step = self.speed * dt;
        self.position = self.position.advanced(aim.heading, step);
        self.distance_flown += step;
    }

    /// Strictly inside the interception threshold of the threat.
    pub fn has_intercepted(&self, threat_position: &Position, threshold: f64) -> bool {
        geometry::within_threshold(&self.position, threat_position, threshold)
    }

    /// Flown farther than `max_range` without a kill.
    pub fn is_spent(&self, max_range: f64) -> bool {
        self.distance_flown > max_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn unarmed() -> Interceptor {
        let mut world = hecs::World::new();
        let threat_entity = world.spawn((0u8,));
        Interceptor::new(
            InterceptorId(0),
            ThreatId(0),
            threat_entity,
            Position::new(0.0, 0.0),
            2.0,
            0,
        )
    }

    #[test]
    fn test_unarmed_does_not_move() {
        let mut i = unarmed();
        i.advance(1.0);
        assert_eq!(i.position, Position::new(0.0, 0.0));
        assert_eq!(i.distance_flown(), 0.0);
    }

    #[test]
    fn test_aim_is_fixed_after_first_call() {
        let mut i = unarmed();
        assert!(i.aim_at(Position::new(0.0, 10.0)));
        assert!(!i.aim_at(Position::new(10.0, 0.0)));
        let aim = i.aim().unwrap();
        assert_eq!(aim.point, Position::new(0.0, 10.0));
        assert!((aim.heading - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_advance_flies_past_aim_point() {
        let mut i = unarmed();
        i.aim_at(Position::new(0.0, 3.0));
        for _ in 0..3 {
            i.advance(1.0);
        }
        // Aim point is not a stopping point.
        assert!((i.position.y - 6.0).abs() < 1e-12);
        assert!(i.position.x.abs() < 1e-12);
        assert!((i.distance_flown() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_interception_threshold_is_strict() {
        let mut i = unarmed();
        i.aim_at(Position::new(1.0, 0.0));
        i.advance(1.0);
        assert!(!i.has_intercepted(&Position::new(3.0, 0.0), 1.0));
        assert!(i.has_intercepted(&Position::new(2.5, 0.0), 1.0));
    }

    #[test]
    fn test_spent_after_max_range() {
        let mut i = unarmed();
        i.aim_at(Position::new(1.0, 0.0));
        for _ in 0..5 {
            i.advance(1.0);
        }
        assert!(!i.is_spent(10.0));
        i.advance(1.0);
        assert!(i.is_spent(10.0));
    }
}
