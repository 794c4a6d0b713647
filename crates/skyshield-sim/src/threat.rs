//! Threat entity model: an incoming projectile on a fixed heading.

use skyshield_core::enums::{ThreatClass, ThreatState};
use skyshield_core::error::{SimError, SimResult};
use skyshield_core::geometry;
use skyshield_core::types::{Position, ThreatId};

/// Kinematic state of an incoming projectile.
///
/// Heading and speed are fixed at construction. Only `position` and the
/// engagement `state` change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Threat {
    pub id: ThreatId,
    pub class: ThreatClass,
    pub position: Position,
    pub target: Position,
    /// Tick on which the threat entered the world.
    pub spawned_tick: u64,
    pub state: ThreatState,
    heading: f64,
    speed: f64,
}

impl Threat {
    /// Build a threat heading from `start` straight at `target`.
    ///
    /// Fails with `InvalidConfig` for a non-finite start or target, a
    /// non-positive speed, or when `start` and `target` coincide (the heading
    /// would be undefined).
    pub fn new(
        id: ThreatId,
        class: ThreatClass,
        start: Position,
        target: Position,
        speed: f64,
        spawned_tick: u64,
    ) -> SimResult<Self> {
        if !start.is_finite() || !target.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "threat {id} needs finite start and target, got {start} -> {target}"
            )));
        }
        if !(speed > 0.0) || !speed.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "threat {id} speed must be positive, got {speed}"
            )));
        }
        if start == target {
            return Err(SimError::InvalidConfig(format!(
                "threat {id} starts on its target {target}"
            )));
        }

        Ok(Self {
            id,
            class,
            position: start,
            target,
            spawned_tick,
            state: ThreatState::Unengaged,
            heading: geometry::direction_angle(&start, &target),
            speed,
        })
    }

    /// Heading in radians (counter-clockwise from +x).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Move one step of `dt` seconds along the fixed heading.
    ///
    /// A step that would overshoot lands exactly on the target instead.
    /// Without that clamp an overshooting step would leave the threat past
    /// its target and farther away than before, so range to target would
    /// stop being monotonic; it also keeps a fast threat from skipping over
    /// the arrival zone.
    pub fn advance(&mut self, dt: f64) {
        let step = self.speed * dt;
        let remaining = self.distance_to(&self.target);
        if step >= remaining {
            self.position = self.target;
        } else {
            self.position = self.position.advanced(self.heading, step);
        }
    }

    pub fn distance_to(&self, point: &Position) -> f64 {
        geometry::distance(&self.position, point)
    }

    /// Strictly inside the arrival threshold.
    pub fn has_arrived(&self, target: &Position, threshold: f64) -> bool {
        geometry::within_threshold(&self.position, target, threshold)
    }

    /// Still flying (neither destroyed nor arrived).
    pub fn is_live(&self) -> bool {
        matches!(self.state, ThreatState::Unengaged | ThreatState::Engaged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn threat(start: Position, target: Position, speed: f64) -> Threat {
        Threat::new(ThreatId(0), ThreatClass::Rocket, start, target, speed, 0).unwrap()
    }

    #[test]
    fn test_heading_from_start_to_target() {
        let t = threat(Position::new(0.0, 0.0), Position::new(50.0, 50.0), 0.3);
        assert!((t.heading() - FRAC_PI_4).abs() < 1e-12);
        assert_eq!(t.state, ThreatState::Unengaged);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        for speed in [0.0, -1.0, f64::NAN] {
            let result = Threat::new(
                ThreatId(0),
                ThreatClass::Rocket,
                Position::new(0.0, 0.0),
                Position::new(1.0, 0.0),
                speed,
                0,
            );
            assert!(
                matches!(result, Err(SimError::InvalidConfig(_))),
                "speed {speed} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_points() {
        let ok = Position::new(1.0, 1.0);
        for bad in [
            Position::new(f64::NAN, 0.0),
            Position::new(0.0, f64::INFINITY),
            Position::new(f64::NEG_INFINITY, 2.0),
        ] {
            let from_bad = Threat::new(ThreatId(0), ThreatClass::Rocket, bad, ok, 1.0, 0);
            assert!(
                matches!(from_bad, Err(SimError::InvalidConfig(_))),
                "start {bad} should be rejected"
            );
            let to_bad = Threat::new(ThreatId(0), ThreatClass::Rocket, ok, bad, 1.0, 0);
            assert!(
                matches!(to_bad, Err(SimError::InvalidConfig(_))),
                "target {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_coincident_start_and_target() {
        let p = Position::new(3.0, 3.0);
        let result = Threat::new(ThreatId(0), ThreatClass::Mortar, p, p, 1.0, 0);
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_advance_moves_speed_times_dt() {
        let mut t = threat(Position::new(0.0, 0.0), Position::new(100.0, 0.0), 2.0);
        t.advance(0.5);
        assert!((t.position.x - 1.0).abs() < 1e-12);
        assert!(t.position.y.abs() < 1e-12);
    }

    #[test]
    fn test_distance_never_increases() {
        let target = Position::new(50.0, 50.0);
        let mut t = threat(Position::new(3.0, 17.0), target, 7.0);
        let mut last = t.distance_to(&target);
        for _ in 0..40 {
            t.advance(1.0);
            let d = t.distance_to(&target);
            assert!(d <= last, "distance grew from {last} to {d}");
            last = d;
        }
        assert_eq!(t.position, target, "fast threat should settle on its target");
    }

    #[test]
    fn test_arrival_threshold_is_strict() {
        let target = Position::new(0.0, 0.0);
        let mut t = threat(Position::new(10.0, 0.0), target, 5.0);
        t.advance(1.0);
        assert!((t.distance_to(&target) - 5.0).abs() < 1e-12);
        assert!(!t.has_arrived(&target, 5.0));
        t.advance(0.1);
        assert!(t.has_arrived(&target, 5.0));
    }
}
