//! Vector and geometry helpers used by detection, arrival and interception tests.
//!
//! The strict/non-strict comparisons here are load-bearing: sensor coverage is
//! inclusive (`<=`), arrival and interception thresholds are exclusive (`<`).

use std::f64::consts::TAU;

use crate::types::Position;

/// Euclidean distance between two points.
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.range_to(b)
}

/// Direction angle from `from` to `to` in radians (`atan2(dy, dx)`).
pub fn direction_angle(from: &Position, to: &Position) -> f64 {
    from.heading_to(to)
}

/// Inclusive radius test: `distance(point, center) <= radius`.
pub fn within_radius(point: &Position, center: &Position, radius: f64) -> bool {
    distance(point, center) <= radius
}

/// Exclusive threshold test: `distance(point, center) < threshold`.
pub fn within_threshold(point: &Position, center: &Position, threshold: f64) -> bool {
    distance(point, center) < threshold
}

/// Normalize an angle into `[0, TAU)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// True if `angle` lies within `half_width` of `center` (both radians, wrap-aware).
pub fn angle_within(angle: f64, center: f64, half_width: f64) -> bool {
    let diff = (angle - center).rem_euclid(TAU);
    diff <= half_width || diff >= TAU - half_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_distance_345() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_angle_axes() {
        let o = Position::default();
        assert!(direction_angle(&o, &Position::new(1.0, 0.0)).abs() < 1e-12);
        assert!((direction_angle(&o, &Position::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((direction_angle(&o, &Position::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_radius_is_inclusive() {
        let c = Position::default();
        let edge = Position::new(10.0, 0.0);
        assert!(within_radius(&edge, &c, 10.0));
        assert!(!within_radius(&Position::new(10.000_001, 0.0), &c, 10.0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let c = Position::default();
        let edge = Position::new(5.0, 0.0);
        assert!(!within_threshold(&edge, &c, 5.0));
        assert!(within_threshold(&Position::new(4.999, 0.0), &c, 5.0));
    }

    #[test]
    fn test_angle_within_wraps() {
        // 350° and 5° are 15° apart across the zero line.
        let a = 350.0_f64.to_radians();
        let b = 5.0_f64.to_radians();
        assert!(angle_within(a, b, 20.0_f64.to_radians()));
        assert!(!angle_within(a, b, 10.0_f64.to_radians()));
    }

    #[test]
    fn test_advanced_moves_along_heading() {
        let p = Position::new(1.0, 1.0).advanced(FRAC_PI_2, 2.0);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
    }
}
