//! Scenario draws and initial world population.
//!
//! All randomness in a run lives here: start points and speeds missing from
//! the manifest (or from a spawn command) are drawn from the engine's seeded
//! RNG. Tick-time physics never draws.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::config::{ManifestEntry, ScenarioConfig, SpawnRegion, SpeedBounds};
use skyshield_core::enums::ThreatClass;
use skyshield_core::error::SimResult;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::controller::RadarController;

/// A fully resolved threat launch: nothing left to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatLaunch {
    pub class: ThreatClass,
    pub start: Position,
    pub speed: f64,
}

/// Draw a start point uniformly from the spawn region.
pub fn draw_start(rng: &mut ChaCha8Rng, region: &SpawnRegion) -> Position {
    Position::new(
        draw_in(rng, region.min.x, region.max.x),
        draw_in(rng, region.min.y, region.max.y),
    )
}

/// Draw a speed from the half-open class bounds.
pub fn draw_speed(rng: &mut ChaCha8Rng, bounds: &SpeedBounds) -> f64 {
    rng.gen_range(bounds.min..bounds.max)
}

fn draw_in(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Fill in whatever a manifest entry leaves open. Draw order is start
/// (x, then y) then speed, so a given seed always yields the same scenario.
pub fn resolve(
    rng: &mut ChaCha8Rng,
    config: &ScenarioConfig,
    class: ThreatClass,
    start: Option<Position>,
    speed: Option<f64>,
) -> ThreatLaunch {
    let start = start.unwrap_or_else(|| draw_start(rng, &config.spawn_region));
    let speed = speed.unwrap_or_else(|| draw_speed(rng, &config.speeds.bounds(class)));
    ThreatLaunch {
        class,
        start,
        speed,
    }
}

/// Resolve the whole manifest in order.
pub fn resolve_manifest(rng: &mut ChaCha8Rng, config: &ScenarioConfig) -> Vec<ThreatLaunch> {
    config
        .manifest
        .iter()
        .map(|entry: &ManifestEntry| resolve(rng, config, entry.class, entry.start, entry.speed))
        .collect()
}

/// Spawn every manifest threat at tick 0.
pub fn populate(
    controller: &mut RadarController,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) -> SimResult<()> {
    let launches = resolve_manifest(rng, controller.config());
    for launch in launches {
        controller.spawn_threat(launch.class, launch.start, launch.speed, 0, events)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_draws_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let config = ScenarioConfig::default();
        for _ in 0..200 {
            let start = draw_start(&mut rng, &config.spawn_region);
            assert!((0.0..20.0).contains(&start.x));
            assert!((0.0..20.0).contains(&start.y));
            let speed = draw_speed(&mut rng, &config.speeds.rocket);
            assert!(config.speeds.rocket.contains(speed));
        }
    }

    #[test]
    fn test_explicit_values_are_not_drawn() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = ScenarioConfig::default();
        let launch = resolve(
            &mut rng,
            &config,
            ThreatClass::Mortar,
            Some(Position::new(1.0, 2.0)),
            Some(0.15),
        );
        assert_eq!(launch.start, Position::new(1.0, 2.0));
        assert_eq!(launch.speed, 0.15);

        // Nothing consumed: the next draw matches a fresh RNG.
        let mut fresh = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            draw_start(&mut rng, &config.spawn_region),
            draw_start(&mut fresh, &config.spawn_region)
        );
    }

    #[test]
    fn test_same_seed_same_manifest() {
        let config = ScenarioConfig {
            manifest: vec![ManifestEntry::default(); 5],
            ..Default::default()
        };
        let a = resolve_manifest(&mut ChaCha8Rng::seed_from_u64(77), &config);
        let b = resolve_manifest(&mut ChaCha8Rng::seed_from_u64(77), &config);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_degenerate_region_is_a_point() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let region = SpawnRegion {
            min: Position::new(4.0, 4.0),
            max: Position::new(4.0, 4.0),
        };
        assert_eq!(draw_start(&mut rng, &region), Position::new(4.0, 4.0));
    }
}
