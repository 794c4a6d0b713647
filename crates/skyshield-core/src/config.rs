//! Scenario configuration: the read-only world description consumed by every
//! component. Built once, validated eagerly, never mutated during a run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{DetectionMode, ThreatClass};
use crate::error::{SimError, SimResult};
use crate::types::Position;

/// Half-open speed range `[min, max)` for one threat class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBounds {
    pub min: f64,
    pub max: f64,
}

/// Per-class speed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassSpeeds {
    pub rocket: SpeedBounds,
    pub mortar: SpeedBounds,
    pub cruise_missile: SpeedBounds,
}

/// Axis-aligned box that random start points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub min: Position,
    pub max: Position,
}

/// One threat in the initial manifest. Missing values are drawn from the
/// seeded RNG when the world is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub class: ThreatClass,
    #[serde(default)]
    pub start: Option<Position>,
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Complete scenario description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// RNG seed for determinism. Same seed = same scenario draws.
    pub seed: u64,
    /// Protected point every threat heads for.
    pub target: Position,
    /// Radar and launcher position.
    pub launcher: Position,
    pub sensor_radius: f64,
    pub detection: DetectionMode,
    /// Seconds per tick.
    pub tick_secs: f64,
    /// A threat closer than this to the target has arrived.
    pub arrival_threshold: f64,
    /// An interceptor closer than this to its threat destroys it.
    pub interception_threshold: f64,
    pub interceptor_speed: f64,
    /// Distance an interceptor may fly before it is expired.
    pub interceptor_max_range: f64,
    pub speeds: ClassSpeeds,
    pub spawn_region: SpawnRegion,
    pub manifest: Vec<ManifestEntry>,
    /// Hard stop for runs that would otherwise never resolve.
    pub max_ticks: u64,
}

impl SpeedBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, speed: f64) -> bool {
        speed >= self.min && speed < self.max
    }
}

impl ClassSpeeds {
    pub fn bounds(&self, class: ThreatClass) -> SpeedBounds {
        match class {
            ThreatClass::Rocket => self.rocket,
            ThreatClass::Mortar => self.mortar,
            ThreatClass::CruiseMissile => self.cruise_missile,
        }
    }
}

impl Default for ClassSpeeds {
    fn default() -> Self {
        Self {
            rocket: SpeedBounds::new(ROCKET_SPEED_MIN, ROCKET_SPEED_MAX),
            mortar: SpeedBounds::new(MORTAR_SPEED_MIN, MORTAR_SPEED_MAX),
            cruise_missile: SpeedBounds::new(CRUISE_MISSILE_SPEED_MIN, CRUISE_MISSILE_SPEED_MAX),
        }
    }
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            min: Position::new(DEFAULT_SPAWN_MIN, DEFAULT_SPAWN_MIN),
            max: Position::new(DEFAULT_SPAWN_MAX, DEFAULT_SPAWN_MAX),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let target = Position::new(DEFAULT_TARGET_X, DEFAULT_TARGET_Y);
        Self {
            seed: 42,
            target,
            launcher: target,
            sensor_radius: DEFAULT_SENSOR_RADIUS,
            detection: DetectionMode::Radius,
            tick_secs: DEFAULT_TICK_SECS,
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
            interception_threshold: DEFAULT_INTERCEPTION_THRESHOLD,
            interceptor_speed: DEFAULT_INTERCEPTOR_SPEED,
            interceptor_max_range: DEFAULT_INTERCEPTOR_MAX_RANGE,
            speeds: ClassSpeeds::default(),
            spawn_region: SpawnRegion::default(),
            manifest: Vec::new(),
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON scenario file.
    pub fn load(path: &Path) -> SimResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> SimResult<()> {
        require_positive("sensor_radius", self.sensor_radius)?;
        require_positive("tick_secs", self.tick_secs)?;
        require_positive("arrival_threshold", self.arrival_threshold)?;
        require_positive("interception_threshold", self.interception_threshold)?;
        require_positive("interceptor_speed", self.interceptor_speed)?;
        require_positive("interceptor_max_range", self.interceptor_max_range)?;

        if self.max_ticks == 0 {
            return Err(invalid("max_ticks must be at least 1"));
        }
        if !self.target.is_finite() || !self.launcher.is_finite() {
            return Err(invalid("target and launcher must be finite"));
        }

        if let DetectionMode::Sweep {
            rate,
            beam_half_width,
        } = self.detection
        {
            require_positive("sweep rate", rate)?;
            require_positive("sweep beam_half_width", beam_half_width)?;
        }

        for class in ThreatClass::ALL {
            let bounds = self.speeds.bounds(class);
            require_positive(&format!("{class:?} minimum speed"), bounds.min)?;
            if !(bounds.max > bounds.min) {
                return Err(invalid(format!(
                    "{class:?} speed bounds are empty: [{}, {})",
                    bounds.min, bounds.max
                )));
            }
        }

        let region = &self.spawn_region;
        if !(region.max.x >= region.min.x && region.max.y >= region.min.y) {
            return Err(invalid("spawn_region max must not be below min"));
        }

        for (index, entry) in self.manifest.iter().enumerate() {
            if let Some(speed) = entry.speed {
                require_positive(&format!("manifest[{index}] speed"), speed)?;
            }
            if let Some(start) = entry.start {
                if !start.is_finite() {
                    return Err(invalid(format!("manifest[{index}] start is not finite")));
                }
                if start == self.target {
                    return Err(invalid(format!(
                        "manifest[{index}] start coincides with the target"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> SimError {
    SimError::InvalidConfig(message.into())
}

fn require_positive(name: &str, value: f64) -> SimResult<()> {
    // NaN fails this comparison too.
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}
