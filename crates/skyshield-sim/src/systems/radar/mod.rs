//! Radar: coverage geometry, sweep rotation and detection of unengaged threats.

pub mod detection;

use skyshield_core::config::ScenarioConfig;
use skyshield_core::enums::DetectionMode;
use skyshield_core::geometry;
use skyshield_core::state::RadarView;
use skyshield_core::types::Position;

/// Sensor state co-located with the launcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Radar {
    pub position: Position,
    pub sensor_radius: f64,
    pub mode: DetectionMode,
    /// Current beam direction (radians, `[0, TAU)`); unused in radius mode.
    pub sweep_angle: f64,
}

impl Radar {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self {
            position: config.launcher,
            sensor_radius: config.sensor_radius,
            mode: config.detection,
            sweep_angle: 0.0,
        }
    }

    /// Rotate the beam by one tick. No-op in radius mode.
    pub fn advance_sweep(&mut self, dt: f64) {
        if let DetectionMode::Sweep { rate, .. } = self.mode {
            self.sweep_angle = geometry::normalize_angle(self.sweep_angle + rate * dt);
        }
    }

    /// Whether a point is currently covered: inside the sensor radius
    /// (inclusive) and, for a sweep radar, inside the beam.
    pub fn covers(&self, point: &Position) -> bool {
        if !geometry::within_radius(point, &self.position, self.sensor_radius) {
            return false;
        }
        match self.mode {
            DetectionMode::Radius => true,
            DetectionMode::Sweep {
                beam_half_width, ..
            } => {
                // A contact sitting on the antenna has no bearing; always seen.
                if *point == self.position {
                    return true;
                }
                let bearing = geometry::direction_angle(&self.position, point);
                geometry::angle_within(bearing, self.sweep_angle, beam_half_width)
            }
        }
    }

    pub fn view(&self) -> RadarView {
        RadarView {
            position: self.position,
            sensor_radius: self.sensor_radius,
            mode: self.mode,
            sweep_angle: self.sweep_angle,
        }
    }
}
