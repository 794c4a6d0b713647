//! Scenario presets: ready-made configurations for the built-in scenarios.

use skyshield_core::config::{ManifestEntry, ScenarioConfig};
use skyshield_core::constants::{SWEEP_BEAM_HALF_WIDTH, SWEEP_RATE};
use skyshield_core::enums::{DetectionMode, ScenarioId, ThreatClass};
use skyshield_core::error::{SimError, SimResult};

/// Build the configuration for a preset.
pub fn preset(scenario: ScenarioId) -> ScenarioConfig {
    match scenario {
        ScenarioId::SingleThreat => build_single_threat(),
        ScenarioId::Salvo => build_salvo(),
        ScenarioId::Sweep => build_sweep(),
    }
}

/// Look a preset up by its command-line name.
pub fn preset_by_name(name: &str) -> SimResult<ScenarioConfig> {
    ScenarioId::from_name(name)
        .map(preset)
        .ok_or_else(|| SimError::UnknownScenario(name.to_string()))
}

/// Single rocket from the lower-left box, radar and launcher on the
/// protected point.
fn build_single_threat() -> ScenarioConfig {
    ScenarioConfig {
        manifest: vec![ManifestEntry::default()],
        ..Default::default()
    }
}

/// Five simultaneous threats (three rockets, two mortars) from distinct
/// random starts against one launcher.
fn build_salvo() -> ScenarioConfig {
    let entry = |class| ManifestEntry {
        class,
        ..Default::default()
    };
    ScenarioConfig {
        manifest: vec![
            entry(ThreatClass::Rocket),
            entry(ThreatClass::Rocket),
            entry(ThreatClass::Mortar),
            entry(ThreatClass::Rocket),
            entry(ThreatClass::Mortar),
        ],
        ..Default::default()
    }
}

/// Salvo geometry, but the radar only sees what its rotating beam covers.
fn build_sweep() -> ScenarioConfig {
    ScenarioConfig {
        detection: DetectionMode::Sweep {
            rate: SWEEP_RATE,
            beam_half_width: SWEEP_BEAM_HALF_WIDTH,
        },
        ..build_salvo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for id in ScenarioId::ALL {
            preset(id).validate().unwrap();
        }
    }

    #[test]
    fn test_salvo_has_five_threats() {
        assert_eq!(preset(ScenarioId::Salvo).manifest.len(), 5);
    }

    #[test]
    fn test_unknown_preset_name() {
        assert!(matches!(
            preset_by_name("barrage"),
            Err(SimError::UnknownScenario(_))
        ));
        assert!(preset_by_name("sweep").is_ok());
    }
}
