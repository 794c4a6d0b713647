use crate::commands::SimCommand;
use crate::config::{ManifestEntry, ScenarioConfig, SpeedBounds};
use crate::enums::*;
use crate::error::SimError;
use crate::events::SimEvent;
use crate::state::SimSnapshot;
use crate::types::{InterceptorId, Position, SimTime, ThreatId};

// ---- Serialization ----

#[test]
fn test_event_is_tagged_by_type() {
    let event = SimEvent::ThreatIntercepted {
        threat_id: ThreatId(3),
        interceptor_id: InterceptorId(7),
        position: Position::new(1.0, 2.0),
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "ThreatIntercepted");
    assert_eq!(json["threat_id"], 3);
    assert_eq!(json["interceptor_id"], 7);

    let back: SimEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_simulation_ended_serde() {
    let event = SimEvent::SimulationEnded {
        reason: EndReason::AllThreatsResolved,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("AllThreatsResolved"), "got {json}");
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_spawn_command_start_is_optional() {
    let cmd: SimCommand = serde_json::from_str(r#"{"type":"SpawnThreat","class":"Mortar"}"#).unwrap();
    assert_eq!(
        cmd,
        SimCommand::SpawnThreat {
            class: ThreatClass::Mortar,
            start: None,
        }
    );
}

#[test]
fn test_detection_mode_serde() {
    let sweep = DetectionMode::Sweep {
        rate: 0.5,
        beam_half_width: 0.25,
    };
    let json = serde_json::to_string(&sweep).unwrap();
    let back: DetectionMode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sweep);

    let radius: DetectionMode = serde_json::from_str(r#"{"type":"Radius"}"#).unwrap();
    assert_eq!(radius, DetectionMode::Radius);
}

#[test]
fn test_default_snapshot_serializes() {
    let snap = SimSnapshot::default();
    let json = serde_json::to_string(&snap).unwrap();
    let back: SimSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.phase, SimPhase::Ready);
}

#[test]
fn test_event_threat_id() {
    let detected = SimEvent::ThreatDetected {
        threat_id: ThreatId(9),
    };
    assert_eq!(detected.threat_id(), Some(ThreatId(9)));
    let ended = SimEvent::SimulationEnded {
        reason: EndReason::StopRequested,
    };
    assert_eq!(ended.threat_id(), None);
}

// ---- Types ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..4 {
        time.advance(0.25);
    }
    assert_eq!(time.tick, 4);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-12);
}

#[test]
fn test_ids_order_and_display() {
    assert!(ThreatId(1) < ThreatId(2));
    assert_eq!(ThreatId(4).to_string(), "T4");
    assert_eq!(InterceptorId(0).to_string(), "I0");
}

#[test]
fn test_scenario_id_names() {
    for id in ScenarioId::ALL {
        assert_eq!(ScenarioId::from_name(id.name()), Some(id));
    }
    assert_eq!(ScenarioId::from_name("nope"), None);
}

// ---- Configuration ----

#[test]
fn test_default_config_is_valid() {
    ScenarioConfig::default().validate().unwrap();
}

#[test]
fn test_config_from_partial_json() {
    let json = r#"{
        "seed": 7,
        "sensor_radius": 20.0,
        "manifest": [
            { "class": "CruiseMissile", "start": { "x": 0.0, "y": 0.0 }, "speed": 1.0 },
            {}
        ]
    }"#;
    let config = ScenarioConfig::from_json(json).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.sensor_radius, 20.0);
    assert_eq!(config.manifest.len(), 2);
    assert_eq!(config.manifest[1], ManifestEntry::default());
    // Untouched fields keep their defaults.
    assert_eq!(config.target, ScenarioConfig::default().target);
}

#[test]
fn test_config_rejects_malformed_json() {
    let err = ScenarioConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SimError::Parse(_)));
}

#[test]
fn test_config_rejects_non_positive_radius() {
    let config = ScenarioConfig {
        sensor_radius: 0.0,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));
    assert!(err.to_string().contains("sensor_radius"));
}

#[test]
fn test_config_rejects_nan_threshold() {
    let config = ScenarioConfig {
        arrival_threshold: f64::NAN,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_inverted_speed_bounds() {
    let mut config = ScenarioConfig::default();
    config.speeds.mortar = SpeedBounds::new(0.5, 0.5);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Mortar"), "{err}");
}

#[test]
fn test_config_rejects_start_on_target() {
    let config = ScenarioConfig {
        manifest: vec![ManifestEntry {
            start: Some(Position::new(50.0, 50.0)),
            ..Default::default()
        }],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_zero_manifest_speed() {
    let config = ScenarioConfig {
        manifest: vec![ManifestEntry {
            speed: Some(0.0),
            ..Default::default()
        }],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_zero_sweep_rate() {
    let config = ScenarioConfig {
        detection: DetectionMode::Sweep {
            rate: 0.0,
            beam_half_width: 0.3,
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_speed_bounds_half_open() {
    let bounds = SpeedBounds::new(0.1, 0.5);
    assert!(bounds.contains(0.1));
    assert!(bounds.contains(0.4999));
    assert!(!bounds.contains(0.5));
}
