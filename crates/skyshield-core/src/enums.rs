//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Threat class. Each class draws its speed from its own bounds in the
/// scenario configuration; the class is reported as the threat's classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatClass {
    /// Unguided short-range rocket.
    #[default]
    Rocket,
    /// Slow, high-arc mortar round.
    Mortar,
    /// Fast cruise missile.
    CruiseMissile,
}

impl ThreatClass {
    pub const ALL: [ThreatClass; 3] = [
        ThreatClass::Rocket,
        ThreatClass::Mortar,
        ThreatClass::CruiseMissile,
    ];
}

/// Engagement state of a threat.
///
/// `Unengaged -> Engaged -> {Destroyed | Arrived}`. An `Engaged` threat whose
/// interceptor expires drops back to `Unengaged`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatState {
    #[default]
    Unengaged,
    Engaged,
    Destroyed,
    Arrived,
}

/// How the radar decides a threat is in coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DetectionMode {
    /// Anything within the sensor radius is detected.
    #[default]
    Radius,
    /// Rotating beam: within the sensor radius AND within `beam_half_width`
    /// (radians) of the current sweep angle, which advances at `rate` rad/s.
    Sweep { rate: f64, beam_half_width: f64 },
}

/// Why a simulation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every threat was either intercepted or arrived.
    AllThreatsResolved,
    /// An external stop was requested.
    StopRequested,
    /// The configured tick budget ran out first.
    TickBudgetExhausted,
}

/// Engine lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Constructed, first tick not yet run.
    #[default]
    Ready,
    Running,
    Paused,
    Ended(EndReason),
}

impl SimPhase {
    pub fn is_ended(&self) -> bool {
        matches!(self, SimPhase::Ended(_))
    }
}

/// Built-in scenario presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// One threat from the lower-left quadrant toward a single protected point.
    SingleThreat,
    /// Five simultaneous threats from distinct random starts, one launcher.
    Salvo,
    /// Salvo geometry with a rotating sweep radar instead of radius detection.
    Sweep,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 3] = [
        ScenarioId::SingleThreat,
        ScenarioId::Salvo,
        ScenarioId::Sweep,
    ];

    /// Lowercase name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioId::SingleThreat => "single",
            ScenarioId::Salvo => "salvo",
            ScenarioId::Sweep => "sweep",
        }
    }

    pub fn from_name(name: &str) -> Option<ScenarioId> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}
