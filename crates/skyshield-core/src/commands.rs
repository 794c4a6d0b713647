//! External commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, before movement.

use serde::{Deserialize, Serialize};

use crate::enums::ThreatClass;
use crate::types::Position;

/// All possible external actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Launch a new threat of the given class toward the protected point.
    /// Without a start point one is drawn from the scenario spawn region.
    SpawnThreat {
        class: ThreatClass,
        #[serde(default)]
        start: Option<Position>,
    },
    /// Suspend ticking; time does not advance while paused.
    Pause,
    /// Resume after a pause.
    Resume,
    /// End the run (user quit).
    Stop,
}
