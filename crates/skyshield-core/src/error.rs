//! Error type for scenario construction.
//!
//! Every variant is raised before the first tick; a running simulation has no
//! fallible operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Non-positive speed/radius/threshold, inverted bounds, or a start point
    /// coincident with its target (undefined heading).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
