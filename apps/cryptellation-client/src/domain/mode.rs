//! Execution modes and the run context carried by running workflows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trading context a run executes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Simulated run over historical data.
    Backtest,
    /// Simulated run over live data.
    Forwardtest,
    /// Real trading.
    Live,
}

impl ExecutionMode {
    /// Wire representation of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Backtest => "backtest",
            Self::Forwardtest => "forwardtest",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw mode tag that does not name a known execution mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid execution mode: {0:?}")]
pub struct InvalidModeTag(pub String);

impl FromStr for ExecutionMode {
    type Err = InvalidModeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtest" => Ok(Self::Backtest),
            "forwardtest" => Ok(Self::Forwardtest),
            "live" => Ok(Self::Live),
            other => Err(InvalidModeTag(other.to_string())),
        }
    }
}

/// Context of the run a workflow belongs to.
///
/// The mode is kept as the raw tag received from the engine so that values
/// written by newer or misconfigured producers are still representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    /// Identifier of the owning backtest or forwardtest.
    pub id: Uuid,
    /// Raw execution mode tag.
    pub mode: String,
    /// Task queue of the parent workflow.
    pub parent_task_queue: String,
}

impl RunContext {
    /// Create a run context for a known mode.
    #[must_use]
    pub fn new(id: Uuid, mode: ExecutionMode, parent_task_queue: impl Into<String>) -> Self {
        Self {
            id,
            mode: mode.as_str().to_string(),
            parent_task_queue: parent_task_queue.into(),
        }
    }

    /// Resolve the raw mode tag.
    pub fn execution_mode(&self) -> Result<ExecutionMode, InvalidModeTag> {
        self.mode.parse()
    }
}
