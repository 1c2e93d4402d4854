//! Info Probe Port (Driven Port)
//!
//! Uniform liveness/metadata query every service client exposes.

use async_trait::async_trait;
use serde_json::Value;

use super::engine_port::EngineError;

/// A service that can report its info.
#[async_trait]
pub trait InfoProbe: Send + Sync {
    /// Query the service's info payload.
    async fn info(&self) -> Result<Value, EngineError>;
}

