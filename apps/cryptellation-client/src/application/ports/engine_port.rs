//! Workflow Engine Port (Driven Port)
//!
//! The engine handle every service client shares, the dialer that produces it,
//! and the logger capability handed to the engine connection.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::workflow::WorkflowRequest;

/// Errors reported by the workflow engine connection.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine address could not be turned into an endpoint.
    #[error("invalid engine endpoint {endpoint}: {message}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why it was rejected.
        message: String,
    },

    /// Establishing the connection failed.
    #[error("engine connection to {endpoint} failed: {message}")]
    Connect {
        /// The endpoint dialed.
        endpoint: String,
        /// Error details.
        message: String,
    },

    /// The connection exists but is not ready to take calls.
    #[error("engine unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The engine answered with a non-OK status.
    #[error("engine status: {0}")]
    Status(#[from] tonic::Status),

    /// A workflow input or output was not valid JSON.
    #[error("invalid workflow payload: {message}")]
    InvalidPayload {
        /// Error details.
        message: String,
    },

    /// The handle was closed.
    #[error("engine handle is closed")]
    Closed,

    /// The caller's cancellation scope was cancelled.
    #[error("call cancelled")]
    Cancelled,
}

/// Shared handle to the workflow engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// Run a workflow to completion and return its JSON result.
    async fn execute_workflow(&self, request: WorkflowRequest) -> Result<Value, EngineError>;

    /// Release the underlying connection.
    fn close(&self);
}

/// Produces engine handles from network addresses.
#[async_trait]
pub trait EngineDialer: Send + Sync {
    /// Connect to the engine at `address`.
    async fn dial(
        &self,
        address: &str,
        logger: Arc<dyn EngineLogger>,
    ) -> Result<Arc<dyn WorkflowEngine>, EngineError>;
}

/// Logger capability used by engine connections.
///
/// Fields are passed as key/value pairs so implementations can keep them
/// structured.
pub trait EngineLogger: Send + Sync {
    /// Log a debug message.
    fn debug(&self, message: &str, fields: &[(&str, &str)]);

    /// Log an informational message.
    fn info(&self, message: &str, fields: &[(&str, &str)]);

    /// Log a warning.
    fn warn(&self, message: &str, fields: &[(&str, &str)]);

    /// Log an error.
    fn error(&self, message: &str, fields: &[(&str, &str)]);
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl EngineLogger for NoopLogger {
    fn debug(&self, _message: &str, _fields: &[(&str, &str)]) {}

    fn info(&self, _message: &str, _fields: &[(&str, &str)]) {}

    fn warn(&self, _message: &str, _fields: &[(&str, &str)]) {}

    fn error(&self, _message: &str, _fields: &[(&str, &str)]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_logger_accepts_all_levels() {
        let logger = NoopLogger;
        logger.debug("debug", &[("k", "v")]);
        logger.info("info", &[]);
        logger.warn("warn", &[]);
        logger.error("error", &[("k", "v")]);
    }

    #[test]
    fn status_converts_into_engine_error() {
        let err: EngineError = tonic::Status::not_found("workflow not registered").into();
        assert!(matches!(err, EngineError::Status(ref status) if status.code() == tonic::Code::NotFound));
        assert!(err.to_string().contains("workflow not registered"));
    }
}
