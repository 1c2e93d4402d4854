//! Client error type.
//!
//! | Variant | Raised by | Retried |
//! |---------|-----------|---------|
//! | `Config` | option validation, before any I/O | never |
//! | `Connection` | dialing the engine address | by the caller |
//! | `Aggregation` | first failing info probe | never |
//! | `NotImplemented` / `InvalidMode` | price subscription routing | never |
//! | `Relay` | any service call, passed through unchanged | never |
//! | `Payload` | (de)serializing a service payload | never |

use crate::application::ports::EngineError;
use crate::domain::mode::ExecutionMode;
use crate::infrastructure::config::ConfigError;

/// Errors returned by the client facades.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Construction options are missing or inconsistent.
    #[error("invalid client configuration: {0}")]
    Config(#[from] ConfigError),

    /// The engine could not be reached while constructing the client.
    #[error("failed to connect to workflow engine: {0}")]
    Connection(#[source] EngineError),

    /// An info probe failed; the other probes were cancelled.
    #[error("{service} info probe failed: {source}")]
    Aggregation {
        /// Service whose probe failed first.
        service: String,
        /// The probe's error.
        #[source]
        source: EngineError,
    },

    /// The execution mode is recognised but not supported.
    #[error("execution mode {mode} is not implemented")]
    NotImplemented {
        /// The unsupported mode.
        mode: ExecutionMode,
    },

    /// The execution mode tag is not recognised.
    #[error("invalid execution mode: {mode:?}")]
    InvalidMode {
        /// The raw tag.
        mode: String,
    },

    /// Error from the upstream service call.
    #[error(transparent)]
    Relay(#[from] EngineError),

    /// A payload could not be converted to or from JSON.
    #[error("invalid service payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the error comes from the caller cancelling the call.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Relay(EngineError::Cancelled)
                | Self::Aggregation {
                    source: EngineError::Cancelled,
                    ..
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_probe_is_reported_as_cancelled() {
        let err = ClientError::Aggregation {
            service: "ticks".to_string(),
            source: EngineError::Cancelled,
        };
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "ticks info probe failed: call cancelled");
    }

    #[test]
    fn failed_probe_is_not_cancelled() {
        let err = ClientError::Aggregation {
            service: "ticks".to_string(),
            source: EngineError::Closed,
        };
        assert!(!err.is_cancelled());
    }

    #[test]
    fn relay_errors_are_transparent() {
        let err = ClientError::from(EngineError::Closed);
        assert_eq!(err.to_string(), EngineError::Closed.to_string());
    }

    #[test]
    fn config_errors_convert() {
        let err = ClientError::from(ConfigError::NoConnectivitySource);
        assert!(matches!(
            err,
            ClientError::Config(ConfigError::NoConnectivitySource)
        ));
    }
}
