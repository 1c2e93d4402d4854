//! Engine logger backed by `tracing`.
//!
//! [`NoopLogger`](crate::application::ports::NoopLogger) is the default;
//! this adapter forwards engine connection logs into the process's
//! subscriber under the `cryptellation_client::engine` target.

use crate::application::ports::EngineLogger;

/// Forwards engine logs to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl EngineLogger for TracingLogger {
    fn debug(&self, message: &str, fields: &[(&str, &str)]) {
        tracing::debug!(target: "cryptellation_client::engine", fields = %Fields(fields), "{message}");
    }

    fn info(&self, message: &str, fields: &[(&str, &str)]) {
        tracing::info!(target: "cryptellation_client::engine", fields = %Fields(fields), "{message}");
    }

    fn warn(&self, message: &str, fields: &[(&str, &str)]) {
        tracing::warn!(target: "cryptellation_client::engine", fields = %Fields(fields), "{message}");
    }

    fn error(&self, message: &str, fields: &[(&str, &str)]) {
        tracing::error!(target: "cryptellation_client::engine", fields = %Fields(fields), "{message}");
    }
}

/// `key=value` rendering of dynamic fields.
struct Fields<'a>(&'a [(&'a str, &'a str)]);

impl std::fmt::Display for Fields<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
