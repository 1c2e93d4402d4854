//! Transport settings of the engine connection.

use std::time::Duration;

/// How the gRPC channel to the workflow engine is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Per-call deadline; calls are unbounded when absent.
    pub request_timeout: Option<Duration>,

    /// TCP keepalive interval.
    pub tcp_keepalive: Duration,

    /// HTTP/2 keepalive interval.
    pub http2_keepalive_interval: Duration,

    /// Keepalive timeout.
    pub keepalive_timeout: Duration,

    /// Whether to use TLS.
    pub use_tls: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            tcp_keepalive: Duration::from_secs(60),
            http2_keepalive_interval: Duration::from_secs(75),
            keepalive_timeout: Duration::from_secs(20),
            use_tls: false,
        }
    }
}

impl EngineSettings {
    /// Set the connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set a per-call deadline.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Enable TLS.
    #[must_use]
    pub const fn with_tls(mut self) -> Self {
        self.use_tls = true;
        self
    }
}
