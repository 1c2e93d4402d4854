//! Client Configuration Settings
//!
//! Construction options of the client and their validation, plus loading
//! from environment variables.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{EngineLogger, NoopLogger, WorkflowEngine};
use crate::infrastructure::engine::EngineSettings;

/// Environment variable holding the engine address.
pub const ENGINE_ADDRESS_ENV: &str = "CRYPTELLATION_TEMPORAL_ADDRESS";

/// One construction option.
///
/// Options are applied in order; a later option replaces an earlier one for
/// the same field.
#[derive(Clone)]
pub enum ClientOption {
    /// Dial the engine at this address.
    EngineAddress(String),
    /// Use an engine handle owned by the caller.
    EngineHandle(Arc<dyn WorkflowEngine>),
    /// Logger handed to a dialed engine connection.
    Logger(Arc<dyn EngineLogger>),
}

impl std::fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EngineAddress(address) => f.debug_tuple("EngineAddress").field(address).finish(),
            Self::EngineHandle(_) => f.write_str("EngineHandle(..)"),
            Self::Logger(_) => f.write_str("Logger(..)"),
        }
    }
}

/// How the client reaches the engine once the options are validated.
#[derive(Clone)]
pub enum Connectivity {
    /// Dial the address; the client owns the resulting connection.
    Dial(String),
    /// Use the caller's handle; the client never closes it.
    External(Arc<dyn WorkflowEngine>),
}

impl std::fmt::Debug for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dial(address) => f.debug_tuple("Dial").field(address).finish(),
            Self::External(_) => f.write_str("External(..)"),
        }
    }
}

/// Complete client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Engine address; empty when not set.
    pub engine_address: String,
    /// Caller-owned engine handle.
    pub engine_handle: Option<Arc<dyn WorkflowEngine>>,
    /// Logger for a dialed connection.
    pub logger: Arc<dyn EngineLogger>,
    /// Transport settings for a dialed connection.
    pub engine: EngineSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            engine_address: String::new(),
            engine_handle: None,
            logger: Arc::new(NoopLogger),
            engine: EngineSettings::default(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("engine_address", &self.engine_address)
            .field("engine_handle", &self.engine_handle.as_ref().map(|_| ".."))
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Build a configuration by applying options in order.
    #[must_use]
    pub fn from_options(options: impl IntoIterator<Item = ClientOption>) -> Self {
        options
            .into_iter()
            .fold(Self::default(), |config, option| config.apply(option))
    }

    /// Apply one option.
    #[must_use]
    pub fn apply(mut self, option: ClientOption) -> Self {
        match option {
            ClientOption::EngineAddress(address) => self.engine_address = address,
            ClientOption::EngineHandle(handle) => self.engine_handle = Some(handle),
            ClientOption::Logger(logger) => self.logger = logger,
        }
        self
    }

    /// Set the engine address.
    #[must_use]
    pub fn with_engine_address(self, address: impl Into<String>) -> Self {
        self.apply(ClientOption::EngineAddress(address.into()))
    }

    /// Set a caller-owned engine handle.
    #[must_use]
    pub fn with_engine_handle(self, handle: Arc<dyn WorkflowEngine>) -> Self {
        self.apply(ClientOption::EngineHandle(handle))
    }

    /// Set the logger of a dialed connection.
    #[must_use]
    pub fn with_logger(self, logger: Arc<dyn EngineLogger>) -> Self {
        self.apply(ClientOption::Logger(logger))
    }

    /// Set the transport settings of a dialed connection.
    #[must_use]
    pub fn with_engine_settings(mut self, settings: EngineSettings) -> Self {
        self.engine = settings;
        self
    }

    /// Validate that exactly one connectivity source is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConnectivitySource`] when neither an address
    /// nor a handle is set, and [`ConfigError::AmbiguousConnectivitySource`]
    /// when both are.
    pub fn resolve(&self) -> Result<Connectivity, ConfigError> {
        match (&self.engine_handle, self.engine_address.is_empty()) {
            (None, true) => Err(ConfigError::NoConnectivitySource),
            (Some(_), false) => Err(ConfigError::AmbiguousConnectivitySource),
            (None, false) => Ok(Connectivity::Dial(self.engine_address.clone())),
            (Some(handle), true) => Ok(Connectivity::External(Arc::clone(handle))),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine address is missing or empty, or if an
    /// optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let address = lookup(ENGINE_ADDRESS_ENV)
            .ok_or_else(|| ConfigError::MissingEnvVar(ENGINE_ADDRESS_ENV.to_string()))?;

        if address.trim().is_empty() {
            return Err(ConfigError::EmptyValue(ENGINE_ADDRESS_ENV.to_string()));
        }

        let defaults = EngineSettings::default();
        let engine = EngineSettings {
            connect_timeout: parse_duration_secs(
                &lookup,
                "CRYPTELLATION_ENGINE_CONNECT_TIMEOUT_SECS",
            )?
            .unwrap_or(defaults.connect_timeout),
            request_timeout: parse_duration_secs(
                &lookup,
                "CRYPTELLATION_ENGINE_REQUEST_TIMEOUT_SECS",
            )?
            .filter(|timeout| !timeout.is_zero()),
            use_tls: parse_bool(&lookup, "CRYPTELLATION_ENGINE_TLS")?.unwrap_or(defaults.use_tls),
            ..defaults
        };

        Ok(Self {
            engine_address: address.trim().to_string(),
            engine,
            ..Self::default()
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither an engine address nor an engine handle was provided.
    #[error("no engine address or engine handle provided")]
    NoConnectivitySource,
    /// Both an engine address and an engine handle were provided.
    #[error("engine address and engine handle are mutually exclusive")]
    AmbiguousConnectivitySource,
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable could not be parsed.
    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidEnvValue {
        /// Variable name.
        key: String,
        /// Rejected value.
        value: String,
    },
}

fn parse_duration_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<Duration>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| invalid(key, value))
        })
        .transpose()
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<bool>, ConfigError> {
    lookup(key)
        .map(|value| match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(invalid(key, value)),
        })
        .transpose()
}

fn invalid(key: &str, value: String) -> ConfigError {
    ConfigError::InvalidEnvValue {
        key: key.to_string(),
        value,
    }
}
