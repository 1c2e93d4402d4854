//! Configuration Module
//!
//! Construction options of the client and environment loading.

mod settings;

pub use settings::{ClientConfig, ClientOption, ConfigError, Connectivity, ENGINE_ADDRESS_ENV};
