//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementations of the port interfaces
//! defined in the application layer.

/// Client options and environment loading.
pub mod config;

/// gRPC workflow engine adapter.
pub mod engine;

/// Engine logger adapters.
pub mod logging;

/// Per-service sub-clients.
pub mod services;

/// OpenTelemetry tracing integration.
pub mod telemetry;
