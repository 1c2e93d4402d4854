//! Domain Layer - Services, run context, and payload types.
//!
//! Pure data with serde support. Nothing here performs I/O.

/// Service payload contracts.
pub mod api;

/// Consolidated info report.
pub mod info;

/// Execution modes and run context.
pub mod mode;

/// Upstream services and their task queues.
pub mod service;

/// Workflow request values.
pub mod workflow;
