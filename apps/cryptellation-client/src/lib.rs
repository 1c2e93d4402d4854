#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Cryptellation Client - Stack Facade
//!
//! One client over the Cryptellation services (exchanges, candlesticks,
//! ticks, backtests, forwardtests, simple moving average). Every service runs
//! behind a durable workflow engine; each operation here starts a workflow on
//! the owning service's task queue and returns its result.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Services, run context, and payload types
//!   - `api`: Request/response payloads per service
//!   - `mode`: Execution modes and run context
//!   - `service`: Services and their task queues
//!
//! - **Application**: Port definitions and owned logic
//!   - `ports`: Engine handle, dialer, logger, workflow context, info probe
//!   - `services`: Info fan-out, price subscription routing
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `config`: Construction options and environment loading
//!   - `engine`: gRPC engine adapter and workflow context
//!   - `services`: Per-service sub-clients
//!   - `logging`, `telemetry`: Tracing integration
//!
//! - **Facades**: [`Client`] for callers outside the engine, [`WfClient`]
//!   for code running inside a workflow.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Pure data with no I/O.
pub mod domain;

/// Application layer - Ports and owned logic.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Client facade.
pub mod client;

/// Client error type.
pub mod error;

/// Workflow-context facade.
pub mod wfclient;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{Client, EngineOwnership};
pub use error::ClientError;
pub use wfclient::WfClient;

// Ports
pub use application::ports::{
    EngineDialer, EngineError, EngineLogger, InfoProbe, NoopLogger, WorkflowContext,
    WorkflowEngine,
};

// Domain types
pub use domain::api::SubscribeToPriceParams;
pub use domain::info::ServicesInfo;
pub use domain::mode::{ExecutionMode, RunContext};
pub use domain::service::Service;
pub use domain::workflow::{ChildWorkflowOptions, WorkflowRequest};

// Infrastructure config
pub use infrastructure::config::{ClientConfig, ClientOption, ConfigError, Connectivity};

// Engine adapter
pub use infrastructure::engine::{EngineSettings, EngineWorkflowContext, GrpcDialer, GrpcWorkflowEngine};

// Logging
pub use infrastructure::logging::TracingLogger;

// Telemetry
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
