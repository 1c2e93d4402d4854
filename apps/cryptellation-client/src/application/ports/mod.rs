//! Application Ports (Driven)
//!
//! Interfaces the client uses to reach external systems:
//!
//! - `WorkflowEngine`: the shared engine handle
//! - `EngineDialer`: turns an address into an engine handle
//! - `EngineLogger`: logger capability handed to engine connections
//! - `WorkflowContext`: child workflow execution from inside a workflow
//! - `InfoProbe`: per-service info query

mod engine_port;
mod info_probe_port;
mod workflow_context_port;

#[cfg(test)]
pub use engine_port::MockWorkflowEngine;
pub use engine_port::{EngineDialer, EngineError, EngineLogger, NoopLogger, WorkflowEngine};
pub use info_probe_port::InfoProbe;
pub use workflow_context_port::WorkflowContext;
