//! Workflow Engine Adapters
//!
//! gRPC connection to the workflow gateway and the workflow context built on
//! top of it.

mod context;
mod grpc;
mod proto;
mod settings;

pub use context::EngineWorkflowContext;
pub use grpc::{GrpcDialer, GrpcWorkflowEngine, normalize_endpoint};
pub use proto::{EXECUTE_WORKFLOW_PATH, ExecuteWorkflowRequest, ExecuteWorkflowResponse};
pub use settings::EngineSettings;
