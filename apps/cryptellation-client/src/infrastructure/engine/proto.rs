//! Wire messages of the workflow gateway.
//!
//! `cryptellation.engine.v1.WorkflowService` exposes one unary method,
//! `ExecuteWorkflow`, that runs a workflow to completion. Inputs and outputs
//! travel as JSON documents inside bytes fields.

/// Full gRPC path of `ExecuteWorkflow`.
pub const EXECUTE_WORKFLOW_PATH: &str = "/cryptellation.engine.v1.WorkflowService/ExecuteWorkflow";

/// Request of `ExecuteWorkflow`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ExecuteWorkflowRequest {
    /// Registered workflow type name.
    #[prost(string, tag = "1")]
    pub workflow_type: String,
    /// Task queue the workflow is scheduled on.
    #[prost(string, tag = "2")]
    pub task_queue: String,
    /// Explicit workflow ID.
    #[prost(string, optional, tag = "3")]
    pub workflow_id: Option<String>,
    /// JSON-encoded input.
    #[prost(bytes = "vec", tag = "4")]
    pub input: Vec<u8>,
    /// Execution timeout in milliseconds.
    #[prost(uint64, optional, tag = "5")]
    pub execution_timeout_ms: Option<u64>,
    /// ID of the workflow starting this one as a child.
    #[prost(string, optional, tag = "6")]
    pub parent_workflow_id: Option<String>,
}

/// Response of `ExecuteWorkflow`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ExecuteWorkflowResponse {
    /// JSON-encoded workflow result; empty when the workflow returns nothing.
    #[prost(bytes = "vec", tag = "1")]
    pub output: Vec<u8>,
}
