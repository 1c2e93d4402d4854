//! Workflow Context Port (Driven Port)
//!
//! What a running workflow offers for starting child workflows.

use async_trait::async_trait;
use serde_json::Value;

use super::engine_port::EngineError;
use crate::domain::workflow::ChildWorkflowOptions;

/// Child workflow execution from inside a running workflow.
#[async_trait]
pub trait WorkflowContext: Send + Sync {
    /// Start a child workflow and wait for its JSON result.
    async fn execute_child_workflow(
        &self,
        workflow_type: &str,
        options: ChildWorkflowOptions,
        input: Value,
    ) -> Result<Value, EngineError>;
}
