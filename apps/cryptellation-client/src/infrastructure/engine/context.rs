//! Workflow context backed by an engine handle.
//!
//! Child workflows are executed through the shared engine and tagged with the
//! ID of the workflow that started them.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{EngineError, WorkflowContext, WorkflowEngine};
use crate::domain::workflow::{ChildWorkflowOptions, WorkflowRequest};

/// [`WorkflowContext`] of a running workflow.
#[derive(Clone)]
pub struct EngineWorkflowContext {
    engine: Arc<dyn WorkflowEngine>,
    workflow_id: String,
}

impl std::fmt::Debug for EngineWorkflowContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineWorkflowContext")
            .field("workflow_id", &self.workflow_id)
            .finish_non_exhaustive()
    }
}

impl EngineWorkflowContext {
    /// Context of the workflow `workflow_id`.
    #[must_use]
    pub fn new(engine: Arc<dyn WorkflowEngine>, workflow_id: impl Into<String>) -> Self {
        Self {
            engine,
            workflow_id: workflow_id.into(),
        }
    }

    /// ID of the running workflow.
    #[must_use]
    pub fn workflow_id(&self) -> &str {
        &self.workflow_id
    }
}

#[async_trait]
impl WorkflowContext for EngineWorkflowContext {
    async fn execute_child_workflow(
        &self,
        workflow_type: &str,
        options: ChildWorkflowOptions,
        input: Value,
    ) -> Result<Value, EngineError> {
        let request = WorkflowRequest {
            workflow_type: workflow_type.to_string(),
            task_queue: options.task_queue,
            workflow_id: options.workflow_id,
            input,
            execution_timeout: options.execution_timeout,
            parent_workflow_id: Some(self.workflow_id.clone()),
        };

        tracing::debug!(
            parent = %self.workflow_id,
            workflow = %request.workflow_type,
            task_queue = %request.task_queue,
            "Starting child workflow"
        );
        self.engine.execute_workflow(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::function;
    use serde_json::json;

    use super::*;
    use crate::application::ports::MockWorkflowEngine;

    #[tokio::test]
    async fn child_request_carries_options_and_parent() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .with(function(|request: &WorkflowRequest| {
                request.workflow_type == "GetExchangeWorkflow"
                    && request.task_queue == "StrategyTaskQueue"
                    && request.workflow_id.as_deref() == Some("child-1")
                    && request.execution_timeout == Some(Duration::from_secs(9))
                    && request.parent_workflow_id.as_deref() == Some("parent-1")
                    && request.input == json!({"name": "binance"})
            }))
            .times(1)
            .returning(|_| Ok(json!({"ok": true})));

        let ctx = EngineWorkflowContext::new(Arc::new(engine), "parent-1");
        let options = ChildWorkflowOptions {
            task_queue: "StrategyTaskQueue".to_string(),
            workflow_id: Some("child-1".to_string()),
            execution_timeout: Some(Duration::from_secs(9)),
        };

        let output = ctx
            .execute_child_workflow("GetExchangeWorkflow", options, json!({"name": "binance"}))
            .await
            .unwrap();
        assert_eq!(output, json!({"ok": true}));
    }

    #[tokio::test]
    async fn engine_errors_pass_through() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .returning(|_| Err(EngineError::Closed));

        let ctx = EngineWorkflowContext::new(Arc::new(engine), "parent-1");
        let err = ctx
            .execute_child_workflow("X", ChildWorkflowOptions::on_task_queue("q"), Value::Null)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Closed));
    }
}
