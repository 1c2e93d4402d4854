//! Workflow invocation values shared by the client and workflow-context facades.

use std::time::Duration;

use serde_json::Value;

use super::service::Service;

/// A request to run a workflow to completion and return its result.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowRequest {
    /// Registered workflow type name.
    pub workflow_type: String,
    /// Task queue whose workers execute the workflow.
    pub task_queue: String,
    /// Explicit workflow ID; the engine assigns one when absent.
    pub workflow_id: Option<String>,
    /// JSON input of the workflow.
    pub input: Value,
    /// Maximum duration of the execution; unbounded when absent.
    pub execution_timeout: Option<Duration>,
    /// Workflow starting this one as a child.
    pub parent_workflow_id: Option<String>,
}

impl WorkflowRequest {
    /// Request a workflow on a service's published task queue.
    #[must_use]
    pub fn for_service(service: Service, workflow_type: impl Into<String>, input: Value) -> Self {
        Self {
            workflow_type: workflow_type.into(),
            task_queue: service.task_queue().to_string(),
            workflow_id: None,
            input,
            execution_timeout: None,
            parent_workflow_id: None,
        }
    }

    /// Set an explicit workflow ID.
    #[must_use]
    pub fn with_workflow_id(mut self, workflow_id: impl Into<String>) -> Self {
        self.workflow_id = Some(workflow_id.into());
        self
    }

    /// Bound the execution duration.
    #[must_use]
    pub const fn with_execution_timeout(mut self, timeout: Duration) -> Self {
        self.execution_timeout = Some(timeout);
        self
    }
}

/// Routing metadata for a child workflow started from a running workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildWorkflowOptions {
    /// Target task queue; empty means "use the service default".
    pub task_queue: String,
    /// Explicit child workflow ID.
    pub workflow_id: Option<String>,
    /// Maximum duration of the child execution.
    pub execution_timeout: Option<Duration>,
}

impl ChildWorkflowOptions {
    /// Options targeting a specific task queue.
    #[must_use]
    pub fn on_task_queue(task_queue: impl Into<String>) -> Self {
        Self {
            task_queue: task_queue.into(),
            ..Self::default()
        }
    }

    /// Fill in the service's published queue when no queue is set.
    #[must_use]
    pub fn or_service_queue(options: Option<Self>, service: Service) -> Self {
        let mut options = options.unwrap_or_default();
        if options.task_queue.is_empty() {
            options.task_queue = service.task_queue().to_string();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_targets_service_queue() {
        let request = WorkflowRequest::for_service(Service::Sma, "ListSmaWorkflow", json!({}));
        assert_eq!(request.task_queue, "CryptellationSmaTaskQueue");
        assert!(request.workflow_id.is_none());
    }

    #[test]
    fn missing_options_default_to_service_queue() {
        let options = ChildWorkflowOptions::or_service_queue(None, Service::Candlesticks);
        assert_eq!(options.task_queue, Service::Candlesticks.task_queue());
    }

    #[test]
    fn empty_queue_defaults_but_other_fields_survive() {
        let given = ChildWorkflowOptions {
            task_queue: String::new(),
            workflow_id: Some("child-1".to_string()),
            execution_timeout: Some(Duration::from_secs(5)),
        };
        let options = ChildWorkflowOptions::or_service_queue(Some(given), Service::Exchanges);

        assert_eq!(options.task_queue, Service::Exchanges.task_queue());
        assert_eq!(options.workflow_id.as_deref(), Some("child-1"));
        assert_eq!(options.execution_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn explicit_queue_is_kept() {
        let options = ChildWorkflowOptions::or_service_queue(
            Some(ChildWorkflowOptions::on_task_queue("custom")),
            Service::Exchanges,
        );
        assert_eq!(options.task_queue, "custom");
    }
}
