//! Service Sub-Clients
//!
//! One client per upstream service, all sharing the same engine handle.
//! Each relays its operations as workflows on the service's published task
//! queue and answers the uniform info probe.
//!
//! The `*WfClient` types issue the same workflows as children of a running
//! workflow through a [`WorkflowContext`].

mod backtests;
mod candlesticks;
mod exchanges;
mod forwardtests;
mod sma;
mod ticks;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use backtests::{BacktestsClient, BacktestsWfClient};
pub use candlesticks::{CandlesticksClient, CandlesticksWfClient};
pub use exchanges::{ExchangesClient, ExchangesWfClient};
pub use forwardtests::{ForwardtestsClient, ForwardtestsWfClient};
pub use sma::{SmaClient, SmaWfClient};
pub use ticks::TicksClient;

use crate::application::ports::{EngineError, InfoProbe, WorkflowContext, WorkflowEngine};
use crate::domain::service::{SERVICE_INFO_WORKFLOW, Service};
use crate::domain::workflow::{ChildWorkflowOptions, WorkflowRequest};
use crate::error::ClientError;

/// Workflow relay bound to one service's task queue.
#[derive(Clone)]
pub struct ServiceClient {
    service: Service,
    engine: Arc<dyn WorkflowEngine>,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Bind `engine` to `service`.
    #[must_use]
    pub fn new(service: Service, engine: Arc<dyn WorkflowEngine>) -> Self {
        Self { service, engine }
    }

    /// Service this client targets.
    #[must_use]
    pub const fn service(&self) -> Service {
        self.service
    }

    /// Run `workflow_type` with `params` and decode its result.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Payload`] if the params or result do not map to
    /// JSON, and [`ClientError::Relay`] with the engine's error otherwise.
    pub async fn execute<P, R>(&self, workflow_type: &str, params: &P) -> Result<R, ClientError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let input = serde_json::to_value(params)?;
        let request = WorkflowRequest::for_service(self.service, workflow_type, input);

        tracing::debug!(service = %self.service, workflow = workflow_type, "Executing workflow");

        let output = self.engine.execute_workflow(request).await?;
        Ok(serde_json::from_value(output)?)
    }
}

#[async_trait]
impl InfoProbe for ServiceClient {
    async fn info(&self) -> Result<Value, EngineError> {
        let request = WorkflowRequest::for_service(
            self.service,
            SERVICE_INFO_WORKFLOW,
            Value::Object(serde_json::Map::new()),
        );
        self.engine.execute_workflow(request).await
    }
}

/// Run `workflow_type` as a child workflow of `ctx` on `service`'s queue.
///
/// Missing options, or options without a task queue, target the service's
/// published queue.
pub(crate) async fn execute_child<P, R>(
    ctx: &dyn WorkflowContext,
    service: Service,
    workflow_type: &str,
    options: Option<ChildWorkflowOptions>,
    params: &P,
) -> Result<R, ClientError>
where
    P: Serialize + Sync,
    R: DeserializeOwned,
{
    let options = ChildWorkflowOptions::or_service_queue(options, service);
    let input = serde_json::to_value(params)?;

    tracing::debug!(
        service = %service,
        workflow = workflow_type,
        task_queue = %options.task_queue,
        "Executing child workflow"
    );

    let output = ctx.execute_child_workflow(workflow_type, options, input).await?;
    Ok(serde_json::from_value(output)?)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;
    use serde_json::json;

    use super::*;
    use crate::application::ports::MockWorkflowEngine;

    #[tokio::test]
    async fn info_runs_service_info_workflow_on_service_queue() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .with(function(|request: &WorkflowRequest| {
                request.workflow_type == SERVICE_INFO_WORKFLOW
                    && request.task_queue == "CryptellationCandlesticksTaskQueue"
                    && request.input == json!({})
            }))
            .times(1)
            .returning(|_| Ok(json!({"version": "1.2.0"})));

        let client = ServiceClient::new(Service::Candlesticks, Arc::new(engine));
        assert_eq!(client.info().await.unwrap(), json!({"version": "1.2.0"}));
    }

    #[tokio::test]
    async fn undecodable_result_is_a_payload_error() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .returning(|_| Ok(json!("not a number")));

        let client = ServiceClient::new(Service::Sma, Arc::new(engine));
        let err = client.execute::<_, u32>("X", &json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Payload(_)));
    }

    #[tokio::test]
    async fn engine_error_is_relayed_unchanged() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .returning(|_| Err(tonic::Status::unavailable("down").into()));

        let client = ServiceClient::new(Service::Ticks, Arc::new(engine));
        let err = client.execute::<_, Value>("X", &json!({})).await.unwrap_err();
        match err {
            ClientError::Relay(EngineError::Status(status)) => {
                assert_eq!(status.code(), tonic::Code::Unavailable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
