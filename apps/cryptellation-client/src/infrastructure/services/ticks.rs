//! Ticks service client.

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde_json::Value;
use uuid::Uuid;

use super::ServiceClient;
use crate::application::ports::{EngineError, InfoProbe};
use crate::domain::api::ticks::{
    ListenerParams, REGISTER_LISTENER_WORKFLOW, RegisterListenerParams,
    UNREGISTER_LISTENER_WORKFLOW, UnregisterListenerParams,
};
use crate::error::ClientError;

/// Client of the ticks service.
#[derive(Debug, Clone)]
pub struct TicksClient {
    inner: ServiceClient,
}

impl TicksClient {
    /// Wrap a client bound to the ticks queue.
    #[must_use]
    pub const fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// Register `listener` on the tick stream of `exchange`/`pair`.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn listen_to_ticks(
        &self,
        listener: ListenerParams,
        exchange: impl Into<String>,
        pair: impl Into<String>,
    ) -> Result<(), ClientError> {
        let params = RegisterListenerParams {
            listener,
            exchange: exchange.into(),
            pair: pair.into(),
        };
        let _: IgnoredAny = self.inner.execute(REGISTER_LISTENER_WORKFLOW, &params).await?;
        Ok(())
    }

    /// Remove the listener `listener_id` from the tick stream of `exchange`/`pair`.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn stop_listening_to_ticks(
        &self,
        listener_id: Uuid,
        exchange: impl Into<String>,
        pair: impl Into<String>,
    ) -> Result<(), ClientError> {
        let params = UnregisterListenerParams {
            listener_id,
            exchange: exchange.into(),
            pair: pair.into(),
        };
        let _: IgnoredAny = self
            .inner
            .execute(UNREGISTER_LISTENER_WORKFLOW, &params)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl InfoProbe for TicksClient {
    async fn info(&self) -> Result<Value, EngineError> {
        self.inner.info().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::function;
    use serde_json::json;

    use super::*;
    use crate::application::ports::MockWorkflowEngine;
    use crate::domain::api::CallbackWorkflow;
    use crate::domain::service::Service;
    use crate::domain::workflow::WorkflowRequest;

    #[tokio::test]
    async fn listener_struct_is_sent_with_stream_key() {
        let listener = ListenerParams {
            id: Uuid::from_u128(1),
            callback: CallbackWorkflow::new("OnTick", "BotQueue"),
        };
        let expected = json!({
            "listener": {
                "id": Uuid::from_u128(1),
                "callback": {"name": "OnTick", "task_queue": "BotQueue"},
            },
            "exchange": "binance",
            "pair": "BTC-USDT",
        });

        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .with(function(move |request: &WorkflowRequest| {
                request.workflow_type == REGISTER_LISTENER_WORKFLOW
                    && request.task_queue == "CryptellationTicksTaskQueue"
                    && request.input == expected
            }))
            .times(1)
            .returning(|_| Ok(Value::Null));

        let client = TicksClient::new(ServiceClient::new(Service::Ticks, Arc::new(engine)));
        client
            .listen_to_ticks(listener, "binance", "BTC-USDT")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unregister_ignores_any_result_body() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .with(function(|request: &WorkflowRequest| {
                request.workflow_type == UNREGISTER_LISTENER_WORKFLOW
                    && request.input["listener_id"] == json!(Uuid::from_u128(2))
            }))
            .returning(|_| Ok(json!({"removed": 1})));

        let client = TicksClient::new(ServiceClient::new(Service::Ticks, Arc::new(engine)));
        client
            .stop_listening_to_ticks(Uuid::from_u128(2), "binance", "BTC-USDT")
            .await
            .unwrap();
    }
}
