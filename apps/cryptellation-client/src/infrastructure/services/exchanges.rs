//! Exchanges service client.

use async_trait::async_trait;
use serde_json::Value;

use super::{ServiceClient, execute_child};
use crate::application::ports::{EngineError, InfoProbe, WorkflowContext};
use crate::domain::api::exchanges::{
    GET_EXCHANGE_WORKFLOW, GetExchangeParams, GetExchangeResults, LIST_EXCHANGES_WORKFLOW,
    ListExchangesParams, ListExchangesResults,
};
use crate::domain::service::Service;
use crate::domain::workflow::ChildWorkflowOptions;
use crate::error::ClientError;

/// Client of the exchanges service.
#[derive(Debug, Clone)]
pub struct ExchangesClient {
    inner: ServiceClient,
}

impl ExchangesClient {
    /// Wrap a client bound to the exchanges queue.
    #[must_use]
    pub const fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// Get one exchange by name.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn get_exchange(
        &self,
        params: GetExchangeParams,
    ) -> Result<GetExchangeResults, ClientError> {
        self.inner.execute(GET_EXCHANGE_WORKFLOW, &params).await
    }

    /// List the supported exchanges.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_exchanges(
        &self,
        params: ListExchangesParams,
    ) -> Result<ListExchangesResults, ClientError> {
        self.inner.execute(LIST_EXCHANGES_WORKFLOW, &params).await
    }
}

#[async_trait]
impl InfoProbe for ExchangesClient {
    async fn info(&self) -> Result<Value, EngineError> {
        self.inner.info().await
    }
}

/// Exchanges operations issued from inside a workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangesWfClient;

impl ExchangesWfClient {
    /// Get one exchange as a child workflow.
    ///
    /// # Errors
    ///
    /// Returns the relayed child workflow error.
    pub async fn get_exchange(
        &self,
        ctx: &dyn WorkflowContext,
        params: GetExchangeParams,
        options: Option<ChildWorkflowOptions>,
    ) -> Result<GetExchangeResults, ClientError> {
        execute_child(ctx, Service::Exchanges, GET_EXCHANGE_WORKFLOW, options, &params).await
    }

    /// List the supported exchanges as a child workflow.
    ///
    /// # Errors
    ///
    /// Returns the relayed child workflow error.
    pub async fn list_exchanges(
        &self,
        ctx: &dyn WorkflowContext,
        params: ListExchangesParams,
        options: Option<ChildWorkflowOptions>,
    ) -> Result<ListExchangesResults, ClientError> {
        execute_child(ctx, Service::Exchanges, LIST_EXCHANGES_WORKFLOW, options, &params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::function;
    use serde_json::json;

    use super::*;
    use crate::application::ports::MockWorkflowEngine;
    use crate::domain::workflow::WorkflowRequest;

    #[tokio::test]
    async fn get_exchange_relays_params_and_decodes_result() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .with(function(|request: &WorkflowRequest| {
                request.workflow_type == GET_EXCHANGE_WORKFLOW
                    && request.task_queue == "CryptellationExchangesTaskQueue"
                    && request.input == json!({"name": "binance"})
            }))
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "exchange": {
                        "name": "binance",
                        "periods": ["M1", "H1"],
                        "pairs": ["BTC-USDT"],
                        "fees": "0.001",
                        "last_sync_time": "2024-01-01T00:00:00Z",
                    }
                }))
            });

        let client = ExchangesClient::new(ServiceClient::new(Service::Exchanges, Arc::new(engine)));
        let result = client
            .get_exchange(GetExchangeParams::new("binance"))
            .await
            .unwrap();

        assert_eq!(result.exchange.name, "binance");
        assert_eq!(result.exchange.periods, ["M1", "H1"]);
    }

    #[tokio::test]
    async fn list_exchanges_decodes_names() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .with(function(|request: &WorkflowRequest| {
                request.workflow_type == LIST_EXCHANGES_WORKFLOW
            }))
            .returning(|_| Ok(json!({"list": ["binance", "kraken"]})));

        let client = ExchangesClient::new(ServiceClient::new(Service::Exchanges, Arc::new(engine)));
        let result = client.list_exchanges(ListExchangesParams {}).await.unwrap();
        assert_eq!(result.list, ["binance", "kraken"]);
    }
}
