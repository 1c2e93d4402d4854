//! Backtests service client.

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde_json::Value;

use super::{ServiceClient, execute_child};
use crate::application::ports::{EngineError, InfoProbe, WorkflowContext};
use crate::domain::api::backtests::{
    CREATE_BACKTEST_WORKFLOW, CreateBacktestParams, CreateBacktestResults, GET_BACKTEST_WORKFLOW,
    GetBacktestParams, GetBacktestResults, LIST_BACKTESTS_WORKFLOW, ListBacktestsParams,
    ListBacktestsResults, SUBSCRIBE_TO_PRICE_WORKFLOW, SubscribeToPriceParams,
};
use crate::domain::service::Service;
use crate::domain::workflow::ChildWorkflowOptions;
use crate::error::ClientError;

/// Client of the backtests service.
#[derive(Debug, Clone)]
pub struct BacktestsClient {
    inner: ServiceClient,
}

impl BacktestsClient {
    /// Wrap a client bound to the backtests queue.
    #[must_use]
    pub const fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// Create and start a backtest.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn new_backtest(
        &self,
        params: CreateBacktestParams,
    ) -> Result<CreateBacktestResults, ClientError> {
        self.inner.execute(CREATE_BACKTEST_WORKFLOW, &params).await
    }

    /// Get one backtest.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn get_backtest(
        &self,
        params: GetBacktestParams,
    ) -> Result<GetBacktestResults, ClientError> {
        self.inner.execute(GET_BACKTEST_WORKFLOW, &params).await
    }

    /// List backtests.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_backtests(
        &self,
        params: ListBacktestsParams,
    ) -> Result<ListBacktestsResults, ClientError> {
        self.inner.execute(LIST_BACKTESTS_WORKFLOW, &params).await
    }
}

#[async_trait]
impl InfoProbe for BacktestsClient {
    async fn info(&self) -> Result<Value, EngineError> {
        self.inner.info().await
    }
}

/// Backtests operations issued from inside a workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktestsWfClient;

impl BacktestsWfClient {
    /// Subscribe a backtest to the prices of a pair.
    ///
    /// # Errors
    ///
    /// Returns the relayed child workflow error.
    pub async fn subscribe_to_price(
        &self,
        ctx: &dyn WorkflowContext,
        params: SubscribeToPriceParams,
        options: Option<ChildWorkflowOptions>,
    ) -> Result<(), ClientError> {
        let _: IgnoredAny = execute_child(
            ctx,
            Service::Backtests,
            SUBSCRIBE_TO_PRICE_WORKFLOW,
            options,
            &params,
        )
        .await?;
        Ok(())
    }
}
