//! Candlesticks service client.

use async_trait::async_trait;
use serde_json::Value;

use super::{ServiceClient, execute_child};
use crate::application::ports::{EngineError, InfoProbe, WorkflowContext};
use crate::domain::api::candlesticks::{
    LIST_CANDLESTICKS_WORKFLOW, ListCandlesticksParams, ListCandlesticksResults,
};
use crate::domain::service::Service;
use crate::domain::workflow::ChildWorkflowOptions;
use crate::error::ClientError;

/// Client of the candlesticks service.
#[derive(Debug, Clone)]
pub struct CandlesticksClient {
    inner: ServiceClient,
}

impl CandlesticksClient {
    /// Wrap a client bound to the candlesticks queue.
    #[must_use]
    pub const fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// List candlesticks of a pair over a time range.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_candlesticks(
        &self,
        params: ListCandlesticksParams,
    ) -> Result<ListCandlesticksResults, ClientError> {
        self.inner.execute(LIST_CANDLESTICKS_WORKFLOW, &params).await
    }
}

#[async_trait]
impl InfoProbe for CandlesticksClient {
    async fn info(&self) -> Result<Value, EngineError> {
        self.inner.info().await
    }
}

/// Candlesticks operations issued from inside a workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandlesticksWfClient;

impl CandlesticksWfClient {
    /// List candlesticks as a child workflow.
    ///
    /// # Errors
    ///
    /// Returns the relayed child workflow error.
    pub async fn list_candlesticks(
        &self,
        ctx: &dyn WorkflowContext,
        params: ListCandlesticksParams,
        options: Option<ChildWorkflowOptions>,
    ) -> Result<ListCandlesticksResults, ClientError> {
        execute_child(
            ctx,
            Service::Candlesticks,
            LIST_CANDLESTICKS_WORKFLOW,
            options,
            &params,
        )
        .await
    }
}
