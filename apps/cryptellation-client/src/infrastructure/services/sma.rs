//! Simple moving average service client.

use async_trait::async_trait;
use serde_json::Value;

use super::{ServiceClient, execute_child};
use crate::application::ports::{EngineError, InfoProbe, WorkflowContext};
use crate::domain::api::sma::{LIST_SMA_WORKFLOW, ListSmaParams, ListSmaResults};
use crate::domain::service::Service;
use crate::domain::workflow::ChildWorkflowOptions;
use crate::error::ClientError;

/// Client of the SMA service.
#[derive(Debug, Clone)]
pub struct SmaClient {
    inner: ServiceClient,
}

impl SmaClient {
    /// Wrap a client bound to the SMA queue.
    #[must_use]
    pub const fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// List SMA points of a pair.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_sma(&self, params: ListSmaParams) -> Result<ListSmaResults, ClientError> {
        self.inner.execute(LIST_SMA_WORKFLOW, &params).await
    }
}

#[async_trait]
impl InfoProbe for SmaClient {
    async fn info(&self) -> Result<Value, EngineError> {
        self.inner.info().await
    }
}

/// SMA operations issued from inside a workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmaWfClient;

impl SmaWfClient {
    /// List SMA points as a child workflow.
    ///
    /// # Errors
    ///
    /// Returns the relayed child workflow error.
    pub async fn list_sma(
        &self,
        ctx: &dyn WorkflowContext,
        params: ListSmaParams,
        options: Option<ChildWorkflowOptions>,
    ) -> Result<ListSmaResults, ClientError> {
        execute_child(ctx, Service::Sma, LIST_SMA_WORKFLOW, options, &params).await
    }
}
