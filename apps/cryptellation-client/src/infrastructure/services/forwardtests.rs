//! Forwardtests service client.

use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde_json::Value;

use super::{ServiceClient, execute_child};
use crate::application::ports::{EngineError, InfoProbe, WorkflowContext};
use crate::domain::api::forwardtests::{
    CREATE_FORWARDTEST_WORKFLOW, CreateForwardtestParams, CreateForwardtestResults,
    LIST_FORWARDTESTS_WORKFLOW, ListForwardtestsParams, ListForwardtestsResults,
    SUBSCRIBE_TO_PRICE_WORKFLOW, SubscribeToPriceParams,
};
use crate::domain::service::Service;
use crate::domain::workflow::ChildWorkflowOptions;
use crate::error::ClientError;

/// Client of the forwardtests service.
#[derive(Debug, Clone)]
pub struct ForwardtestsClient {
    inner: ServiceClient,
}

impl ForwardtestsClient {
    /// Wrap a client bound to the forwardtests queue.
    #[must_use]
    pub const fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// Create and start a forwardtest.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn new_forwardtest(
        &self,
        params: CreateForwardtestParams,
    ) -> Result<CreateForwardtestResults, ClientError> {
        self.inner.execute(CREATE_FORWARDTEST_WORKFLOW, &params).await
    }

    /// List forwardtests.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_forwardtests(
        &self,
        params: ListForwardtestsParams,
    ) -> Result<ListForwardtestsResults, ClientError> {
        self.inner.execute(LIST_FORWARDTESTS_WORKFLOW, &params).await
    }
}

#[async_trait]
impl InfoProbe for ForwardtestsClient {
    async fn info(&self) -> Result<Value, EngineError> {
        self.inner.info().await
    }
}

/// Forwardtests operations issued from inside a workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardtestsWfClient;

impl ForwardtestsWfClient {
    /// Subscribe a forwardtest to the prices of a pair.
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
            Service::Forwardtests,
            SUBSCRIBE_TO_PRICE_WORKFLOW,
            options,
            &params,
        )
        .await?;
        Ok(())
    }
}
