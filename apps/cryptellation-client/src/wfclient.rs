//! Workflow-context facade.
//!
//! Used from inside a running workflow to call the services as child
//! workflows. Calls go through the caller's [`WorkflowContext`]; this facade
//! holds no connection of its own.

use crate::application::ports::WorkflowContext;
use crate::application::services::{PriceRoute, route};
use crate::domain::api::SubscribeToPriceParams;
use crate::domain::api::candlesticks::{ListCandlesticksParams, ListCandlesticksResults};
use crate::domain::api::exchanges::{
    GetExchangeParams, GetExchangeResults, ListExchangesParams, ListExchangesResults,
};
use crate::domain::api::sma::{ListSmaParams, ListSmaResults};
use crate::domain::workflow::ChildWorkflowOptions;
use crate::error::ClientError;
use crate::infrastructure::services::{
    BacktestsWfClient, CandlesticksWfClient, ExchangesWfClient, ForwardtestsWfClient, SmaWfClient,
};

/// Client of the Cryptellation services from inside a workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct WfClient {
    backtests: BacktestsWfClient,
    candlesticks: CandlesticksWfClient,
    exchanges: ExchangesWfClient,
    forwardtests: ForwardtestsWfClient,
    sma: SmaWfClient,
}

impl WfClient {
    /// Create a workflow-context client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe the calling run to the prices of a pair.
    ///
    /// The subscription goes to the backtests or forwardtests service
    /// depending on the run's mode, as a child workflow on the run's parent
    /// task queue.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotImplemented`] for live runs,
    /// [`ClientError::InvalidMode`] for unknown modes, and the relayed child
    /// workflow error otherwise.
    pub async fn subscribe_to_price(
        &self,
        ctx: &dyn WorkflowContext,
        params: SubscribeToPriceParams,
    ) -> Result<(), ClientError> {
        match route(params)? {
            PriceRoute::Backtest { options, params } => {
                self.backtests
                    .subscribe_to_price(ctx, params, Some(options))
                    .await
            }
            PriceRoute::Forwardtest { options, params } => {
                self.forwardtests
                    .subscribe_to_price(ctx, params, Some(options))
                    .await
            }
        }
    }

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
        self.candlesticks
            .list_candlesticks(ctx, params, options)
            .await
    }

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
        self.exchanges.get_exchange(ctx, params, options).await
    }

    /// List exchanges as a child workflow.
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
        self.exchanges.list_exchanges(ctx, params, options).await
    }

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
        self.sma.list_sma(ctx, params, options).await
    }
}
