//! Backtests service payloads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Account, Callbacks};

/// Workflow creating and starting a backtest.
pub const CREATE_BACKTEST_WORKFLOW: &str = "CreateBacktestWorkflow";
/// Workflow returning one backtest.
pub const GET_BACKTEST_WORKFLOW: &str = "GetBacktestWorkflow";
/// Workflow listing backtests.
pub const LIST_BACKTESTS_WORKFLOW: &str = "ListBacktestsWorkflow";
/// Workflow subscribing a backtest to a price feed.
pub const SUBSCRIBE_TO_PRICE_WORKFLOW: &str = "SubscribeToBacktestPriceWorkflow";

/// How simulated prices are derived from candlesticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacktestPriceMode {
    /// Emit open, high/low and close for every candlestick.
    #[default]
    FullOhlc,
    /// Emit the close price only.
    CloseOnly,
}

/// Backtest configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktestParameters {
    /// Starting accounts keyed by exchange.
    pub accounts: HashMap<String, Account>,
    /// Simulation start.
    pub start_time: DateTime<Utc>,
    /// Simulation end; the service picks "now" when absent.
    pub end_time: Option<DateTime<Utc>>,
    /// Price derivation mode.
    pub mode: BacktestPriceMode,
    /// Period symbol between two simulated events.
    pub period_between_events: String,
}

/// Parameters of [`CREATE_BACKTEST_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBacktestParams {
    /// Backtest configuration.
    pub parameters: BacktestParameters,
    /// Callbacks driven by the run.
    pub callbacks: Callbacks,
}

/// Results of [`CREATE_BACKTEST_WORKFLOW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBacktestResults {
    /// ID of the new backtest.
    pub id: Uuid,
}

/// A backtest as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backtest {
    /// Backtest ID.
    pub id: Uuid,
    /// Configuration it was created with.
    pub parameters: BacktestParameters,
    /// Current accounts.
    pub accounts: HashMap<String, Account>,
    /// Simulated clock.
    pub current_time: DateTime<Utc>,
}

/// Parameters of [`GET_BACKTEST_WORKFLOW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBacktestParams {
    /// Backtest ID.
    pub id: Uuid,
}

/// Results of [`GET_BACKTEST_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBacktestResults {
    /// The backtest.
    pub backtest: Backtest,
}

/// Parameters of [`LIST_BACKTESTS_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBacktestsParams {}

/// Results of [`LIST_BACKTESTS_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBacktestsResults {
    /// Backtests.
    pub list: Vec<Backtest>,
}

/// Parameters of [`SUBSCRIBE_TO_PRICE_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeToPriceParams {
    /// Backtest receiving the prices.
    pub backtest_id: Uuid,
    /// Exchange name.
    pub exchange: String,
    /// Trading pair.
    pub pair: String,
}
