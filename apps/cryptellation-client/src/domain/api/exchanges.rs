//! Exchanges service payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Workflow returning one exchange.
pub const GET_EXCHANGE_WORKFLOW: &str = "GetExchangeWorkflow";
/// Workflow listing the supported exchanges.
pub const LIST_EXCHANGES_WORKFLOW: &str = "ListExchangesWorkflow";

/// Exchange metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Exchange name (e.g. `binance`).
    pub name: String,
    /// Supported candlestick periods.
    pub periods: Vec<String>,
    /// Supported trading pairs.
    pub pairs: Vec<String>,
    /// Taker fee ratio.
    pub fees: Decimal,
    /// Last time the metadata was refreshed from the exchange.
    pub last_sync_time: DateTime<Utc>,
}

/// Parameters of [`GET_EXCHANGE_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetExchangeParams {
    /// Exchange name.
    pub name: String,
}

impl GetExchangeParams {
    /// Look up an exchange by name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Results of [`GET_EXCHANGE_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetExchangeResults {
    /// The exchange.
    pub exchange: Exchange,
}

/// Parameters of [`LIST_EXCHANGES_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListExchangesParams {}

/// Results of [`LIST_EXCHANGES_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListExchangesResults {
    /// Exchange names.
    pub list: Vec<String>,
}
