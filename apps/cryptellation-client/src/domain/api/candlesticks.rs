//! Candlesticks service payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Workflow listing candlesticks over a time range.
pub const LIST_CANDLESTICKS_WORKFLOW: &str = "ListCandlesticksWorkflow";

/// One OHLCV candlestick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candlestick {
    /// Opening time of the period.
    pub time: DateTime<Utc>,
    /// Open price.
    pub open: Decimal,
    /// Highest price.
    pub high: Decimal,
    /// Lowest price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Traded volume.
    pub volume: Decimal,
}

/// Parameters of [`LIST_CANDLESTICKS_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCandlesticksParams {
    /// Exchange name.
    pub exchange: String,
    /// Trading pair (e.g. `BTC-USDT`).
    pub pair: String,
    /// Period symbol (e.g. `M1`, `H1`).
    pub period: String,
    /// Inclusive start of the range.
    pub start: Option<DateTime<Utc>>,
    /// Inclusive end of the range.
    pub end: Option<DateTime<Utc>>,
    /// Maximum number of candlesticks; 0 means no limit.
    pub limit: u32,
}

/// Results of [`LIST_CANDLESTICKS_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCandlesticksResults {
    /// Candlesticks in chronological order.
    pub list: Vec<Candlestick>,
}
