//! Simple moving average service payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Workflow listing SMA points.
pub const LIST_SMA_WORKFLOW: &str = "ListSmaWorkflow";

/// Candlestick price an average is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Open price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Close price.
    #[default]
    Close,
}

/// Parameters of [`LIST_SMA_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSmaParams {
    /// Exchange name.
    pub exchange: String,
    /// Trading pair.
    pub pair: String,
    /// Candlestick period symbol.
    pub period: String,
    /// Start of the range.
    pub start: DateTime<Utc>,
    /// End of the range.
    pub end: DateTime<Utc>,
    /// Number of periods averaged.
    pub period_number: u32,
    /// Price averaged.
    pub price_type: PriceType,
}

/// One SMA value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmaPoint {
    /// Time of the point.
    pub time: DateTime<Utc>,
    /// Average value.
    pub price: Decimal,
}

/// Results of [`LIST_SMA_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSmaResults {
    /// Points in chronological order.
    pub data: Vec<SmaPoint>,
}
