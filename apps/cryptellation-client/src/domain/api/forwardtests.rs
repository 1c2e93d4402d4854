//! Forwardtests service payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Account, Callbacks};

/// Workflow creating and starting a forwardtest.
pub const CREATE_FORWARDTEST_WORKFLOW: &str = "CreateForwardtestWorkflow";
/// Workflow listing forwardtests.
pub const LIST_FORWARDTESTS_WORKFLOW: &str = "ListForwardtestsWorkflow";
/// Workflow subscribing a forwardtest to a price feed.
pub const SUBSCRIBE_TO_PRICE_WORKFLOW: &str = "SubscribeToForwardtestPriceWorkflow";

/// Parameters of [`CREATE_FORWARDTEST_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateForwardtestParams {
    /// Starting accounts keyed by exchange.
    pub accounts: HashMap<String, Account>,
    /// Callbacks driven by the run.
    pub callbacks: Callbacks,
}

/// Results of [`CREATE_FORWARDTEST_WORKFLOW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateForwardtestResults {
    /// ID of the new forwardtest.
    pub id: Uuid,
}

/// A forwardtest as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forwardtest {
    /// Forwardtest ID.
    pub id: Uuid,
    /// Current accounts.
    pub accounts: HashMap<String, Account>,
}

/// Parameters of [`LIST_FORWARDTESTS_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListForwardtestsParams {}

/// Results of [`LIST_FORWARDTESTS_WORKFLOW`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListForwardtestsResults {
    /// Forwardtests.
    pub list: Vec<Forwardtest>,
}

/// Parameters of [`SUBSCRIBE_TO_PRICE_WORKFLOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeToPriceParams {
    /// Forwardtest receiving the prices.
    pub forwardtest_id: Uuid,
    /// Exchange name.
    pub exchange: String,
    /// Trading pair.
    pub pair: String,
}
