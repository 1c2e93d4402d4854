//! Request and response payloads of the Cryptellation services.
//!
//! These types mirror the published contracts of each service. The client
//! never inspects them: they are serialized to JSON on the way in and
//! deserialized on the way out.

pub mod backtests;
pub mod candlesticks;
pub mod exchanges;
pub mod forwardtests;
pub mod sma;
pub mod ticks;

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::mode::RunContext;

/// Workflow to be called back by a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackWorkflow {
    /// Registered workflow type name.
    pub name: String,
    /// Task queue the callback workflow runs on.
    pub task_queue: String,
}

impl CallbackWorkflow {
    /// Create a callback reference.
    #[must_use]
    pub fn new(name: impl Into<String>, task_queue: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            task_queue: task_queue.into(),
        }
    }
}

/// Callbacks invoked over the lifetime of a backtest or forwardtest run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callbacks {
    /// Called once before the first event.
    pub on_init: Option<CallbackWorkflow>,
    /// Called on every price update.
    pub on_new_prices: Option<CallbackWorkflow>,
    /// Called once after the last event.
    pub on_exit: Option<CallbackWorkflow>,
}

/// Simulated account, balances keyed by asset symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Balance per asset.
    pub balances: HashMap<String, Decimal>,
}

impl Account {
    /// Account holding a single asset.
    #[must_use]
    pub fn with_balance(asset: impl Into<String>, amount: Decimal) -> Self {
        Self {
            balances: HashMap::from([(asset.into(), amount)]),
        }
    }
}

/// Price subscription requested from inside a running strategy workflow.
///
/// The run decides which service receives the subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeToPriceParams {
    /// Run the subscription belongs to.
    pub run: RunContext,
    /// Exchange name.
    pub exchange: String,
    /// Trading pair.
    pub pair: String,
}
