//! Price Subscription Router
//!
//! Decides which service receives a price subscription issued from inside a
//! running workflow, based on the execution mode of the owning run.

use crate::domain::api::{SubscribeToPriceParams, backtests, forwardtests};
use crate::domain::mode::ExecutionMode;
use crate::domain::workflow::ChildWorkflowOptions;
use crate::error::ClientError;

/// Where a price subscription must be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceRoute {
    /// Relay to the backtests service.
    Backtest {
        /// Child workflow routing, on the parent's task queue.
        options: ChildWorkflowOptions,
        /// Backtests request.
        params: backtests::SubscribeToPriceParams,
    },
    /// Relay to the forwardtests service.
    Forwardtest {
        /// Child workflow routing, on the parent's task queue.
        options: ChildWorkflowOptions,
        /// Forwardtests request.
        params: forwardtests::SubscribeToPriceParams,
    },
}

/// Map a run-scoped subscription to its service request.
///
/// Live runs are rejected with [`ClientError::NotImplemented`] and
/// unrecognised mode tags with [`ClientError::InvalidMode`].
pub fn route(params: SubscribeToPriceParams) -> Result<PriceRoute, ClientError> {
    let SubscribeToPriceParams {
        run,
        exchange,
        pair,
    } = params;

    let mode = run
        .execution_mode()
        .map_err(|invalid| ClientError::InvalidMode { mode: invalid.0 })?;
    let options = ChildWorkflowOptions::on_task_queue(run.parent_task_queue);

    match mode {
        ExecutionMode::Backtest => Ok(PriceRoute::Backtest {
            options,
            params: backtests::SubscribeToPriceParams {
                backtest_id: run.id,
                exchange,
                pair,
            },
        }),
        ExecutionMode::Forwardtest => Ok(PriceRoute::Forwardtest {
            options,
            params: forwardtests::SubscribeToPriceParams {
                forwardtest_id: run.id,
                exchange,
                pair,
            },
        }),
        ExecutionMode::Live => Err(ClientError::NotImplemented { mode }),
    }
}
