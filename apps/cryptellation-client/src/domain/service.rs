//! Cryptellation services reachable through the workflow engine.
//!
//! Each service runs its own worker pool listening on a published task queue.
//! The queue names are part of each service's public contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Workflow every service registers to report its liveness and metadata.
pub const SERVICE_INFO_WORKFLOW: &str = "ServiceInfoWorkflow";

/// An upstream Cryptellation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Backtest orchestration.
    Backtests,
    /// Historical candlesticks.
    Candlesticks,
    /// Exchange metadata.
    Exchanges,
    /// Forward-test orchestration.
    Forwardtests,
    /// Simple moving average series.
    Sma,
    /// Live tick streams.
    Ticks,
}

impl Service {
    /// Every service, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::Backtests,
        Self::Candlesticks,
        Self::Exchanges,
        Self::Forwardtests,
        Self::Sma,
        Self::Ticks,
    ];

    /// Name used as the key in info reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Backtests => "backtests",
            Self::Candlesticks => "candlesticks",
            Self::Exchanges => "exchanges",
            Self::Forwardtests => "forwardtests",
            Self::Sma => "sma",
            Self::Ticks => "ticks",
        }
    }

    /// Task queue the service's workers poll.
    #[must_use]
    pub const fn task_queue(&self) -> &'static str {
        match self {
            Self::Backtests => "CryptellationBacktestsTaskQueue",
            Self::Candlesticks => "CryptellationCandlesticksTaskQueue",
            Self::Exchanges => "CryptellationExchangesTaskQueue",
            Self::Forwardtests => "CryptellationForwardtestsTaskQueue",
            Self::Sma => "CryptellationSmaTaskQueue",
            Self::Ticks => "CryptellationTicksTaskQueue",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown service name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service: {0}")]
pub struct UnknownService(pub String);

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for service in Service::ALL {
            assert_eq!(service.as_str().parse::<Service>(), Ok(service));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "options".parse::<Service>(),
            Err(UnknownService("options".to_string()))
        );
    }

    #[test]
    fn task_queues_are_distinct() {
        let queues: HashSet<_> = Service::ALL.iter().map(Service::task_queue).collect();
        assert_eq!(queues.len(), Service::ALL.len());
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Service::Forwardtests).unwrap();
        assert_eq!(json, "\"forwardtests\"");
    }
}
