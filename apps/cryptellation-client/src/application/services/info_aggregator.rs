//! Info Aggregator
//!
//! Queries every service's info probe concurrently and merges the payloads
//! into one [`ServicesInfo`] report.
//!
//! All probes of one call share a cancellation scope derived from the
//! caller's token. The first failure cancels the scope, aborts the probes
//! still in flight and is returned as the result of the whole call; the
//! payloads collected so far are discarded.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{EngineError, InfoProbe};
use crate::domain::info::ServicesInfo;
use crate::error::ClientError;

/// Fan-out over a fixed set of info probes.
#[derive(Clone)]
pub struct InfoAggregator {
    probes: Vec<(String, Arc<dyn InfoProbe>)>,
}

impl std::fmt::Debug for InfoAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoAggregator")
            .field(
                "probes",
                &self.probes.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl InfoAggregator {
    /// Create an aggregator over named probes.
    pub fn new<S>(probes: impl IntoIterator<Item = (S, Arc<dyn InfoProbe>)>) -> Self
    where
        S: Into<String>,
    {
        Self {
            probes: probes
                .into_iter()
                .map(|(name, probe)| (name.into(), probe))
                .collect(),
        }
    }

    /// Names of the probed services.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.probes.iter().map(|(name, _)| name.as_str())
    }

    /// Run every probe concurrently and collect their payloads.
    ///
    /// Returns one entry per probe on success. Cancelling `cancel` makes every
    /// outstanding probe give up and the call fail with a cancelled
    /// [`ClientError::Aggregation`].
    ///
    /// # Panics
    ///
    /// Re-raises the panic of a probe task that panicked.
    #[tracing::instrument(skip_all, fields(probes = self.probes.len()))]
    pub async fn aggregate(&self, cancel: &CancellationToken) -> Result<ServicesInfo, ClientError> {
        let scope = cancel.child_token();
        let report = Arc::new(Mutex::new(ServicesInfo::new()));
        let mut tasks = JoinSet::new();

        for (service, probe) in &self.probes {
            let service = service.clone();
            let probe = Arc::clone(probe);
            let scope = scope.clone();
            let report = Arc::clone(&report);

            tasks.spawn(async move {
                let info = tokio::select! {
                    biased;
                    () = scope.cancelled() => Err(EngineError::Cancelled),
                    info = probe.info() => info,
                };

                match info {
                    Ok(info) => {
                        report.lock().insert(service, info);
                        Ok(())
                    }
                    Err(source) => Err(ClientError::Aggregation { service, source }),
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let failure = match joined {
                Ok(Ok(())) => continue,
                Ok(Err(failure)) => failure,
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                Err(_) => continue,
            };

            scope.cancel();
            tasks.abort_all();
            tracing::debug!(error = %failure, "info aggregation failed");
            return Err(failure);
        }

        let report = std::mem::take(&mut *report.lock());
        tracing::debug!(services = report.len(), "info aggregation complete");
        Ok(report)
    }
}
