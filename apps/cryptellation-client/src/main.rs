//! Cryptellation Info Binary
//!
//! Queries every Cryptellation service's info and prints the consolidated
//! report as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin cryptellation-info
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `CRYPTELLATION_TEMPORAL_ADDRESS`: Workflow engine address (`host:port`)
//!
//! ## Optional
//! - `CRYPTELLATION_ENGINE_CONNECT_TIMEOUT_SECS`: Connect timeout (default: 10)
//! - `CRYPTELLATION_ENGINE_REQUEST_TIMEOUT_SECS`: Per-call deadline, 0 = none (default: none)
//! - `CRYPTELLATION_ENGINE_TLS`: Use TLS (default: false)
//! - `CRYPTELLATION_INFO_TIMEOUT_SECS`: Give up after this many seconds (default: none)
//! - `OTEL_ENABLED`: Enable OpenTelemetry (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4317>)
//! - `OTEL_SERVICE_NAME`: Service name (default: cryptellation-client)
//! - `RUST_LOG`: Log filter (default: `cryptellation_client=info`)

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use cryptellation_client::infrastructure::telemetry;
use cryptellation_client::{Client, ClientConfig, TracingLogger};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let _telemetry_guard = telemetry::init()?;

    let config = ClientConfig::from_env()?.with_logger(Arc::new(TracingLogger));
    tracing::info!(
        engine_address = %config.engine_address,
        tls = config.engine.use_tls,
        "Configuration loaded"
    );

    let client = Client::connect(config)
        .await
        .context("failed to create Cryptellation client")?;

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_shutdown(
        cancel.clone(),
        info_timeout()?,
        signal::ctrl_c(),
    ));

    let report = client.services_info(&cancel).await;
    client.close();

    let report = report.context("failed to query services info")?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

fn info_timeout() -> anyhow::Result<Option<Duration>> {
    std::env::var("CRYPTELLATION_INFO_TIMEOUT_SECS")
        .ok()
        .map(|secs| {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("invalid CRYPTELLATION_INFO_TIMEOUT_SECS: {secs:?}"))
        })
        .transpose()
}

/// Cancel on Ctrl+C or once the timeout elapses.
///
/// If Ctrl+C cannot be listened for, only the timeout applies.
async fn cancel_on_shutdown(
    cancel: CancellationToken,
    timeout: Option<Duration>,
    interrupt: impl Future<Output = io::Result<()>>,
) {
    let interrupted = async {
        match interrupt.await {
            Ok(()) => tracing::info!("Received Ctrl+C, cancelling"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };
    let deadline = async {
        match timeout {
            Some(timeout) => tokio::time::sleep(timeout).await,
            None => std::future::pending().await,
        }
    };

    tokio::select! {
        () = interrupted => {}
        () = deadline => {
            tracing::warn!("Info timeout elapsed, cancelling");
        }
        () = cancel.cancelled() => return,
    }

    cancel.cancel();
}
