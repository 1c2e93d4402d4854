//! Services Info Integration Tests
//!
//! Fan-out of the info probes through a full client.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use cryptellation_client::{Client, ClientConfig, ClientError, EngineError, Service};
use support::{FakeDialer, FakeEngine, Reply};

async fn client_over(engine: std::sync::Arc<FakeEngine>) -> Client {
    Client::connect_with_dialer(
        ClientConfig::default().with_engine_handle(engine),
        &FakeDialer::unreachable(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn reports_one_entry_per_service() {
    let engine = FakeEngine::new(|request| {
        Reply::Now(Ok(json!({ "queue": request.task_queue })))
    });
    let client = client_over(engine.clone()).await;

    let report = client
        .services_info(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.len(), Service::ALL.len());
    for service in Service::ALL {
        assert_eq!(
            report.get(service.as_str()),
            Some(&json!({ "queue": service.task_queue() }))
        );
    }

    let requests = engine.requests();
    assert_eq!(requests.len(), Service::ALL.len());
    assert!(
        requests
            .iter()
            .all(|r| r.workflow_type == "ServiceInfoWorkflow")
    );
}

#[tokio::test]
async fn failing_service_fails_the_whole_report() {
    let engine = FakeEngine::new(|request| {
        if request.task_queue == Service::Sma.task_queue() {
            Reply::Now(Err(EngineError::Unavailable {
                message: "no worker polling".to_string(),
            }))
        } else {
            Reply::Hang
        }
    });
    let client = client_over(engine.clone()).await;

    let err = tokio::time::timeout(
        Duration::from_secs(1),
        client.services_info(&CancellationToken::new()),
    )
    .await
    .expect("aggregation hung after a failure")
    .unwrap_err();

    match err {
        ClientError::Aggregation { service, source } => {
            assert_eq!(service, "sma");
            assert!(matches!(source, EngineError::Unavailable { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Every probe that started hanging must be dropped once the failure is observed.
    tokio::time::timeout(Duration::from_secs(1), async {
        while engine.abandoned() + 1 < engine.requests().len() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("outstanding probes were not cancelled");
}

#[tokio::test]
async fn caller_cancellation_returns_promptly() {
    let engine = FakeEngine::new(|_| Reply::Hang);
    let client = client_over(engine.clone()).await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(25)).await;
        trigger.cancel();
    });

    let err = tokio::time::timeout(Duration::from_secs(1), client.services_info(&cancel))
        .await
        .expect("aggregation ignored cancellation")
        .unwrap_err();
    assert!(err.is_cancelled());

    tokio::time::timeout(Duration::from_secs(1), async {
        while engine.abandoned() < engine.requests().len() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("probes were not cancelled");
}

#[tokio::test]
async fn reports_are_never_cached() {
    let engine = FakeEngine::answering(json!({"up": true}));
    let client = client_over(engine.clone()).await;

    client.services_info(&CancellationToken::new()).await.unwrap();
    client.services_info(&CancellationToken::new()).await.unwrap();

    assert_eq!(engine.requests().len(), 2 * Service::ALL.len());
}
