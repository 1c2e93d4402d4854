//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use cryptellation_client::{
    ChildWorkflowOptions, EngineDialer, EngineError, EngineLogger, WorkflowContext,
    WorkflowEngine, WorkflowRequest,
};

/// What the fake engine does with a request.
pub enum Reply {
    /// Answer immediately.
    Now(Result<Value, EngineError>),
    /// Never answer.
    Hang,
}

type Responder = Box<dyn Fn(&WorkflowRequest) -> Reply + Send + Sync>;

/// In-memory engine answering through a closure.
pub struct FakeEngine {
    respond: Responder,
    requests: Mutex<Vec<WorkflowRequest>>,
    closes: AtomicUsize,
    abandoned: Arc<AtomicUsize>,
}

impl FakeEngine {
    pub fn new(respond: impl Fn(&WorkflowRequest) -> Reply + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            respond: Box::new(respond),
            requests: Mutex::new(Vec::new()),
            closes: AtomicUsize::new(0),
            abandoned: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Engine answering every request with `value`.
    pub fn answering(value: Value) -> Arc<Self> {
        Self::new(move |_| Reply::Now(Ok(value.clone())))
    }

    pub fn requests(&self) -> Vec<WorkflowRequest> {
        self.requests.lock().clone()
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Number of hanging calls whose future was dropped.
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }
}

struct CountOnDrop(Arc<AtomicUsize>);

impl Drop for CountOnDrop {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl WorkflowEngine for FakeEngine {
    async fn execute_workflow(&self, request: WorkflowRequest) -> Result<Value, EngineError> {
        let reply = (self.respond)(&request);
        self.requests.lock().push(request);

        match reply {
            Reply::Now(result) => result,
            Reply::Hang => {
                let _guard = CountOnDrop(Arc::clone(&self.abandoned));
                std::future::pending().await
            }
        }
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Dialer handing out one prepared engine, or failing when it has none.
pub struct FakeDialer {
    engine: Mutex<Option<Arc<dyn WorkflowEngine>>>,
    dials: AtomicUsize,
}

impl FakeDialer {
    pub fn with(engine: Arc<dyn WorkflowEngine>) -> Self {
        Self {
            engine: Mutex::new(Some(engine)),
            dials: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            engine: Mutex::new(None),
            dials: AtomicUsize::new(0),
        }
    }

    pub fn dials(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EngineDialer for FakeDialer {
    async fn dial(
        &self,
        address: &str,
        _logger: Arc<dyn EngineLogger>,
    ) -> Result<Arc<dyn WorkflowEngine>, EngineError> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        self.engine.lock().clone().ok_or_else(|| EngineError::Connect {
            endpoint: address.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

/// A child workflow call seen by [`FakeContext`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChildCall {
    pub workflow_type: String,
    pub options: ChildWorkflowOptions,
    pub input: Value,
}

/// Workflow context recording child workflow calls.
pub struct FakeContext {
    reply: Mutex<Box<dyn FnMut() -> Result<Value, EngineError> + Send>>,
    calls: Mutex<Vec<ChildCall>>,
}

impl FakeContext {
    pub fn answering(value: Value) -> Self {
        Self {
            reply: Mutex::new(Box::new(move || Ok(value.clone()))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make_error: fn() -> EngineError) -> Self {
        Self {
            reply: Mutex::new(Box::new(move || Err(make_error()))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ChildCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl WorkflowContext for FakeContext {
    async fn execute_child_workflow(
        &self,
        workflow_type: &str,
        options: ChildWorkflowOptions,
        input: Value,
    ) -> Result<Value, EngineError> {
        self.calls.lock().push(ChildCall {
            workflow_type: workflow_type.to_string(),
            options,
            input,
        });
        (self.reply.lock())()
    }
}
