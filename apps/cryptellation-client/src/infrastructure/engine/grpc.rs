//! gRPC workflow engine adapter.
//!
//! Runs workflows through the workflow gateway's unary `ExecuteWorkflow`
//! method over a shared tonic channel.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tonic::client::Grpc;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use super::proto::{EXECUTE_WORKFLOW_PATH, ExecuteWorkflowRequest, ExecuteWorkflowResponse};
use super::settings::EngineSettings;
use crate::application::ports::{EngineDialer, EngineError, EngineLogger, WorkflowEngine};
use crate::domain::workflow::WorkflowRequest;

/// Engine handle backed by a gRPC channel.
///
/// Cloning the inner client is cheap; calls run concurrently over the same
/// HTTP/2 connection. Closing drops the handle's channel, so the connection
/// is released once in-flight calls finish.
pub struct GrpcWorkflowEngine {
    inner: Mutex<Option<Grpc<Channel>>>,
    endpoint: String,
    request_timeout: Option<Duration>,
    logger: Arc<dyn EngineLogger>,
}

impl std::fmt::Debug for GrpcWorkflowEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrpcWorkflowEngine")
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl GrpcWorkflowEngine {
    /// Connect to the engine at `address`.
    ///
    /// # Errors
    ///
    /// Returns error if the address is not a valid endpoint or the connection
    /// fails.
    pub async fn connect(
        address: &str,
        settings: &EngineSettings,
        logger: Arc<dyn EngineLogger>,
    ) -> Result<Self, EngineError> {
        let endpoint = normalize_endpoint(address, settings.use_tls);
        let channel = create_endpoint(&endpoint, settings)?
            .connect()
            .await
            .map_err(|e| {
                logger.error(
                    "workflow engine connection failed",
                    &[("endpoint", endpoint.as_str()), ("error", &e.to_string())],
                );
                EngineError::Connect {
                    endpoint: endpoint.clone(),
                    message: e.to_string(),
                }
            })?;

        tracing::info!(endpoint = %endpoint, "Connected to workflow engine");
        logger.info("connected to workflow engine", &[("endpoint", endpoint.as_str())]);

        Ok(Self::from_channel(channel, endpoint, settings, logger))
    }

    /// Connect lazily (connection established on first call).
    ///
    /// # Errors
    ///
    /// Returns error if the address is not a valid endpoint.
    pub fn connect_lazy(
        address: &str,
        settings: &EngineSettings,
        logger: Arc<dyn EngineLogger>,
    ) -> Result<Self, EngineError> {
        let endpoint = normalize_endpoint(address, settings.use_tls);
        let channel = create_endpoint(&endpoint, settings)?.connect_lazy();

        tracing::debug!(endpoint = %endpoint, "Created lazy connection to workflow engine");

        Ok(Self::from_channel(channel, endpoint, settings, logger))
    }

    fn from_channel(
        channel: Channel,
        endpoint: String,
        settings: &EngineSettings,
        logger: Arc<dyn EngineLogger>,
    ) -> Self {
        Self {
            inner: Mutex::new(Some(Grpc::new(channel))),
            endpoint,
            request_timeout: settings.request_timeout,
            logger,
        }
    }

    /// Endpoint URI the channel targets.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether [`WorkflowEngine::close`] was called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.lock().is_none()
    }
}

#[async_trait]
impl WorkflowEngine for GrpcWorkflowEngine {
    #[tracing::instrument(
        skip_all,
        fields(workflow = %request.workflow_type, task_queue = %request.task_queue)
    )]
    async fn execute_workflow(&self, request: WorkflowRequest) -> Result<Value, EngineError> {
        let mut client = self.inner.lock().clone().ok_or(EngineError::Closed)?;

        let message = encode_request(request)?;
        client.ready().await.map_err(|e| EngineError::Unavailable {
            message: e.to_string(),
        })?;

        let mut call = tonic::Request::new(message);
        if let Some(timeout) = self.request_timeout {
            call.set_timeout(timeout);
        }

        let response: tonic::Response<ExecuteWorkflowResponse> = client
            .unary(
                call,
                PathAndQuery::from_static(EXECUTE_WORKFLOW_PATH),
                tonic_prost::ProstCodec::default(),
            )
            .await
            .inspect_err(|status| {
                tracing::debug!(code = ?status.code(), "workflow execution failed");
                self.logger.debug(
                    "workflow execution failed",
                    &[
                        ("endpoint", self.endpoint.as_str()),
                        ("code", &format!("{:?}", status.code())),
                        ("message", status.message()),
                    ],
                );
            })?;

        decode_output(&response.into_inner().output)
    }

    fn close(&self) {
        if self.inner.lock().take().is_some() {
            tracing::debug!(endpoint = %self.endpoint, "Closed workflow engine handle");
            self.logger
                .debug("workflow engine handle closed", &[("endpoint", self.endpoint.as_str())]);
        }
    }
}

/// Dialer producing [`GrpcWorkflowEngine`] handles.
#[derive(Debug, Clone, Default)]
pub struct GrpcDialer {
    settings: EngineSettings,
}

impl GrpcDialer {
    /// Create a dialer with the given transport settings.
    #[must_use]
    pub const fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl EngineDialer for GrpcDialer {
    async fn dial(
        &self,
        address: &str,
        logger: Arc<dyn EngineLogger>,
    ) -> Result<Arc<dyn WorkflowEngine>, EngineError> {
        let engine = GrpcWorkflowEngine::connect(address, &self.settings, logger).await?;
        Ok(Arc::new(engine))
    }
}

/// Turn a `host:port` address into an endpoint URI.
///
/// Addresses that already carry a scheme are kept as they are.
#[must_use]
pub fn normalize_endpoint(address: &str, use_tls: bool) -> String {
    let address = address.trim();
    if address.contains("://") {
        address.to_string()
    } else if use_tls {
        format!("https://{address}")
    } else {
        format!("http://{address}")
    }
}

fn create_endpoint(endpoint: &str, settings: &EngineSettings) -> Result<Endpoint, EngineError> {
    let invalid = |message: String| EngineError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message,
    };

    let mut builder = Channel::from_shared(endpoint.to_string())
        .map_err(|e| invalid(e.to_string()))?
        .connect_timeout(settings.connect_timeout)
        .tcp_keepalive(Some(settings.tcp_keepalive))
        .http2_keep_alive_interval(settings.http2_keepalive_interval)
        .keep_alive_timeout(settings.keepalive_timeout)
        .keep_alive_while_idle(true)
        .tcp_nodelay(true);

    if settings.use_tls {
        builder = builder
            .tls_config(ClientTlsConfig::new().with_native_roots())
            .map_err(|e| invalid(e.to_string()))?;
    }

    Ok(builder)
}

fn encode_request(request: WorkflowRequest) -> Result<ExecuteWorkflowRequest, EngineError> {
    let input = serde_json::to_vec(&request.input).map_err(|e| EngineError::InvalidPayload {
        message: e.to_string(),
    })?;

    Ok(ExecuteWorkflowRequest {
        workflow_type: request.workflow_type,
        task_queue: request.task_queue,
        workflow_id: request.workflow_id,
        input,
        execution_timeout_ms: request
            .execution_timeout
            .map(|timeout| u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)),
        parent_workflow_id: request.parent_workflow_id,
    })
}

fn decode_output(output: &[u8]) -> Result<Value, EngineError> {
    if output.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(output).map_err(|e| EngineError::InvalidPayload {
        message: e.to_string(),
    })
}
