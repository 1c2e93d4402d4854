//! Client facade over the Cryptellation services.
//!
//! A [`Client`] owns one engine handle and one sub-client per service, all
//! built at construction and never changed afterwards. Every domain
//! operation is relayed to the matching sub-client; only the info fan-out
//! and the connection lifecycle are handled here.
//!
//! # Example
//!
//! ```ignore
//! let config = ClientConfig::default().with_engine_address("localhost:7233");
//! let client = Client::connect(config).await?;
//!
//! let exchanges = client.list_exchanges(ListExchangesParams {}).await?;
//! let info = client.services_info(&CancellationToken::new()).await?;
//!
//! client.close();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::application::ports::{EngineDialer, InfoProbe, WorkflowEngine};
use crate::application::services::InfoAggregator;
use crate::domain::api::backtests::{
    CreateBacktestParams, CreateBacktestResults, GetBacktestParams, GetBacktestResults,
    ListBacktestsParams, ListBacktestsResults,
};
use crate::domain::api::candlesticks::{ListCandlesticksParams, ListCandlesticksResults};
use crate::domain::api::exchanges::{
    GetExchangeParams, GetExchangeResults, ListExchangesParams, ListExchangesResults,
};
use crate::domain::api::forwardtests::{
    CreateForwardtestParams, CreateForwardtestResults, ListForwardtestsParams,
    ListForwardtestsResults,
};
use crate::domain::api::sma::{ListSmaParams, ListSmaResults};
use crate::domain::api::ticks::ListenerParams;
use crate::domain::info::ServicesInfo;
use crate::domain::service::Service;
use crate::error::ClientError;
use crate::infrastructure::config::{ClientConfig, ClientOption, Connectivity};
use crate::infrastructure::engine::GrpcDialer;
use crate::infrastructure::services::{
    BacktestsClient, CandlesticksClient, ExchangesClient, ForwardtestsClient, ServiceClient,
    SmaClient, TicksClient,
};

/// Who is responsible for closing the engine handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOwnership {
    /// The client dialed the engine and closes it.
    Internal,
    /// The caller supplied the handle and keeps it open.
    External,
}

/// Client of the Cryptellation stack.
pub struct Client {
    engine: Arc<dyn WorkflowEngine>,
    ownership: EngineOwnership,
    closed: AtomicBool,

    backtests: BacktestsClient,
    candlesticks: CandlesticksClient,
    exchanges: ExchangesClient,
    forwardtests: ForwardtestsClient,
    sma: SmaClient,
    ticks: TicksClient,

    info: InfoAggregator,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("ownership", &self.ownership)
            .field("closed", &self.closed.load(Ordering::Acquire))
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client from options applied in order.
    ///
    /// # Errors
    ///
    /// Same as [`Client::connect`].
    pub async fn new(options: impl IntoIterator<Item = ClientOption>) -> Result<Self, ClientError> {
        Self::connect(ClientConfig::from_options(options)).await
    }

    /// Build a client, dialing the engine over gRPC if an address is set.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the connectivity options are
    /// missing or conflicting, and [`ClientError::Connection`] when dialing
    /// fails.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let dialer = GrpcDialer::new(config.engine.clone());
        Self::connect_with_dialer(config, &dialer).await
    }

    /// Build a client with a custom dialer.
    ///
    /// The dialer is only used when the configuration names an address.
    ///
    /// # Errors
    ///
    /// Same as [`Client::connect`].
    pub async fn connect_with_dialer(
        config: ClientConfig,
        dialer: &dyn EngineDialer,
    ) -> Result<Self, ClientError> {
        let (engine, ownership) = match config.resolve()? {
            Connectivity::Dial(address) => {
                let engine = dialer
                    .dial(&address, Arc::clone(&config.logger))
                    .await
                    .map_err(ClientError::Connection)?;
                tracing::debug!(address = %address, "Dialed workflow engine");
                (engine, EngineOwnership::Internal)
            }
            Connectivity::External(engine) => {
                tracing::debug!("Using caller-owned workflow engine");
                (engine, EngineOwnership::External)
            }
        };

        Ok(Self::from_engine(engine, ownership))
    }

    fn from_engine(engine: Arc<dyn WorkflowEngine>, ownership: EngineOwnership) -> Self {
        let bind = |service| ServiceClient::new(service, Arc::clone(&engine));

        let backtests = BacktestsClient::new(bind(Service::Backtests));
        let candlesticks = CandlesticksClient::new(bind(Service::Candlesticks));
        let exchanges = ExchangesClient::new(bind(Service::Exchanges));
        let forwardtests = ForwardtestsClient::new(bind(Service::Forwardtests));
        let sma = SmaClient::new(bind(Service::Sma));
        let ticks = TicksClient::new(bind(Service::Ticks));

        let info = InfoAggregator::new(Service::ALL.map(|service| {
            let probe: Arc<dyn InfoProbe> = match service {
                Service::Backtests => Arc::new(backtests.clone()),
                Service::Candlesticks => Arc::new(candlesticks.clone()),
                Service::Exchanges => Arc::new(exchanges.clone()),
                Service::Forwardtests => Arc::new(forwardtests.clone()),
                Service::Sma => Arc::new(sma.clone()),
                Service::Ticks => Arc::new(ticks.clone()),
            };
            (service.as_str(), probe)
        }));

        Self {
            engine,
            ownership,
            closed: AtomicBool::new(false),
            backtests,
            candlesticks,
            exchanges,
            forwardtests,
            sma,
            ticks,
            info,
        }
    }

    /// The shared engine handle.
    #[must_use]
    pub const fn engine(&self) -> &Arc<dyn WorkflowEngine> {
        &self.engine
    }

    /// Whether the client closes the engine handle.
    #[must_use]
    pub const fn ownership(&self) -> EngineOwnership {
        self.ownership
    }

    /// Query every service's info concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first failing probe as [`ClientError::Aggregation`]; the
    /// remaining probes are cancelled. Cancelling `cancel` fails the call the
    /// same way.
    pub async fn services_info(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ServicesInfo, ClientError> {
        self.info.aggregate(cancel).await
    }

    /// Create and start a backtest.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn new_backtest(
        &self,
        params: CreateBacktestParams,
    ) -> Result<CreateBacktestResults, ClientError> {
        self.backtests.new_backtest(params).await
    }

    /// Get one backtest.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn get_backtest(
        &self,
        params: GetBacktestParams,
    ) -> Result<GetBacktestResults, ClientError> {
        self.backtests.get_backtest(params).await
    }

    /// List backtests.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_backtests(
        &self,
        params: ListBacktestsParams,
    ) -> Result<ListBacktestsResults, ClientError> {
        self.backtests.list_backtests(params).await
    }

    /// List candlesticks.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_candlesticks(
        &self,
        params: ListCandlesticksParams,
    ) -> Result<ListCandlesticksResults, ClientError> {
        self.candlesticks.list_candlesticks(params).await
    }

    /// Get one exchange.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn get_exchange(
        &self,
        params: GetExchangeParams,
    ) -> Result<GetExchangeResults, ClientError> {
        self.exchanges.get_exchange(params).await
    }

    /// List exchanges.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_exchanges(
        &self,
        params: ListExchangesParams,
    ) -> Result<ListExchangesResults, ClientError> {
        self.exchanges.list_exchanges(params).await
    }

    /// List SMA points.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_sma(&self, params: ListSmaParams) -> Result<ListSmaResults, ClientError> {
        self.sma.list_sma(params).await
    }

    /// Create and start a forwardtest.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn new_forwardtest(
        &self,
        params: CreateForwardtestParams,
    ) -> Result<CreateForwardtestResults, ClientError> {
        self.forwardtests.new_forwardtest(params).await
    }

    /// List forwardtests.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn list_forwardtests(
        &self,
        params: ListForwardtestsParams,
    ) -> Result<ListForwardtestsResults, ClientError> {
        self.forwardtests.list_forwardtests(params).await
    }

    /// Register a tick listener on `exchange`/`pair`.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn listen_to_ticks(
        &self,
        listener: ListenerParams,
        exchange: &str,
        pair: &str,
    ) -> Result<(), ClientError> {
        self.ticks.listen_to_ticks(listener, exchange, pair).await
    }

    /// Unregister a tick listener from `exchange`/`pair`.
    ///
    /// # Errors
    ///
    /// Returns the relayed service error.
    pub async fn stop_listening_to_ticks(
        &self,
        listener_id: Uuid,
        exchange: &str,
        pair: &str,
    ) -> Result<(), ClientError> {
        self.ticks
            .stop_listening_to_ticks(listener_id, exchange, pair)
            .await
    }

    /// Release the engine handle if the client dialed it.
    ///
    /// Caller-owned handles are left open. Calling this more than once has no
    /// further effect.
    pub fn close(&self) {
        if self.ownership == EngineOwnership::External {
            return;
        }
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!("Closing dialed workflow engine");
            self.engine.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::predicate::function;
    use parking_lot::Mutex;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};

    use super::*;
    use crate::application::ports::{EngineError, EngineLogger, MockWorkflowEngine};
    use crate::domain::api::sma::PriceType;
    use crate::domain::workflow::WorkflowRequest;
    use crate::infrastructure::config::ConfigError;

    /// Dialer returning a prepared engine and recording the address.
    struct StubDialer {
        engine: Mutex<Option<Arc<dyn WorkflowEngine>>>,
        dialed: Mutex<Vec<String>>,
    }

    impl StubDialer {
        fn returning(engine: MockWorkflowEngine) -> Self {
            Self {
                engine: Mutex::new(Some(Arc::new(engine))),
                dialed: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                engine: Mutex::new(None),
                dialed: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EngineDialer for StubDialer {
        async fn dial(
            &self,
            address: &str,
            _logger: Arc<dyn EngineLogger>,
        ) -> Result<Arc<dyn WorkflowEngine>, EngineError> {
            self.dialed.lock().push(address.to_string());
            self.engine.lock().take().ok_or_else(|| EngineError::Connect {
                endpoint: address.to_string(),
                message: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn dialed_engine_is_closed_exactly_once() {
        let mut engine = MockWorkflowEngine::new();
        engine.expect_close().times(1).return_const(());
        let dialer = StubDialer::returning(engine);

        let config = ClientConfig::default().with_engine_address("localhost:7233");
        let client = Client::connect_with_dialer(config, &dialer).await.unwrap();

        assert_eq!(client.ownership(), EngineOwnership::Internal);
        assert_eq!(*dialer.dialed.lock(), ["localhost:7233"]);

        client.close();
        client.close();
    }

    #[tokio::test]
    async fn external_engine_is_never_closed() {
        let mut engine = MockWorkflowEngine::new();
        engine.expect_close().never();
        let handle: Arc<dyn WorkflowEngine> = Arc::new(engine);
        let dialer = StubDialer::failing();

        let config = ClientConfig::default().with_engine_handle(Arc::clone(&handle));
        let client = Client::connect_with_dialer(config, &dialer).await.unwrap();

        assert_eq!(client.ownership(), EngineOwnership::External);
        assert!(Arc::ptr_eq(client.engine(), &handle));
        assert!(dialer.dialed.lock().is_empty());
        client.close();
    }

    #[tokio::test]
    async fn dial_failure_is_returned_verbatim() {
        let dialer = StubDialer::failing();
        let config = ClientConfig::default().with_engine_address("nowhere:1");

        let err = Client::connect_with_dialer(config, &dialer)
            .await
            .unwrap_err();
        match err {
            ClientError::Connection(EngineError::Connect { endpoint, message }) => {
                assert_eq!(endpoint, "nowhere:1");
                assert_eq!(message, "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_options_fail_before_dialing() {
        let dialer = StubDialer::failing();

        let err = Client::connect_with_dialer(ClientConfig::default(), &dialer)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Config(ConfigError::NoConnectivitySource)
        ));
        assert!(dialer.dialed.lock().is_empty());
    }

    fn client_expecting(workflow: &'static str, queue: &'static str, output: Value) -> Client {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .with(function(move |request: &WorkflowRequest| {
                request.workflow_type == workflow && request.task_queue == queue
            }))
            .times(1)
            .returning(move |_| Ok(output.clone()));
        Client::from_engine(Arc::new(engine), EngineOwnership::External)
    }

    #[tokio::test]
    async fn candlesticks_relay_targets_candlesticks_queue() {
        let client = client_expecting(
            "ListCandlesticksWorkflow",
            "CryptellationCandlesticksTaskQueue",
            json!({"list": []}),
        );

        let results = client
            .list_candlesticks(ListCandlesticksParams {
                exchange: "binance".to_string(),
                pair: "BTC-USDT".to_string(),
                period: "M1".to_string(),
                start: None,
                end: None,
                limit: 0,
            })
            .await
            .unwrap();
        assert!(results.list.is_empty());
    }

    #[tokio::test]
    async fn sma_relay_targets_sma_queue() {
        let client = client_expecting(
            "ListSmaWorkflow",
            "CryptellationSmaTaskQueue",
            json!({"data": [{"time": "2024-01-01T00:00:00Z", "price": "42.5"}]}),
        );

        let results = client
            .list_sma(ListSmaParams {
                exchange: "binance".to_string(),
                pair: "ETH-USDT".to_string(),
                period: "H1".to_string(),
                start: "2024-01-01T00:00:00Z".parse().unwrap(),
                end: "2024-01-02T00:00:00Z".parse().unwrap(),
                period_number: 20,
                price_type: PriceType::Close,
            })
            .await
            .unwrap();
        assert_eq!(results.data.len(), 1);
        assert_eq!(results.data[0].price, Decimal::new(425, 1));
    }

    #[tokio::test]
    async fn forwardtests_relays_target_forwardtests_queue() {
        let id = Uuid::from_u128(7);
        let client = client_expecting(
            "ListForwardtestsWorkflow",
            "CryptellationForwardtestsTaskQueue",
            json!({"list": [{"id": id, "accounts": {}}]}),
        );

        let results = client
            .list_forwardtests(ListForwardtestsParams {})
            .await
            .unwrap();
        assert_eq!(results.list.len(), 1);
        assert_eq!(results.list[0].id, id);
    }

    #[tokio::test]
    async fn relay_errors_pass_through() {
        let mut engine = MockWorkflowEngine::new();
        engine
            .expect_execute_workflow()
            .returning(|_| Err(tonic::Status::not_found("no such forwardtest").into()));
        let client = Client::from_engine(Arc::new(engine), EngineOwnership::External);

        let err = client
            .list_forwardtests(ListForwardtestsParams {})
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Relay(EngineError::Status(ref status)) if status.code() == tonic::Code::NotFound
        ));
    }

    #[tokio::test]
    async fn info_covers_every_service() {
        let engine = MockWorkflowEngine::new();
        let client = Client::from_engine(Arc::new(engine), EngineOwnership::External);

        let mut services: Vec<_> = client.info.services().collect();
        services.sort_unstable();
        assert_eq!(
            services,
            ["backtests", "candlesticks", "exchanges", "forwardtests", "sma", "ticks"]
        );
    }
}
