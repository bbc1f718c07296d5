//! Stub market data provider
//!
//! Serves canned JSON on `GET /query`, keyed by the `function` query
//! parameter (and optionally `symbol`), and counts every request it receives.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use market_agent::MarketConfig;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Canned answer for one route
#[derive(Debug, Clone)]
struct StubResponse {
    status: StatusCode,
    body: String,
    delay: Duration,
}

#[derive(Debug, Default)]
struct StubState {
    routes: HashMap<String, StubResponse>,
    hits: AtomicUsize,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

/// Running stub provider
///
/// When dropped, the server shuts down.
pub struct StubProvider {
    /// Query endpoint, e.g. `http://127.0.0.1:12345/query`
    pub base_url: String,
    state: Arc<StubState>,
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

/// Builder for [`StubProvider`]
#[derive(Debug, Default)]
pub struct StubProviderBuilder {
    routes: HashMap<String, StubResponse>,
}

impl StubProviderBuilder {
    /// Answer `route` with a 200 JSON body
    ///
    /// `route` is a function name (`GLOBAL_QUOTE`) or a function and symbol
    /// (`GLOBAL_QUOTE:AAPL`); the latter wins when both match.
    pub fn json(self, route: &str, body: Value) -> Self {
        self.raw(route, StatusCode::OK, body.to_string())
    }

    /// Answer `route` with an arbitrary status and body
    pub fn raw(mut self, route: &str, status: StatusCode, body: impl Into<String>) -> Self {
        self.routes.insert(
            route.to_string(),
            StubResponse {
                status,
                body: body.into(),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Delay the answer for an already configured `route`
    pub fn delay(mut self, route: &str, delay: Duration) -> Self {
        if let Some(response) = self.routes.get_mut(route) {
            response.delay = delay;
        }
        self
    }

    /// Bind to a random local port and start serving
    pub async fn spawn(self) -> StubProvider {
        let state = Arc::new(StubState {
            routes: self.routes,
            ..Default::default()
        });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let app = Router::new()
            .route("/query", get(query))
            .with_state(Arc::clone(&state));

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Stub provider failed");
        });

        StubProvider {
            base_url: format!("http://127.0.0.1:{port}/query"),
            state,
            _shutdown_tx: shutdown_tx,
        }
    }
}

impl StubProvider {
    pub fn builder() -> StubProviderBuilder {
        StubProviderBuilder::default()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Query parameters of every request received so far
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Configuration pointing at this stub
    pub fn config(&self) -> MarketConfig {
        self.config_with(|builder| builder)
    }

    /// Configuration pointing at this stub, adjusted by `f`
    pub fn config_with(
        &self,
        f: impl FnOnce(market_agent::config::MarketConfigBuilder) -> market_agent::config::MarketConfigBuilder,
    ) -> MarketConfig {
        f(MarketConfig::builder()
            .alpha_vantage_api_key("test_key")
            .base_url(&self.base_url)
            .request_timeout(Duration::from_secs(2)))
        .build()
        .unwrap()
    }
}

async fn query(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(params.clone());

    let function = params.get("function").cloned().unwrap_or_default();
    let route = params
        .get("symbol")
        .and_then(|symbol| state.routes.get(&format!("{function}:{symbol}")))
        .or_else(|| state.routes.get(&function));

    match route {
        Some(response) => {
            if !response.delay.is_zero() {
                tokio::time::sleep(response.delay).await;
            }
            (
                response.status,
                [(header::CONTENT_TYPE, "application/json")],
                response.body.clone(),
            )
                .into_response()
        }
        None => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json!({
                "Error Message": "Invalid API call. Please retry or visit the documentation (https://www.alphavantage.co/documentation/) for GLOBAL_QUOTE."
            })
            .to_string(),
        )
            .into_response(),
    }
}

/// Base URL of a local port nothing listens on
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let port = listener
        .local_addr()
        .expect("Failed to get local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}/query")
}
