//! Test server harness.
//!
//! [`spawn_mock_api`] impersonates the external datasheet API (search,
//! parameter lookup and configure endpoints). [`spawn_gateway`] runs the real
//! fibersheet router against it with HTTP-backed clients.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use fibersheet::gateway::{HandlerState, create_router_with_state};
use fibersheet::lookup::{CachedParameterSource, HttpParameterSource};
use fibersheet::publish::DatasheetPublisher;
use fibersheet::search::{HttpSearchBackend, SearchOrchestrator};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

/// Marker in `cableDescription` that makes the configure endpoint answer 500.
pub const REJECT_MARKER: &str = "REJECT";
/// Marker in `cableDescription` that makes it answer `{"success": false}`.
pub const DECLINE_MARKER: &str = "DECLINE";

/// How the mock search endpoint answers.
#[derive(Debug, Clone)]
pub enum SearchBehavior {
    Results(Vec<Value>),
    Status(u16),
    /// 200 with a body lacking the `res` array.
    MissingResults,
}

impl Default for SearchBehavior {
    fn default() -> Self {
        SearchBehavior::Results(Vec::new())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockApiConfig {
    pub search: SearchBehavior,
    /// Values served per external parameter name; unknown names get 404.
    pub parameters: HashMap<String, Vec<Value>>,
}

#[derive(Default)]
struct Recorded {
    searches: Vec<Value>,
    configured: Vec<Value>,
    lookups: Vec<String>,
}

#[derive(Clone)]
struct MockApiState {
    config: Arc<MockApiConfig>,
    recorded: Arc<Mutex<Recorded>>,
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub struct MockApi {
    pub server: TestServer,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockApi {
    pub fn search_url(&self) -> String {
        format!("{}/searchDatasheet", self.server.url())
    }

    pub fn configure_url(&self) -> String {
        format!("{}/configureDatasheet", self.server.url())
    }

    pub fn parameter_url(&self) -> String {
        format!("{}/getParameterValues", self.server.url())
    }

    /// Search bodies received so far.
    pub fn searches(&self) -> Vec<Value> {
        self.recorded.lock().unwrap().searches.clone()
    }

    /// Configure bodies received so far.
    pub fn configured(&self) -> Vec<Value> {
        self.recorded.lock().unwrap().configured.clone()
    }

    /// Parameter names looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.recorded.lock().unwrap().lookups.clone()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

async fn serve(app: Router) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

/// Spawns the fake external API on an ephemeral port.
pub async fn spawn_mock_api(config: MockApiConfig) -> Result<MockApi, ServerStartupError> {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let state = MockApiState {
        config: Arc::new(config),
        recorded: Arc::clone(&recorded),
    };

    let app = Router::new()
        .route("/searchDatasheet", post(mock_search))
        .route("/configureDatasheet", post(mock_configure))
        .route("/getParameterValues", get(mock_parameters))
        .with_state(state);

    Ok(MockApi {
        server: serve(app).await?,
        recorded,
    })
}

/// Spawns the fibersheet gateway wired to `api` with no publish delay.
pub async fn spawn_gateway(api: &MockApi) -> Result<TestServer, ServerStartupError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create HTTP client");

    let orchestrator =
        SearchOrchestrator::new(HttpSearchBackend::new(client.clone(), api.search_url()));
    let parameters = CachedParameterSource::new(
        HttpParameterSource::new(client.clone(), api.parameter_url()),
        Duration::from_secs(60),
    );
    let publisher = DatasheetPublisher::new(client, api.configure_url(), Duration::ZERO);

    let state = HandlerState::new(orchestrator, parameters, publisher);
    serve(create_router_with_state(state)).await
}

async fn mock_search(State(state): State<MockApiState>, Json(body): Json<Value>) -> Response {
    state.recorded.lock().unwrap().searches.push(body);

    match &state.config.search {
        SearchBehavior::Results(results) => Json(json!({ "res": results })).into_response(),
        SearchBehavior::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "search unavailable").into_response()
        }
        SearchBehavior::MissingResults => Json(json!({ "data": [] })).into_response(),
    }
}

async fn mock_configure(State(state): State<MockApiState>, Json(body): Json<Value>) -> Response {
    let description = body["cableDescription"].as_str().unwrap_or_default().to_string();
    state.recorded.lock().unwrap().configured.push(body);

    if description.contains(REJECT_MARKER) {
        (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response()
    } else if description.contains(DECLINE_MARKER) {
        Json(json!({ "success": false, "message": "duplicate cable" })).into_response()
    } else {
        Json(json!({ "success": true })).into_response()
    }
}

async fn mock_parameters(
    State(state): State<MockApiState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let name = query.get("parameterName").cloned().unwrap_or_default();
    state.recorded.lock().unwrap().lookups.push(name.clone());

    match state.config.parameters.get(&name) {
        Some(values) => Json(json!({ "res": values })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
