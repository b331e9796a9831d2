use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use yeg_shadow::{Config, SearchClient};

/// How the mock search endpoint answers
#[derive(Clone)]
pub enum MockReply {
    Json(Value),
    Status(StatusCode),
    Raw(&'static str),
}

/// A request seen by the mock search endpoint
#[derive(Debug, Clone)]
pub struct RecordedSearch {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    search_reply: MockReply,
    products: Arc<Vec<Value>>,
    searches: Arc<Mutex<Vec<RecordedSearch>>>,
    health_checks: Arc<AtomicUsize>,
}

/// In-process stand-in for the inventory API, served on an ephemeral port
pub struct MockApi {
    pub base_url: String,
    searches: Arc<Mutex<Vec<RecordedSearch>>>,
    health_checks: Arc<AtomicUsize>,
}

impl MockApi {
    /// Serve the API under `prefix` (empty for the root)
    pub async fn start_with_prefix(
        prefix: &str,
        search_reply: MockReply,
        products: Vec<Value>,
    ) -> Self {
        let searches = Arc::new(Mutex::new(Vec::new()));
        let health_checks = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            search_reply,
            products: Arc::new(products),
            searches: searches.clone(),
            health_checks: health_checks.clone(),
        };

        let api = Router::new()
            .route("/search", post(search))
            .route("/products/:id", get(product))
            .route("/health", get(health))
            .with_state(state);
        let app = if prefix.is_empty() {
            api
        } else {
            Router::new().nest(prefix, api)
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}{}", addr, prefix),
            searches,
            health_checks,
        }
    }

    pub async fn start(search_reply: MockReply) -> Self {
        Self::start_with_prefix("", search_reply, Vec::new()).await
    }

    pub async fn with_products(products: Vec<Value>) -> Self {
        Self::start_with_prefix("", MockReply::Json(Value::Array(Vec::new())), products).await
    }

    pub fn client(&self) -> SearchClient {
        SearchClient::new(Config {
            api_base_url: self.base_url.clone(),
        })
    }

    pub fn searches(&self) -> Vec<RecordedSearch> {
        self.searches.lock().unwrap().clone()
    }

    /// Number of `GET /health` requests served so far
    pub fn health_checks(&self) -> usize {
        self.health_checks.load(Ordering::SeqCst)
    }
}

async fn search(State(state): State<MockState>, headers: HeaderMap, body: String) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_str(&body).unwrap_or(Value::Null);
    state
        .searches
        .lock()
        .unwrap()
        .push(RecordedSearch { content_type, body });

    match state.search_reply {
        MockReply::Json(value) => Json(value).into_response(),
        MockReply::Status(status) => (status, "upstream exploded").into_response(),
        MockReply::Raw(text) => ([(header::CONTENT_TYPE, "application/json")], text).into_response(),
    }
}

async fn product(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    match state
        .products
        .iter()
        .find(|p| p.get("id").and_then(Value::as_str) == Some(id.as_str()))
    {
        Some(product) => Json(product.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn health(State(state): State<MockState>) -> Json<Value> {
    state.health_checks.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!({ "status": "ok" }))
}
