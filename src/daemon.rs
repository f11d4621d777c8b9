use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domains::message::{ChatOutcome, CoreMessage};
use crate::error::{ChatError, Result};
use crate::factories::runtime_factory::RuntimeFactory;
use crate::services::chat::ChatService;

pub const VERSION: &str = env!("ASSISTANT_CHAT_GIT_SHA");

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<CoreMessage>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

async fn chat(State(state): State<AppState>, Json(payload): Json<ChatRequest>) -> Response {
    tracing::info!(turns = payload.messages.len(), "POST /chat");
    let outcome = state.chat.send_message(payload.messages).await;
    let status = match outcome {
        ChatOutcome::Reply { .. } => StatusCode::OK,
        ChatOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    };
    (status, Json(outcome)).into_response()
}

pub async fn run(host: &str, port: u16, config: Config) -> Result<()> {
    run_with_shutdown(host, port, config, futures::future::pending::<()>()).await
}

pub async fn run_with_shutdown<F>(host: &str, port: u16, config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let runtime = RuntimeFactory::create_from_config(config)?;
    tracing::info!(agents = ?runtime.agent_names(), "Agent runtime ready");

    let chat = ChatService::new(Arc::new(runtime));
    tracing::info!(agent = %chat.agent_name(), "Serving chat agent");
    let app = build_router(AppState {
        chat: Arc::new(chat),
    });

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ChatError::Runtime(e.to_string()))?;
    tracing::info!(%addr, version = VERSION, "Daemon listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ChatError::Runtime(e.to_string()))?;

    Ok(())
}
