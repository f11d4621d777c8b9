use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::daemon::ChatRequest;
use crate::domains::message::{ChatOutcome, CoreMessage};
use crate::error::{ChatError, Result};
use crate::interfaces::services::ChatBackend;

pub const DEFAULT_DAEMON_URL: &str = "http://127.0.0.1:7878";

/// HTTP client for the daemon's chat endpoint.
#[derive(Clone)]
pub struct DaemonClient {
    daemon_url: String,
    http: reqwest::Client,
}

impl DaemonClient {
    pub fn new(daemon_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| ChatError::Http(e.to_string()))?;
        Ok(Self {
            daemon_url: daemon_url.trim().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn daemon_url(&self) -> &str {
        &self.daemon_url
    }

    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.daemon_url);
        match self.http.get(url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn post_chat(&self, messages: Vec<CoreMessage>) -> Result<ChatOutcome> {
        let url = format!("{}/chat", self.daemon_url);
        let response = self
            .http
            .post(url)
            .json(&ChatRequest { messages })
            .send()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;

        serde_json::from_str::<ChatOutcome>(&body)
            .map_err(|e| ChatError::Serialization(format!("HTTP {status}: {e}: {body}")))
    }
}

#[async_trait]
impl ChatBackend for DaemonClient {
    async fn send_message(&self, messages: Vec<CoreMessage>) -> ChatOutcome {
        match self.post_chat(messages).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(daemon = %self.daemon_url, "Chat request failed: {}", err);
                ChatOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
