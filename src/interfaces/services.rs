use async_trait::async_trait;

use crate::domains::message::{ChatOutcome, CoreMessage};

/// Where a chat session sends its history. Implemented in-process by
/// `ChatService` and over HTTP by `DaemonClient`.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message(&self, messages: Vec<CoreMessage>) -> ChatOutcome;
}
