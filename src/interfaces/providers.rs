use async_trait::async_trait;

use crate::domains::message::CoreMessage;
use crate::error::Result;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn model(&self) -> &str;

    /// Runs one completion over the whole conversation and returns the reply text.
    async fn generate_chat(&self, system_prompt: &str, messages: &[CoreMessage]) -> Result<String>;
}
