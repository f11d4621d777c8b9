use async_trait::async_trait;
use tracing::debug;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
    Client,
};

use crate::domains::message::{CoreMessage, Role};
use crate::error::{ChatError, Result};
use crate::interfaces::providers::LlmProvider;

pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Chat-completions adapter. Works against any OpenAI-compatible endpoint;
/// the default base URL is Anthropic's compatibility API.
#[derive(Clone)]
pub struct OpenAiProvider {
    model: String,
    base_url: String,
    client: Client<OpenAIConfig>,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/'));
        Self {
            model,
            base_url,
            client: Client::with_config(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_system_message(system_prompt: &str) -> Result<Option<ChatCompletionRequestMessage>> {
        if system_prompt.is_empty() {
            return Ok(None);
        }
        let message = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_prompt)
            .build()
            .map_err(|e| ChatError::Runtime(e.to_string()))?;
        Ok(Some(ChatCompletionRequestMessage::System(message)))
    }

    fn build_history_message(message: &CoreMessage) -> Result<ChatCompletionRequestMessage> {
        match message.role {
            Role::User => {
                let built = ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Text(
                        message.content.clone(),
                    ))
                    .build()
                    .map_err(|e| ChatError::Runtime(e.to_string()))?;
                Ok(ChatCompletionRequestMessage::User(built))
            }
            Role::Assistant => {
                let built = ChatCompletionRequestAssistantMessageArgs::default()
                    .content(message.content.clone())
                    .build()
                    .map_err(|e| ChatError::Runtime(e.to_string()))?;
                Ok(ChatCompletionRequestMessage::Assistant(built))
            }
        }
    }

    fn build_messages(
        system_prompt: &str,
        history: &[CoreMessage],
    ) -> Result<Vec<ChatCompletionRequestMessage>> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        if let Some(system) = Self::build_system_message(system_prompt)? {
            messages.push(system);
        }
        for message in history {
            messages.push(Self::build_history_message(message)?);
        }
        Ok(messages)
    }

    fn extract_text_from_response(response: &CreateChatCompletionResponse) -> Result<String> {
        let message = response
            .choices
            .first()
            .ok_or_else(|| ChatError::Runtime("No choices returned".to_string()))?
            .message
            .content
            .clone()
            .unwrap_or_default();
        Ok(message)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_chat(&self, system_prompt: &str, messages: &[CoreMessage]) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(Self::build_messages(system_prompt, messages)?)
            .build()
            .map_err(|e| ChatError::Runtime(e.to_string()))?;

        debug!(model = %self.model, turns = messages.len(), "Sending chat completion");
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;
        Self::extract_text_from_response(&response)
    }
}
