use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::agents::AgentRuntime;
use crate::domains::message::{ChatOutcome, CoreMessage};
use crate::interfaces::services::ChatBackend;

pub const DEFAULT_AGENT: &str = "assistant";

/// Server-side chat entry point: hands the whole history to one agent.
pub struct ChatService {
    runtime: Arc<AgentRuntime>,
    agent_name: String,
}

impl ChatService {
    pub fn new(runtime: Arc<AgentRuntime>) -> Self {
        Self {
            runtime,
            agent_name: DEFAULT_AGENT.to_string(),
        }
    }

    pub fn with_agent(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = agent_name.into();
        self
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub async fn send_message(&self, messages: Vec<CoreMessage>) -> ChatOutcome {
        let agent = match self.runtime.get_agent(&self.agent_name) {
            Ok(agent) => agent,
            Err(err) => {
                warn!(agent = %self.agent_name, "Chat agent lookup failed: {}", err);
                return ChatOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };

        match agent.generate(&messages).await {
            Ok(generation) => {
                info!(
                    agent = %self.agent_name,
                    turns = messages.len(),
                    reply_chars = generation.text.chars().count(),
                    "Chat generation finished"
                );
                ChatOutcome::Reply {
                    text: generation.text,
                }
            }
            Err(err) => {
                warn!(agent = %self.agent_name, "Chat generation failed: {}", err);
                ChatOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl ChatBackend for ChatService {
    async fn send_message(&self, messages: Vec<CoreMessage>) -> ChatOutcome {
        ChatService::send_message(self, messages).await
    }
}
