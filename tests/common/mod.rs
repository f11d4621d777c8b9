#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use assistant_chat::agents::{Agent, AgentRuntime};
use assistant_chat::domains::agent::AgentDefinition;
use assistant_chat::domains::message::{ChatOutcome, CoreMessage};
use assistant_chat::error::{ChatError, Result};
use assistant_chat::interfaces::providers::LlmProvider;
use assistant_chat::interfaces::services::ChatBackend;

/// Provider that pops scripted replies and records what it was asked.
pub struct QueueLlmProvider {
    replies: Mutex<VecDeque<Result<String>>>,
    pub calls: Mutex<Vec<(String, Vec<CoreMessage>)>>,
}

impl QueueLlmProvider {
    pub fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmProvider for QueueLlmProvider {
    fn model(&self) -> &str {
        "queue"
    }

    async fn generate_chat(&self, system_prompt: &str, messages: &[CoreMessage]) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), messages.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Runtime("queue exhausted".to_string())))
    }
}

pub fn assistant_definition() -> AgentDefinition {
    AgentDefinition {
        name: "assistant".to_string(),
        instructions: "be kind".to_string(),
        model: "queue".to_string(),
    }
}

pub fn runtime_with(provider: Arc<QueueLlmProvider>) -> AgentRuntime {
    let mut runtime = AgentRuntime::new();
    runtime.register(Agent::new(assistant_definition(), provider));
    runtime
}

/// Backend that answers with scripted outcomes and records each history.
pub struct MockBackend {
    outcomes: Mutex<VecDeque<ChatOutcome>>,
    pub calls: Mutex<Vec<Vec<CoreMessage>>>,
}

impl MockBackend {
    pub fn new(outcomes: Vec<ChatOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(text: &str) -> ChatOutcome {
        ChatOutcome::Reply {
            text: text.to_string(),
        }
    }

    pub fn failure(reason: &str) -> ChatOutcome {
        ChatOutcome::Failed {
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn send_message(&self, messages: Vec<CoreMessage>) -> ChatOutcome {
        self.calls.lock().unwrap().push(messages);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Self::failure("no scripted outcome"))
    }
}

pub fn chat_completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "claude-3-5-haiku-20241022",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
