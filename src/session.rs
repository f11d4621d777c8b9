//! Renderer-independent chat state: the visible message list, the composer
//! text and the loading flag. A session is `idle` until `begin_submit`
//! accepts the input, `submitting` until `finish_submit` records the reply.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::error;

use crate::domains::message::{ChatOutcome, CoreMessage, Message, Role};
use crate::interfaces::services::ChatBackend;

pub const FALLBACK_REPLY: &str = "エラーが発生しました。もう一度お試しください。";
pub const THINKING_TEXT: &str = "考え中...";
pub const USER_LABEL: &str = "あなた";
pub const ASSISTANT_LABEL: &str = "AI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBlock {
    pub key: String,
    pub role: Role,
    pub label: &'static str,
    pub text: String,
    pub thinking: bool,
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => USER_LABEL,
        Role::Assistant => ASSISTANT_LABEL,
    }
}

#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    loading: bool,
    next_seq: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Accepts the current input. Returns the history to send, or `None`
    /// when the input is blank or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<Vec<CoreMessage>> {
        if !self.can_submit() {
            return None;
        }

        let content = std::mem::take(&mut self.input);
        let mut history: Vec<CoreMessage> = self.messages.iter().map(Message::to_core).collect();
        history.push(CoreMessage::user(content.clone()));

        self.push(Role::User, content);
        self.loading = true;
        Some(history)
    }

    pub fn finish_submit(&mut self, outcome: ChatOutcome) {
        let content = match outcome {
            ChatOutcome::Reply { text } => text,
            ChatOutcome::Failed { reason } => {
                error!("Error: {}", reason);
                FALLBACK_REPLY.to_string()
            }
        };
        self.push(Role::Assistant, content);
        self.loading = false;
    }

    pub async fn submit(&mut self, backend: &dyn ChatBackend) -> bool {
        let Some(history) = self.begin_submit() else {
            return false;
        };
        let outcome = backend.send_message(history).await;
        self.finish_submit(outcome);
        true
    }

    pub fn show_thinking(&self) -> bool {
        self.loading
            && self
                .messages
                .last()
                .map(|m| m.role() != Role::Assistant)
                .unwrap_or(true)
    }

    pub fn blocks(&self) -> Vec<RenderBlock> {
        let mut blocks: Vec<RenderBlock> = self
            .messages
            .iter()
            .map(|message| RenderBlock {
                key: message.id().to_string(),
                role: message.role(),
                label: role_label(message.role()),
                text: message.content().to_string(),
                thinking: false,
            })
            .collect();
        if self.show_thinking() {
            blocks.push(RenderBlock {
                key: "thinking".to_string(),
                role: Role::Assistant,
                label: ASSISTANT_LABEL,
                text: THINKING_TEXT.to_string(),
                thinking: true,
            });
        }
        blocks
    }

    fn push(&mut self, role: Role, content: String) {
        self.next_seq += 1;
        let id = format!("{}-{}", now_unix_millis(), self.next_seq);
        self.messages.push(Message::new(id, role, content));
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
