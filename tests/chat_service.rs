mod common;

use std::sync::Arc;

use assistant_chat::agents::AgentRuntime;
use assistant_chat::domains::message::{ChatOutcome, CoreMessage};
use assistant_chat::error::ChatError;
use assistant_chat::interfaces::services::ChatBackend;
use assistant_chat::services::chat::{ChatService, DEFAULT_AGENT};

use common::{runtime_with, QueueLlmProvider};

#[tokio::test]
async fn reply_text_is_returned_verbatim() {
    let provider = Arc::new(QueueLlmProvider::new(vec![Ok("  spaced\nreply ".to_string())]));
    let service = ChatService::new(Arc::new(runtime_with(provider.clone())));
    assert_eq!(service.agent_name(), DEFAULT_AGENT);

    let history = vec![
        CoreMessage::user("hi"),
        CoreMessage::assistant("hello"),
        CoreMessage::user("how are you?"),
    ];
    let outcome = service.send_message(history.clone()).await;

    assert_eq!(
        outcome,
        ChatOutcome::Reply {
            text: "  spaced\nreply ".to_string()
        }
    );
    let calls = provider.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "be kind");
    assert_eq!(calls[0].1, history);
}

#[tokio::test]
async fn provider_error_becomes_failed_outcome() {
    let provider = Arc::new(QueueLlmProvider::new(vec![Err(ChatError::Http(
        "503 overloaded".to_string(),
    ))]));
    let service = ChatService::new(Arc::new(runtime_with(provider)));

    let outcome = service.send_message(vec![CoreMessage::user("hi")]).await;
    match outcome {
        ChatOutcome::Failed { reason } => assert!(reason.contains("503 overloaded")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_agent_becomes_failed_outcome() {
    let service = ChatService::new(Arc::new(AgentRuntime::new()));
    let outcome = service.send_message(vec![CoreMessage::user("hi")]).await;
    assert_eq!(
        outcome,
        ChatOutcome::Failed {
            reason: "agent not found: assistant".to_string()
        }
    );

    let provider = Arc::new(QueueLlmProvider::new(vec![Ok("unused".to_string())]));
    let service = ChatService::new(Arc::new(runtime_with(provider.clone()))).with_agent("writer");
    assert!(!service.send_message(vec![]).await.is_reply());
    assert!(provider.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_history_is_forwarded_unvalidated() {
    let provider = Arc::new(QueueLlmProvider::new(vec![Ok("ok".to_string())]));
    let service = ChatService::new(Arc::new(runtime_with(provider.clone())));
    let backend: &dyn ChatBackend = &service;

    assert!(backend.send_message(Vec::new()).await.is_reply());
    assert!(provider.calls.lock().unwrap()[0].1.is_empty());
}
