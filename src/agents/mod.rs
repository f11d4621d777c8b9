use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domains::agent::{AgentDefinition, Generation};
use crate::domains::message::CoreMessage;
use crate::error::{ChatError, Result};
use crate::interfaces::providers::LlmProvider;

pub struct Agent {
    definition: AgentDefinition,
    provider: Arc<dyn LlmProvider>,
}

impl Agent {
    pub fn new(definition: AgentDefinition, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            definition,
            provider,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &AgentDefinition {
        &self.definition
    }

    pub async fn generate(&self, messages: &[CoreMessage]) -> Result<Generation> {
        debug!(
            agent = %self.definition.name,
            model = %self.provider.model(),
            turns = messages.len(),
            "Agent generate"
        );
        let text = self
            .provider
            .generate_chat(&self.definition.instructions, messages)
            .await?;
        Ok(Generation { text })
    }
}

/// Named agents, built once at startup and shared by reference.
#[derive(Default)]
pub struct AgentRuntime {
    agents: HashMap<String, Arc<Agent>>,
}

impl AgentRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an agent under its name, replacing any earlier one.
    pub fn register(&mut self, agent: Agent) {
        self.agents
            .insert(agent.name().to_string(), Arc::new(agent));
    }

    pub fn get_agent(&self, name: &str) -> Result<Arc<Agent>> {
        self.agents
            .get(name)
            .cloned()
            .ok_or_else(|| ChatError::AgentNotFound(name.to_string()))
    }

    pub fn agent_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.agents.keys().cloned().collect();
        names.sort();
        names
    }
}
