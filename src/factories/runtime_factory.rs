use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::agents::{Agent, AgentRuntime};
use crate::config::Config;
use crate::error::{ChatError, Result};
use crate::providers::openai::OpenAiProvider;

pub struct RuntimeFactory;

impl RuntimeFactory {
    pub fn create_from_config(config: Config) -> Result<AgentRuntime> {
        let provider = config
            .provider
            .ok_or_else(|| ChatError::Config("Missing provider configuration".to_string()))?;
        let api_key = provider
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ChatError::Config("Missing provider api_key".to_string()))?;

        if config.agents.is_empty() {
            return Err(ChatError::Config("No agents configured".to_string()));
        }

        let mut seen = HashSet::new();
        let mut runtime = AgentRuntime::new();
        for definition in config.agents {
            if definition.name.trim().is_empty() {
                return Err(ChatError::Config("Agent name cannot be empty".to_string()));
            }
            if definition.model.trim().is_empty() {
                return Err(ChatError::Config(format!(
                    "Agent '{}' has no model",
                    definition.name
                )));
            }
            if !seen.insert(definition.name.clone()) {
                return Err(ChatError::Config(format!(
                    "Duplicate agent name '{}'",
                    definition.name
                )));
            }

            let llm = OpenAiProvider::new(
                api_key.clone(),
                Some(definition.model.clone()),
                provider.base_url.clone(),
            );
            info!(
                agent = %definition.name,
                model = %definition.model,
                base_url = %llm.base_url(),
                "Registered agent"
            );
            runtime.register(Agent::new(definition, Arc::new(llm)));
        }

        Ok(runtime)
    }
}
