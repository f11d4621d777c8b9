use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domains::agent::AgentDefinition;
use crate::error::{ChatError, Result};
use crate::providers::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const DEFAULT_AGENT_INSTRUCTIONS: &str =
    "あなたは親切なAIアシスタントです。日本語で丁寧に回答してください。";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub provider: Option<ProviderConfig>,
    #[serde(default = "default_agents")]
    pub agents: Vec<AgentDefinition>,
}

fn default_agents() -> Vec<AgentDefinition> {
    vec![AgentDefinition {
        name: crate::services::chat::DEFAULT_AGENT.to_string(),
        instructions: DEFAULT_AGENT_INSTRUCTIONS.to_string(),
        model: DEFAULT_MODEL.to_string(),
    }]
}

impl Config {
    pub fn convention_defaults() -> Self {
        Self {
            provider: Some(ProviderConfig {
                api_key: None,
                base_url: Some(DEFAULT_BASE_URL.to_string()),
            }),
            agents: default_agents(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| ChatError::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw).map_err(|e| ChatError::Config(e.to_string()))
    }

    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::convention_defaults()),
        }
    }

    pub fn resolve_env(self) -> Self {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key(mut self, env_key: Option<String>) -> Self {
        let env_key = env_key.filter(|key| !key.trim().is_empty());
        let provider = self.provider.get_or_insert_with(|| ProviderConfig {
            api_key: None,
            base_url: None,
        });
        if provider.api_key.is_none() {
            provider.api_key = env_key;
        }
        self
    }
}
