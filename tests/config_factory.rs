use std::io::Write;

use serde_json::json;

use assistant_chat::config::{Config, ProviderConfig};
use assistant_chat::domains::agent::AgentDefinition;
use assistant_chat::error::ChatError;
use assistant_chat::factories::runtime_factory::RuntimeFactory;

fn provider(api_key: Option<&str>) -> Option<ProviderConfig> {
    Some(ProviderConfig {
        api_key: api_key.map(str::to_string),
        base_url: Some("http://localhost:9/v1".to_string()),
    })
}

fn agent(name: &str, model: &str) -> AgentDefinition {
    AgentDefinition {
        name: name.to_string(),
        instructions: "help".to_string(),
        model: model.to_string(),
    }
}

#[test]
fn config_from_file_builds_runtime() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let raw = json!({
        "provider": {"api_key": "key", "base_url": "http://localhost:9/v1"},
        "agents": [
            {"name": "assistant", "instructions": "be kind", "model": "claude-3-5-haiku-20241022"},
            {"name": "translator", "instructions": "translate", "model": "claude-3-5-haiku-20241022"}
        ]
    });
    file.write_all(raw.to_string().as_bytes()).unwrap();

    let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
    let runtime = RuntimeFactory::create_from_config(config).unwrap();
    assert_eq!(runtime.agent_names(), vec!["assistant", "translator"]);
    let assistant = runtime.get_agent("assistant").unwrap();
    assert_eq!(assistant.definition().instructions, "be kind");
}

#[test]
fn bad_or_missing_file_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{bad}").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ChatError::Config(_)));

    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ChatError::Config(_)));
}

#[test]
fn no_path_means_convention_defaults() {
    let config = Config::load(None).unwrap();
    assert_eq!(config.agents[0].name, "assistant");
}

#[test]
fn factory_rejects_incomplete_configs() {
    let cases = vec![
        Config {
            provider: None,
            agents: vec![agent("assistant", "m")],
        },
        Config {
            provider: provider(None),
            agents: vec![agent("assistant", "m")],
        },
        Config {
            provider: provider(Some("  ")),
            agents: vec![agent("assistant", "m")],
        },
        Config {
            provider: provider(Some("key")),
            agents: vec![],
        },
        Config {
            provider: provider(Some("key")),
            agents: vec![agent("", "m")],
        },
        Config {
            provider: provider(Some("key")),
            agents: vec![agent("assistant", " ")],
        },
        Config {
            provider: provider(Some("key")),
            agents: vec![agent("assistant", "m"), agent("assistant", "m")],
        },
    ];

    for config in cases {
        let err = RuntimeFactory::create_from_config(config).err().unwrap();
        assert!(matches!(err, ChatError::Config(_)), "unexpected {err:?}");
    }
}
