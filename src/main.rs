use std::sync::Arc;

use clap::Parser;

use assistant_chat::client::{DaemonClient, DEFAULT_DAEMON_URL};
use assistant_chat::config::Config;
use assistant_chat::error::{ChatError, Result};
use assistant_chat::factories::runtime_factory::RuntimeFactory;
use assistant_chat::iced_ui::{launch_ui, ChatUiLaunchConfig};
use assistant_chat::interfaces::services::ChatBackend;
use assistant_chat::services::chat::ChatService;

#[derive(Parser, Debug)]
#[command(name = "assistant-chat")]
#[command(about = "Assistant chat window")]
struct Cli {
    #[arg(long, default_value = DEFAULT_DAEMON_URL)]
    daemon: String,

    /// Run the agent in-process instead of talking to a daemon.
    #[arg(long, default_value_t = false)]
    local: bool,

    /// Agent configuration for `--local`; ignored in daemon mode.
    #[arg(long, env = "ASSISTANT_CHAT_CONFIG")]
    config: Option<String>,
}

impl Cli {
    fn local_config_path(&self) -> Option<&str> {
        if self.local {
            self.config.as_deref()
        } else {
            None
        }
    }
}

fn build_backend(cli: &Cli) -> Result<Arc<dyn ChatBackend>> {
    if cli.local {
        let config = Config::load(cli.local_config_path())?.resolve_env();
        let runtime = RuntimeFactory::create_from_config(config)?;
        let service = ChatService::new(Arc::new(runtime));
        tracing::info!(agent = %service.agent_name(), "Using in-process chat service");
        Ok(Arc::new(service))
    } else {
        let client = DaemonClient::new(&cli.daemon)?;
        tracing::info!(daemon = %client.daemon_url(), "Using chat daemon");
        Ok(Arc::new(client))
    }
}

fn main() -> Result<()> {
    assistant_chat::logging::init_tracing("assistant_chat");
    let cli = Cli::parse();
    let backend = build_backend(&cli)?;

    launch_ui(ChatUiLaunchConfig { backend }).map_err(|e| ChatError::Runtime(e.to_string()))
}
