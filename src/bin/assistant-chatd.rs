use assistant_chat::config::Config;
use assistant_chat::daemon;
use assistant_chat::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "assistant-chatd")]
#[command(about = "Assistant chat daemon")]
struct Cli {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 7878)]
    port: u16,

    /// JSON agent configuration; built-in defaults when omitted.
    #[arg(long, env = "ASSISTANT_CHAT_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    assistant_chat::logging::init_tracing("assistant_chatd");
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.resolve_env();

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Shutdown requested");
    };
    daemon::run_with_shutdown(&cli.host, cli.port, config, shutdown).await
}
