//! Wiring & DI. Entry point: load config, build the avatar chain, run the prompt UI.
//! No business logic here; resolution is delegated to TryAvatars.

use chat_avatar::adapters::avatar::build_chain;
use chat_avatar::adapters::ui::prompt::PromptInputPort;
use chat_avatar::ports::{Avatar, InputPort};
use chat_avatar::shared::config::AppConfig;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config unreadable, using defaults");
        AppConfig::default()
    });
    let kinds = cfg.strategies_or_default()?;
    if kinds.is_empty() {
        anyhow::bail!("CHAT_AVATAR_STRATEGIES is empty; every lookup would fail");
    }
    chat_avatar::adapters::ui::init_ui(&kinds);

    let avatar_dir = PathBuf::from(cfg.avatar_dir_or_default());
    if !avatar_dir.is_dir() {
        warn!(
            path = %avatar_dir.display(),
            "avatar directory missing; file_system lookups will fall through"
        );
    }
    info!(strategies = ?kinds, "avatar chain: {} source(s)", kinds.len());

    let chain: Arc<dyn Avatar> = Arc::new(build_chain(&kinds, &cfg));
    let input_port: Arc<dyn InputPort> = Arc::new(PromptInputPort::new(chain));
    input_port.run().await?;

    Ok(())
}
