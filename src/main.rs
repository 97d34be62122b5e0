mod cli;

use anyhow::Result;
use chat_core::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "chat_summarizer=warn,warn".into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring configuration, using defaults: {}", e);
            AppConfig::default()
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(std::env::args_os(), &config, &mut out)
}
