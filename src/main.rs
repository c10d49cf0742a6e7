use clap::Parser;
use eqcoach_client::cli::{self, Cli};
use eqcoach_client::config::AppConfig;
use eqcoach_client::infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init_logging(&config.logging);

    if let Err(e) = loaded {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
    }

    cli::run(cli, config).await
}
