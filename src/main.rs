use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use movie_genius::{
    app::AppShell,
    cli::{self, Cli},
    config::Config,
    services::{providers::GeminiProvider, RecommendationClient},
    store::FileStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with rendered cards
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }

    let data_dir = config.resolve_data_dir()?;
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open local storage in {}", data_dir.display()))?;

    tracing::info!(
        data_dir = %data_dir.display(),
        model = %config.gemini_model,
        "Starting MovieGenius"
    );

    let provider = GeminiProvider::new(config.gemini_api_url.clone(), config.gemini_model.clone());
    let client = RecommendationClient::new(Arc::new(provider), config.recommendation_count);
    let shell = AppShell::load(store, client);

    cli::dispatch(shell, cli.command).await
}
