//! Veridict server binary.
//!
//! Starts the HTTP API over the evidence analyzer. Requires
//! `OPENAI_API_KEY`; binds `PORT` (default 3001).

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use veridict_runtime::EvidenceAnalyzer;
use veridict_server::{config::ServerConfig, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing credential is fatal here, at startup, not at request time.
    let analyzer = EvidenceAnalyzer::from_env()
        .context("cannot start: no OpenAI API key configured")?;

    let config = ServerConfig::from_env();
    start_server(config, analyzer).await?;

    Ok(())
}
