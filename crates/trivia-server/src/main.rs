//! trivia-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! question bank, and serves the JSON API over HTTP.
//!
//! Every setting can be overridden from the environment, e.g.
//! `TRIVIA_PORT=8080 TRIVIA_DATABASE_PATH=/var/lib/trivia.db trivia-server`.

mod seed;
mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use trivia_api::{AppState, api_router};
use trivia_store_sqlite::SqliteStore;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Trivia question bank API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Insert the default categories if the database has none.
  #[arg(long)]
  seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let store = SqliteStore::open(&server_cfg.database_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.database_path))?;

  if cli.seed {
    let inserted = seed::seed_categories(&store)
      .await
      .context("failed to seed categories")?;
    tracing::info!(inserted, "seeded categories");
  }

  let app = api_router(AppState::new(Arc::new(store))).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
