//! contacts-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `CONTACTS_*` environment overrides, and serves the contacts REST API over
//! HTTP backed by a single JSON file.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use contacts_server::ServerConfig;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Contacts REST server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Backing JSON file; overrides `data_file` from the configuration.
  #[arg(long)]
  data_file: Option<PathBuf>,
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

  let mut server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
  if let Some(data_file) = cli.data_file {
    server_cfg.data_file = data_file;
  }

  let app = contacts_server::app(&server_cfg);
  let address = server_cfg.address();

  tracing::info!(data_file = ?server_cfg.data_path(), "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
