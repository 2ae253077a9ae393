//! Wiring for the `contacts-server` binary: configuration and the top-level
//! router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use contacts_core::service::ContactService;
use contacts_store_json::JsonFileStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Prefix for environment overrides, e.g. `CONTACTS_PORT=9000`.
pub const ENV_PREFIX: &str = "CONTACTS";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment. Every key is optional.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:      String,
  pub port:      u16,
  pub data_file: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:      "0.0.0.0".to_string(),
      port:      8080,
      data_file: PathBuf::from("contacts.json"),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `CONTACTS_*` environment
  /// variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `data_file` with a leading `~/` expanded.
  pub fn data_path(&self) -> PathBuf { expand_tilde(&self.data_file) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: the contacts API over the configured backing
/// file, with request tracing.
pub fn app(config: &ServerConfig) -> Router {
  let store = JsonFileStore::new(config.data_path());
  let service = Arc::new(ContactService::new(Arc::new(store)));
  contacts_api::api_router(service).layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
