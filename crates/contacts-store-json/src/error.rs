//! Error type for `contacts-store-json`.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to create data file {path:?}: {source}")]
  Create {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to read data file {path:?}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write data file {path:?}: {source}")]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to decode data file: {0}")]
  Decode(#[source] serde_json::Error),

  #[error("failed to encode data file: {0}")]
  Encode(#[source] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
