//! [`JsonFileStore`]: the flat-file implementation of [`ContactStore`].

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
};

use contacts_core::{contact::Contact, store::ContactStore};

use crate::{Error, Result};

const EMPTY_COLLECTION: &[u8] = b"[]";

/// A contact store backed by a single JSON file.
///
/// Nothing is cached and nothing is locked: each call touches the file.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  /// Use the file at `path`. The file is created on the first read if it does
  /// not exist yet.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  async fn read_bytes(&self) -> Result<Vec<u8>> {
    match tokio::fs::read(&self.path).await {
      Ok(bytes) => Ok(bytes),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        tracing::debug!(path = ?self.path, "data file missing, creating it");
        tokio::fs::write(&self.path, EMPTY_COLLECTION)
          .await
          .map_err(|source| Error::Create {
            path: self.path.clone(),
            source,
          })?;
        Ok(EMPTY_COLLECTION.to_vec())
      }
      Err(source) => Err(Error::Read {
        path: self.path.clone(),
        source,
      }),
    }
  }
}

impl ContactStore for JsonFileStore {
  type Error = Error;

  async fn read_all(&self) -> Result<Vec<Contact>> {
    let bytes = self.read_bytes().await?;
    // `null` is accepted as an empty collection.
    let contacts: Option<Vec<Contact>> =
      serde_json::from_slice(&bytes).map_err(Error::Decode)?;
    let contacts = contacts.unwrap_or_default();
    tracing::debug!(path = ?self.path, count = contacts.len(), "read contacts");
    Ok(contacts)
  }

  async fn write_all(&self, contacts: &[Contact]) -> Result<()> {
    let bytes = serde_json::to_vec(contacts).map_err(Error::Encode)?;
    tokio::fs::write(&self.path, bytes)
      .await
      .map_err(|source| Error::Write {
        path: self.path.clone(),
        source,
      })?;
    tracing::debug!(path = ?self.path, count = contacts.len(), "wrote contacts");
    Ok(())
  }
}
