//! [`MemoryStore`]: an in-process [`ContactStore`] with no persistence.

use std::{convert::Infallible, sync::Arc};

use tokio::sync::Mutex;

use crate::{contact::Contact, store::ContactStore};

/// A contact store that keeps the collection in memory.
///
/// Cloning is cheap and clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  contacts: Arc<Mutex<Vec<Contact>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Seed a store with an existing collection.
  pub fn with_contacts(contacts: Vec<Contact>) -> Self {
    Self {
      contacts: Arc::new(Mutex::new(contacts)),
    }
  }
}

impl ContactStore for MemoryStore {
  type Error = Infallible;

  async fn read_all(&self) -> Result<Vec<Contact>, Infallible> {
    Ok(self.contacts.lock().await.clone())
  }

  async fn write_all(&self, contacts: &[Contact]) -> Result<(), Infallible> {
    *self.contacts.lock().await = contacts.to_vec();
    Ok(())
  }
}
