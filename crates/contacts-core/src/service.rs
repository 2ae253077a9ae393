//! [`ContactService`]: CRUD operations over a [`ContactStore`].
//!
//! Every operation loads the full collection, works on it in memory and, for
//! mutations, writes the full collection back. A per-service `RwLock` keeps
//! concurrent read-modify-write cycles from losing each other's updates.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
  Error, Result,
  contact::{Contact, ContactInput},
  query::ListQuery,
  store::ContactStore,
};

pub struct ContactService<S> {
  store: Arc<S>,
  lock:  RwLock<()>,
}

impl<S: ContactStore> ContactService<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      store,
      lock: RwLock::new(()),
    }
  }

  pub fn store(&self) -> &Arc<S> { &self.store }

  /// Load every contact and return the page selected by `query`.
  pub async fn list(&self, query: &ListQuery) -> Result<Vec<Contact>> {
    let _guard = self.lock.read().await;
    let contacts = self.load().await?;
    Ok(query.apply(contacts))
  }

  /// Find a contact by id.
  pub async fn get(&self, id: &str) -> Result<Contact> {
    let _guard = self.lock.read().await;
    self
      .load()
      .await?
      .into_iter()
      .find(|c| c.id == id)
      .ok_or_else(|| Error::NotFound(id.to_owned()))
  }

  /// Store a new contact with a fresh id and `created_at == updated_at == now`.
  pub async fn create(&self, input: ContactInput) -> Result<Contact> {
    let _guard = self.lock.write().await;
    let mut contacts = self.load().await?;

    let now = Utc::now();
    let contact = input.into_contact(Uuid::new_v4().to_string(), now, now);
    contacts.push(contact.clone());
    self.save(&contacts).await?;

    tracing::info!(id = %contact.id, "created contact");
    Ok(contact)
  }

  /// Replace the detail fields of contact `id`, keeping its `created_at` and
  /// bumping `updated_at`.
  pub async fn update(&self, id: &str, input: ContactInput) -> Result<Contact> {
    let _guard = self.lock.write().await;
    let mut contacts = self.load().await?;

    let slot = contacts
      .iter_mut()
      .find(|c| c.id == id)
      .ok_or_else(|| Error::NotFound(id.to_owned()))?;
    let updated = input.into_contact(id.to_owned(), slot.created_at, Utc::now());
    *slot = updated.clone();
    self.save(&contacts).await?;

    tracing::info!(id = %updated.id, "updated contact");
    Ok(updated)
  }

  /// Remove contact `id`.
  pub async fn delete(&self, id: &str) -> Result<()> {
    let _guard = self.lock.write().await;
    let mut contacts = self.load().await?;

    let index = contacts
      .iter()
      .position(|c| c.id == id)
      .ok_or_else(|| Error::NotFound(id.to_owned()))?;
    contacts.remove(index);
    self.save(&contacts).await?;

    tracing::info!(%id, "deleted contact");
    Ok(())
  }

  async fn load(&self) -> Result<Vec<Contact>> {
    self.store.read_all().await.map_err(Error::store)
  }

  async fn save(&self, contacts: &[Contact]) -> Result<()> {
    self.store.write_all(contacts).await.map_err(Error::store)
  }
}
