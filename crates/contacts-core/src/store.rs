//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `contacts-store-json`).
//! [`ContactService`](crate::service::ContactService) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::contact::Contact;

/// Abstraction over a whole-collection contact store.
///
/// The collection is always read and written in full; there are no partial
/// updates and no indexes. Implementations must not cache between calls.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load every stored contact, in stored order.
  ///
  /// A store that has never been written to yields an empty list.
  fn read_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Replace the entire stored collection with `contacts`.
  fn write_all<'a>(
    &'a self,
    contacts: &'a [Contact],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
