//! JSON REST API for the contacts service.
//!
//! Exposes an axum [`Router`] backed by a [`ContactService`] over any
//! [`ContactStore`]. Transport and tracing layers are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let service = Arc::new(ContactService::new(Arc::new(store)));
//! let app = contacts_api::api_router(service);
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use contacts_core::{service::ContactService, store::ContactStore};

pub use error::ApiError;

/// Build the API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: Arc<ContactService<S>>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
