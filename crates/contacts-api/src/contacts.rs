//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/contacts`      | `?<field>=<value>`, `sortField`, `sortOrder`, `page`, `pageSize` |
//! | `GET`    | `/contacts/{id}` | 404 if not found |
//! | `POST`   | `/contacts`      | Body: [`ContactInput`]; returns 201 + stored contact |
//! | `PUT`    | `/contacts/{id}` | Body: [`ContactInput`]; 500 if not found |
//! | `DELETE` | `/contacts/{id}` | 204; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use bytes::Bytes;
use contacts_core::{
  contact::{Contact, ContactInput},
  query::ListQuery,
  service::ContactService,
  store::ContactStore,
};

use crate::error::ApiError;

type Service<S> = State<Arc<ContactService<S>>>;

/// Decode a create/update body. The `Content-Type` header is not consulted
/// and a `null` document is an all-empty input.
fn parse_body(body: &[u8]) -> Result<ContactInput, ApiError> {
  let input: Option<ContactInput> = serde_json::from_slice(body)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  Ok(input.unwrap_or_default())
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts[?name=..][&sortField=..][&sortOrder=..][&page=..][&pageSize=..]`
pub async fn list<S>(
  State(service): Service<S>,
  Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let query = ListQuery::from_pairs(&params);
  let contacts = service.list(&query).await.map_err(ApiError::internal)?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(service): Service<S>,
  Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = service.get(&id).await.map_err(ApiError::from_lookup)?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts`: returns 201 + the stored [`Contact`].
pub async fn create<S>(
  State(service): Service<S>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let input = parse_body(&body)?;
  let contact = service.create(input).await.map_err(ApiError::internal)?;
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}`: the id comes from the path, never the body.
pub async fn update_one<S>(
  State(service): Service<S>,
  Path(id): Path<String>,
  body: Bytes,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let input = parse_body(&body)?;
  let contact = service
    .update(&id, input)
    .await
    .map_err(ApiError::internal)?;
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`: 204 with no body.
pub async fn delete_one<S>(
  State(service): Service<S>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
{
  service.delete(&id).await.map_err(ApiError::from_lookup)?;
  Ok(StatusCode::NO_CONTENT)
}
