//! Contact: the single persisted entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::EnumString;

/// A stored contact record.
///
/// `id`, `created_at` and `updated_at` are owned by the server; callers only
/// ever supply the four detail fields via [`ContactInput`].
///
/// Missing or `null` fields decode as their zero value (empty string, Unix
/// epoch), so a partially written record still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
  #[serde(deserialize_with = "null_as_default")]
  pub id:         String,
  #[serde(deserialize_with = "null_as_default")]
  pub name:       String,
  #[serde(deserialize_with = "null_as_default")]
  pub gender:     String,
  #[serde(deserialize_with = "null_as_default")]
  pub phone:      String,
  #[serde(deserialize_with = "null_as_default")]
  pub email:      String,
  #[serde(deserialize_with = "null_as_default")]
  pub created_at: DateTime<Utc>,
  #[serde(deserialize_with = "null_as_default")]
  pub updated_at: DateTime<Utc>,
}

impl Contact {
  /// The value of one of the filterable/sortable detail fields.
  pub fn field(&self, field: ContactField) -> &str {
    match field {
      ContactField::Name => &self.name,
      ContactField::Gender => &self.gender,
      ContactField::Phone => &self.phone,
      ContactField::Email => &self.email,
    }
  }
}

/// The caller-supplied part of a contact, used as the create/update body.
///
/// Missing and `null` fields decode as empty strings. Server-owned fields
/// (`id`, timestamps) and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
  #[serde(deserialize_with = "null_as_default")]
  pub name:   String,
  #[serde(deserialize_with = "null_as_default")]
  pub gender: String,
  #[serde(deserialize_with = "null_as_default")]
  pub phone:  String,
  #[serde(deserialize_with = "null_as_default")]
  pub email:  String,
}

impl ContactInput {
  /// Materialise a full record with the given server-owned fields.
  pub fn into_contact(
    self,
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Contact {
    Contact {
      id,
      name: self.name,
      gender: self.gender,
      phone: self.phone,
      email: self.email,
      created_at,
      updated_at,
    }
  }
}

/// A detail field that list queries can filter and sort on.
///
/// Parsed case-sensitively from its lowercase name (`"name"`, `"email"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
  Name,
  Gender,
  Phone,
  Email,
}

/// Decode `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn input_null_fields_decode_as_empty() {
    let input: ContactInput =
      serde_json::from_str(r#"{"name":null,"gender":"f","phone":null}"#).unwrap();
    assert_eq!(input, ContactInput {
      gender: "f".into(),
      ..Default::default()
    });
  }

  #[test]
  fn contact_missing_and_null_fields_decode_as_zero_values() {
    let contact: Contact =
      serde_json::from_str(r#"{"id":"1","name":"A","email":null}"#).unwrap();
    assert_eq!(contact.id, "1");
    assert_eq!(contact.name, "A");
    assert_eq!(contact.gender, "");
    assert_eq!(contact.email, "");
    assert_eq!(contact.created_at.timestamp(), 0);
    assert_eq!(contact.updated_at.timestamp(), 0);
  }
}
