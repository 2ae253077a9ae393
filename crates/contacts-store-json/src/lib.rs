//! Flat-file JSON backend for the contacts store.
//!
//! The whole collection lives in one file as a JSON array. Every read loads
//! the full file and every write replaces it.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonFileStore;
