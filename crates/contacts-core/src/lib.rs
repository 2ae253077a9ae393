//! Core types and trait definitions for the contacts service.
//!
//! This crate is deliberately free of HTTP and file-format dependencies.
//! Storage backends implement [`store::ContactStore`]; the HTTP layer drives
//! [`service::ContactService`].

pub mod contact;
pub mod error;
pub mod memory;
pub mod query;
pub mod service;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
