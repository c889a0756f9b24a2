//! Typed client for the Foreman REST API
//!
//! Split by concern: the transport client (request construction, entity
//! wrapping, response/error classification), the shared entity types, and
//! one module per entity kind following the same template.

pub mod client;
pub mod discovery_rule;
pub mod entity;
pub mod error;
#[cfg(test)]
pub mod test_helpers;

pub use client::{Client, ClientConfig};
pub use discovery_rule::ForemanDiscoveryRule;
pub use entity::{search_query, ForemanObject, QueryResponse};
pub use error::ApiError;
