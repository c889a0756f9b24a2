//! Shared entity types for the Foreman API
//!
//! Every Foreman entity carries the same base identity (server-assigned id,
//! display name, timestamps). Concrete entity types embed ForemanObject by
//! composition and flatten it into their JSON representation, so the codec
//! stays a per-type template instead of bespoke logic.

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Base identity shared by every Foreman entity.
///
/// The id is assigned by the server and absent on create payloads; unset
/// optional fields are skipped on serialize so the API can tell "unset"
/// from an explicit zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForemanObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Envelope for Foreman list/search responses.
///
/// Results decode directly into the concrete entity type; there is no
/// intermediate untyped pass.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse<T> {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub subtotal: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> QueryResponse<T> {
    /// Enforce the exactly-one-result policy data sources rely on.
    pub fn single(mut self) -> Result<T, ApiError> {
        match self.subtotal {
            0 => Err(ApiError::NoResults),
            1 => self.results.pop().ok_or(ApiError::NoResults),
            n => Err(ApiError::TooManyResults(n)),
        }
    }
}

/// Build one Foreman search expression, e.g. `name="compute"`.
///
/// The value is quoted so names containing spaces search correctly; the
/// whole expression still needs percent-encoding before it goes into the
/// `search` query parameter.
pub fn search_query(field: &str, value: &str) -> String {
    format!("{}=\"{}\"", field, value)
}
