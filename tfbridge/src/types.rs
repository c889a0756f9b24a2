//! Core value model for tfbridge
//!
//! Declarative configuration and state are bags of named Dynamic values.
//! Bindings read attributes through the typed accessors here and never see
//! the orchestrating framework's own encoding.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dynamic represents declarative values that can be of any type.
/// Numbers are always f64 to match Terraform's type system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dynamic {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Dynamic>),
    Map(HashMap<String, Dynamic>),
}

impl Dynamic {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Dynamic::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    pub fn as_list(&self) -> Option<&[Dynamic]> {
        match self {
            Dynamic::List(l) => Some(l),
            _ => None,
        }
    }

    /// Lists of numeric ids are common in tenancy attributes; collapse a
    /// Dynamic::List of numbers into plain integers. Non-numeric elements
    /// are dropped.
    pub fn as_int_list(&self) -> Option<Vec<i64>> {
        self.as_list()
            .map(|l| l.iter().filter_map(|v| v.as_i64()).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Null => "null",
            Dynamic::Bool(_) => "bool",
            Dynamic::Number(_) => "number",
            Dynamic::String(_) => "string",
            Dynamic::List(_) => "list",
            Dynamic::Map(_) => "map",
        }
    }
}

impl From<&str> for Dynamic {
    fn from(s: &str) -> Self {
        Dynamic::String(s.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(s: String) -> Self {
        Dynamic::String(s)
    }
}

impl From<bool> for Dynamic {
    fn from(b: bool) -> Self {
        Dynamic::Bool(b)
    }
}

impl From<i64> for Dynamic {
    fn from(n: i64) -> Self {
        Dynamic::Number(n as f64)
    }
}

impl From<f64> for Dynamic {
    fn from(n: f64) -> Self {
        Dynamic::Number(n)
    }
}

/// AttributeMap is the get/set-by-attribute-name contract shared by Config
/// and State.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    pub values: HashMap<String, Dynamic>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Dynamic> {
        self.values.get(name)
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .and_then(|v| v.as_string())
            .map(|s| s.to_string())
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(|v| v.as_i64())
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(|v| v.as_bool())
    }

    pub fn get_int_list(&self, name: &str) -> Option<Vec<i64>> {
        self.values.get(name).and_then(|v| v.as_int_list())
    }

    pub fn set(&mut self, name: &str, value: impl Into<Dynamic>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn set_int_list(&mut self, name: &str, ids: &[i64]) {
        self.values.insert(
            name.to_string(),
            Dynamic::List(ids.iter().map(|id| Dynamic::from(*id)).collect()),
        );
    }
}

/// Config represents the desired attribute values from configuration.
pub type Config = AttributeMap;

/// State represents the attribute values recorded after an operation.
pub type State = AttributeMap;

/// Diagnostic represents one warning or error surfaced to the user.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: Option<String>,
}

/// Diagnostics collects the warnings and errors of one framework call.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: Option<impl Into<String>>) {
        self.errors.push(Diagnostic {
            summary: summary.into(),
            detail: detail.map(|d| d.into()),
        });
    }

    pub fn add_warning(&mut self, summary: impl Into<String>, detail: Option<impl Into<String>>) {
        self.warnings.push(Diagnostic {
            summary: summary.into(),
            detail: detail.map(|d| d.into()),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_typed_accessors() {
        assert_eq!(Dynamic::from("host").as_string(), Some("host"));
        assert_eq!(Dynamic::from(true).as_bool(), Some(true));
        assert_eq!(Dynamic::from(42i64).as_i64(), Some(42));
        assert_eq!(Dynamic::from("host").as_bool(), None);
    }

    #[test]
    fn dynamic_int_list_collapses_numbers() {
        let list = Dynamic::List(vec![Dynamic::from(1i64), Dynamic::from(2i64)]);
        assert_eq!(list.as_int_list(), Some(vec![1, 2]));
    }

    #[test]
    fn attribute_map_roundtrip() {
        let mut state = State::new();
        state.set("name", "compute");
        state.set("priority", 5i64);
        state.set("enabled", true);
        state.set_int_list("location_ids", &[2, 3]);

        assert_eq!(state.get_string("name"), Some("compute".to_string()));
        assert_eq!(state.get_i64("priority"), Some(5));
        assert_eq!(state.get_bool("enabled"), Some(true));
        assert_eq!(state.get_int_list("location_ids"), Some(vec![2, 3]));
        assert_eq!(state.get_string("missing"), None);
    }

    #[test]
    fn dynamic_serializes_as_plain_json() {
        let mut map = HashMap::new();
        map.insert("enabled".to_string(), Dynamic::Bool(true));
        let json = serde_json::to_string(&Dynamic::Map(map)).unwrap();
        assert_eq!(json, r#"{"enabled":true}"#);
    }

    #[test]
    fn diagnostics_collects_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.add_error("boom", None::<String>);
        diags.add_warning("careful", Some("detail"));

        assert!(diags.has_errors());
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.warnings[0].detail.as_deref(), Some("detail"));
    }
}
