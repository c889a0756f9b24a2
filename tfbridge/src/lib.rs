//! tfbridge - declarative provider framework interfaces
//!
//! A small framework for building Terraform-style providers in Rust.
//! It owns the declarative value model (Config/State built from Dynamic
//! values), schema declarations, diagnostics, and the async Provider,
//! Resource and DataSource traits. Wire-protocol serving is out of scope;
//! an orchestrating framework drives these traits.

pub mod context;
pub mod error;
pub mod provider;
pub mod request;
pub mod schema;
pub mod types;

pub use context::Context;
pub use error::{Result, TfError};
pub use provider::{DataSource, Provider, Resource};
pub use request::{
    ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse, DeleteRequest,
    DeleteResponse, ReadDataRequest, ReadDataResponse, ReadRequest, ReadResponse, UpdateRequest,
    UpdateResponse,
};
pub use schema::{
    Attribute, AttributeBuilder, AttributeType, DataSourceSchema, ResourceSchema, SchemaBuilder,
};
pub use types::{AttributeMap, Config, Diagnostic, Diagnostics, Dynamic, State};
