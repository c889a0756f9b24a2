//! Provider, Resource and DataSource traits
//!
//! Providers configure shared collaborators (an API client, credentials)
//! once, then hand out resource and data source bindings by type name.
//! Bindings are stateless beyond that shared client; each call receives
//! everything it needs in its request envelope.

use crate::request::{
    ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse, DeleteRequest,
    DeleteResponse, ReadDataRequest, ReadDataResponse, ReadRequest, ReadResponse, UpdateRequest,
    UpdateResponse,
};
use crate::schema::{DataSourceSchema, ResourceSchema};
use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait Provider: Send + Sync {
    /// Called once before any binding is created. Build shared clients here.
    async fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse;

    /// Factory for resource bindings, keyed by type name.
    fn create_resource(&self, name: &str) -> Result<Box<dyn Resource>>;

    /// Factory for data source bindings, keyed by type name.
    fn create_data_source(&self, name: &str) -> Result<Box<dyn DataSource>>;

    fn resource_schemas(&self) -> HashMap<String, ResourceSchema>;

    fn data_source_schemas(&self) -> HashMap<String, DataSourceSchema>;
}

/// CRUD binding for one managed resource type.
#[async_trait]
pub trait Resource: Send + Sync {
    fn schema(&self) -> ResourceSchema;

    /// MUST populate all attributes in the response state, computed included.
    async fn create(&self, request: CreateRequest) -> Result<CreateResponse>;

    /// MUST return `state: None` when the remote object no longer exists.
    async fn read(&self, request: ReadRequest) -> Result<ReadResponse>;

    async fn update(&self, request: UpdateRequest) -> Result<UpdateResponse>;

    /// Deleting an already-gone object is a success, not an error.
    async fn delete(&self, request: DeleteRequest) -> Result<DeleteResponse>;
}

/// Read-only binding for one data source type.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn schema(&self) -> DataSourceSchema;

    async fn read(&self, request: ReadDataRequest) -> Result<ReadDataResponse>;
}
