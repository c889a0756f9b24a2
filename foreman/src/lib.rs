pub mod api;
pub mod data_sources;
pub mod mapper;
pub mod resources;

use api::{Client, ClientConfig};
use async_trait::async_trait;
use std::collections::HashMap;
use tfbridge::{
    ConfigureRequest, ConfigureResponse, DataSource, DataSourceSchema, Diagnostics, Provider,
    Resource, ResourceSchema, TfError,
};

pub struct ForemanProvider {
    client: Option<Client>,
}

impl Default for ForemanProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ForemanProvider {
    pub fn new() -> Self {
        Self { client: None }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn env_i64(name: &str) -> Option<i64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[async_trait]
impl Provider for ForemanProvider {
    async fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse {
        let server_url = request
            .config
            .get_string("server_url")
            .or_else(|| env_string("FOREMAN_SERVER_URL"));

        let username = request
            .config
            .get_string("username")
            .or_else(|| env_string("FOREMAN_USERNAME"));

        let password = request
            .config
            .get_string("password")
            .or_else(|| env_string("FOREMAN_PASSWORD"));

        let organization_id = request
            .config
            .get_i64("organization_id")
            .or_else(|| env_i64("FOREMAN_ORGANIZATION_ID"));

        let location_id = request
            .config
            .get_i64("location_id")
            .or_else(|| env_i64("FOREMAN_LOCATION_ID"));

        let insecure = request
            .config
            .get_bool("insecure")
            .or_else(|| env_bool("FOREMAN_INSECURE"))
            .unwrap_or(false);

        let mut diags = Diagnostics::new();

        match (server_url, username, password) {
            (Some(server_url), Some(username), Some(password)) => {
                let config = ClientConfig {
                    server_url,
                    username,
                    password,
                    organization_id,
                    location_id,
                    insecure,
                };
                match Client::new(config) {
                    Ok(client) => {
                        self.client = Some(client);
                    }
                    Err(e) => {
                        diags.add_error(
                            format!("Failed to create API client: {}", e),
                            None::<String>,
                        );
                    }
                }
            }
            (None, _, _) => {
                diags.add_error(
                    "server_url is required (set in provider config or FOREMAN_SERVER_URL env var)",
                    None::<String>,
                );
            }
            (_, None, _) => {
                diags.add_error(
                    "username is required (set in provider config or FOREMAN_USERNAME env var)",
                    None::<String>,
                );
            }
            (_, _, None) => {
                diags.add_error(
                    "password is required (set in provider config or FOREMAN_PASSWORD env var)",
                    None::<String>,
                );
            }
        }

        ConfigureResponse { diagnostics: diags }
    }

    fn create_resource(&self, name: &str) -> tfbridge::Result<Box<dyn Resource>> {
        let client = self
            .client
            .as_ref()
            .ok_or(TfError::ProviderNotConfigured)?
            .clone();

        match name {
            "foreman_discoveryrule" => Ok(Box::new(
                resources::discovery_rule::DiscoveryRuleResource::new(client),
            )),
            _ => Err(TfError::ResourceNotFound(name.to_string())),
        }
    }

    fn create_data_source(&self, name: &str) -> tfbridge::Result<Box<dyn DataSource>> {
        let client = self
            .client
            .as_ref()
            .ok_or(TfError::ProviderNotConfigured)?
            .clone();

        match name {
            "foreman_discoveryrule" => Ok(Box::new(
                data_sources::discovery_rule::DiscoveryRuleDataSource::new(client),
            )),
            _ => Err(TfError::DataSourceNotFound(name.to_string())),
        }
    }

    fn resource_schemas(&self) -> HashMap<String, ResourceSchema> {
        static SCHEMAS: std::sync::OnceLock<HashMap<String, ResourceSchema>> =
            std::sync::OnceLock::new();

        SCHEMAS
            .get_or_init(|| {
                let mut schemas = HashMap::new();
                schemas.insert(
                    "foreman_discoveryrule".to_string(),
                    resources::DiscoveryRuleResource::schema_static(),
                );
                schemas
            })
            .clone()
    }

    fn data_source_schemas(&self) -> HashMap<String, DataSourceSchema> {
        static SCHEMAS: std::sync::OnceLock<HashMap<String, DataSourceSchema>> =
            std::sync::OnceLock::new();

        SCHEMAS
            .get_or_init(|| {
                let mut schemas = HashMap::new();
                schemas.insert(
                    "foreman_discoveryrule".to_string(),
                    data_sources::DiscoveryRuleDataSource::schema_static(),
                );
                schemas
            })
            .clone()
    }
}
