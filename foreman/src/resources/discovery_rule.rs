use crate::api::{Client, ForemanDiscoveryRule, ForemanObject};
use crate::mapper::AttributeMapping;
use async_trait::async_trait;
use tfbridge::{
    AttributeBuilder, AttributeMap, CreateRequest, CreateResponse, DeleteRequest, DeleteResponse,
    Diagnostics, ReadRequest, ReadResponse, Resource, ResourceSchema, SchemaBuilder, UpdateRequest,
    UpdateResponse,
};

pub struct DiscoveryRuleResource {
    client: Client,
}

impl DiscoveryRuleResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn schema_static() -> ResourceSchema {
        SchemaBuilder::new()
            .attribute("id", AttributeBuilder::string("id").computed())
            .attribute(
                "name",
                AttributeBuilder::string("name")
                    .required()
                    .description("Discovery rule name"),
            )
            .attribute(
                "search",
                AttributeBuilder::string("search")
                    .required()
                    .description("Search query matching newly discovered hosts"),
            )
            .attribute(
                "hostgroup_id",
                AttributeBuilder::number("hostgroup_id")
                    .required()
                    .description("Host group assigned to matching hosts"),
            )
            .attribute(
                "hostname",
                AttributeBuilder::string("hostname")
                    .required()
                    .description("Hostname template for provisioned hosts; a plain string or fact-based"),
            )
            .attribute(
                "max_count",
                AttributeBuilder::number("max_count")
                    .optional()
                    .computed()
                    .description("Host limit for this rule (0 = unlimited)"),
            )
            .attribute(
                "priority",
                AttributeBuilder::number("priority")
                    .optional()
                    .computed()
                    .description("Rule priority (lower integer means higher precedence)"),
            )
            .attribute(
                "enabled",
                AttributeBuilder::bool("enabled")
                    .optional()
                    .computed()
                    .description("Enables or disables the discovery rule"),
            )
            .attribute(
                "location_ids",
                AttributeBuilder::set_of_numbers("location_ids")
                    .optional()
                    .description("Locations the discovery rule is scoped to"),
            )
            .attribute(
                "organization_ids",
                AttributeBuilder::set_of_numbers("organization_ids")
                    .optional()
                    .description("Organizations the discovery rule is scoped to"),
            )
            .build_resource(0)
    }
}

impl AttributeMapping for ForemanDiscoveryRule {
    fn from_attributes(attrs: &AttributeMap) -> Self {
        ForemanDiscoveryRule {
            base: ForemanObject {
                id: attrs.get_string("id").and_then(|s| s.parse().ok()),
                name: attrs.get_string("name").unwrap_or_default(),
                created_at: None,
                updated_at: None,
            },
            search: attrs.get_string("search"),
            hostgroup_id: attrs.get_i64("hostgroup_id"),
            hostname: attrs.get_string("hostname"),
            max_count: attrs.get_i64("max_count"),
            priority: attrs.get_i64("priority").unwrap_or(0),
            enabled: attrs.get_bool("enabled").unwrap_or(false),
            location_ids: attrs.get_int_list("location_ids").unwrap_or_default(),
            organization_ids: attrs.get_int_list("organization_ids").unwrap_or_default(),
            location_id: None,
            organization_id: None,
        }
    }

    fn write_attributes(&self, attrs: &mut AttributeMap) {
        if let Some(id) = self.id() {
            attrs.set("id", id.to_string());
        }
        attrs.set("name", self.name());
        attrs.set("search", self.search.clone().unwrap_or_default());
        attrs.set("hostgroup_id", self.hostgroup_id.unwrap_or(0));
        attrs.set("hostname", self.hostname.clone().unwrap_or_default());
        attrs.set("max_count", self.max_count.unwrap_or(0));
        attrs.set("priority", self.priority);
        attrs.set("enabled", self.enabled);
        attrs.set_int_list("location_ids", &self.location_ids);
        attrs.set_int_list("organization_ids", &self.organization_ids);
    }
}

fn id_from_state(state: &AttributeMap) -> tfbridge::Result<u32> {
    state
        .get_string("id")
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| "discovery rule id is missing from state".into())
}

#[async_trait]
impl Resource for DiscoveryRuleResource {
    fn schema(&self) -> ResourceSchema {
        Self::schema_static()
    }

    async fn create(&self, request: CreateRequest) -> tfbridge::Result<CreateResponse> {
        let rule = ForemanDiscoveryRule::from_attributes(&request.config);
        tracing::debug!("creating discovery rule: [{:?}]", rule);

        let created = self
            .client
            .create_discovery_rule(&request.context, &rule)
            .await
            .map_err(|e| format!("Failed to create discovery rule: {}", e))?;

        Ok(CreateResponse {
            state: created.to_state(),
            diagnostics: Diagnostics::new(),
        })
    }

    async fn read(&self, request: ReadRequest) -> tfbridge::Result<ReadResponse> {
        let id = id_from_state(&request.current_state)?;

        match self.client.read_discovery_rule(&request.context, id).await {
            Ok(rule) => Ok(ReadResponse {
                state: Some(rule.to_state()),
                diagnostics: Diagnostics::new(),
            }),
            // Gone on the server: drop the record from state.
            Err(e) if e.is_not_found() => Ok(ReadResponse {
                state: None,
                diagnostics: Diagnostics::new(),
            }),
            Err(e) => Err(format!("Failed to read discovery rule: {}", e).into()),
        }
    }

    async fn update(&self, request: UpdateRequest) -> tfbridge::Result<UpdateResponse> {
        let mut rule = ForemanDiscoveryRule::from_attributes(&request.config);
        if rule.base.id.is_none() {
            rule.base.id = Some(id_from_state(&request.current_state)?);
        }
        tracing::debug!("updating discovery rule: [{:?}]", rule);

        let updated = self
            .client
            .update_discovery_rule(&request.context, &rule)
            .await
            .map_err(|e| format!("Failed to update discovery rule: {}", e))?;

        Ok(UpdateResponse {
            state: updated.to_state(),
            diagnostics: Diagnostics::new(),
        })
    }

    async fn delete(&self, request: DeleteRequest) -> tfbridge::Result<DeleteResponse> {
        let id = id_from_state(&request.current_state)?;

        match self
            .client
            .delete_discovery_rule(&request.context, id)
            .await
        {
            // Already gone counts as deleted.
            Ok(()) => Ok(DeleteResponse {
                diagnostics: Diagnostics::new(),
            }),
            Err(e) if e.is_not_found() => Ok(DeleteResponse {
                diagnostics: Diagnostics::new(),
            }),
            Err(e) => Err(format!("Failed to delete discovery rule: {}", e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Client, ClientConfig};
    use mockito::Server;
    use tfbridge::{Config, Context, State};

    fn test_client(url: &str) -> Client {
        Client::new(ClientConfig {
            server_url: url.to_string(),
            username: "admin".to_string(),
            password: "changeme".to_string(),
            organization_id: Some(2),
            location_id: Some(3),
            insecure: true,
        })
        .unwrap()
    }

    fn test_config() -> Config {
        let mut config = Config::new();
        config.set("name", "test-rule");
        config.set("search", "name ~ test");
        config.set("hostgroup_id", 1i64);
        config.set("hostname", "test-host");
        config.set("max_count", 10i64);
        config.set("priority", 1i64);
        config.set("enabled", true);
        config.set_int_list("location_ids", &[1, 2]);
        config.set_int_list("organization_ids", &[1, 2]);
        config
    }

    fn state_with_id(id: &str) -> State {
        let mut state = State::new();
        state.set("id", id);
        state
    }

    #[test]
    fn resource_has_correct_schema() {
        let schema = DiscoveryRuleResource::schema_static();

        assert!(schema.attributes["id"].computed);
        assert!(schema.attributes["name"].required);
        assert!(schema.attributes["search"].required);
        assert!(schema.attributes["hostgroup_id"].required);
        assert!(schema.attributes["hostname"].required);
        assert!(schema.attributes["max_count"].optional);
        assert!(schema.attributes["priority"].optional);
        assert!(schema.attributes["enabled"].optional);
        assert!(schema.attributes["location_ids"].optional);
        assert!(schema.attributes["organization_ids"].optional);
    }

    #[test]
    fn rule_builds_from_config_attributes() {
        let rule = ForemanDiscoveryRule::from_attributes(&test_config());

        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.search.as_deref(), Some("name ~ test"));
        assert_eq!(rule.hostgroup_id, Some(1));
        assert_eq!(rule.hostname.as_deref(), Some("test-host"));
        assert_eq!(rule.max_count, Some(10));
        assert_eq!(rule.priority, 1);
        assert!(rule.enabled);
        assert_eq!(rule.location_ids, vec![1, 2]);
        assert_eq!(rule.organization_ids, vec![1, 2]);
        assert_eq!(rule.id(), None);
    }

    #[test]
    fn rule_writes_all_attributes_to_state() {
        let mut rule = ForemanDiscoveryRule::from_attributes(&test_config());
        rule.base.id = Some(42);

        let state = rule.to_state();

        assert_eq!(state.get_string("id"), Some("42".to_string()));
        assert_eq!(state.get_string("name"), Some("test-rule".to_string()));
        assert_eq!(state.get_i64("hostgroup_id"), Some(1));
        assert_eq!(state.get_bool("enabled"), Some(true));
        assert_eq!(state.get_int_list("location_ids"), Some(vec![1, 2]));
    }

    #[tokio::test]
    async fn resource_create_records_assigned_id() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v2/discovery_rules")
            .with_status(201)
            .with_body(
                r#"{"id": 42, "name": "test-rule", "search": "name ~ test",
                    "hostgroup_id": 1, "hostname": "test-host", "max_count": 10,
                    "priority": 1, "enabled": true,
                    "location_ids": [1, 2], "organization_ids": [1, 2]}"#,
            )
            .create_async()
            .await;

        let resource = DiscoveryRuleResource::new(test_client(&server.url()));
        let response = resource
            .create(CreateRequest {
                context: Context::new(),
                config: test_config(),
            })
            .await
            .unwrap();

        assert!(!response.diagnostics.has_errors());
        assert_eq!(response.state.get_string("id"), Some("42".to_string()));
        assert_eq!(
            response.state.get_string("name"),
            Some("test-rule".to_string())
        );
    }

    #[tokio::test]
    async fn resource_create_surfaces_api_errors() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v2/discovery_rules")
            .with_status(422)
            .with_body(r#"{"error": {"full_messages": ["Name has already been taken"]}}"#)
            .create_async()
            .await;

        let resource = DiscoveryRuleResource::new(test_client(&server.url()));
        let result = resource
            .create(CreateRequest {
                context: Context::new(),
                config: test_config(),
            })
            .await;

        let err = result.err().expect("create should fail");
        assert!(err.to_string().contains("Name has already been taken"));
    }

    #[tokio::test]
    async fn resource_read_refreshes_state() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/discovery_rules/42")
            .with_body(
                r#"{"id": 42, "name": "test-rule", "search": "name ~ test",
                    "hostgroup_id": 1, "hostname": "test-host",
                    "priority": 5, "enabled": false}"#,
            )
            .create_async()
            .await;

        let resource = DiscoveryRuleResource::new(test_client(&server.url()));
        let response = resource
            .read(ReadRequest {
                context: Context::new(),
                current_state: state_with_id("42"),
            })
            .await
            .unwrap();

        let state = response.state.expect("resource should exist");
        assert_eq!(state.get_i64("priority"), Some(5));
        assert_eq!(state.get_bool("enabled"), Some(false));
    }

    #[tokio::test]
    async fn resource_read_drops_missing_rule_from_state() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/discovery_rules/42")
            .with_status(404)
            .with_body(r#"{"error": {"message": "not found"}}"#)
            .create_async()
            .await;

        let resource = DiscoveryRuleResource::new(test_client(&server.url()));
        let response = resource
            .read(ReadRequest {
                context: Context::new(),
                current_state: state_with_id("42"),
            })
            .await
            .unwrap();

        assert!(response.state.is_none());
        assert!(!response.diagnostics.has_errors());
    }

    #[tokio::test]
    async fn resource_update_writes_returned_fields() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("PUT", "/api/v2/discovery_rules/42")
            .with_body(
                r#"{"id": 42, "name": "test-rule", "search": "name ~ test",
                    "hostgroup_id": 1, "hostname": "test-host", "max_count": 20,
                    "priority": 1, "enabled": true}"#,
            )
            .create_async()
            .await;

        let resource = DiscoveryRuleResource::new(test_client(&server.url()));
        let response = resource
            .update(UpdateRequest {
                context: Context::new(),
                config: test_config(),
                current_state: state_with_id("42"),
            })
            .await
            .unwrap();

        assert_eq!(response.state.get_string("id"), Some("42".to_string()));
        assert_eq!(response.state.get_i64("max_count"), Some(20));
    }

    #[tokio::test]
    async fn resource_delete_succeeds() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/api/v2/discovery_rules/42")
            .with_body(r#"{}"#)
            .create_async()
            .await;

        let resource = DiscoveryRuleResource::new(test_client(&server.url()));
        let response = resource
            .delete(DeleteRequest {
                context: Context::new(),
                current_state: state_with_id("42"),
            })
            .await
            .unwrap();

        assert!(!response.diagnostics.has_errors());
    }

    #[tokio::test]
    async fn resource_delete_treats_missing_rule_as_deleted() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("DELETE", "/api/v2/discovery_rules/42")
            .with_status(404)
            .with_body(r#"{"error": {"message": "not found"}}"#)
            .create_async()
            .await;

        let resource = DiscoveryRuleResource::new(test_client(&server.url()));
        let result = resource
            .delete(DeleteRequest {
                context: Context::new(),
                current_state: state_with_id("42"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn resource_read_without_id_fails() {
        let server = Server::new_async().await;
        let resource = DiscoveryRuleResource::new(test_client(&server.url()));

        let result = resource
            .read(ReadRequest {
                context: Context::new(),
                current_state: State::new(),
            })
            .await;

        assert!(result.is_err());
    }
}
