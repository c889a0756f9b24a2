use crate::api::{Client, ForemanDiscoveryRule, ForemanObject};
use crate::mapper::AttributeMapping;
use async_trait::async_trait;
use tfbridge::{
    AttributeBuilder, DataSource, DataSourceSchema, Diagnostics, ReadDataRequest, ReadDataResponse,
    SchemaBuilder,
};

pub struct DiscoveryRuleDataSource {
    client: Client,
}

impl DiscoveryRuleDataSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn schema_static() -> DataSourceSchema {
        SchemaBuilder::new()
            .attribute("id", AttributeBuilder::string("id").computed())
            .attribute(
                "name",
                AttributeBuilder::string("name")
                    .required()
                    .description("Name of the discovery rule to look up"),
            )
            .attribute("search", AttributeBuilder::string("search").computed())
            .attribute(
                "hostgroup_id",
                AttributeBuilder::number("hostgroup_id").computed(),
            )
            .attribute("hostname", AttributeBuilder::string("hostname").computed())
            .attribute("max_count", AttributeBuilder::number("max_count").computed())
            .attribute("priority", AttributeBuilder::number("priority").computed())
            .attribute("enabled", AttributeBuilder::bool("enabled").computed())
            .attribute(
                "location_ids",
                AttributeBuilder::set_of_numbers("location_ids").computed(),
            )
            .attribute(
                "organization_ids",
                AttributeBuilder::set_of_numbers("organization_ids").computed(),
            )
            .build_data_source(0)
    }
}

#[async_trait]
impl DataSource for DiscoveryRuleDataSource {
    fn schema(&self) -> DataSourceSchema {
        Self::schema_static()
    }

    async fn read(&self, request: ReadDataRequest) -> tfbridge::Result<ReadDataResponse> {
        let name = request
            .config
            .get_string("name")
            .ok_or("name is required to look up a discovery rule")?;

        let filter = ForemanDiscoveryRule {
            base: ForemanObject {
                name,
                ..Default::default()
            },
            ..Default::default()
        };

        let response = self
            .client
            .query_discovery_rule(&request.context, &filter)
            .await
            .map_err(|e| format!("Failed to query discovery rules: {}", e))?;

        let rule = response
            .single()
            .map_err(|e| format!("Data source foreman_discoveryrule: {}", e))?;

        Ok(ReadDataResponse {
            state: rule.to_state(),
            diagnostics: Diagnostics::new(),
        })
    }
}
