//! Discovery rule entity and CRUD/query calls
//!
//! A discovery rule matches newly discovered hosts by search predicate and
//! assigns them to a host group automatically. The shape of this module is
//! the per-entity template: one typed entity embedding ForemanObject, plus
//! create/read/update/delete/query methods on the shared Client.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tfbridge::Context;

use super::client::Client;
use super::entity::{search_query, ForemanObject, QueryResponse};
use super::error::ApiError;

const DISCOVERY_RULE_ENDPOINT: &str = "v2/discovery_rules";

const DISCOVERY_RULE_KEY: &str = "discovery_rule";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForemanDiscoveryRule {
    #[serde(flatten)]
    pub base: ForemanObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostgroup_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Host limit; 0 means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i64>,
    /// Lower integer means higher precedence.
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organization_ids: Vec<i64>,
    /// Default tenancy, only meaningful on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
}

impl ForemanDiscoveryRule {
    pub fn id(&self) -> Option<u32> {
        self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}

impl Client {
    pub async fn create_discovery_rule(
        &self,
        ctx: &Context,
        rule: &ForemanDiscoveryRule,
    ) -> Result<ForemanDiscoveryRule, ApiError> {
        tracing::debug!("create_discovery_rule: [{:?}]", rule);

        let mut rule = rule.clone();
        if rule.location_id.is_none() {
            rule.location_id = self.default_location_id();
        }
        if rule.organization_id.is_none() {
            rule.organization_id = self.default_organization_id();
        }

        let body = Client::wrap_json(DISCOVERY_RULE_KEY, &rule)?;
        let request = self
            .new_request(Method::POST, DISCOVERY_RULE_ENDPOINT)
            .body(body);

        self.send_and_parse(ctx, request).await
    }

    pub async fn read_discovery_rule(
        &self,
        ctx: &Context,
        id: u32,
    ) -> Result<ForemanDiscoveryRule, ApiError> {
        let path = format!("{}/{}", DISCOVERY_RULE_ENDPOINT, id);
        let request = self.new_request(Method::GET, &path);

        self.send_and_parse(ctx, request).await
    }

    pub async fn update_discovery_rule(
        &self,
        ctx: &Context,
        rule: &ForemanDiscoveryRule,
    ) -> Result<ForemanDiscoveryRule, ApiError> {
        tracing::debug!("update_discovery_rule: [{:?}]", rule);

        let id = rule.id().ok_or(ApiError::MissingId)?;
        let body = self.wrap_json_with_taxonomy(DISCOVERY_RULE_KEY, rule)?;
        let path = format!("{}/{}", DISCOVERY_RULE_ENDPOINT, id);
        let request = self.new_request(Method::PUT, &path).body(body);

        self.send_and_parse(ctx, request).await
    }

    pub async fn delete_discovery_rule(&self, ctx: &Context, id: u32) -> Result<(), ApiError> {
        let path = format!("{}/{}", DISCOVERY_RULE_ENDPOINT, id);
        let request = self.new_request(Method::DELETE, &path);

        self.send_and_parse_empty(ctx, request).await
    }

    /// Search by the filter entity's name and decode the result page
    /// directly into typed entities.
    pub async fn query_discovery_rule(
        &self,
        ctx: &Context,
        filter: &ForemanDiscoveryRule,
    ) -> Result<QueryResponse<ForemanDiscoveryRule>, ApiError> {
        let search = search_query("name", filter.name());
        let path = format!(
            "{}?search={}",
            DISCOVERY_RULE_ENDPOINT,
            urlencoding::encode(&search)
        );
        let request = self.new_request(Method::GET, &path);

        let response: QueryResponse<ForemanDiscoveryRule> =
            self.send_and_parse(ctx, request).await?;
        tracing::debug!(
            "query_discovery_rule: subtotal={} of total={}",
            response.subtotal,
            response.total
        );

        Ok(response)
    }
}
