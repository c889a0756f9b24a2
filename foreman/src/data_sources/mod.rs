pub mod discovery_rule;

pub use discovery_rule::DiscoveryRuleDataSource;
