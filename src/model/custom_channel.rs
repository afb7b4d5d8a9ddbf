use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transformation rule as sent by the dashboard, e.g. `{"type": "prefix", "value": "[AFK]"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChannelRuleDto {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Voice channel whose joiners get their own name transformed instead of a pool pick.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CustomChannelDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub channel_id: u64,
    pub name: String,
    pub rules: Vec<ChannelRuleDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCustomChannelDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub channel_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rules: Vec<ChannelRuleDto>,
}

/// Replaces the rules of an existing custom channel.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateCustomChannelDto {
    pub rules: Vec<ChannelRuleDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AvailableRuleDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// Whether the rule takes a `value`.
    pub has_value: bool,
}
