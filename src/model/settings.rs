use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildSettingsDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub name: String,
    pub enabled: bool,
    pub restore_on_leave: bool,
    #[serde(with = "crate::model::id::option_u64_string")]
    #[schema(value_type = Option<String>)]
    pub immunity_role_id: Option<u64>,
    #[serde(with = "crate::model::id::vec_u64_string")]
    #[schema(value_type = Vec<String>)]
    pub excluded_channel_ids: Vec<u64>,
    pub rename_count: u64,
}

/// Full replacement of the editable guild settings.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateGuildSettingsDto {
    pub enabled: bool,
    pub restore_on_leave: bool,
    #[serde(default, with = "crate::model::id::option_u64_string")]
    #[schema(value_type = Option<String>)]
    pub immunity_role_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildStatsDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub rename_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ExcludedChannelDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub channel_id: u64,
}

/// Guild listed on the dashboard landing page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildSummaryDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub name: String,
    pub enabled: bool,
}
