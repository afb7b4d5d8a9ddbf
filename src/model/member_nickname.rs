use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Member currently renamed in voice, with the nickname a leave will restore.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MemberNicknameDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    /// Name shown before the rename.
    pub display_name: String,
    /// Nickname set back on leave, `null` clears the override.
    pub reset_nickname: Option<String>,
    pub assigned_nickname: String,
    pub renamed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MemberNicknamePageDto {
    pub members: Vec<MemberNicknameDto>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    /// Pending restores older than this are pruned.
    pub stale_days: i64,
}

#[derive(Deserialize, Clone, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberNicknamePageQuery {
    /// 1-based page number, defaults to 1.
    pub page: Option<u64>,
    /// Defaults to 25, at most 100.
    pub page_size: Option<u64>,
}

/// Replaces the nickname a pending restore will set back.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateMemberNicknameDto {
    #[serde(default)]
    pub reset_nickname: Option<String>,
}
