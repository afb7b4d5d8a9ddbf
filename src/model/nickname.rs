use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nickname pool of a guild in display order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NicknamePoolDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub nicknames: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddNicknameDto {
    pub nickname: String,
}

/// Body of the reset endpoint; `confirm` must be `true` since reset discards
/// every custom nickname.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ResetNicknamesDto {
    #[serde(default)]
    pub confirm: bool,
}
