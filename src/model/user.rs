use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    #[serde(with = "crate::model::id::u64_string")]
    #[schema(value_type = String)]
    pub discord_id: u64,
    pub name: String,
}
