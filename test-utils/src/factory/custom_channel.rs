//! Custom channel factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Stores transformation rules for a channel of a guild whose settings row exists.
///
/// `rules` is the raw JSON column value, e.g. `[{"type":"reverse"}]`.
pub async fn create_custom_channel(
    db: &DatabaseConnection,
    guild_id: &str,
    channel_id: &str,
    rules: &str,
) -> Result<entity::custom_channel::Model, DbErr> {
    let now = Utc::now();

    entity::custom_channel::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(channel_id.to_string()),
        name: ActiveValue::Set(format!("Channel {}", channel_id)),
        rules: ActiveValue::Set(rules.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
