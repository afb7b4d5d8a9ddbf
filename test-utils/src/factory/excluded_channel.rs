//! Excluded channel factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a channel as excluded for a guild whose settings row exists.
pub async fn create_excluded_channel(
    db: &DatabaseConnection,
    guild_id: &str,
    channel_id: &str,
) -> Result<entity::excluded_channel::Model, DbErr> {
    entity::excluded_channel::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(channel_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
