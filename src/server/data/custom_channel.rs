//! Custom channel repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{error::AppError, model::custom_channel::CustomChannel};

/// Repository for `custom_channel`, keyed by `(guild_id, channel_id)`.
pub struct CustomChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's custom channels ordered by channel ID.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<CustomChannel>, AppError> {
        let entities = entity::prelude::CustomChannel::find()
            .filter(entity::custom_channel::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        let mut channels = entities
            .into_iter()
            .map(CustomChannel::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        // Stored IDs are strings, sort numerically.
        channels.sort_by_key(|channel| channel.channel_id);

        Ok(channels)
    }

    pub async fn find(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<CustomChannel>, AppError> {
        let entity = entity::prelude::CustomChannel::find_by_id((
            guild_id.to_string(),
            channel_id.to_string(),
        ))
        .one(self.db)
        .await?;

        entity.map(CustomChannel::from_entity).transpose()
    }

    /// Inserts a custom channel or replaces the name and rules of an existing one.
    pub async fn upsert(&self, channel: &CustomChannel) -> Result<(), AppError> {
        let now = Utc::now();

        entity::prelude::CustomChannel::insert(entity::custom_channel::ActiveModel {
            guild_id: ActiveValue::Set(channel.guild_id.to_string()),
            channel_id: ActiveValue::Set(channel.channel_id.to_string()),
            name: ActiveValue::Set(channel.name.clone()),
            rules: ActiveValue::Set(channel.rules_json()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::custom_channel::Column::GuildId,
                entity::custom_channel::Column::ChannelId,
            ])
            .update_columns([
                entity::custom_channel::Column::Name,
                entity::custom_channel::Column::Rules,
                entity::custom_channel::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - The channel had no rules stored
    pub async fn delete(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::CustomChannel::delete_many()
            .filter(entity::custom_channel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::custom_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
