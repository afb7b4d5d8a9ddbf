//! Relational configuration store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        custom_channel::CustomChannelRepository, guild_settings::GuildSettingsRepository,
        nickname::NicknameRepository, pending_restore::PendingRestoreRepository,
    },
    error::AppError,
    model::{
        custom_channel::CustomChannel, guild_settings::ServerSettings, identity::ActiveIdentity,
        nickname_pool::NicknamePool,
    },
    store::ConfigStore,
};

/// Store persisting configuration through the SeaORM repositories.
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConfigStore for DatabaseStore {
    async fn get_settings(&self, guild_id: u64) -> Result<Option<ServerSettings>, AppError> {
        GuildSettingsRepository::new(&self.db)
            .find_by_guild_id(guild_id)
            .await
    }

    async fn put_settings(&self, settings: &ServerSettings) -> Result<(), AppError> {
        GuildSettingsRepository::new(&self.db).upsert(settings).await
    }

    async fn list_settings(&self) -> Result<Vec<ServerSettings>, AppError> {
        GuildSettingsRepository::new(&self.db).get_all().await
    }

    async fn rename_guild(&self, guild_id: u64, name: &str) -> Result<(), AppError> {
        let updated = GuildSettingsRepository::new(&self.db)
            .update_name(guild_id, name)
            .await?;

        if !updated {
            tracing::warn!("Rename of unknown guild {}", guild_id);
        }

        Ok(())
    }

    async fn increment_rename_count(&self, guild_id: u64) -> Result<(), AppError> {
        let updated = GuildSettingsRepository::new(&self.db)
            .increment_rename_count(guild_id)
            .await?;

        if !updated {
            tracing::warn!("Rename count increment for unknown guild {}", guild_id);
        }

        Ok(())
    }

    async fn get_pool(&self, guild_id: u64) -> Result<Option<NicknamePool>, AppError> {
        let known = GuildSettingsRepository::new(&self.db)
            .find_by_guild_id(guild_id)
            .await?
            .is_some();
        if !known {
            return Ok(None);
        }

        let entries = NicknameRepository::new(&self.db)
            .get_by_guild_id(guild_id)
            .await?;

        Ok(Some(NicknamePool { guild_id, entries }))
    }

    async fn put_pool(&self, pool: &NicknamePool) -> Result<(), AppError> {
        NicknameRepository::new(&self.db)
            .replace_for_guild(pool.guild_id, &pool.entries)
            .await
    }

    async fn get_identity(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<ActiveIdentity>, AppError> {
        PendingRestoreRepository::new(&self.db)
            .find(guild_id, user_id)
            .await
    }

    async fn list_identities(&self, guild_id: u64) -> Result<Vec<ActiveIdentity>, AppError> {
        PendingRestoreRepository::new(&self.db)
            .get_by_guild_id(guild_id)
            .await
    }

    async fn put_identity(&self, identity: &ActiveIdentity) -> Result<(), AppError> {
        PendingRestoreRepository::new(&self.db).upsert(identity).await
    }

    async fn set_identity_original_nickname(
        &self,
        guild_id: u64,
        user_id: u64,
        nickname: Option<&str>,
    ) -> Result<bool, AppError> {
        PendingRestoreRepository::new(&self.db)
            .update_original_nickname(guild_id, user_id, nickname)
            .await
    }

    async fn delete_identity(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        PendingRestoreRepository::new(&self.db)
            .delete(guild_id, user_id)
            .await
    }

    async fn delete_guild_identities(&self, guild_id: u64) -> Result<u64, AppError> {
        PendingRestoreRepository::new(&self.db)
            .delete_by_guild_id(guild_id)
            .await
    }

    async fn prune_identities(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        PendingRestoreRepository::new(&self.db)
            .delete_older_than(cutoff)
            .await
    }

    async fn list_custom_channels(&self, guild_id: u64) -> Result<Vec<CustomChannel>, AppError> {
        CustomChannelRepository::new(&self.db)
            .get_by_guild_id(guild_id)
            .await
    }

    async fn get_custom_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<CustomChannel>, AppError> {
        CustomChannelRepository::new(&self.db)
            .find(guild_id, channel_id)
            .await
    }

    async fn put_custom_channel(&self, channel: &CustomChannel) -> Result<(), AppError> {
        CustomChannelRepository::new(&self.db).upsert(channel).await
    }

    async fn delete_custom_channel(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        CustomChannelRepository::new(&self.db)
            .delete(guild_id, channel_id)
            .await
    }
}
