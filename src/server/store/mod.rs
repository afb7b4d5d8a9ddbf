//! Persistence interface for per-guild configuration.
//!
//! The identity engine, the dashboard and the slash commands all go through
//! [`ConfigStore`], so the storage backend can be swapped at startup:
//!
//! - [`memory::MemoryStore`] - concurrent maps, lost on restart
//! - [`database::DatabaseStore`] - SeaORM repositories over SQLite
//!
//! Stores are plain persistence: they perform no validation and no lazy creation.
//! Both concerns belong to the services in `server::service`.

pub mod database;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::StoreBackend,
    error::AppError,
    model::{
        custom_channel::CustomChannel, guild_settings::ServerSettings, identity::ActiveIdentity,
        nickname_pool::NicknamePool,
    },
};

#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get_settings(&self, guild_id: u64) -> Result<Option<ServerSettings>, AppError>;

    /// Writes every field except `rename_count`, which is only changed through
    /// [`ConfigStore::increment_rename_count`].
    async fn put_settings(&self, settings: &ServerSettings) -> Result<(), AppError>;

    async fn list_settings(&self) -> Result<Vec<ServerSettings>, AppError>;

    /// Updates only the stored guild name. Unknown guilds are ignored.
    async fn rename_guild(&self, guild_id: u64, name: &str) -> Result<(), AppError>;

    async fn increment_rename_count(&self, guild_id: u64) -> Result<(), AppError>;

    /// Returns `None` when the guild has no settings yet; a known guild always has a
    /// pool, possibly empty.
    async fn get_pool(&self, guild_id: u64) -> Result<Option<NicknamePool>, AppError>;

    /// Replaces the guild's pool. The guild's settings must already exist.
    async fn put_pool(&self, pool: &NicknamePool) -> Result<(), AppError>;

    async fn get_identity(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<ActiveIdentity>, AppError>;

    /// Lists a guild's pending restores, newest first.
    async fn list_identities(&self, guild_id: u64) -> Result<Vec<ActiveIdentity>, AppError>;

    /// Stores a pending restore, overwriting any record with the same key.
    async fn put_identity(&self, identity: &ActiveIdentity) -> Result<(), AppError>;

    /// Changes the nickname an existing pending restore sets back, never creating one.
    ///
    /// Returns whether a record was updated.
    async fn set_identity_original_nickname(
        &self,
        guild_id: u64,
        user_id: u64,
        nickname: Option<&str>,
    ) -> Result<bool, AppError>;

    /// Returns whether a record was removed.
    async fn delete_identity(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError>;

    async fn delete_guild_identities(&self, guild_id: u64) -> Result<u64, AppError>;

    /// Removes pending restores created before `cutoff`.
    async fn prune_identities(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;

    /// Lists a guild's channels with transformation rules, ordered by channel ID.
    async fn list_custom_channels(&self, guild_id: u64) -> Result<Vec<CustomChannel>, AppError>;

    async fn get_custom_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<CustomChannel>, AppError>;

    /// Creates or replaces a custom channel. The guild's settings must already exist.
    async fn put_custom_channel(&self, channel: &CustomChannel) -> Result<(), AppError>;

    /// Returns whether a channel was removed.
    async fn delete_custom_channel(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError>;
}

/// Builds the store selected by configuration.
pub fn build_store(backend: StoreBackend, db: &DatabaseConnection) -> Arc<dyn ConfigStore> {
    match backend {
        StoreBackend::Database => Arc::new(database::DatabaseStore::new(db.clone())),
        StoreBackend::Memory => Arc::new(memory::MemoryStore::new()),
    }
}

#[cfg(test)]
mod test;
