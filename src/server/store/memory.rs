//! In-memory configuration store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::server::{
    error::AppError,
    model::{
        custom_channel::CustomChannel, guild_settings::ServerSettings, identity::ActiveIdentity,
        nickname_pool::NicknamePool,
    },
    store::ConfigStore,
};

/// Store backed by concurrent hash maps.
///
/// Each map entry is guarded by its shard lock, so counter increments and
/// read-modify-write of a single guild never interleave.
#[derive(Default)]
pub struct MemoryStore {
    settings: DashMap<u64, ServerSettings>,
    pools: DashMap<u64, Vec<String>>,
    identities: DashMap<(u64, u64), ActiveIdentity>,
    custom_channels: DashMap<(u64, u64), CustomChannel>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn get_settings(&self, guild_id: u64) -> Result<Option<ServerSettings>, AppError> {
        Ok(self.settings.get(&guild_id).map(|entry| entry.value().clone()))
    }

    async fn put_settings(&self, settings: &ServerSettings) -> Result<(), AppError> {
        self.settings
            .entry(settings.guild_id)
            .and_modify(|existing| {
                let rename_count = existing.rename_count;
                *existing = settings.clone();
                existing.rename_count = rename_count;
            })
            .or_insert_with(|| settings.clone());

        Ok(())
    }

    async fn list_settings(&self) -> Result<Vec<ServerSettings>, AppError> {
        let mut all: Vec<ServerSettings> = self
            .settings
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.guild_id.cmp(&b.guild_id)));

        Ok(all)
    }

    async fn rename_guild(&self, guild_id: u64, name: &str) -> Result<(), AppError> {
        if let Some(mut settings) = self.settings.get_mut(&guild_id) {
            settings.name = name.to_string();
        }

        Ok(())
    }

    async fn increment_rename_count(&self, guild_id: u64) -> Result<(), AppError> {
        if let Some(mut settings) = self.settings.get_mut(&guild_id) {
            settings.rename_count += 1;
        }

        Ok(())
    }

    async fn get_pool(&self, guild_id: u64) -> Result<Option<NicknamePool>, AppError> {
        if !self.settings.contains_key(&guild_id) {
            return Ok(None);
        }

        let entries = self
            .pools
            .get(&guild_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        Ok(Some(NicknamePool { guild_id, entries }))
    }

    async fn put_pool(&self, pool: &NicknamePool) -> Result<(), AppError> {
        self.pools.insert(pool.guild_id, pool.entries.clone());

        Ok(())
    }

    async fn get_identity(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<ActiveIdentity>, AppError> {
        Ok(self
            .identities
            .get(&(guild_id, user_id))
            .map(|entry| entry.value().clone()))
    }

    async fn list_identities(&self, guild_id: u64) -> Result<Vec<ActiveIdentity>, AppError> {
        let mut identities: Vec<ActiveIdentity> = self
            .identities
            .iter()
            .filter(|entry| entry.key().0 == guild_id)
            .map(|entry| entry.value().clone())
            .collect();
        identities.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(a.user_id.cmp(&b.user_id))
        });

        Ok(identities)
    }

    async fn put_identity(&self, identity: &ActiveIdentity) -> Result<(), AppError> {
        self.identities
            .insert((identity.guild_id, identity.user_id), identity.clone());

        Ok(())
    }

    async fn set_identity_original_nickname(
        &self,
        guild_id: u64,
        user_id: u64,
        nickname: Option<&str>,
    ) -> Result<bool, AppError> {
        let Some(mut identity) = self.identities.get_mut(&(guild_id, user_id)) else {
            return Ok(false);
        };
        identity.original_nickname = nickname.map(str::to_string);

        Ok(true)
    }

    async fn delete_identity(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        Ok(self.identities.remove(&(guild_id, user_id)).is_some())
    }

    async fn delete_guild_identities(&self, guild_id: u64) -> Result<u64, AppError> {
        let mut removed = 0;
        self.identities.retain(|(entry_guild_id, _), _| {
            let keep = *entry_guild_id != guild_id;
            if !keep {
                removed += 1;
            }
            keep
        });

        Ok(removed)
    }

    async fn prune_identities(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let mut removed = 0;
        self.identities.retain(|_, identity| {
            let keep = identity.created_at >= cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });

        Ok(removed)
    }

    async fn list_custom_channels(&self, guild_id: u64) -> Result<Vec<CustomChannel>, AppError> {
        let mut channels: Vec<CustomChannel> = self
            .custom_channels
            .iter()
            .filter(|entry| entry.key().0 == guild_id)
            .map(|entry| entry.value().clone())
            .collect();
        channels.sort_by_key(|channel| channel.channel_id);

        Ok(channels)
    }

    async fn get_custom_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<CustomChannel>, AppError> {
        Ok(self
            .custom_channels
            .get(&(guild_id, channel_id))
            .map(|entry| entry.value().clone()))
    }

    async fn put_custom_channel(&self, channel: &CustomChannel) -> Result<(), AppError> {
        self.custom_channels
            .insert((channel.guild_id, channel.channel_id), channel.clone());

        Ok(())
    }

    async fn delete_custom_channel(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        Ok(self.custom_channels.remove(&(guild_id, channel_id)).is_some())
    }
}
