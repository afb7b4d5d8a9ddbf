//! Custom channel rule operations.

use crate::server::{
    error::{custom_channel::CustomChannelError, AppError},
    model::custom_channel::{ChannelRule, CustomChannel},
    service::settings::ServerSettingsService,
    store::ConfigStore,
};

pub struct CustomChannelService<'a> {
    store: &'a dyn ConfigStore,
}

impl<'a> CustomChannelService<'a> {
    pub fn new(store: &'a dyn ConfigStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<CustomChannel>, AppError> {
        ServerSettingsService::new(self.store)
            .get_or_create(guild_id)
            .await?;

        self.store.list_custom_channels(guild_id).await
    }

    /// # Returns
    /// - `Err(CustomChannelError::AlreadyExists)` - Channel already has rules stored
    pub async fn create(
        &self,
        guild_id: u64,
        channel_id: u64,
        name: &str,
        rules: Vec<ChannelRule>,
    ) -> Result<CustomChannel, AppError> {
        ServerSettingsService::new(self.store)
            .get_or_create(guild_id)
            .await?;

        if self
            .store
            .get_custom_channel(guild_id, channel_id)
            .await?
            .is_some()
        {
            return Err(CustomChannelError::AlreadyExists(channel_id).into());
        }

        let channel = CustomChannel {
            guild_id,
            channel_id,
            name: name.trim().to_string(),
            rules,
        };
        self.store.put_custom_channel(&channel).await?;

        tracing::info!(
            "Added custom channel {} with {} rules in guild {}",
            channel_id,
            channel.rules.len(),
            guild_id
        );

        Ok(channel)
    }

    /// Replaces the rules of a channel, keeping its name.
    ///
    /// # Returns
    /// - `Err(CustomChannelError::NotFound)` - Channel has no rules stored
    pub async fn update_rules(
        &self,
        guild_id: u64,
        channel_id: u64,
        rules: Vec<ChannelRule>,
    ) -> Result<CustomChannel, AppError> {
        let Some(mut channel) = self.store.get_custom_channel(guild_id, channel_id).await? else {
            return Err(CustomChannelError::NotFound(channel_id).into());
        };

        channel.rules = rules;
        self.store.put_custom_channel(&channel).await?;

        Ok(channel)
    }

    /// # Returns
    /// - `Err(CustomChannelError::NotFound)` - Channel has no rules stored
    pub async fn remove(&self, guild_id: u64, channel_id: u64) -> Result<(), AppError> {
        if !self.store.delete_custom_channel(guild_id, channel_id).await? {
            return Err(CustomChannelError::NotFound(channel_id).into());
        }

        Ok(())
    }

    /// Drops the rules of a deleted channel.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel had rules and they have been removed
    pub async fn forget(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        self.store.delete_custom_channel(guild_id, channel_id).await
    }
}
