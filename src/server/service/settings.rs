//! Server settings operations shared by the dashboard, slash commands and the engine.

use crate::server::{
    error::{settings::SettingsError, AppError},
    model::{
        guild_settings::{ServerSettings, UpdateSettingsParam},
        nickname_pool::NicknamePool,
    },
    store::ConfigStore,
};

pub struct ServerSettingsService<'a> {
    store: &'a dyn ConfigStore,
}

impl<'a> ServerSettingsService<'a> {
    pub fn new(store: &'a dyn ConfigStore) -> Self {
        Self { store }
    }

    /// Fetches a guild's settings, creating defaults and the default nickname pool
    /// the first time the guild is referenced.
    pub async fn get_or_create(&self, guild_id: u64) -> Result<ServerSettings, AppError> {
        if let Some(settings) = self.store.get_settings(guild_id).await? {
            return Ok(settings);
        }

        let settings = ServerSettings::new(guild_id);
        self.store.put_settings(&settings).await?;
        self.store
            .put_pool(&NicknamePool::with_defaults(guild_id))
            .await?;

        tracing::info!("Created default settings for guild {}", guild_id);

        Ok(settings)
    }

    /// Ensures settings exist and stores the guild's current name.
    ///
    /// Only the name is written, so concurrent edits to the other fields are kept.
    pub async fn sync_name(&self, guild_id: u64, name: &str) -> Result<ServerSettings, AppError> {
        let mut settings = self.get_or_create(guild_id).await?;

        if settings.name != name {
            self.store.rename_guild(guild_id, name).await?;
            settings.name = name.to_string();
        }

        Ok(settings)
    }

    pub async fn list(&self) -> Result<Vec<ServerSettings>, AppError> {
        self.store.list_settings().await
    }

    pub async fn set_enabled(&self, guild_id: u64, enabled: bool) -> Result<ServerSettings, AppError> {
        let mut settings = self.get_or_create(guild_id).await?;
        settings.enabled = enabled;
        self.store.put_settings(&settings).await?;

        Ok(settings)
    }

    /// Toggles restore-on-leave. Disabling it drops every pending restore of the guild.
    pub async fn set_restore(&self, guild_id: u64, restore: bool) -> Result<ServerSettings, AppError> {
        let mut settings = self.get_or_create(guild_id).await?;
        settings.restore_on_leave = restore;
        self.store.put_settings(&settings).await?;

        if !restore {
            self.clear_pending_restores(guild_id).await?;
        }

        Ok(settings)
    }

    pub async fn set_immunity_role(
        &self,
        guild_id: u64,
        role_id: Option<u64>,
    ) -> Result<ServerSettings, AppError> {
        let mut settings = self.get_or_create(guild_id).await?;
        settings.immunity_role_id = role_id;
        self.store.put_settings(&settings).await?;

        Ok(settings)
    }

    /// Replaces the dashboard-editable fields at once.
    pub async fn update(
        &self,
        guild_id: u64,
        param: UpdateSettingsParam,
    ) -> Result<ServerSettings, AppError> {
        let mut settings = self.get_or_create(guild_id).await?;
        let restore_disabled = settings.restore_on_leave && !param.restore_on_leave;

        settings.enabled = param.enabled;
        settings.restore_on_leave = param.restore_on_leave;
        settings.immunity_role_id = param.immunity_role_id;
        self.store.put_settings(&settings).await?;

        if restore_disabled {
            self.clear_pending_restores(guild_id).await?;
        }

        Ok(settings)
    }

    /// # Returns
    /// - `Err(SettingsError::ChannelAlreadyExcluded)` - Channel was already excluded
    pub async fn add_excluded_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<ServerSettings, AppError> {
        let mut settings = self.get_or_create(guild_id).await?;

        if !settings.excluded_channel_ids.insert(channel_id) {
            return Err(SettingsError::ChannelAlreadyExcluded(channel_id).into());
        }
        self.store.put_settings(&settings).await?;

        Ok(settings)
    }

    /// # Returns
    /// - `Err(SettingsError::ChannelNotExcluded)` - Channel was not excluded
    pub async fn remove_excluded_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<ServerSettings, AppError> {
        let mut settings = self.get_or_create(guild_id).await?;

        if !settings.excluded_channel_ids.remove(&channel_id) {
            return Err(SettingsError::ChannelNotExcluded(channel_id).into());
        }
        self.store.put_settings(&settings).await?;

        Ok(settings)
    }

    pub async fn get_stats(&self, guild_id: u64) -> Result<u64, AppError> {
        Ok(self.get_or_create(guild_id).await?.rename_count)
    }

    /// Clears the immunity role when the role was deleted from the guild.
    ///
    /// Guilds without settings are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The deleted role was the immunity role and has been cleared
    pub async fn forget_role(&self, guild_id: u64, role_id: u64) -> Result<bool, AppError> {
        let Some(mut settings) = self.store.get_settings(guild_id).await? else {
            return Ok(false);
        };
        if settings.immunity_role_id != Some(role_id) {
            return Ok(false);
        }

        settings.immunity_role_id = None;
        self.store.put_settings(&settings).await?;

        Ok(true)
    }

    /// Drops a deleted channel from the excluded set.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was excluded and has been removed
    pub async fn forget_channel(&self, guild_id: u64, channel_id: u64) -> Result<bool, AppError> {
        let Some(mut settings) = self.store.get_settings(guild_id).await? else {
            return Ok(false);
        };
        if !settings.excluded_channel_ids.remove(&channel_id) {
            return Ok(false);
        }

        self.store.put_settings(&settings).await?;

        Ok(true)
    }

    async fn clear_pending_restores(&self, guild_id: u64) -> Result<(), AppError> {
        let cleared = self.store.delete_guild_identities(guild_id).await?;
        if cleared > 0 {
            tracing::info!(
                "Cleared {} pending restores for guild {} after disabling restore",
                cleared,
                guild_id
            );
        }

        Ok(())
    }
}
