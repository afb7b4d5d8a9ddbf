//! Nickname pool operations.

use crate::server::{
    error::{nickname::NicknameError, AppError},
    model::nickname_pool::NicknamePool,
    service::settings::ServerSettingsService,
    store::ConfigStore,
};

pub struct NicknamePoolService<'a> {
    store: &'a dyn ConfigStore,
}

impl<'a> NicknamePoolService<'a> {
    pub fn new(store: &'a dyn ConfigStore) -> Self {
        Self { store }
    }

    /// Returns the guild's pool, seeding it with defaults on first reference.
    pub async fn list(&self, guild_id: u64) -> Result<NicknamePool, AppError> {
        ServerSettingsService::new(self.store)
            .get_or_create(guild_id)
            .await?;

        Ok(self
            .store
            .get_pool(guild_id)
            .await?
            .unwrap_or_else(|| NicknamePool::with_defaults(guild_id)))
    }

    /// Adds a nickname and returns the stored (trimmed) entry.
    ///
    /// # Returns
    /// - `Err(NicknameError::DuplicateEntry | Empty | TooLong)` - Entry rejected
    pub async fn add(&self, guild_id: u64, nickname: &str) -> Result<String, AppError> {
        let mut pool = self.list(guild_id).await?;
        let added = pool.add(nickname)?;
        self.store.put_pool(&pool).await?;

        Ok(added)
    }

    /// # Returns
    /// - `Err(NicknameError::NotFound)` - Entry not present
    pub async fn remove(&self, guild_id: u64, nickname: &str) -> Result<NicknamePool, AppError> {
        let mut pool = self.list(guild_id).await?;
        pool.remove(nickname)?;
        self.store.put_pool(&pool).await?;

        Ok(pool)
    }

    /// Replaces the pool with the built-in defaults.
    ///
    /// # Returns
    /// - `Err(NicknameError::ResetNotConfirmed)` - `confirm` was false, pool unchanged
    pub async fn reset(&self, guild_id: u64, confirm: bool) -> Result<NicknamePool, AppError> {
        if !confirm {
            return Err(NicknameError::ResetNotConfirmed.into());
        }

        let mut pool = self.list(guild_id).await?;
        pool.reset();
        self.store.put_pool(&pool).await?;

        tracing::info!("Reset nickname pool of guild {} to defaults", guild_id);

        Ok(pool)
    }
}
