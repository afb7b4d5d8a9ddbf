//! Dashboard view of members currently renamed in voice.
//!
//! Each entry is a pending restore. Editing one changes the nickname the member gets
//! back on leave; the member's current nickname is left alone until then.

use crate::server::{
    error::{member_nickname::MemberNicknameError, nickname::NicknameError, AppError},
    model::{
        identity::{ActiveIdentity, IdentityPage},
        nickname_pool::MAX_NICKNAME_LENGTH,
    },
    store::ConfigStore,
};

pub const DEFAULT_PAGE_SIZE: u64 = 25;
pub const MAX_PAGE_SIZE: u64 = 100;

pub struct MemberNicknameService<'a> {
    store: &'a dyn ConfigStore,
}

impl<'a> MemberNicknameService<'a> {
    pub fn new(store: &'a dyn ConfigStore) -> Self {
        Self { store }
    }

    /// Lists a page of the guild's pending restores, newest first.
    ///
    /// # Returns
    /// - `Err(MemberNicknameError::InvalidPage)` - `page` is 0
    /// - `Err(MemberNicknameError::InvalidPageSize)` - `page_size` outside `1..=100`
    pub async fn list(
        &self,
        guild_id: u64,
        page: u64,
        page_size: u64,
    ) -> Result<IdentityPage, AppError> {
        if page < 1 {
            return Err(MemberNicknameError::InvalidPage.into());
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(MemberNicknameError::InvalidPageSize(MAX_PAGE_SIZE).into());
        }

        let all = self.store.list_identities(guild_id).await?;
        let total = all.len() as u64;
        let skip = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let identities = all
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        Ok(IdentityPage {
            identities,
            page,
            page_size,
            total,
        })
    }

    /// Sets the nickname restored on leave. Blank input clears the override.
    ///
    /// # Returns
    /// - `Err(NicknameError::TooLong)` - Nickname over 32 characters after trimming
    /// - `Err(MemberNicknameError::NotFound)` - Member has no pending restore
    pub async fn set_reset_nickname(
        &self,
        guild_id: u64,
        user_id: u64,
        nickname: Option<&str>,
    ) -> Result<ActiveIdentity, AppError> {
        let nickname = nickname.map(str::trim).filter(|nickname| !nickname.is_empty());
        if let Some(nickname) = nickname {
            if nickname.chars().count() > MAX_NICKNAME_LENGTH {
                return Err(NicknameError::TooLong(nickname.to_string()).into());
            }
        }

        if !self
            .store
            .set_identity_original_nickname(guild_id, user_id, nickname)
            .await?
        {
            return Err(MemberNicknameError::NotFound(user_id).into());
        }

        tracing::debug!(
            "Reset nickname of user {} in guild {} set to {:?}",
            user_id,
            guild_id,
            nickname
        );

        self.store
            .get_identity(guild_id, user_id)
            .await?
            .ok_or_else(|| MemberNicknameError::NotFound(user_id).into())
    }

    /// Drops a pending restore so the member keeps their assigned nickname.
    ///
    /// # Returns
    /// - `Err(MemberNicknameError::NotFound)` - Member has no pending restore
    pub async fn remove(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        if !self.store.delete_identity(guild_id, user_id).await? {
            return Err(MemberNicknameError::NotFound(user_id).into());
        }

        Ok(())
    }
}
