//! Nickname side effect against Discord.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{EditMember, GuildId, UserId};
use serenity::http::Http;

use crate::server::error::rename::RenameError;

/// Changes a member's guild nickname.
#[async_trait]
pub trait MemberApi: Send + Sync {
    /// Sets the nickname override; `None` clears it so the account name shows again.
    async fn set_nickname(
        &self,
        guild_id: u64,
        user_id: u64,
        nickname: Option<&str>,
    ) -> Result<(), RenameError>;
}

/// [`MemberApi`] over the bot's serenity HTTP client.
pub struct DiscordMemberApi {
    http: Arc<Http>,
}

impl DiscordMemberApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MemberApi for DiscordMemberApi {
    async fn set_nickname(
        &self,
        guild_id: u64,
        user_id: u64,
        nickname: Option<&str>,
    ) -> Result<(), RenameError> {
        // An empty nickname removes the override.
        let builder = EditMember::new().nickname(nickname.unwrap_or_default());

        GuildId::new(guild_id)
            .edit_member(&self.http, UserId::new(user_id), builder)
            .await?;

        Ok(())
    }
}
