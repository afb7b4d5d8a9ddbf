//! Identity assignment engine.
//!
//! Turns voice events into nickname changes. Per `(guild, member)` the engine moves
//! between two states:
//!
//! ```text
//! Unmanaged --join (restore on)--> PendingRestore --leave / move into excluded--> Unmanaged
//! ```
//!
//! With restore disabled a join renames the member but no state is kept.
//!
//! The engine never returns errors. Rename failures are logged and reported as
//! [`Outcome::RenameFailed`]; store failures are logged and the event is skipped.

mod join;
mod leave;
mod moved;

use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::{
        guild_settings::ServerSettings,
        identity::{ActiveIdentity, MemberSnapshot, Outcome, SkipReason, VoiceEvent},
    },
    service::member::MemberApi,
    store::ConfigStore,
};

#[derive(Clone)]
pub struct IdentityEngine {
    store: Arc<dyn ConfigStore>,
    members: Arc<dyn MemberApi>,
}

impl IdentityEngine {
    pub fn new(store: Arc<dyn ConfigStore>, members: Arc<dyn MemberApi>) -> Self {
        Self { store, members }
    }

    /// Handles a single voice event.
    pub async fn handle(&self, event: VoiceEvent) -> Outcome {
        let guild_id = event.guild_id();
        let user_id = event.user_id();

        let result = match event {
            VoiceEvent::Joined {
                guild_id,
                channel_id,
                member,
            } => self.join(guild_id, channel_id, &member).await,
            VoiceEvent::Moved {
                guild_id,
                from_channel_id,
                to_channel_id,
                member,
            } => {
                self.moved(guild_id, from_channel_id, to_channel_id, &member)
                    .await
            }
            VoiceEvent::Left { guild_id, user_id } => self.leave(guild_id, user_id).await,
        };

        match result {
            Ok(outcome) => {
                tracing::debug!(
                    "Voice event for user {} in guild {}: {:?}",
                    user_id,
                    guild_id,
                    outcome
                );
                outcome
            }
            Err(e) => {
                tracing::error!(
                    "Skipping voice event for user {} in guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
                Outcome::Skipped(SkipReason::StoreUnavailable)
            }
        }
    }

    /// Checks whether a member may be renamed in a channel.
    fn eligibility(
        settings: &ServerSettings,
        channel_id: u64,
        member: &MemberSnapshot,
    ) -> Option<SkipReason> {
        if !settings.enabled {
            return Some(SkipReason::Disabled);
        }
        if settings.is_excluded(channel_id) {
            return Some(SkipReason::ExcludedChannel);
        }
        if member.is_guild_owner || member.is_bot_self {
            return Some(SkipReason::OwnerOrSelf);
        }
        if settings.is_immune(&member.role_ids) {
            return Some(SkipReason::Immune);
        }

        None
    }

    /// Picks a nickname, records the pending restore and renames the member.
    ///
    /// `original_nickname` is what a later restore will set back. A channel with
    /// transformation rules derives the nickname from `original_display_name` instead
    /// of drawing from the pool.
    async fn assign(
        &self,
        settings: &ServerSettings,
        channel_id: u64,
        member: &MemberSnapshot,
        original_nickname: Option<String>,
        original_display_name: String,
    ) -> Result<Outcome, AppError> {
        let guild_id = settings.guild_id;

        let nickname = match self.store.get_custom_channel(guild_id, channel_id).await? {
            Some(channel) if channel.has_rules() => channel.apply(&original_display_name),
            _ => {
                let pool = self.store.get_pool(guild_id).await?;
                let Some(nickname) = pool
                    .as_ref()
                    .and_then(|pool| pool.choose())
                    .map(str::to_string)
                else {
                    return Ok(Outcome::Skipped(SkipReason::EmptyPool));
                };
                nickname
            }
        };

        if settings.restore_on_leave {
            let identity = ActiveIdentity::new(
                guild_id,
                member.user_id,
                original_nickname,
                original_display_name,
                nickname.clone(),
            );
            self.store.put_identity(&identity).await?;
        }

        match self
            .members
            .set_nickname(guild_id, member.user_id, Some(&nickname))
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Renamed user {} to '{}' in guild {}",
                    member.user_id,
                    nickname,
                    guild_id
                );

                if let Err(e) = self.store.increment_rename_count(guild_id).await {
                    tracing::error!("Failed to count rename in guild {}: {}", guild_id, e);
                }

                Ok(Outcome::Renamed { nickname })
            }
            Err(e) => {
                tracing::warn!(
                    "Could not rename user {} in guild {}: {}",
                    member.user_id,
                    guild_id,
                    e
                );

                Ok(Outcome::RenameFailed(e))
            }
        }
    }

    /// Restores the member's original nickname if a restore is pending.
    ///
    /// The pending record is deleted whether or not the rename succeeds.
    async fn restore(&self, guild_id: u64, user_id: u64) -> Result<Outcome, AppError> {
        let Some(identity) = self.store.get_identity(guild_id, user_id).await? else {
            return Ok(Outcome::Skipped(SkipReason::NoPendingRestore));
        };

        let result = self
            .members
            .set_nickname(guild_id, user_id, identity.original_nickname.as_deref())
            .await;

        if let Err(e) = self.store.delete_identity(guild_id, user_id).await {
            tracing::error!(
                "Failed to delete pending restore of user {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
        }

        match result {
            Ok(()) => {
                tracing::info!(
                    "Restored nickname of user {} in guild {} to {:?}",
                    user_id,
                    guild_id,
                    identity.original_nickname
                );

                Ok(Outcome::Restored {
                    nickname: identity.original_nickname,
                })
            }
            Err(e) => {
                tracing::warn!(
                    "Could not restore nickname of user {} in guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );

                Ok(Outcome::RenameFailed(e))
            }
        }
    }
}
