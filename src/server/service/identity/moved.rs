use crate::server::{
    error::AppError,
    model::identity::{MemberSnapshot, Outcome, SkipReason},
    service::{identity::IdentityEngine, settings::ServerSettingsService},
};

impl IdentityEngine {
    /// Moving into an excluded channel counts as leaving; any other move re-rolls the
    /// nickname, keeping the original recorded by the first join.
    pub(super) async fn moved(
        &self,
        guild_id: u64,
        from_channel_id: u64,
        to_channel_id: u64,
        member: &MemberSnapshot,
    ) -> Result<Outcome, AppError> {
        let settings = ServerSettingsService::new(self.store.as_ref())
            .get_or_create(guild_id)
            .await?;

        if settings.is_excluded(to_channel_id) {
            if !settings.restore_on_leave {
                return Ok(Outcome::Skipped(SkipReason::ExcludedChannel));
            }
            return self.restore(guild_id, member.user_id).await;
        }

        if let Some(reason) = Self::eligibility(&settings, to_channel_id, member) {
            return Ok(Outcome::Skipped(reason));
        }

        let pending = if settings.restore_on_leave {
            self.store.get_identity(guild_id, member.user_id).await?
        } else {
            None
        };

        let (original_nickname, original_display_name) = match pending {
            Some(identity) => {
                tracing::debug!(
                    "User {} moved from channel {} to {}, re-rolling nickname",
                    member.user_id,
                    from_channel_id,
                    to_channel_id
                );
                (identity.original_nickname, identity.original_display_name)
            }
            None => (member.nickname.clone(), member.display_name.clone()),
        };

        self.assign(
            &settings,
            to_channel_id,
            member,
            original_nickname,
            original_display_name,
        )
        .await
    }
}
