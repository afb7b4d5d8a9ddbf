use crate::server::{
    error::AppError,
    model::identity::{MemberSnapshot, Outcome},
    service::{identity::IdentityEngine, settings::ServerSettingsService},
};

impl IdentityEngine {
    pub(super) async fn join(
        &self,
        guild_id: u64,
        channel_id: u64,
        member: &MemberSnapshot,
    ) -> Result<Outcome, AppError> {
        let settings = ServerSettingsService::new(self.store.as_ref())
            .get_or_create(guild_id)
            .await?;

        if let Some(reason) = Self::eligibility(&settings, channel_id, member) {
            return Ok(Outcome::Skipped(reason));
        }

        // A second join before a leave overwrites the stored original.
        self.assign(
            &settings,
            channel_id,
            member,
            member.nickname.clone(),
            member.display_name.clone(),
        )
        .await
    }
}
