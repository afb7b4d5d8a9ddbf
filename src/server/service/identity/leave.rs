use crate::server::{
    error::AppError,
    model::identity::{Outcome, SkipReason},
    service::{identity::IdentityEngine, settings::ServerSettingsService},
};

impl IdentityEngine {
    pub(super) async fn leave(&self, guild_id: u64, user_id: u64) -> Result<Outcome, AppError> {
        let settings = ServerSettingsService::new(self.store.as_ref())
            .get_or_create(guild_id)
            .await?;

        if !settings.restore_on_leave {
            return Ok(Outcome::Skipped(SkipReason::RestoreDisabled));
        }

        self.restore(guild_id, user_id).await
    }
}
