use serenity::all::{Context, GuildId, Role, RoleId};

use crate::server::{service::settings::ServerSettingsService, store::ConfigStore};

/// Clears the immunity role of a guild when that role is deleted.
pub async fn handle_guild_role_delete(
    store: &dyn ConfigStore,
    _ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    _removed_role_data_if_in_cache: Option<Role>,
) {
    match ServerSettingsService::new(store)
        .forget_role(guild_id.get(), removed_role_id.get())
        .await
    {
        Ok(true) => tracing::info!(
            "Cleared deleted immunity role {} in guild {}",
            removed_role_id,
            guild_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to handle role deletion: {}", e),
    }
}
