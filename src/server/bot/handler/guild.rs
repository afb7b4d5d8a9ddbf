//! Guild availability handler.
//!
//! `guild_create` fires on startup for every guild the bot is in, when the bot joins a
//! new guild, and when a guild becomes available again after an outage. Each time the
//! guild's settings are created if missing and its stored name is refreshed.

use serenity::all::{Context, Guild};

use crate::server::{service::settings::ServerSettingsService, store::ConfigStore};

pub async fn handle_guild_create(
    store: &dyn ConfigStore,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}",
        guild.name,
        guild_id,
        is_new
    );

    if let Err(e) = ServerSettingsService::new(store)
        .sync_name(guild_id, &guild.name)
        .await
    {
        tracing::error!("Failed to sync settings for guild {}: {}", guild_id, e);
    }
}
