use serenity::all::{Context, GuildChannel, Message};

use crate::server::{
    service::{custom_channel::CustomChannelService, settings::ServerSettingsService},
    store::ConfigStore,
};

/// Removes a deleted channel from its guild's excluded channels and custom channels.
pub async fn handle_channel_delete(
    store: &dyn ConfigStore,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let guild_id = channel.guild_id.get();
    let channel_id = channel.id.get();

    match ServerSettingsService::new(store)
        .forget_channel(guild_id, channel_id)
        .await
    {
        Ok(true) => tracing::info!(
            "Removed deleted channel {} from excluded channels of guild {}",
            channel_id,
            guild_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to handle channel deletion: {}", e),
    }

    match CustomChannelService::new(store)
        .forget(guild_id, channel_id)
        .await
    {
        Ok(true) => tracing::info!(
            "Removed rules of deleted channel {} in guild {}",
            channel_id,
            guild_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to drop rules of deleted channel: {}", e),
    }
}
