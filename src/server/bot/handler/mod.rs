use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, Guild, GuildChannel, GuildId, Interaction, Message, Ready, Role,
    RoleId, VoiceState,
};
use serenity::async_trait;
use tokio::sync::mpsc;

use crate::server::{model::identity::VoiceEvent, store::ConfigStore};

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod ready;
pub mod role;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub store: Arc<dyn ConfigStore>,
    /// Queue consumed by the voice event dispatcher.
    pub events: mpsc::Sender<VoiceEvent>,
}

impl Handler {
    pub fn new(store: Arc<dyn ConfigStore>, events: mpsc::Sender<VoiceEvent>) -> Self {
        Self { store, events }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self.store.as_ref(), ctx, guild, is_new).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            self.store.as_ref(),
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(self.store.as_ref(), ctx, channel, messages).await;
    }

    /// Called when a member joins, moves between or leaves voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.events, ctx, old, new).await;
    }

    /// Called when a slash command is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self.store.as_ref(), ctx, interaction).await;
    }
}
