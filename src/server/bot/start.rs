use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use tokio::sync::mpsc;

use crate::server::{
    bot::{
        dispatch::{spawn_dispatcher, EVENT_QUEUE_CAPACITY},
        handler::Handler,
    },
    config::Config,
    error::AppError,
    service::{identity::IdentityEngine, member::DiscordMemberApi},
    store::ConfigStore,
};

/// Builds the Discord client and spawns the voice event dispatcher.
///
/// The dispatcher renames members through the client's HTTP handle, so it can start
/// before the gateway connection is established.
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with [`start_bot`]
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(config: &Config, store: Arc<dyn ConfigStore>) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
    let handler = Handler::new(store.clone(), events_tx);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let members = Arc::new(DiscordMemberApi::new(client.http.clone()));
    spawn_dispatcher(IdentityEngine::new(store, members), events_rx);

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Should be called from within a tokio::spawn task since it runs until the bot
/// shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
