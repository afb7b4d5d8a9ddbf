use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::server::{bot::command, store::ConfigStore};

/// Runs slash commands and replies ephemerally with the result.
pub async fn handle_interaction_create(
    store: &dyn ConfigStore,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let reply = run_command(store, &command).await;

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply)
            .ephemeral(true),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
    }
}

async fn run_command(store: &dyn ConfigStore, interaction: &CommandInteraction) -> String {
    let Some(guild_id) = interaction.guild_id else {
        return "This command can only be used in a server.".to_string();
    };

    let options = interaction.data.options();
    let parsed = match command::parse(&interaction.data.name, &options) {
        Ok(parsed) => parsed,
        Err(message) => return message,
    };

    tracing::debug!(
        "User {} ran {:?} in guild {}",
        interaction.user.id,
        parsed,
        guild_id
    );

    match command::execute(store, guild_id.get(), parsed).await {
        Ok(reply) => reply,
        Err(e) => e.user_message(),
    }
}
