use crate::server::{
    bot::command::BotCommand,
    error::AppError,
    model::guild_settings::ServerSettings,
    service::{nickname::NicknamePoolService, settings::ServerSettingsService},
    store::ConfigStore,
};

/// Discord rejects messages longer than 2000 characters.
const MAX_REPLY_LENGTH: usize = 1900;

/// Executes a command for a guild and returns the reply text.
///
/// Validation errors are returned as `Err` and rendered with
/// [`AppError::user_message`] by the caller.
pub async fn execute(
    store: &dyn ConfigStore,
    guild_id: u64,
    command: BotCommand,
) -> Result<String, AppError> {
    let settings_service = ServerSettingsService::new(store);
    let pool_service = NicknamePoolService::new(store);

    let reply = match command {
        BotCommand::ListNicknames => {
            let pool = pool_service.list(guild_id).await?;
            format_nickname_list(&pool.entries)
        }
        BotCommand::AddNickname(name) => {
            let added = pool_service.add(guild_id, &name).await?;
            format!("Added **{}** to the nickname list.", added)
        }
        BotCommand::RemoveNickname(name) => {
            let pool = pool_service.remove(guild_id, &name).await?;
            let mut reply = format!("Removed **{}** from the nickname list.", name.trim());
            if pool.is_empty() {
                reply.push_str(" The list is now empty, nobody will be renamed.");
            }
            reply
        }
        BotCommand::ResetNicknames { confirm } => {
            let pool = pool_service.reset(guild_id, confirm).await?;
            format!(
                "Nickname list reset to the {} default nicknames.",
                pool.entries.len()
            )
        }
        BotCommand::ShowSettings => {
            let settings = settings_service.get_or_create(guild_id).await?;
            format_settings(&settings)
        }
        BotCommand::SetEnabled(enabled) => {
            settings_service.set_enabled(guild_id, enabled).await?;
            if enabled {
                "Nickname assignment is now **enabled**.".to_string()
            } else {
                "Nickname assignment is now **disabled**.".to_string()
            }
        }
        BotCommand::SetRestore(restore) => {
            settings_service.set_restore(guild_id, restore).await?;
            if restore {
                "Original nicknames will be restored when members leave voice.".to_string()
            } else {
                "Original nicknames will no longer be restored.".to_string()
            }
        }
        BotCommand::SetImmunityRole(role_id) => {
            settings_service.set_immunity_role(guild_id, role_id).await?;
            match role_id {
                Some(role_id) => format!("Members with <@&{}> will not be renamed.", role_id),
                None => "Immunity role cleared.".to_string(),
            }
        }
        BotCommand::ExcludeChannel(channel_id) => {
            settings_service
                .add_excluded_channel(guild_id, channel_id)
                .await?;
            format!("Members joining <#{}> will not be renamed.", channel_id)
        }
        BotCommand::IncludeChannel(channel_id) => {
            settings_service
                .remove_excluded_channel(guild_id, channel_id)
                .await?;
            format!("Members joining <#{}> will be renamed again.", channel_id)
        }
        BotCommand::Stats => {
            let count = settings_service.get_stats(guild_id).await?;
            format!("{} members renamed so far.", count)
        }
    };

    Ok(reply)
}

fn format_nickname_list(entries: &[String]) -> String {
    if entries.is_empty() {
        return "The nickname list is empty. Add one with `/nicknames add`.".to_string();
    }

    let mut reply = format!("**{} nicknames:**\n", entries.len());
    for (shown, entry) in entries.iter().enumerate() {
        let line = format!("- {}\n", entry);
        if reply.len() + line.len() > MAX_REPLY_LENGTH {
            reply.push_str(&format!("...and {} more", entries.len() - shown));
            break;
        }
        reply.push_str(&line);
    }

    reply.trim_end().to_string()
}

fn format_settings(settings: &ServerSettings) -> String {
    let immunity = settings
        .immunity_role_id
        .map(|role_id| format!("<@&{}>", role_id))
        .unwrap_or_else(|| "none".to_string());
    let excluded = if settings.excluded_channel_ids.is_empty() {
        "none".to_string()
    } else {
        settings
            .excluded_channel_ids
            .iter()
            .map(|channel_id| format!("<#{}>", channel_id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "**Enabled:** {}\n**Restore on leave:** {}\n**Immunity role:** {}\n**Excluded channels:** {}\n**Renames:** {}",
        yes_no(settings.enabled),
        yes_no(settings.restore_on_leave),
        immunity,
        excluded,
        settings.rename_count
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
