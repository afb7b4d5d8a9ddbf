//! Slash commands mirroring the dashboard's configuration operations.
//!
//! - `/nicknames list | add <name> | remove <name> | reset confirm:<bool>`
//! - `/settings show | enabled <value> | restore <value> | immunity [role] | exclude <channel> | include <channel>`
//! - `/stats`
//!
//! All commands require `MANAGE_GUILD` and are unavailable in DMs.

mod execute;

pub use execute::execute;

use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
    ResolvedOption, ResolvedValue,
};

use crate::server::model::nickname_pool::MAX_NICKNAME_LENGTH;

/// A parsed slash command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    ListNicknames,
    AddNickname(String),
    RemoveNickname(String),
    ResetNicknames { confirm: bool },
    ShowSettings,
    SetEnabled(bool),
    SetRestore(bool),
    SetImmunityRole(Option<u64>),
    ExcludeChannel(u64),
    IncludeChannel(u64),
    Stats,
}

/// Command definitions registered globally on startup.
pub fn definitions() -> Vec<CreateCommand> {
    vec![nicknames_command(), settings_command(), stats_command()]
}

fn nicknames_command() -> CreateCommand {
    let name_option = |description: &str| {
        CreateCommandOption::new(CommandOptionType::String, "name", description)
            .required(true)
            .max_length(MAX_NICKNAME_LENGTH as u16)
    };

    guild_command("nicknames", "Manage the random nickname list")
        .add_option(subcommand("list", "Show every nickname in the list"))
        .add_option(
            subcommand("add", "Add a nickname to the list")
                .add_sub_option(name_option("Nickname to add")),
        )
        .add_option(
            subcommand("remove", "Remove a nickname from the list")
                .add_sub_option(name_option("Nickname to remove")),
        )
        .add_option(
            subcommand("reset", "Replace the list with the default nicknames").add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "confirm",
                    "Set to true to discard every custom nickname",
                )
                .required(true),
            ),
        )
}

fn settings_command() -> CreateCommand {
    let value_option = |description: &str| {
        CreateCommandOption::new(CommandOptionType::Boolean, "value", description).required(true)
    };
    let channel_option = |description: &str| {
        CreateCommandOption::new(CommandOptionType::Channel, "channel", description)
            .required(true)
            .channel_types(vec![ChannelType::Voice, ChannelType::Stage])
    };

    guild_command("settings", "Configure nickname assignment for this server")
        .add_option(subcommand("show", "Show the current settings"))
        .add_option(
            subcommand("enabled", "Turn nickname assignment on or off")
                .add_sub_option(value_option("Whether members get renamed")),
        )
        .add_option(
            subcommand("restore", "Restore original nicknames when members leave voice")
                .add_sub_option(value_option("Whether to restore on leave")),
        )
        .add_option(
            subcommand("immunity", "Set or clear the role that is never renamed").add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Role,
                    "role",
                    "Immune role, leave empty to clear",
                ),
            ),
        )
        .add_option(
            subcommand("exclude", "Stop renaming in a voice channel")
                .add_sub_option(channel_option("Voice channel to exclude")),
        )
        .add_option(
            subcommand("include", "Resume renaming in an excluded voice channel")
                .add_sub_option(channel_option("Voice channel to include again")),
        )
}

fn stats_command() -> CreateCommand {
    guild_command("stats", "Show how many members have been renamed")
}

#[allow(deprecated)]
fn guild_command(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false)
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

/// Parses a command invocation from its resolved options.
///
/// # Returns
/// - `Ok(BotCommand)` - Known command with all required options
/// - `Err(String)` - Message to show to the caller
pub fn parse(name: &str, options: &[ResolvedOption<'_>]) -> Result<BotCommand, String> {
    if name == "stats" {
        return Ok(BotCommand::Stats);
    }

    let Some(ResolvedOption {
        name: subcommand,
        value: ResolvedValue::SubCommand(sub_options),
        ..
    }) = options.first()
    else {
        return Err(format!("Unknown usage of /{}", name));
    };

    let command = match (name, *subcommand) {
        ("nicknames", "list") => BotCommand::ListNicknames,
        ("nicknames", "add") => BotCommand::AddNickname(string_option(sub_options, "name")?),
        ("nicknames", "remove") => BotCommand::RemoveNickname(string_option(sub_options, "name")?),
        ("nicknames", "reset") => BotCommand::ResetNicknames {
            confirm: bool_option(sub_options, "confirm")?,
        },
        ("settings", "show") => BotCommand::ShowSettings,
        ("settings", "enabled") => BotCommand::SetEnabled(bool_option(sub_options, "value")?),
        ("settings", "restore") => BotCommand::SetRestore(bool_option(sub_options, "value")?),
        ("settings", "immunity") => BotCommand::SetImmunityRole(role_option(sub_options, "role")),
        ("settings", "exclude") => {
            BotCommand::ExcludeChannel(channel_option(sub_options, "channel")?)
        }
        ("settings", "include") => {
            BotCommand::IncludeChannel(channel_option(sub_options, "channel")?)
        }
        _ => return Err(format!("Unknown command /{} {}", name, subcommand)),
    };

    Ok(command)
}

fn find<'a, 'b>(options: &'b [ResolvedOption<'a>], name: &str) -> Option<&'b ResolvedValue<'a>> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

fn string_option(options: &[ResolvedOption<'_>], name: &str) -> Result<String, String> {
    match find(options, name) {
        Some(ResolvedValue::String(value)) => Ok(value.to_string()),
        _ => Err(format!("Missing option '{}'", name)),
    }
}

fn bool_option(options: &[ResolvedOption<'_>], name: &str) -> Result<bool, String> {
    match find(options, name) {
        Some(ResolvedValue::Boolean(value)) => Ok(*value),
        _ => Err(format!("Missing option '{}'", name)),
    }
}

fn role_option(options: &[ResolvedOption<'_>], name: &str) -> Option<u64> {
    match find(options, name) {
        Some(ResolvedValue::Role(role)) => Some(role.id.get()),
        _ => None,
    }
}

fn channel_option(options: &[ResolvedOption<'_>], name: &str) -> Result<u64, String> {
    match find(options, name) {
        Some(ResolvedValue::Channel(channel)) => Ok(channel.id.get()),
        _ => Err(format!("Missing option '{}'", name)),
    }
}

#[cfg(test)]
mod test;
