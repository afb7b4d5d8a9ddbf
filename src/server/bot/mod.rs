//! Discord bot integration.
//!
//! The bot reacts to gateway events: voice state updates are translated into
//! [`VoiceEvent`](crate::server::model::identity::VoiceEvent)s and queued for the
//! dispatcher task, which feeds them to the identity engine one at a time. Other events
//! keep the stored guild configuration in sync and serve the slash commands.
//!
//! The bot is initialized during server startup and runs in a separate tokio task
//! to avoid blocking the HTTP server.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, role and channel deletion
//! - `GUILD_VOICE_STATES` - Voice channel joins, moves and leaves
//! - `GUILD_MEMBERS` - Member data attached to voice states (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod dispatch;
pub mod handler;
pub mod start;
