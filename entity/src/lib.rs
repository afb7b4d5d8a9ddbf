//! SeaORM entities for the identity crisis bot.

pub mod prelude;

pub mod custom_channel;
pub mod excluded_channel;
pub mod guild_settings;
pub mod nickname;
pub mod pending_restore;
pub mod user;
