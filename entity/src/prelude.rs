pub use super::custom_channel::Entity as CustomChannel;
pub use super::excluded_channel::Entity as ExcludedChannel;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::nickname::Entity as Nickname;
pub use super::pending_restore::Entity as PendingRestore;
pub use super::user::Entity as User;
