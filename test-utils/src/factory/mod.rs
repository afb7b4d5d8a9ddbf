//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Rows referencing a guild expect its `guild_settings` row to exist, since
//! SQLite enforces the foreign keys.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let settings = factory::create_guild_settings(&db).await?;
//!     factory::create_nicknames(&db, &settings.guild_id, &["Kevin", "Greg"]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let settings = factory::guild_settings::GuildSettingsFactory::new(&db)
//!     .guild_id("123456789")
//!     .restore_on_leave(true)
//!     .rename_count(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Dashboard users
//! - `guild_settings` - Per-guild configuration rows
//! - `nickname` - Nickname pool entries
//! - `excluded_channel` - Excluded voice channels
//! - `custom_channel` - Channels with transformation rules
//! - `pending_restore` - Recorded original nicknames
//! - `helpers` - Unique ID generation

pub mod custom_channel;
pub mod excluded_channel;
pub mod guild_settings;
pub mod helpers;
pub mod nickname;
pub mod pending_restore;
pub mod user;

pub use custom_channel::create_custom_channel;
pub use excluded_channel::create_excluded_channel;
pub use guild_settings::create_guild_settings;
pub use nickname::create_nicknames;
pub use pending_restore::create_pending_restore;
pub use user::create_user;
