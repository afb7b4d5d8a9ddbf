//! Identity Crisis Test Utils
//!
//! Shared testing utilities for the identity crisis bot. Tests get an in-memory SQLite
//! database with only the tables they need, factories for seeding rows, and Serenity
//! objects deserialized from JSON the way the gateway would deliver them.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_guild_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_guild_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let settings = factory::guild_settings::create_guild_settings(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
