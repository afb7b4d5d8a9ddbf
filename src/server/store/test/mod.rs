//! Behaviour shared by every [`ConfigStore`] backend.
//!
//! Each check runs once against the memory store and once against the database store.

use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;

use crate::server::{
    model::{
        custom_channel::{ChannelRule, CustomChannel},
        guild_settings::ServerSettings,
        identity::ActiveIdentity,
        nickname_pool::NicknamePool,
    },
    store::{database::DatabaseStore, memory::MemoryStore, ConfigStore},
};

async fn database_store() -> DatabaseStore {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();

    DatabaseStore::new(test.db.unwrap())
}

/// Declares one test per backend for a check taking `&dyn ConfigStore`.
macro_rules! store_tests {
    ($($check:ident),* $(,)?) => {
        mod memory {
            $(
                #[tokio::test]
                async fn $check() {
                    let store = crate::server::store::memory::MemoryStore::new();
                    super::$check(&store).await;
                }
            )*
        }

        mod database {
            $(
                #[tokio::test]
                async fn $check() {
                    let store = crate::server::store::test::database_store().await;
                    super::$check(&store).await;
                }
            )*
        }
    };
}


async fn seed_guild(store: &dyn ConfigStore, guild_id: u64, name: &str) -> ServerSettings {
    let mut settings = ServerSettings::new(guild_id);
    settings.name = name.to_string();
    store.put_settings(&settings).await.unwrap();

    settings
}

#[tokio::test]
async fn memory_store_starts_empty() {
    let store = MemoryStore::new();

    assert!(store.list_settings().await.unwrap().is_empty());
    assert!(store.get_pool(1).await.unwrap().is_none());
}
