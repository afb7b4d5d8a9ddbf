pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_guild_settings_table;
mod m20260105_000003_create_nickname_table;
mod m20260105_000004_create_excluded_channel_table;
mod m20260105_000005_create_pending_restore_table;
mod m20260105_000006_create_custom_channel_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_guild_settings_table::Migration),
            Box::new(m20260105_000003_create_nickname_table::Migration),
            Box::new(m20260105_000004_create_excluded_channel_table::Migration),
            Box::new(m20260105_000005_create_pending_restore_table::Migration),
            Box::new(m20260105_000006_create_custom_channel_table::Migration),
        ]
    }
}
