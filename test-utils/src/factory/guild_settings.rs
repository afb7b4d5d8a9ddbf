//! Guild settings factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for `guild_settings` rows.
///
/// Defaults mirror a guild seen for the first time: enabled, restore off, no immunity
/// role and no renames.
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    enabled: bool,
    restore_on_leave: bool,
    immunity_role_id: Option<String>,
    rename_count: i64,
}

impl<'a> GuildSettingsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            name: format!("Guild {}", id),
            enabled: true,
            restore_on_leave: false,
            immunity_role_id: None,
            rename_count: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn restore_on_leave(mut self, restore_on_leave: bool) -> Self {
        self.restore_on_leave = restore_on_leave;
        self
    }

    pub fn immunity_role_id(mut self, role_id: Option<impl Into<String>>) -> Self {
        self.immunity_role_id = role_id.map(Into::into);
        self
    }

    pub fn rename_count(mut self, rename_count: i64) -> Self {
        self.rename_count = rename_count;
        self
    }

    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        let now = Utc::now();
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            enabled: ActiveValue::Set(self.enabled),
            restore_on_leave: ActiveValue::Set(self.restore_on_leave),
            immunity_role_id: ActiveValue::Set(self.immunity_role_id),
            rename_count: ActiveValue::Set(self.rename_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild settings row with default values.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).build().await
}
