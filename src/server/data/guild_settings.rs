//! Guild settings repository.
//!
//! Settings live in the `guild_settings` table, with excluded voice channels stored as
//! child rows in `excluded_channel`. Both are written together inside a transaction.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{error::AppError, model::guild_settings::ServerSettings};

/// Repository providing database operations for guild settings.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new GuildSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the settings of a guild including its excluded channels.
    ///
    /// # Returns
    /// - `Ok(Some(ServerSettings))` - Settings found
    /// - `Ok(None)` - Guild has never been seen
    /// - `Err(AppError)` - Database error or unparsable stored ID
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<ServerSettings>, AppError> {
        let Some(entity) = entity::prelude::GuildSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let excluded_channels = entity::prelude::ExcludedChannel::find()
            .filter(entity::excluded_channel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::excluded_channel::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(ServerSettings::from_entity(entity, excluded_channels)?))
    }

    /// Gets the settings of every known guild ordered by name.
    pub async fn get_all(&self) -> Result<Vec<ServerSettings>, AppError> {
        let rows = entity::prelude::GuildSettings::find()
            .order_by_asc(entity::guild_settings::Column::Name)
            .order_by_asc(entity::guild_settings::Column::GuildId)
            .find_with_related(entity::prelude::ExcludedChannel)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(settings, channels)| ServerSettings::from_entity(settings, channels))
            .collect()
    }

    /// Inserts or updates a guild's settings and replaces its excluded channels.
    ///
    /// The rename counter is only written when the row is created; existing counters
    /// are left to [`Self::increment_rename_count`].
    ///
    /// # Returns
    /// - `Ok(())` - Settings and excluded channels written
    /// - `Err(AppError::DbErr)` - Database error, nothing is written
    pub async fn upsert(&self, settings: &ServerSettings) -> Result<(), AppError> {
        let now = Utc::now();
        let guild_id = settings.guild_id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::GuildSettings::insert(entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.clone()),
            name: ActiveValue::Set(settings.name.clone()),
            enabled: ActiveValue::Set(settings.enabled),
            restore_on_leave: ActiveValue::Set(settings.restore_on_leave),
            immunity_role_id: ActiveValue::Set(settings.immunity_role_id.map(|id| id.to_string())),
            rename_count: ActiveValue::Set(settings.rename_count as i64),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::guild_settings::Column::GuildId)
                .update_columns([
                    entity::guild_settings::Column::Name,
                    entity::guild_settings::Column::Enabled,
                    entity::guild_settings::Column::RestoreOnLeave,
                    entity::guild_settings::Column::ImmunityRoleId,
                    entity::guild_settings::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        entity::prelude::ExcludedChannel::delete_many()
            .filter(entity::excluded_channel::Column::GuildId.eq(guild_id.clone()))
            .exec(&txn)
            .await?;

        if !settings.excluded_channel_ids.is_empty() {
            let channels = settings.excluded_channel_ids.iter().map(|channel_id| {
                entity::excluded_channel::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.clone()),
                    channel_id: ActiveValue::Set(channel_id.to_string()),
                    ..Default::default()
                }
            });

            entity::prelude::ExcludedChannel::insert_many(channels)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Atomically adds one to a guild's rename counter.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No settings row for the guild
    pub async fn increment_rename_count(&self, guild_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::GuildSettings::update_many()
            .col_expr(
                entity::guild_settings::Column::RenameCount,
                Expr::cust("rename_count + 1"),
            )
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Updates only the stored guild name, leaving flags and excluded channels alone.
    ///
    /// # Returns
    /// - `Ok(true)` - Name updated
    /// - `Ok(false)` - No settings row for the guild
    pub async fn update_name(&self, guild_id: u64, name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::GuildSettings::update_many()
            .col_expr(entity::guild_settings::Column::Name, Expr::value(name))
            .col_expr(entity::guild_settings::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
