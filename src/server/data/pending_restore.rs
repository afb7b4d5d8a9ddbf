//! Pending restore repository.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{error::AppError, model::identity::ActiveIdentity};

/// Repository for `pending_restore`, keyed by `(guild_id, user_id)`.
pub struct PendingRestoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PendingRestoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<ActiveIdentity>, AppError> {
        let entity =
            entity::prelude::PendingRestore::find_by_id((guild_id.to_string(), user_id.to_string()))
                .one(self.db)
                .await?;

        entity.map(ActiveIdentity::from_entity).transpose()
    }

    /// Gets a guild's pending restores, newest first.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<ActiveIdentity>, AppError> {
        let entities = entity::prelude::PendingRestore::find()
            .filter(entity::pending_restore::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::pending_restore::Column::CreatedAt)
            .order_by_asc(entity::pending_restore::Column::UserId)
            .all(self.db)
            .await?;

        entities.into_iter().map(ActiveIdentity::from_entity).collect()
    }

    /// Inserts a pending restore, overwriting any existing record for the same member.
    pub async fn upsert(&self, identity: &ActiveIdentity) -> Result<(), AppError> {
        entity::prelude::PendingRestore::insert(entity::pending_restore::ActiveModel {
            guild_id: ActiveValue::Set(identity.guild_id.to_string()),
            user_id: ActiveValue::Set(identity.user_id.to_string()),
            original_nickname: ActiveValue::Set(identity.original_nickname.clone()),
            original_display_name: ActiveValue::Set(identity.original_display_name.clone()),
            assigned_nickname: ActiveValue::Set(identity.assigned_nickname.clone()),
            created_at: ActiveValue::Set(identity.created_at),
        })
        .on_conflict(
            OnConflict::columns([
                entity::pending_restore::Column::GuildId,
                entity::pending_restore::Column::UserId,
            ])
            .update_columns([
                entity::pending_restore::Column::OriginalNickname,
                entity::pending_restore::Column::OriginalDisplayName,
                entity::pending_restore::Column::AssignedNickname,
                entity::pending_restore::Column::CreatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Changes the nickname an existing pending restore will set back.
    ///
    /// # Returns
    /// - `Ok(true)` - Record updated
    /// - `Ok(false)` - No pending restore for the member
    pub async fn update_original_nickname(
        &self,
        guild_id: u64,
        user_id: u64,
        nickname: Option<&str>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::PendingRestore::update_many()
            .col_expr(
                entity::pending_restore::Column::OriginalNickname,
                Expr::value(nickname.map(str::to_string)),
            )
            .filter(entity::pending_restore::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::pending_restore::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a member's pending restore.
    ///
    /// # Returns
    /// - `Ok(true)` - A record was deleted
    /// - `Ok(false)` - No record existed
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::PendingRestore::delete_many()
            .filter(entity::pending_restore::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::pending_restore::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every pending restore of a guild, returning the number removed.
    pub async fn delete_by_guild_id(&self, guild_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::PendingRestore::delete_many()
            .filter(entity::pending_restore::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes pending restores created before `cutoff`, returning the number removed.
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::PendingRestore::delete_many()
            .filter(entity::pending_restore::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
