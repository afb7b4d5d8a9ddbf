//! Nickname pool repository.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::error::AppError;

/// Repository for the `nickname` table, one row per pool entry.
///
/// Entry order is the insertion order, tracked by the auto-increment ID.
pub struct NicknameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NicknameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's pool entries in insertion order.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<String>, AppError> {
        let entries = entity::prelude::Nickname::find()
            .filter(entity::nickname::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::nickname::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.nickname)
            .collect();

        Ok(entries)
    }

    /// Replaces every entry of a guild's pool in a single transaction.
    ///
    /// The guild's settings row must exist.
    pub async fn replace_for_guild(&self, guild_id: u64, entries: &[String]) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Nickname::delete_many()
            .filter(entity::nickname::Column::GuildId.eq(guild_id.to_string()))
            .exec(&txn)
            .await?;

        if !entries.is_empty() {
            let rows = entries.iter().map(|nickname| entity::nickname::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                nickname: ActiveValue::Set(nickname.clone()),
                ..Default::default()
            });

            entity::prelude::Nickname::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
