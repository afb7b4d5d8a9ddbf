//! Nickname pool entry factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts pool entries for a guild in the given order.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild owning the entries, its settings row must exist
/// - `nicknames` - Entries to insert
///
/// # Returns
/// - `Ok(Vec<entity::nickname::Model>)` - Inserted rows in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_nicknames(
    db: &DatabaseConnection,
    guild_id: &str,
    nicknames: &[&str],
) -> Result<Vec<entity::nickname::Model>, DbErr> {
    let mut models = Vec::with_capacity(nicknames.len());

    for nickname in nicknames {
        let model = entity::nickname::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            nickname: ActiveValue::Set(nickname.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        models.push(model);
    }

    Ok(models)
}
