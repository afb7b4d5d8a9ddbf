//! Pending restore factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for `pending_restore` rows.
///
/// # Example
///
/// ```rust,ignore
/// let restore = PendingRestoreFactory::new(&db, &settings.guild_id, "200")
///     .original_nickname(Some("Marco"))
///     .created_at(Utc::now() - Duration::days(40))
///     .build()
///     .await?;
/// ```
pub struct PendingRestoreFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    original_nickname: Option<String>,
    original_display_name: String,
    assigned_nickname: String,
    created_at: DateTime<Utc>,
}

impl<'a> PendingRestoreFactory<'a> {
    /// Defaults to no original nickname, "Marco" as original display name,
    /// "Gino Panino" as assigned nickname and `created_at` of now.
    pub fn new(db: &'a DatabaseConnection, guild_id: &str, user_id: &str) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            user_id: user_id.to_string(),
            original_nickname: None,
            original_display_name: "Marco".to_string(),
            assigned_nickname: "Gino Panino".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn original_nickname(mut self, nickname: Option<&str>) -> Self {
        self.original_nickname = nickname.map(str::to_string);
        self
    }

    pub fn original_display_name(mut self, name: impl Into<String>) -> Self {
        self.original_display_name = name.into();
        self
    }

    pub fn assigned_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.assigned_nickname = nickname.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::pending_restore::Model, DbErr> {
        entity::pending_restore::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            original_nickname: ActiveValue::Set(self.original_nickname),
            original_display_name: ActiveValue::Set(self.original_display_name),
            assigned_nickname: ActiveValue::Set(self.assigned_nickname),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending restore with default values.
pub async fn create_pending_restore(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::pending_restore::Model, DbErr> {
    PendingRestoreFactory::new(db, guild_id, user_id).build().await
}
