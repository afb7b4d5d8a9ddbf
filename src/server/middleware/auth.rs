use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Access checks for dashboard endpoints.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user that still exists in the database.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user (401)
    pub async fn require_user(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Requires a logged-in user who manages `guild_id`.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::GuildAccessDenied)` - The user does not manage the guild (403)
    pub async fn require_guild(&self, guild_id: u64) -> Result<User, AppError> {
        let user = self.require_user().await?;

        let guild_ids = AuthSession::new(self.session).get_guild_ids().await?;
        if !guild_ids.contains(&guild_id) {
            return Err(AuthError::GuildAccessDenied {
                user_id: user.discord_id,
                guild_id,
            }
            .into());
        }

        Ok(user)
    }
}
