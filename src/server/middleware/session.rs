//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! - `AuthSession` - Logged-in user and the guilds they may manage
//! - `CsrfSession` - CSRF token management for the OAuth flow

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_GUILD_IDS: &str = "auth:guilds";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Handles the authenticated user's Discord ID, the IDs of the guilds they manage
/// (captured at login) and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord ID in the session.
    ///
    /// Called after successful authentication to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: u64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's Discord ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in, returns their Discord ID
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_u64_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    /// Stores the IDs of the guilds the user may manage.
    pub async fn set_guild_ids(&self, guild_ids: &[u64]) -> Result<(), AppError> {
        let guild_ids: Vec<String> = guild_ids.iter().map(|id| id.to_string()).collect();
        self.session.insert(SESSION_AUTH_GUILD_IDS, guild_ids).await?;
        Ok(())
    }

    /// Retrieves the IDs of the guilds the user may manage, empty when none were stored.
    pub async fn get_guild_ids(&self) -> Result<Vec<u64>, AppError> {
        let guild_ids = self
            .session
            .get::<Vec<String>>(SESSION_AUTH_GUILD_IDS)
            .await?
            .unwrap_or_default();

        guild_ids.into_iter().map(parse_u64_from_string).collect()
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove authentication state and any pending OAuth data.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each token can only be used once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
