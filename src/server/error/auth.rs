use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No authenticated user in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response so the client logs in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(u64),

    /// The user does not manage the requested guild.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} does not have access to guild {guild_id}")]
    GuildAccessDenied { user_id: u64, guild_id: u64 },

    /// Exchanging the authorization code with Discord failed.
    ///
    /// Results in a 502 Bad Gateway response.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed error is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::CsrfValidationFailed => error_response(
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::GuildAccessDenied { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to manage this server",
            ),
            Self::TokenExchange(_) => error_response(
                StatusCode::BAD_GATEWAY,
                "Discord login failed, please try again.",
            ),
        }
    }
}
