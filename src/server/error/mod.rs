//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. The same error type
//! is returned by the slash command layer, which renders domain errors as reply text.

pub mod auth;
pub mod config;
pub mod custom_channel;
pub mod internal;
pub mod member_nickname;
pub mod nickname;
pub mod rename;
pub mod settings;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, custom_channel::CustomChannelError,
        internal::InternalError, member_nickname::MemberNicknameError, nickname::NicknameError,
        settings::SettingsError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors handle their own response mapping, while
/// infrastructure variants collapse into a generic 500 response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400, 401, 403, 502).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Nickname pool validation error (duplicate, missing, empty or too long entry).
    #[error(transparent)]
    NicknameErr(#[from] NicknameError),

    /// Server settings validation error (excluded channel bookkeeping).
    #[error(transparent)]
    SettingsErr(#[from] SettingsError),

    /// Custom channel rule validation error (unknown rule, duplicate or missing channel).
    #[error(transparent)]
    CustomChannelErr(#[from] CustomChannelError),

    /// Pending restore listing or edit error (bad page, unknown member).
    #[error(transparent)]
    MemberNicknameErr(#[from] MemberNicknameError),

    /// Unexpected internal state such as unparsable stored IDs.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message safe to show to an end user, used by slash command replies.
    ///
    /// Domain errors keep their own message; infrastructure failures are logged and
    /// replaced by a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::NicknameErr(err) => err.to_string(),
            Self::SettingsErr(err) => err.to_string(),
            Self::CustomChannelErr(err) => err.to_string(),
            Self::MemberNicknameErr(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);
                "Something went wrong, please try again later.".to_string()
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For invalid nicknames, unknown rules and unconfirmed resets
/// - 404 Not Found - For missing pool entries, channels and pending restores
/// - 409 Conflict - For duplicate pool entries / channels
/// - 500 Internal Server Error - For all infrastructure error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NicknameErr(err) => err.into_response(),
            Self::SettingsErr(err) => err.into_response(),
            Self::CustomChannelErr(err) => err.into_response(),
            Self::MemberNicknameErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the error's display message.
pub(crate) fn error_response(status: StatusCode, message: impl ToString) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
