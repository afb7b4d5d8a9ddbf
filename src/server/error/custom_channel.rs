use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Validation failures of custom channel edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomChannelError {
    #[error("Channel {0} already has custom rules")]
    AlreadyExists(u64),

    #[error("Channel {0} has no custom rules")]
    NotFound(u64),

    #[error("Unknown rule '{0}'")]
    UnknownRule(String),

    #[error("Rule '{0}' requires a value")]
    MissingValue(String),

    #[error("Rule value '{0}' is longer than 32 characters")]
    ValueTooLong(String),
}

impl IntoResponse for CustomChannelError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnknownRule(_) | Self::MissingValue(_) | Self::ValueTooLong(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        error_response(status, self)
    }
}
