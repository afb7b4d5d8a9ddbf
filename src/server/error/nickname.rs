use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Validation failures of nickname pool edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NicknameError {
    #[error("'{0}' is already in the nickname list")]
    DuplicateEntry(String),

    #[error("'{0}' is not in the nickname list")]
    NotFound(String),

    #[error("Nickname cannot be empty")]
    Empty,

    #[error("Nickname '{0}' is longer than 32 characters")]
    TooLong(String),

    #[error("Resetting the nickname list must be confirmed")]
    ResetNotConfirmed,
}

impl IntoResponse for NicknameError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateEntry(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Empty | Self::TooLong(_) | Self::ResetNotConfirmed => StatusCode::BAD_REQUEST,
        };

        error_response(status, self)
    }
}
