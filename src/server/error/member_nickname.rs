use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures of the dashboard's pending restore listing and edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberNicknameError {
    #[error("Page must be >= 1")]
    InvalidPage,

    #[error("Page size must be between 1 and {0}")]
    InvalidPageSize(u64),

    #[error("Member {0} has no pending restore")]
    NotFound(u64),
}

impl IntoResponse for MemberNicknameError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidPage | Self::InvalidPageSize(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        error_response(status, self)
    }
}
