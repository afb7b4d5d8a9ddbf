use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Validation failures of server settings edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Channel {0} is already excluded")]
    ChannelAlreadyExcluded(u64),

    #[error("Channel {0} is not excluded")]
    ChannelNotExcluded(u64),
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ChannelAlreadyExcluded(_) => StatusCode::CONFLICT,
            Self::ChannelNotExcluded(_) => StatusCode::NOT_FOUND,
        };

        error_response(status, self)
    }
}
