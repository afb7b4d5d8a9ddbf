use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Stored counter does not fit the domain type.
    #[error("Stored rename count {0} is negative")]
    NegativeRenameCount(i64),

    /// Stored custom channel rules are not valid JSON.
    #[error("Failed to parse rules of channel {channel_id}: {source}")]
    ParseRules {
        channel_id: String,
        #[source]
        source: serde_json::Error,
    },
}
