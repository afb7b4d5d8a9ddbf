use thiserror::Error;

/// Failure of a single nickname change against the Discord API.
///
/// Never propagated past the identity engine: it is logged and the event is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// Discord rejected the change, usually because the member's highest role is
    /// above the bot's or the bot lacks `MANAGE_NICKNAMES`.
    #[error("Missing permission to rename member: {0}")]
    PermissionDenied(String),

    /// Network failure, rate limit or any other error that might succeed later.
    #[error("Failed to rename member: {0}")]
    Transient(String),
}

impl From<serenity::Error> for RenameError {
    fn from(err: serenity::Error) -> Self {
        match &err {
            serenity::Error::Http(http_err)
                if http_err.status_code().map(|status| status.as_u16()) == Some(403) =>
            {
                Self::PermissionDenied(err.to_string())
            }
            _ => Self::Transient(err.to_string()),
        }
    }
}
