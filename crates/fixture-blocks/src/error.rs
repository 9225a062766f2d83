//! Error types for fixture-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Separator set must contain at least one token")]
    EmptySeparators,

    #[error("Invalid separator {token:?}: {reason}")]
    InvalidSeparator { token: String, reason: String },
}

impl Error {
    pub fn invalid_separator(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeparator {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
