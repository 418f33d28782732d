use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Everything that can go wrong while setting up or running a match.
///
/// Both kinds are fatal: they point at a bad configuration or at the
/// engine being driven in the wrong order, never at something a caller
/// should retry.
pub enum GameError {
    /// Invalid construction arguments or an unusable board configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// An operation was attempted in a state that doesn't allow it.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl GameError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        GameError::Configuration(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        GameError::InvalidState(message.into())
    }
}
