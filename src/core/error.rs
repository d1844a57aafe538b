//! Error taxonomy for a single game.
//!
//! Both kinds are raised while the inputs are validated, before the
//! survivor pool exists. Once a game starts it always completes.

/// Errors returned for caller-supplied game inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MashError {
    /// Magic number missing, not an integer, or outside `[2, 10]`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A category is missing its name or options, or has no options.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl MashError {
    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for a `MalformedInput` error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MashError>;
