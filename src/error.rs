//! Error types for the skill calculators
//!
//! Library operations return the typed [`SkillError`] so callers can tell a
//! malformed match apart from a misconfigured game. Application layers
//! (configuration loading, the simulator binary) wrap these in `anyhow`.

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SkillError>;

/// Failure kinds raised by the rating engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillError {
    /// Team count, players-per-team count or rank count outside what the
    /// calculator accepts.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// An outcome value outside Win/Draw/Lose reached the score mapping.
    #[error("Unsupported: {reason}")]
    Unsupported { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl SkillError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Every failure is deterministic for its inputs; retrying the same call
    /// cannot succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
