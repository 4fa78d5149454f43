use game_core::{RollError, SessionError};

/// Errors surfaced while driving a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A roll source handed over malformed dice; indicates a provider bug.
    #[error("roll source produced an invalid roll: {0}")]
    InvalidRoll(#[from] RollError),
    /// Session bookkeeping rejected an operation.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// A provider could not deliver a value (input stream closed, script
    /// exhausted).
    #[error("{provider} provider failed: {reason}")]
    ProviderFailed {
        provider: &'static str,
        reason: String,
    },
}

impl RuntimeError {
    pub fn roll_provider(reason: impl Into<String>) -> Self {
        Self::ProviderFailed {
            provider: "roll",
            reason: reason.into(),
        }
    }

    pub fn decision_provider(reason: impl Into<String>) -> Self {
        Self::ProviderFailed {
            provider: "decision",
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
