use thiserror::Error;

/// Faults raised while building a report.
///
/// Degenerate input (empty text, no signals) is never an error; these variants
/// cover broken configuration or internal invariants that would otherwise
/// produce a silently wrong score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("pattern definitions need a non-empty name")]
    UnnamedPattern,

    #[error("pattern `{name}` has no indicator tokens")]
    EmptyPattern { name: String },

    #[error("pattern `{pattern}` has invalid indicator token `{token}` (expected a single identifier)")]
    InvalidIndicatorToken { pattern: String, token: String },

    #[error("pattern `{name}` is defined more than once")]
    DuplicatePattern { name: String },

    #[error("analysis engine fault: {0}")]
    Internal(String),
}

impl AnalysisError {
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        AnalysisError::Internal(cause.to_string())
    }
}
