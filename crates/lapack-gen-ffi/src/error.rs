//! Generator error types.

/// Errors that can occur while deriving wrappers.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A statement does not follow the declaration grammar.
    #[error("invalid declaration `{statement}`: {detail}")]
    Parse { statement: String, detail: String },

    /// A raw type matches none of the known primitive types.
    #[error("cannot translate `{raw_type}`")]
    TypeMapping { raw_type: String },

    /// A parameter was given a safe type the call synthesizer has no rule for.
    #[error("cannot translate `{name}: {safe_type}`")]
    ClassificationGap { name: String, safe_type: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
