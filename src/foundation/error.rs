/// Convenience result type used across tminus.
pub type TminusResult<T> = Result<T, TminusError>;

/// Top-level error taxonomy used by library APIs.
///
/// The render loop itself is infallible; errors only surface while validating configuration,
/// loading fonts, or encoding the finished animation.
#[derive(thiserror::Error, Debug)]
pub enum TminusError {
    /// Invalid user-provided configuration or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font lookup or parsing failed.
    #[error("font error: {0}")]
    Font(String),

    /// The animation could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TminusError {
    /// Build a [`TminusError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TminusError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`TminusError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
