/// Result alias used across the crate.
pub type ArcglideResult<T> = Result<T, ArcglideError>;

/// Errors raised by the fallible edges of the crate (configuration, scripts, rendering).
///
/// The animation path itself never fails; see [`crate::PathAnimator`].
#[derive(thiserror::Error, Debug)]
pub enum ArcglideError {
    /// Invalid configuration or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while composing or rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArcglideError {
    /// Build an [`ArcglideError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArcglideError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`ArcglideError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ArcglideError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
