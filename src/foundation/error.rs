/// Convenience result type used across Framegate.
pub type FramegateResult<T> = Result<T, FramegateError>;

/// Top-level error taxonomy used by crate APIs.
///
/// Geometry and layout never error: degenerate inputs resolve to documented
/// fallback values. Errors are reserved for document I/O, serialization and
/// raster-surface construction.
#[derive(thiserror::Error, Debug)]
pub enum FramegateError {
    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing HUD documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramegateError {
    /// Build a [`FramegateError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramegateError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
