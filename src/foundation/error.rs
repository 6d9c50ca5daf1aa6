/// Convenience result type used across tessella.
pub type TessellaResult<T> = Result<T, TessellaError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Geometry paths never produce errors: degenerate rects, missing sprite
/// data and zero-area triangles all recover locally by emitting nothing.
/// Errors only surface from `validate()` on caller-supplied models.
#[derive(thiserror::Error, Debug)]
pub enum TessellaError {
    /// Invalid user-provided layout configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Inconsistent sprite metadata (bad indices, non-positive pixel density).
    #[error("sprite error: {0}")]
    Sprite(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TessellaError {
    /// Build a [`TessellaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TessellaError::Sprite`] value.
    pub fn sprite(msg: impl Into<String>) -> Self {
        Self::Sprite(msg.into())
    }
}
