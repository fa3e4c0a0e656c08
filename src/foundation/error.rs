/// Convenience result type used across the crate.
pub type CoachmarkResult<T> = Result<T, CoachmarkError>;

/// Top-level error taxonomy used by prompt APIs.
#[derive(thiserror::Error, Debug)]
pub enum CoachmarkError {
    /// Invalid user-provided prompt configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while computing layout geometry for a frame.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors while advancing animation timelines.
    #[error("animation error: {0}")]
    Animation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoachmarkError {
    /// Build a [`CoachmarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoachmarkError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`CoachmarkError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}
