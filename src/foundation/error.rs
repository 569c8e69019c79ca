/// Convenience result type used across stickerpress.
pub type StickerResult<T> = Result<T, StickerError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum StickerError {
    /// Invalid user-provided data (caption spec values, image dimensions, paths).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while registering or measuring with a caption font.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while compositing text onto the canvas surface.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StickerError {
    /// Build a [`StickerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StickerError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`StickerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
