/// Convenience result type used across the backdrop pipeline.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Error taxonomy surfaced by every pipeline step.
///
/// Nothing in the pipeline recovers from these; they propagate to the process boundary.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// A background or overlay image was missing, unreadable, or in an unsupported format.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// No usable font could be located for diagnostic labels.
    #[error("font resolution error: {0}")]
    FontResolution(String),

    /// An output file could not be encoded or written.
    #[error("file write error: {0}")]
    FileWrite(String),

    /// Invalid user-provided layout or option data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`BackdropError::FontResolution`] value.
    pub fn font_resolution(msg: impl Into<String>) -> Self {
        Self::FontResolution(msg.into())
    }

    /// Build a [`BackdropError::FileWrite`] value.
    pub fn file_write(msg: impl Into<String>) -> Self {
        Self::FileWrite(msg.into())
    }

    /// Build a [`BackdropError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
