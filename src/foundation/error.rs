/// Convenience result type used across Pixelbrush.
pub type PixelbrushResult<T> = Result<T, PixelbrushError>;

/// Top-level error taxonomy used by construction-time APIs.
///
/// The animation engine itself never fails once activated; these errors come from building its
/// collaborators (surfaces, decoded images, options, sinks).
#[derive(thiserror::Error, Debug)]
pub enum PixelbrushError {
    /// Invalid user-provided dimensions, options or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or loading a source image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while writing presented frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelbrushError {
    /// Build a [`PixelbrushError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixelbrushError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PixelbrushError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PixelbrushError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
