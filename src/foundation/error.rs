/// Convenience result type used across tryon.
pub type TryOnResult<T> = Result<T, TryOnError>;

/// Top-level error taxonomy used by library APIs.
///
/// The compositor itself is total; only the IO edges (decode, encode, config) fail.
#[derive(thiserror::Error, Debug)]
pub enum TryOnError {
    /// Input bytes could not be decoded as a raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid user-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding an image for output.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TryOnError {
    /// Build a [`TryOnError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TryOnError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TryOnError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
