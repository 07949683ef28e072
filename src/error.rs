//! Error type shared by every stage of the conversion pipeline.
//!
//! All failures are synchronous and deterministic: the same input and
//! parameters always produce the same error, so nothing here is retryable.

/// Failures raised by the conversion core before any work is done.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PixelArtError {
    /// A tuning parameter is outside its valid domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The image has a zero-sized dimension.
    #[error("image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    /// The backing buffer does not hold exactly `width * height` pixels.
    #[error("buffer of {width}x{height}x{channels} expects {expected} samples, got {actual}")]
    BufferLength {
        width: usize,
        height: usize,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    /// Two buffers that must line up pixel for pixel do not.
    #[error("shape mismatch: {what} is {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A sample is NaN or infinite.
    #[error("non-finite sample at ({x}, {y})")]
    NonFiniteSample { x: usize, y: usize },
}

impl PixelArtError {
    pub(crate) fn invalid(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: &'static str,
    ) -> Self {
        PixelArtError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, PixelArtError>;
