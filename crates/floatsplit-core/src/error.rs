//! Error types for split encoding and decoding.

use thiserror::Error;

/// Result type alias for split codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Which of the two bitstreams an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Sign, exponent and upper mantissa bits.
    Primary,
    /// Lower mantissa bits.
    Residual,
}

impl StreamKind {
    /// Get stream name as string.
    pub fn name(self) -> &'static str {
        match self {
            StreamKind::Primary => "primary",
            StreamKind::Residual => "residual",
        }
    }
}

impl core::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Split codec error types.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter or persisted metadata value is out of range.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },

    /// A bit reader was asked for more bits than remain in its buffer.
    #[error("out of bounds: requested {requested} bits, {remaining} remaining")]
    OutOfBounds { requested: usize, remaining: usize },

    /// A stream is shorter than its declared element count requires.
    #[error("{stream} stream too short: need {required} bytes, got {actual}")]
    StreamLengthMismatch {
        stream: StreamKind,
        required: usize,
        actual: usize,
    },

    /// Container framing is malformed.
    #[error("corrupted container: {0}")]
    Corrupted(String),

    /// I/O error from underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Create an out of bounds error.
    pub fn out_of_bounds(requested: usize, remaining: usize) -> Self {
        Error::OutOfBounds {
            requested,
            remaining,
        }
    }

    /// Create a stream length mismatch error.
    pub fn stream_length_mismatch(stream: StreamKind, required: usize, actual: usize) -> Self {
        Error::StreamLengthMismatch {
            stream,
            required,
            actual,
        }
    }

    /// Create a corrupted container error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::Corrupted(message.into())
    }

    /// Create a corrupted container error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::Corrupted(format!("{} at offset {}", message.into(), offset))
    }

    /// Check if the error indicates a truncated stream rather than bad input.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Error::OutOfBounds { .. } | Error::StreamLengthMismatch { .. }
        )
    }

    /// Short label for log fields.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidParameter { .. } => "invalid_parameter",
            Error::OutOfBounds { .. } => "out_of_bounds",
            Error::StreamLengthMismatch { .. } => "stream_length_mismatch",
            Error::Corrupted(_) => "corrupted",
            Error::Io(_) => "io_error",
        }
    }
}
