//! Error types for the encoder and the BMP reader.

use std::fmt;

/// Result type for encoder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for encoder operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid image dimensions (zero, or too large for a SOF0 field)
    InvalidDimensions {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
    /// Invalid quality value (must be 0-100)
    InvalidQuality(u8),
    /// Pixel buffer size doesn't match dimensions
    BufferSizeMismatch {
        /// Expected buffer size in bytes
        expected: usize,
        /// Actual buffer size in bytes
        actual: usize,
    },
    /// Input is not a BMP file (missing `BM` signature)
    InvalidBmpSignature,
    /// BMP bit depth other than 24
    UnsupportedBmpDepth(u16),
    /// BMP file shorter than its header claims
    TruncatedBmp {
        /// Bytes the header promised
        expected: usize,
        /// Bytes actually present
        actual: usize,
    },
    /// I/O error
    IoError(String),
    /// Memory allocation failed
    AllocationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { width, height } => {
                write!(f, "Invalid image dimensions: {}x{}", width, height)
            }
            Error::InvalidQuality(q) => {
                write!(f, "Invalid quality value: {} (must be 0-100)", q)
            }
            Error::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Buffer size mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            Error::InvalidBmpSignature => {
                write!(f, "Not a valid BMP file")
            }
            Error::UnsupportedBmpDepth(depth) => {
                write!(f, "Only 24-bit BMP is supported (got {}-bit)", depth)
            }
            Error::TruncatedBmp { expected, actual } => {
                write!(
                    f,
                    "Corrupt BMP file: expected {} bytes of pixel data, got {}",
                    expected, actual
                )
            }
            Error::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
            Error::AllocationFailed => {
                write!(f, "Memory allocation failed")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::AllocationFailed
    }
}
