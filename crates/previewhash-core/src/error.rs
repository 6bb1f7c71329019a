//! Error taxonomy for the preview-hash codec.

use thiserror::Error;

/// Errors produced while encoding or decoding a BlurHash string.
///
/// Every failure is deterministic for a given input: retrying the same
/// call with the same arguments yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The hash string is shorter than the 6-character minimum
    /// (size flag + maximum-value digit + 4 DC digits).
    #[error("the blurhash string must be at least 6 characters, got {actual}")]
    HashTooShort {
        /// Length of the rejected string.
        actual: usize,
    },

    /// The hash length does not match the length implied by its own
    /// size-flag digit (`4 + 2 * numX * numY`).
    #[error("blurhash length mismatch: length is {actual} but it should be {expected}")]
    LengthMismatch {
        /// Length required by the decoded size flag.
        expected: usize,
        /// Actual string length.
        actual: usize,
    },

    /// A component count is outside the valid 1..=9 range.
    #[error("component count out of range: {axis} = {value} (must be 1..=9)")]
    ComponentCountOutOfRange {
        /// Which axis ("x" or "y").
        axis: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// The pixel buffer length does not equal `width * height * 4`.
    #[error("pixel buffer size mismatch: got {actual} bytes, expected {expected} for RGBA")]
    PixelBufferMismatch {
        /// Required buffer length in bytes.
        expected: usize,
        /// Actual buffer length in bytes.
        actual: usize,
    },

    /// A character outside the base83 alphabet was encountered.
    #[error("invalid base83 character: {0:?}")]
    InvalidBase83Character(char),

    /// A value does not fit into the requested number of base83 digits.
    #[error("value {value} does not fit in {digits} base83 digits")]
    Base83Overflow {
        /// The value that was too large.
        value: u64,
        /// The digit count it had to fit in.
        digits: usize,
    },

    /// Image dimensions are zero or beyond the supported bound.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// The width value.
        width: u32,
        /// The height value.
        height: u32,
        /// Why the dimensions are invalid.
        reason: &'static str,
    },
}
