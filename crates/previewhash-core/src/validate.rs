//! Structural validation of BlurHash strings.
//!
//! A hash is self-describing: its first character encodes the component
//! grid, which in turn fixes the only legal string length. Validation
//! checks exactly that and nothing about the payload digits — payload
//! characters are verified against the alphabet when they are decoded.

use crate::base83;
use crate::error::CodecError;

/// Outcome of a non-throwing validity check, mirroring the
/// `{ result, errorReason? }` shape callers persist alongside the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashValidity {
    /// Whether the hash passed structural validation.
    pub result: bool,
    /// Human-readable reason for the failure, when `result` is false.
    pub error_reason: Option<String>,
}

/// Decode the size-flag character into the (numX, numY) component grid.
fn grid(blurhash: &str) -> Result<(u32, u32), CodecError> {
    let first = blurhash.chars().next().ok_or(CodecError::HashTooShort { actual: 0 })?;
    let mut buf = [0u8; 4];
    let size_flag = base83::decode(first.encode_utf8(&mut buf))?;
    let num_y = (size_flag / 9) as u32 + 1;
    let num_x = (size_flag % 9) as u32 + 1;
    Ok((num_x, num_y))
}

/// Extract the component grid (numX, numY) declared by a BlurHash string.
///
/// # Errors
///
/// Fails with [`CodecError::HashTooShort`] for strings under 6
/// characters, or [`CodecError::InvalidBase83Character`] if the size
/// flag is not a base83 digit.
///
/// # Examples
///
/// ```
/// use previewhash_core::components;
/// let (cx, cy) = components("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap();
/// assert_eq!((cx, cy), (4, 3));
/// ```
pub fn components(blurhash: &str) -> Result<(u32, u32), CodecError> {
    if blurhash.len() < 6 {
        return Err(CodecError::HashTooShort {
            actual: blurhash.len(),
        });
    }
    grid(blurhash)
}

/// Check that a BlurHash string is structurally sound.
///
/// # Errors
///
/// Fails with [`CodecError::HashTooShort`] for strings under 6
/// characters, [`CodecError::InvalidBase83Character`] for a bad size
/// flag or any non-ASCII character, and [`CodecError::LengthMismatch`]
/// when the length contradicts the declared component grid.
pub fn validate(blurhash: &str) -> Result<(), CodecError> {
    if blurhash.len() < 6 {
        return Err(CodecError::HashTooShort {
            actual: blurhash.len(),
        });
    }
    // Reject non-ASCII up front so later fixed-offset slicing is safe.
    if let Some(c) = blurhash.chars().find(|c| !c.is_ascii()) {
        return Err(CodecError::InvalidBase83Character(c));
    }
    let (num_x, num_y) = grid(blurhash)?;
    let expected = 4 + 2 * (num_x * num_y) as usize;
    if blurhash.len() != expected {
        return Err(CodecError::LengthMismatch {
            expected,
            actual: blurhash.len(),
        });
    }
    Ok(())
}

/// Non-throwing pre-flight check for callers that want to report a
/// reason instead of handling an error.
///
/// # Examples
///
/// ```
/// use previewhash_core::is_blurhash_valid;
/// assert!(is_blurhash_valid("LEHV6nWB2yk8pyo0adR*.7kCMdnj").result);
///
/// let verdict = is_blurhash_valid("too-short");
/// assert!(!verdict.result);
/// assert!(verdict.error_reason.is_some());
/// ```
pub fn is_blurhash_valid(blurhash: &str) -> HashValidity {
    match validate(blurhash) {
        Ok(()) => HashValidity {
            result: true,
            error_reason: None,
        },
        Err(err) => HashValidity {
            result: false,
            error_reason: Some(err.to_string()),
        },
    }
}
