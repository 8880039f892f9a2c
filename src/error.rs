//! Error types for the simpledes library.

use std::fmt;

/// Errors produced by the simpledes library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesError {
    /// A block presented to the cipher is not exactly 8 bytes long.
    ///
    /// This indicates a framing bug in the caller: the message-level
    /// [`encrypt`](crate::DesCipher::encrypt) and
    /// [`decrypt`](crate::DesCipher::decrypt) paths only ever produce
    /// whole 8-byte chunks.
    InvalidBlockLength,
    /// The ciphertext passed to `decrypt` is not a multiple of 8 bytes.
    ///
    /// A valid ciphertext always consists of whole 64-bit blocks; a partial
    /// final block cannot be decrypted and is rejected rather than
    /// silently truncated.
    InvalidCiphertextLength,
}

impl fmt::Display for DesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesError::InvalidBlockLength => {
                write!(f, "Block length must be exactly 8 bytes")
            }
            DesError::InvalidCiphertextLength => {
                write!(f, "Ciphertext length must be a multiple of 8 bytes")
            }
        }
    }
}

impl std::error::Error for DesError {}
