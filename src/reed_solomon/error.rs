//! Error types for encode and decode operations

use thiserror::Error;

/// Errors reported by the codec
///
/// An uncorrectable transmission is not an error: bounded-distance decoding
/// returns a well-formed message whether or not it matches what was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Message does not fit in the message symbols
    #[error("Message {message} out of range: must be below {limit}")]
    MessageOutOfRange { message: u32, limit: u32 },

    /// Transmission length does not match the code
    #[error("Malformed transmission: expected {expected} bytes, got {actual}")]
    MalformedTransmission { expected: usize, actual: usize },

    /// Value is not an element of GF(8)
    #[error("Symbol {0} is not an element of GF(8)")]
    InvalidSymbol(u8),

    /// Symbol position outside the codeword
    #[error("Symbol index {index} out of range for codeword of length {len}")]
    SymbolIndexOutOfRange { index: usize, len: usize },

    /// Matrix has no inverse
    #[error("Matrix is singular")]
    SingularMatrix,
}

/// Type alias for Result with CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
