//! Error types for message decoding.

/// Reasons a message, envelope or parameter blob failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input ended before a field could be read.
    #[error("Unexpected end of input: needed={needed} > remaining={remaining}")]
    UnexpectedEof {
        /// Bytes required by the field being read
        needed: usize,
        /// Bytes left in the input
        remaining: usize,
    },
    /// Bytes were left after the last field.
    #[error("Trailing bytes after message: {0}")]
    TrailingBytes(usize),
    /// The message type byte is not a recognized message type.
    #[error("Unknown message type: {0}")]
    UnknownMessageType(u8),
    /// The message type is recognized but not valid in this position.
    #[error("Unexpected message type: expected={expected}, actual={actual}")]
    UnexpectedMessageType {
        /// The expected message type
        expected: u8,
        /// The message type found in the input
        actual: u8,
    },
    /// A string field is not valid UTF-8.
    #[error("Field `{0}` is not valid UTF-8")]
    InvalidUtf8(&'static str),
    /// The envelope names no chain.
    #[error("Empty chain name")]
    EmptyChainName,
    /// An identity field has neither zero nor full identity length.
    #[error("Invalid identity length: {0}")]
    InvalidIdentityLength(usize),
    /// The token manager type discriminant is unknown.
    #[error("Unknown token manager type: {0}")]
    UnknownManagerType(u8),
    /// The token manager parameters are not a valid ABI encoding.
    #[error("Invalid token manager params")]
    InvalidManagerParams,
}
