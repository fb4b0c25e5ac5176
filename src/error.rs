use thiserror::Error;

/// Reasons a byte sequence fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid lead byte 0x{byte:02X}")]
    InvalidLeadByte { byte: u8 },
    #[error("truncated sequence: expected {expected} bytes, found {found}")]
    TruncatedSequence { expected: u8, found: u8 },
    #[error("malformed continuation byte 0x{byte:02X} at position {position}")]
    MalformedContinuation { byte: u8, position: u8 },
    /// Only reachable by pushing onto a [`Utf8Sequence`](crate::Utf8Sequence) by hand.
    #[error("sequence already holds all {length} bytes")]
    SequenceComplete { length: u8 },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("`{0}` is not a hexadecimal byte")]
    InvalidHex(String),
    #[error("at most 4 bytes may be supplied, got {0}")]
    TooManyBytes(usize),
    #[error("no bytes supplied")]
    Empty,
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
