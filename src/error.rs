use thiserror::Error;

use crate::CodePoint;

/// Failure of a single encode or decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A continuation byte or surrogate unit did not have the required bit pattern,
    /// or the decoded sequence is not a well-formed encoding of any code point.
    #[error("malformed sequence")]
    MalformedSequence,
    /// The stream ran out before the sequence was complete.
    #[error("truncated sequence")]
    Truncated,
    /// The code point cannot be represented by the encoding.
    #[error("code point {0:#X} is out of range")]
    OutOfRange(CodePoint),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding `{0}`")]
pub struct UnknownEncoding(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCodePointError {
    #[error("empty code point")]
    Empty,
    #[error("invalid code point `{0}`")]
    Invalid(String),
}
