//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("unexpected tag: expected {0:#04x}, found {1:#04x}")]
    UnexpectedTag(u8, u8), // expected, found
    #[error("invalid length octets")]
    InvalidLength,
    #[error("invalid utf-8 in field")]
    InvalidUtf8,
}
