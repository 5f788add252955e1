//! Error types for identity operations

use thiserror::Error;

/// Error type for identity operations
#[derive(Error, Debug)]
pub enum Error {
    /// The requested curve name is not in the registry.
    #[error("unsupported elliptic curve: {0}")]
    UnsupportedCurve(String),
    /// The transcript is not valid hexadecimal.
    #[error("invalid hex transcript: {0}")]
    InvalidTranscript(#[from] hex::FromHexError),
    /// The bytes do not match the expected record shape.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] simple_ecdsa_codec::Error),
    /// A record field does not hold a usable integer: the text is not
    /// hexadecimal, or the provider rejects the reconstructed value.
    #[error("invalid scalar in field {0:?}")]
    InvalidScalar(&'static str), // field name
    /// The identity holds only a public point.
    #[error("no private key")]
    NoPrivateKey,
}
