//! Arbitrary-precision values exchanged with the curve-arithmetic provider.
//!
//! `Scalar` and `CurvePoint` are the provider-neutral forms of key material:
//! plain non-negative integers with no curve attached. The text conversions
//! here define the one base convention used by every encode and decode path
//! in this workspace: minimal lowercase hexadecimal on output, case-insensitive
//! hexadecimal on input.

use num_bigint::BigUint;

/// An arbitrary-precision non-negative integer: a private key `d`, a signature
/// component `r`/`s`, or an affine coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scalar(BigUint);

impl Scalar {
    /// Parses hexadecimal integer text (either case, leading zeros allowed).
    ///
    /// Returns `None` if `text` is empty or contains a non-hexadecimal
    /// character.
    pub fn from_text(text: &str) -> Option<Self> {
        BigUint::parse_bytes(text.as_bytes(), 16).map(Self)
    }

    /// Returns the canonical text form: minimal lowercase hexadecimal.
    pub fn to_text(&self) -> String {
        self.0.to_str_radix(16)
    }

    /// Constructs a scalar from big-endian bytes.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Returns the minimal big-endian byte form (a single zero byte for zero).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }
}

/// An affine point `(x, y)` interpreted on some named curve.
///
/// Nothing here checks that the point satisfies a curve equation; that is the
/// curve-arithmetic provider's concern at the time the point is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurvePoint {
    pub x: Scalar,
    pub y: Scalar,
}
