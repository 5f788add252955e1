//! Named-curve registry and the curve-arithmetic provider seam.
//!
//! Curve selection is a closed enum: the set of supported curves is checked at
//! compile time, and the only place an unknown curve can appear is the string
//! tag parser. Each `CurveId` maps to a static provider implementing the
//! arithmetic this crate delegates: keypair generation, public-point
//! derivation, signing, and verification.

use crate::{secp256r1::Secp256r1, CurvePoint, Error, Scalar};
use p256::elliptic_curve::rand_core::CryptoRngCore;
use std::{fmt, str::FromStr};

/// Named curves supported by the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// NIST P-256, also known as secp256r1 or prime256v1.
    P256,
}

impl CurveId {
    /// Canonical lowercase curve tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveId::P256 => "p256",
        }
    }

    /// Returns the curve-arithmetic provider for this curve.
    pub fn provider(&self) -> &'static dyn CurveProvider {
        match self {
            CurveId::P256 => &Secp256r1,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Error> {
        match tag {
            "p256" => Ok(CurveId::P256),
            _ => Err(Error::UnsupportedCurve(tag.to_string())),
        }
    }
}

/// Curve arithmetic delegated by this crate.
///
/// Implementations own every group operation. This crate hands them scalars
/// and affine coordinates and receives scalars and affine coordinates back;
/// the provider decides how points are represented internally and which
/// inputs it accepts.
pub trait CurveProvider {
    /// Generates a fresh keypair from the supplied randomness source.
    fn generate_keypair(&self, rng: &mut dyn CryptoRngCore) -> (Scalar, CurvePoint);

    /// Derives the public point for a private scalar.
    ///
    /// Fails if the scalar is not a valid private key for the curve (zero or
    /// not below the curve order).
    fn derive_public_point(&self, private: &Scalar) -> Result<CurvePoint, Error>;

    /// Signs a message with a private scalar, returning the `(r, s)` pair.
    fn sign(&self, private: &Scalar, message: &[u8]) -> Result<(Scalar, Scalar), Error>;

    /// Verifies an `(r, s)` pair over a message against a public point.
    ///
    /// Total over its inputs: any rejected value, including a point not on
    /// the curve, yields `false`.
    fn verify(&self, public: &CurvePoint, message: &[u8], r: &Scalar, s: &Scalar) -> bool;
}
