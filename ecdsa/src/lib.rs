//! Generate keys, sign arbitrary messages, and verify signatures over named
//! elliptic curves.
//!
//! Key material and signatures cross the API boundary as hex transcripts of a
//! compact record encoding (provided by `simple_ecdsa_codec`), so they can be
//! stored or shipped as plain text and reconstructed later on the same curve.
//! Curve selection is a closed registry ([`CurveId`]); the arithmetic behind
//! each entry lives in a [`CurveProvider`].
//!
//! # Warning
//!
//! Public keys decoded from transcripts are checked for shape only, not for
//! membership on the curve. Verification reconstructs the point and fails
//! closed, but [`SignerIdentity::is_valid_public_key`] alone does not prove a
//! transcript names a usable key.
//!
//! # Example
//!
//! ```rust
//! use simple_ecdsa::{CurveId, SignerIdentity};
//!
//! // Generate an identity on P-256.
//! let identity = SignerIdentity::new(&mut rand::thread_rng(), CurveId::P256);
//!
//! // Sign a message and export the transcripts.
//! let public_key = identity.public_key();
//! let signature = identity.sign(b"hello").expect("identity holds a private key");
//!
//! // Anyone holding the transcripts can verify.
//! assert!(SignerIdentity::verify(&public_key, CurveId::P256, b"hello", &signature));
//! assert!(!SignerIdentity::verify(&public_key, CurveId::P256, b"hello!", &signature));
//! ```

pub mod curve;
pub use curve::{CurveId, CurveProvider};
pub mod error;
pub use error::Error;
pub mod identity;
pub use identity::SignerIdentity;
pub mod scalar;
pub use scalar::{CurvePoint, Scalar};
pub mod secp256r1;
pub use secp256r1::Secp256r1;
