//! Signer identities and the key and signature lifecycle.
//!
//! A [`SignerIdentity`] owns a curve selection and at most one keypair, and
//! moves key material across the codec boundary as hex transcripts of the
//! record encodings. Everything numeric inside a record is hexadecimal
//! integer text; everything structural is the codec crate's concern; all of
//! the curve arithmetic belongs to the provider behind the identity's
//! [`CurveId`].

use crate::{CurveId, CurvePoint, Error, Scalar};
use rand::{CryptoRng, Rng};
use simple_ecdsa_codec::{Decode, Encode, PrivateKeyRecord, PublicKeyRecord, SignatureRecord};
use std::fmt;

/// A private scalar (when held) and the public point that belongs to it.
#[derive(Clone)]
struct KeyPair {
    private: Option<Scalar>,
    public: CurvePoint,
}

// The private scalar never appears in debug output.
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &self.private.as_ref().map(|_| "[REDACTED]"))
            .field("public", &self.public)
            .finish()
    }
}

/// An identity on a named curve.
///
/// Identities are created by fresh generation ([`SignerIdentity::new`]), by
/// importing an encoded private key ([`SignerIdentity::from_private_key`]),
/// or by importing an encoded public key ([`SignerIdentity::from_public_key`],
/// verify-only). The curve, once set, never changes, and encoded forms carry
/// no curve identifier, so the caller supplies the curve again at import
/// time.
#[derive(Clone, Debug)]
pub struct SignerIdentity {
    curve: CurveId,
    keypair: KeyPair,
}

impl SignerIdentity {
    /// Generates a fresh identity on `curve`, drawing keys from `rng`.
    pub fn new<R: Rng + CryptoRng>(rng: &mut R, curve: CurveId) -> Self {
        let (private, public) = curve.provider().generate_keypair(rng);
        Self {
            curve,
            keypair: KeyPair {
                private: Some(private),
                public,
            },
        }
    }

    /// Reconstructs an identity from an encoded private key.
    ///
    /// The public point is derived from the decoded scalar by the curve
    /// provider.
    pub fn from_private_key(encoded: &str, curve: CurveId) -> Result<Self, Error> {
        let bytes = hex::decode(encoded)?;
        let record = PrivateKeyRecord::decode(bytes.as_slice())?;
        let private = Scalar::from_text(&record.d).ok_or(Error::InvalidScalar("d"))?;
        let public = curve.provider().derive_public_point(&private)?;
        Ok(Self {
            curve,
            keypair: KeyPair {
                private: Some(private),
                public,
            },
        })
    }

    /// Reconstructs a verify-only identity from an encoded public key.
    ///
    /// The decoded coordinates are not checked against the curve equation;
    /// see [`SignerIdentity::is_valid_public_key`].
    pub fn from_public_key(encoded: &str, curve: CurveId) -> Result<Self, Error> {
        let public = decode_public_point(encoded)?;
        Ok(Self {
            curve,
            keypair: KeyPair {
                private: None,
                public,
            },
        })
    }

    /// Returns the curve this identity lives on.
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Returns the encoded public key as a hex transcript.
    pub fn public_key(&self) -> String {
        let record = PublicKeyRecord {
            x: self.keypair.public.x.to_text(),
            y: self.keypair.public.y.to_text(),
        };
        hex::encode(record.encode())
    }

    /// Returns the encoded private key as a hex transcript.
    ///
    /// Fails with [`Error::NoPrivateKey`] on an identity constructed from a
    /// public key only.
    pub fn private_key(&self) -> Result<String, Error> {
        let private = self.keypair.private.as_ref().ok_or(Error::NoPrivateKey)?;
        let record = PrivateKeyRecord {
            d: private.to_text(),
        };
        Ok(hex::encode(record.encode()))
    }

    /// Signs a message, returning the encoded signature as a hex transcript.
    ///
    /// The curve provider hashes the message with SHA-256 and signs
    /// deterministically, so the same key and message always produce the same
    /// transcript. Fails with [`Error::NoPrivateKey`] on an identity
    /// constructed from a public key only.
    pub fn sign(&self, message: &[u8]) -> Result<String, Error> {
        let private = self.keypair.private.as_ref().ok_or(Error::NoPrivateKey)?;
        let (r, s) = self.curve.provider().sign(private, message)?;
        let record = SignatureRecord {
            r: r.to_text(),
            s: s.to_text(),
        };
        Ok(hex::encode(record.encode()))
    }

    /// Verifies an encoded signature over `message` against an encoded public
    /// key.
    ///
    /// Total over its inputs: malformed transcripts, malformed records,
    /// non-integer fields, points not on the curve, and signature mismatches
    /// all yield `false`. It never fails.
    pub fn verify(public_key: &str, curve: CurveId, message: &[u8], signature: &str) -> bool {
        let public = match decode_public_point(public_key) {
            Ok(point) => point,
            Err(_) => return false,
        };
        let bytes = match hex::decode(signature) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        let record = match SignatureRecord::decode(bytes.as_slice()) {
            Ok(record) => record,
            Err(_) => return false,
        };
        let r = match Scalar::from_text(&record.r) {
            Some(r) => r,
            None => return false,
        };
        let s = match Scalar::from_text(&record.s) {
            Some(s) => s,
            None => return false,
        };
        curve.provider().verify(&public, message, &r, &s)
    }

    /// Checks that an encoded public key decodes structurally.
    ///
    /// This is a well-formedness check only: the transcript must be
    /// hexadecimal, the bytes must match the record shape, and both fields
    /// must be integer text. Whether the point lies on the curve is NOT
    /// checked, so a transcript that passes here can still fail every
    /// verification. Never fails.
    pub fn is_valid_public_key(encoded: &str) -> bool {
        decode_public_point(encoded).is_ok()
    }
}

/// Decodes a public-key transcript into a coordinate pair.
fn decode_public_point(encoded: &str) -> Result<CurvePoint, Error> {
    let bytes = hex::decode(encoded)?;
    let record = PublicKeyRecord::decode(bytes.as_slice())?;
    let x = Scalar::from_text(&record.x).ok_or(Error::InvalidScalar("x"))?;
    let y = Scalar::from_text(&record.y).ok_or(Error::InvalidScalar("y"))?;
    Ok(CurvePoint { x, y })
}
