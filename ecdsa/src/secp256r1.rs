//! P-256 curve-arithmetic provider backed by the `p256` crate.
//!
//! Messages are hashed with SHA-256 before signing and verification, and
//! signatures are generated deterministically as specified in
//! [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979). Produced
//! signatures are normalized according to
//! [BIP 62](https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki#low-s-values-in-signatures),
//! and verification rejects signatures that are not.
//!
//! A point handed to [`Secp256r1::verify`] is only checked against the curve
//! equation at that moment, when the verifying key is reconstructed from its
//! affine coordinates. Decode paths upstream accept any well-formed
//! coordinate pair.

use crate::{CurvePoint, CurveProvider, Error, Scalar};
use p256::{
    ecdsa::{
        signature::{Signer, Verifier},
        SigningKey, VerifyingKey,
    },
    elliptic_curve::{rand_core::CryptoRngCore, scalar::IsHigh},
    EncodedPoint, FieldBytes,
};
use zeroize::Zeroize;

const FIELD_LENGTH: usize = 32;

/// P-256 (secp256r1) curve-arithmetic provider.
#[derive(Clone, Debug)]
pub struct Secp256r1;

/// Converts a scalar to the fixed-width field form, if it fits.
fn field_element(value: &Scalar) -> Option<FieldBytes> {
    let bytes = value.to_bytes_be();
    if bytes.len() > FIELD_LENGTH {
        return None;
    }
    let mut out = FieldBytes::default();
    out[FIELD_LENGTH - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}

/// Builds a signing key from a private scalar, wiping the scratch copies.
///
/// Returns `None` if the scalar is zero or not below the curve order.
fn signing_key(private: &Scalar) -> Option<SigningKey> {
    let mut raw = private.to_bytes_be();
    if raw.len() > FIELD_LENGTH {
        raw.zeroize();
        return None;
    }
    let mut padded = [0u8; FIELD_LENGTH];
    padded[FIELD_LENGTH - raw.len()..].copy_from_slice(&raw);
    raw.zeroize();
    let key = SigningKey::from_slice(&padded).ok();
    padded.zeroize();
    key
}

/// Reconstructs a verifying key from affine coordinates.
///
/// Fails if the coordinates are out of field range or the point does not lie
/// on the curve.
fn verifying_key(point: &CurvePoint) -> Option<VerifyingKey> {
    let x = field_element(&point.x)?;
    let y = field_element(&point.y)?;
    let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);
    VerifyingKey::from_encoded_point(&encoded).ok()
}

/// Reads the affine coordinates of a verifying key.
fn affine_point(verifier: &VerifyingKey) -> CurvePoint {
    let point = verifier.to_encoded_point(false);
    let x = point.x().expect("uncompressed point has an x coordinate");
    let y = point.y().expect("uncompressed point has a y coordinate");
    CurvePoint {
        x: Scalar::from_bytes_be(x),
        y: Scalar::from_bytes_be(y),
    }
}

impl CurveProvider for Secp256r1 {
    fn generate_keypair(&self, mut rng: &mut dyn CryptoRngCore) -> (Scalar, CurvePoint) {
        let signer = SigningKey::random(&mut rng);
        let mut raw = [0u8; FIELD_LENGTH];
        raw.copy_from_slice(&signer.to_bytes());
        let private = Scalar::from_bytes_be(&raw);
        raw.zeroize();
        let public = affine_point(signer.verifying_key());
        (private, public)
    }

    fn derive_public_point(&self, private: &Scalar) -> Result<CurvePoint, Error> {
        let signer = signing_key(private).ok_or(Error::InvalidScalar("d"))?;
        Ok(affine_point(signer.verifying_key()))
    }

    fn sign(&self, private: &Scalar, message: &[u8]) -> Result<(Scalar, Scalar), Error> {
        let signer = signing_key(private).ok_or(Error::InvalidScalar("d"))?;
        let signature: p256::ecdsa::Signature = signer.sign(message);
        let signature = match signature.normalize_s() {
            Some(normalized) => normalized,
            None => signature,
        };
        let (r, s) = signature.split_bytes();
        Ok((Scalar::from_bytes_be(&r), Scalar::from_bytes_be(&s)))
    }

    fn verify(&self, public: &CurvePoint, message: &[u8], r: &Scalar, s: &Scalar) -> bool {
        let r = match field_element(r) {
            Some(bytes) => bytes,
            None => return false,
        };
        let s = match field_element(s) {
            Some(bytes) => bytes,
            None => return false,
        };
        let signature = match p256::ecdsa::Signature::from_scalars(r, s) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        if signature.s().is_high().into() {
            // Reject any signature with an `s` value in the upper half of the curve order.
            return false;
        }
        let verifier = match verifying_key(public) {
            Some(verifier) => verifier,
            None => return false,
        };
        verifier.verify(message, &signature).is_ok()
    }
}
