//! Serialize key and signature records.
//!
//! # Overview
//!
//! A binary serialization library for the record shapes exchanged by an ECDSA
//! facility: public keys, private keys, and signatures. Each record is encoded
//! as an ASN.1/DER SEQUENCE of UTF8String fields carrying integer values in
//! text form, and decoded from untrusted input with strict structural checks
//! (exact field counts, minimal lengths, no trailing data).
//!
//! The records are pure structured-data transcoding: no field is interpreted
//! as a curve element here, and no curve identifier is embedded in the
//! encoding. Callers must track which curve an encoded record belongs to out
//! of band.
//!
//! # Example
//!
//! ```
//! use simple_ecdsa_codec::{Decode, Encode, PublicKeyRecord};
//!
//! let record = PublicKeyRecord {
//!     x: "1f".to_string(),
//!     y: "2e".to_string(),
//! };
//!
//! // Encoding is deterministic for a given record.
//! let encoded = record.encode();
//! assert_eq!(encoded.len(), record.len_encoded());
//!
//! // Decoding consumes the entire buffer or fails.
//! let decoded = PublicKeyRecord::decode(encoded).unwrap();
//! assert_eq!(record, decoded);
//! ```

pub mod codec;
pub mod der;
pub mod error;
pub mod records;

// Re-export main types and traits
pub use codec::{Decode, Encode, Read, Write};
pub use error::Error;
pub use records::{PrivateKeyRecord, PublicKeyRecord, SignatureRecord};
