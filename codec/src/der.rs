//! Distinguished Encoding Rules (DER) primitives
//!
//! This module implements the small ASN.1/DER subset used by the record shapes
//! in this crate: definite-length SEQUENCEs of UTF8Strings. Each element is a
//! tag octet, a length, and the contents:
//! - contents shorter than 128 bytes use a single length octet (short form)
//! - longer contents use a leading octet `0x80 | n` followed by `n` big-endian
//!   length octets (long form), where `n` is minimal and at most 4
//!
//! Indefinite lengths and non-minimal long-form lengths are rejected on read.

use crate::error::Error;
use bytes::{Buf, BufMut};

/// Tag octet for a constructed ASN.1 SEQUENCE.
pub const TAG_SEQUENCE: u8 = 0x30;

/// Tag octet for an ASN.1 UTF8String.
pub const TAG_UTF8_STRING: u8 = 0x0c;

const LONG_FORM_MASK: u8 = 0x80;
const MAX_LENGTH_OCTETS: usize = 4;

/// Returns the minimal number of big-endian octets needed to represent `len`.
///
/// `len` must be non-zero.
fn byte_width(len: usize) -> usize {
    let bits = (usize::BITS - len.leading_zeros()) as usize;
    bits.div_ceil(8)
}

/// Returns the number of octets needed to encode `len` as a DER length.
fn length_size(len: usize) -> usize {
    if len < LONG_FORM_MASK as usize {
        1
    } else {
        1 + byte_width(len)
    }
}

/// Calculates the number of bytes needed to encode an element header (tag and
/// length) for contents of `len` bytes.
pub fn header_size(len: usize) -> usize {
    1 + length_size(len)
}

/// Writes an element header (tag and length) to the buffer.
pub fn write_header(tag: u8, len: usize, buf: &mut impl BufMut) {
    buf.put_u8(tag);
    if len < LONG_FORM_MASK as usize {
        buf.put_u8(len as u8);
        return;
    }
    let width = byte_width(len);
    buf.put_u8(LONG_FORM_MASK | width as u8);
    for shift in (0..width).rev() {
        buf.put_u8((len >> (shift * 8)) as u8);
    }
}

/// Reads an element header, checking the tag and returning the content length.
///
/// Returns an error if the tag does not match, the length octets are not in
/// minimal DER form, or the buffer does not hold the declared contents.
pub fn read_header(expected: u8, buf: &mut impl Buf) -> Result<usize, Error> {
    if !buf.has_remaining() {
        return Err(Error::EndOfBuffer);
    }
    let tag = buf.get_u8();
    if tag != expected {
        return Err(Error::UnexpectedTag(expected, tag));
    }
    let len = read_length(buf)?;
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(len)
}

/// Reads a DER length, rejecting indefinite and non-minimal forms.
fn read_length(buf: &mut impl Buf) -> Result<usize, Error> {
    if !buf.has_remaining() {
        return Err(Error::EndOfBuffer);
    }
    let first = buf.get_u8();
    if first & LONG_FORM_MASK == 0 {
        return Ok(first as usize);
    }

    // The low bits hold the number of length octets that follow. Zero means
    // the indefinite form, which DER forbids.
    let width = (first & !LONG_FORM_MASK) as usize;
    if width == 0 || width > MAX_LENGTH_OCTETS {
        return Err(Error::InvalidLength);
    }
    if buf.remaining() < width {
        return Err(Error::EndOfBuffer);
    }
    let mut len = 0usize;
    for _ in 0..width {
        len = (len << 8) | buf.get_u8() as usize;
    }

    // DER requires the minimal encoding: the long form may not express a
    // length that fits the short form, and the leading octet may not be zero.
    if len < LONG_FORM_MASK as usize || byte_width(len) != width {
        return Err(Error::InvalidLength);
    }
    Ok(len)
}

/// Calculates the number of bytes needed to encode `value` as a UTF8String
/// element.
pub fn utf8_size(value: &str) -> usize {
    header_size(value.len()) + value.len()
}

/// Writes `value` as a UTF8String element.
pub fn write_utf8(value: &str, buf: &mut impl BufMut) {
    write_header(TAG_UTF8_STRING, value.len(), buf);
    buf.put_slice(value.as_bytes());
}

/// Reads a UTF8String element, returning its contents.
pub fn read_utf8(buf: &mut impl Buf) -> Result<String, Error> {
    let len = read_header(TAG_UTF8_STRING, buf)?;
    let contents = buf.copy_to_bytes(len);
    String::from_utf8(contents.into()).map_err(|_| Error::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_header_roundtrip() {
        let test_cases = [0usize, 1, 2, 64, 127, 128, 129, 255, 256, 65535, 65536];

        for &len in &test_cases {
            let mut buf = Vec::new();
            write_header(TAG_SEQUENCE, len, &mut buf);
            assert_eq!(buf.len(), header_size(len));

            // The reader checks that the declared contents are present.
            buf.resize(buf.len() + len, 0);

            let mut read_buf = &buf[..];
            let decoded = read_header(TAG_SEQUENCE, &mut read_buf).unwrap();
            assert_eq!(decoded, len);
            assert_eq!(read_buf.len(), len);
        }
    }

    #[test]
    fn test_header_known_octets() {
        let test_cases: [(usize, &[u8]); 5] = [
            (0, &[0x30, 0x00]),
            (127, &[0x30, 0x7F]),
            (128, &[0x30, 0x81, 0x80]),
            (256, &[0x30, 0x82, 0x01, 0x00]),
            (65536, &[0x30, 0x83, 0x01, 0x00, 0x00]),
        ];

        for &(len, expected) in &test_cases {
            let mut buf = Vec::new();
            write_header(TAG_SEQUENCE, len, &mut buf);
            assert_eq!(&buf[..], expected);
        }
    }

    #[test]
    fn test_wrong_tag() {
        let mut buf = Bytes::from_static(&[TAG_UTF8_STRING, 0x00]);
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::UnexpectedTag(TAG_SEQUENCE, TAG_UTF8_STRING))
        ));
    }

    #[test]
    fn test_truncated_header() {
        let mut buf = Bytes::new();
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::EndOfBuffer)
        ));

        let mut buf = Bytes::from_static(&[0x30]);
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::EndOfBuffer)
        ));

        let mut buf = Bytes::from_static(&[0x30, 0x82, 0x01]);
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::EndOfBuffer)
        ));
    }

    #[test]
    fn test_truncated_contents() {
        let mut buf = Bytes::from_static(&[0x30, 0x05, 0x01]);
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::EndOfBuffer)
        ));
    }

    #[test]
    fn test_indefinite_length() {
        let mut buf = Bytes::from_static(&[0x30, 0x80]);
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::InvalidLength)
        ));
    }

    #[test]
    fn test_oversized_length() {
        let mut buf = Bytes::from_static(&[0x30, 0x85, 0x01, 0x01, 0x01, 0x01, 0x01]);
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::InvalidLength)
        ));
    }

    #[test]
    fn test_non_minimal_length() {
        // 0x7F must use the short form.
        let mut buf = Bytes::from_static(&[0x30, 0x81, 0x7F]);
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::InvalidLength)
        ));

        // A leading zero octet is never minimal.
        let mut zero_padded = vec![0x30, 0x82, 0x00, 0x80];
        zero_padded.resize(zero_padded.len() + 0x80, 0);
        let mut buf = &zero_padded[..];
        assert!(matches!(
            read_header(TAG_SEQUENCE, &mut buf),
            Err(Error::InvalidLength)
        ));
    }

    #[test]
    fn test_utf8_roundtrip() {
        let test_cases = ["", "0", "p256", "deadbeef", "しがない"];

        for &value in &test_cases {
            let mut buf = Vec::new();
            write_utf8(value, &mut buf);
            assert_eq!(buf.len(), utf8_size(value));

            let mut read_buf = &buf[..];
            let decoded = read_utf8(&mut read_buf).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(read_buf.len(), 0);
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let mut buf = Bytes::from_static(&[0x0C, 0x02, 0xC3, 0x28]);
        assert!(matches!(read_utf8(&mut buf), Err(Error::InvalidUtf8)));
    }
}
