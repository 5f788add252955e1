//! Record shapes for encoded keys and signatures
//!
//! Each record is a DER SEQUENCE of UTF8String fields in a fixed order. The
//! fields carry integer values in text form; this module performs no
//! validation of their contents beyond UTF-8 well-formedness.

use crate::{der, Encode, Error, Read, Write};
use bytes::{Buf, BufMut};

/// An encoded public key: the affine coordinates of a curve point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyRecord {
    pub x: String,
    pub y: String,
}

impl PublicKeyRecord {
    fn contents_size(&self) -> usize {
        der::utf8_size(&self.x) + der::utf8_size(&self.y)
    }
}

impl Write for PublicKeyRecord {
    fn write(&self, buf: &mut impl BufMut) {
        der::write_header(der::TAG_SEQUENCE, self.contents_size(), buf);
        der::write_utf8(&self.x, buf);
        der::write_utf8(&self.y, buf);
    }
}

impl Read for PublicKeyRecord {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = der::read_header(der::TAG_SEQUENCE, buf)?;
        let mut contents = buf.take(len);
        let x = der::read_utf8(&mut contents)?;
        let y = der::read_utf8(&mut contents)?;
        let remaining = contents.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(Self { x, y })
    }
}

impl Encode for PublicKeyRecord {
    fn len_encoded(&self) -> usize {
        let len = self.contents_size();
        der::header_size(len) + len
    }
}

/// An encoded private key: a single private scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKeyRecord {
    pub d: String,
}

impl PrivateKeyRecord {
    fn contents_size(&self) -> usize {
        der::utf8_size(&self.d)
    }
}

impl Write for PrivateKeyRecord {
    fn write(&self, buf: &mut impl BufMut) {
        der::write_header(der::TAG_SEQUENCE, self.contents_size(), buf);
        der::write_utf8(&self.d, buf);
    }
}

impl Read for PrivateKeyRecord {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = der::read_header(der::TAG_SEQUENCE, buf)?;
        let mut contents = buf.take(len);
        let d = der::read_utf8(&mut contents)?;
        let remaining = contents.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(Self { d })
    }
}

impl Encode for PrivateKeyRecord {
    fn len_encoded(&self) -> usize {
        let len = self.contents_size();
        der::header_size(len) + len
    }
}

/// An encoded signature: the `(r, s)` scalar pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureRecord {
    pub r: String,
    pub s: String,
}

impl SignatureRecord {
    fn contents_size(&self) -> usize {
        der::utf8_size(&self.r) + der::utf8_size(&self.s)
    }
}

impl Write for SignatureRecord {
    fn write(&self, buf: &mut impl BufMut) {
        der::write_header(der::TAG_SEQUENCE, self.contents_size(), buf);
        der::write_utf8(&self.r, buf);
        der::write_utf8(&self.s, buf);
    }
}

impl Read for SignatureRecord {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = der::read_header(der::TAG_SEQUENCE, buf)?;
        let mut contents = buf.take(len);
        let r = der::read_utf8(&mut contents)?;
        let s = der::read_utf8(&mut contents)?;
        let remaining = contents.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(Self { r, s })
    }
}

impl Encode for SignatureRecord {
    fn len_encoded(&self) -> usize {
        let len = self.contents_size();
        der::header_size(len) + len
    }
}
