//! ASN.1 DER encoding for ECDSA/P-256 signatures.
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```

use super::Signature;
use crate::{util, Error, Result, FIELD_BYTES_SIZE};
use alloc::vec::Vec;
use der::{
    asn1::UintRef, Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence,
    Writer,
};
use num_bigint::BigUint;

impl Signature {
    /// Parse a signature from ASN.1 DER.
    ///
    /// Returns [`Error::MalformedSignature`] if the encoding is invalid or
    /// either integer is wider than 32 bytes.
    pub fn from_der(input: &[u8]) -> Result<Self> {
        let SignatureRef { r, s } = SignatureRef::from_der(input)?;

        if r.as_bytes().len() > FIELD_BYTES_SIZE || s.as_bytes().len() > FIELD_BYTES_SIZE {
            return Err(Error::MalformedSignature);
        }

        Ok(Self {
            r: BigUint::from_bytes_be(r.as_bytes()),
            s: BigUint::from_bytes_be(s.as_bytes()),
        })
    }

    /// Serialize this signature as ASN.1 DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let r = util::to_be_bytes_padded::<FIELD_BYTES_SIZE>(&self.r);
        let s = util::to_be_bytes_padded::<FIELD_BYTES_SIZE>(&self.s);

        let signature = SignatureRef {
            r: UintRef::new(&r)?,
            s: UintRef::new(&s)?,
        };

        Ok(signature.to_der()?)
    }
}

/// Borrowed `ECDSA-Sig-Value`.
struct SignatureRef<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl EncodeValue for SignatureRef<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, encoder: &mut impl Writer) -> der::Result<()> {
        self.r.encode(encoder)?;
        self.s.encode(encoder)?;
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for SignatureRef<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> der::Result<Self> {
        Ok(Self {
            r: UintRef::decode(reader)?,
            s: UintRef::decode(reader)?,
        })
    }
}

impl<'a> Sequence<'a> for SignatureRef<'a> {}
