//! NIST P-256 public keys.

use crate::{AffinePoint, EncodedPoint, Error, NonZeroScalar, Result, UNCOMPRESSED_POINT_SIZE};
use alloc::vec::Vec;

/// DER prefix of a `SubjectPublicKeyInfo` carrying an `id-ecPublicKey` with
/// the `prime256v1` curve and a 65-byte uncompressed point.
const SPKI_PREFIX: [u8; 26] = [
    0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a,
    0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00,
];

/// NIST P-256 public key: a point of the prime-order group other than the
/// identity.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wrap an [`AffinePoint`], rejecting the point at infinity.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        match point {
            AffinePoint::Infinity => Err(Error::MalformedKey),
            AffinePoint::Affine(_) => Ok(Self { point }),
        }
    }

    /// Compute the public key `d·G` of a secret scalar.
    pub fn from_secret_scalar(scalar: &NonZeroScalar) -> Self {
        let point = AffinePoint::mul_by_generator(scalar);
        debug_assert!(!point.is_identity());
        Self { point }
    }

    /// Decode a SEC1 uncompressed point.
    ///
    /// Returns [`Error::MalformedKey`] for a malformed encoding and
    /// [`Error::PointNotOnCurve`] for coordinates off the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let encoded = EncodedPoint::from_bytes(bytes)?;
        Self::from_encoded_point(&encoded)
    }

    /// Convert a SEC1 [`EncodedPoint`], checking that it is on the curve.
    pub fn from_encoded_point(encoded: &EncodedPoint) -> Result<Self> {
        AffinePoint::from_encoded_point(encoded).and_then(Self::from_affine)
    }

    /// Decode a standard (padded) base64 string holding a SEC1 uncompressed
    /// point.
    #[cfg(feature = "ecies")]
    pub fn from_base64(encoded: &str) -> Result<Self> {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let bytes = STANDARD.decode(encoded).map_err(|_| Error::MalformedKey)?;
        Self::from_sec1_bytes(&bytes)
    }

    /// Is `encoded` a base64 SEC1 uncompressed point on the curve?
    ///
    /// Never fails: malformed input is simply not a valid key.
    #[cfg(feature = "ecies")]
    pub fn is_valid_base64(encoded: &str) -> bool {
        Self::from_base64(encoded).is_ok()
    }

    /// Encode as a standard (padded) base64 string of the SEC1 uncompressed
    /// point.
    #[cfg(feature = "ecies")]
    pub fn to_base64(&self) -> alloc::string::String {
        use base64::{engine::general_purpose::STANDARD, Engine};

        STANDARD.encode(self.to_encoded_point().as_bytes())
    }

    /// Decode a DER `SubjectPublicKeyInfo` as produced by
    /// [`PublicKey::to_public_key_der`].
    pub fn from_public_key_der(der: &[u8]) -> Result<Self> {
        match der.strip_prefix(&SPKI_PREFIX[..]) {
            Some(point) if point.len() == UNCOMPRESSED_POINT_SIZE => Self::from_sec1_bytes(point),
            _ => Err(Error::MalformedKey),
        }
    }

    /// Encode as a DER `SubjectPublicKeyInfo`.
    pub fn to_public_key_der(&self) -> Vec<u8> {
        let mut der = Vec::with_capacity(SPKI_PREFIX.len() + UNCOMPRESSED_POINT_SIZE);
        der.extend_from_slice(&SPKI_PREFIX);
        der.extend_from_slice(self.to_encoded_point().as_bytes());
        der
    }

    /// Borrow the inner [`AffinePoint`].
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Encode as a SEC1 [`EncodedPoint`].
    pub fn to_encoded_point(&self) -> EncodedPoint {
        match self.point.to_encoded_point() {
            Some(encoded) => encoded,
            None => unreachable!("public keys are never the identity"),
        }
    }

    /// Encode as SEC1 uncompressed bytes.
    pub fn to_sec1_bytes(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        self.to_encoded_point().to_bytes()
    }
}

impl AsRef<AffinePoint> for PublicKey {
    fn as_ref(&self) -> &AffinePoint {
        &self.point
    }
}

impl From<PublicKey> for AffinePoint {
    fn from(public_key: PublicKey) -> AffinePoint {
        public_key.point
    }
}

impl From<&PublicKey> for EncodedPoint {
    fn from(public_key: &PublicKey) -> EncodedPoint {
        public_key.to_encoded_point()
    }
}

impl TryFrom<AffinePoint> for PublicKey {
    type Error = Error;

    fn try_from(point: AffinePoint) -> Result<Self> {
        Self::from_affine(point)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_bytes(bytes)
    }
}
