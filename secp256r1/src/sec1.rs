//! SEC1 `Elliptic-Curve-Point-to-Octet-String` encoding.
//!
//! Only the uncompressed form `0x04 ‖ x ‖ y` is supported.

use crate::{AffinePoint, Error, FieldBytes, Result, FIELD_BYTES_SIZE};
use core::fmt;

/// Size of an uncompressed SEC1 point.
pub const UNCOMPRESSED_POINT_SIZE: usize = 1 + 2 * FIELD_BYTES_SIZE;

/// Leading tag byte of an uncompressed SEC1 point.
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// NIST P-256 SEC1 encoded point (uncompressed form).
///
/// Holding an [`EncodedPoint`] only guarantees the byte shape; whether the
/// coordinates lie on the curve is checked when converting to an
/// [`AffinePoint`].
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct EncodedPoint {
    bytes: [u8; UNCOMPRESSED_POINT_SIZE],
}

impl EncodedPoint {
    /// Decode an uncompressed SEC1 point.
    ///
    /// Returns [`Error::MalformedKey`] unless `bytes` is exactly 65 bytes
    /// beginning with `0x04`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; UNCOMPRESSED_POINT_SIZE] =
            bytes.try_into().map_err(|_| Error::MalformedKey)?;

        if bytes[0] != TAG_UNCOMPRESSED {
            return Err(Error::MalformedKey);
        }

        Ok(Self { bytes })
    }

    /// Encode affine coordinates, each left-padded to 32 bytes.
    pub fn from_affine_coordinates(x: &FieldBytes, y: &FieldBytes) -> Self {
        let mut bytes = [0u8; UNCOMPRESSED_POINT_SIZE];
        bytes[0] = TAG_UNCOMPRESSED;
        bytes[1..=FIELD_BYTES_SIZE].copy_from_slice(x);
        bytes[1 + FIELD_BYTES_SIZE..].copy_from_slice(y);
        Self { bytes }
    }

    /// Big-endian x-coordinate bytes.
    pub fn x(&self) -> FieldBytes {
        let mut x = FieldBytes::default();
        x.copy_from_slice(&self.bytes[1..=FIELD_BYTES_SIZE]);
        x
    }

    /// Big-endian y-coordinate bytes.
    pub fn y(&self) -> FieldBytes {
        let mut y = FieldBytes::default();
        y.copy_from_slice(&self.bytes[1 + FIELD_BYTES_SIZE..]);
        y
    }

    /// Do the encoded coordinates satisfy the curve equation?
    pub fn is_on_curve(&self) -> bool {
        AffinePoint::from_encoded_point(self).is_ok()
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy out the encoded bytes.
    pub fn to_bytes(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        self.bytes
    }
}

impl AsRef<[u8]> for EncodedPoint {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for EncodedPoint {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for EncodedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPoint(")?;

        for byte in &self.bytes {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}
