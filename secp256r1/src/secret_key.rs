//! NIST P-256 secret keys.

use crate::{Error, FieldBytes, NonZeroScalar, PublicKey, Result};
use core::fmt;
use rand_core::CryptoRngCore;

/// NIST P-256 secret key: a scalar `d` in `[1, n)`.
///
/// The matching public key `d·G` is never the identity because `G` has
/// prime order `n`.
#[derive(Clone, Eq, PartialEq)]
pub struct SecretKey {
    inner: NonZeroScalar,
}

impl SecretKey {
    /// Generate a random [`SecretKey`].
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self> {
        NonZeroScalar::random(rng).map(Self::from)
    }

    /// Decode a big-endian secret scalar.
    ///
    /// Returns [`Error::MalformedKey`] if the value is zero or not less than
    /// the group order.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        NonZeroScalar::from_bytes(bytes)
            .map(Self::from)
            .ok_or(Error::MalformedKey)
    }

    /// Decode a big-endian secret scalar from a 32-byte slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = FieldBytes::try_from(slice).map_err(|_| Error::MalformedKey)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize as left-padded big-endian bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.inner.to_bytes()
    }

    /// Borrow the secret scalar.
    pub fn as_nonzero_scalar(&self) -> &NonZeroScalar {
        &self.inner
    }

    /// Compute the public key `d·G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_scalar(&self.inner)
    }
}

impl From<NonZeroScalar> for SecretKey {
    fn from(inner: NonZeroScalar) -> SecretKey {
        SecretKey { inner }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::SecretKey;
    use crate::{Error, GENERATOR, ORDER};
    use alloc::format;
    use hex_literal::hex;

    #[test]
    fn reject_zero_and_order() {
        assert_eq!(SecretKey::from_bytes(&[0; 32]), Err(Error::MalformedKey));

        let order = crate::util::to_be_bytes_padded::<32>(&ORDER);
        assert_eq!(SecretKey::from_bytes(&order), Err(Error::MalformedKey));
    }

    #[test]
    fn reject_wrong_length() {
        assert_eq!(SecretKey::from_slice(&[1; 31]), Err(Error::MalformedKey));
        assert_eq!(SecretKey::from_slice(&[1; 33]), Err(Error::MalformedKey));
    }

    #[test]
    fn public_key_of_one_is_generator() {
        let one = hex!("0000000000000000000000000000000000000000000000000000000000000001");
        let secret_key = SecretKey::from_bytes(&one).expect("in range");
        assert_eq!(secret_key.public_key().as_affine(), &*GENERATOR);
        assert_eq!(secret_key.to_bytes(), one);
    }

    #[test]
    fn debug_hides_scalar() {
        let secret_key = SecretKey::from_slice(&[7; 32]).expect("in range");
        assert_eq!(format!("{:?}", secret_key), "SecretKey { .. }");
    }
}
