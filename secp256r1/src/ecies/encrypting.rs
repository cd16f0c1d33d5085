//! ECIES encryption to a recipient's public key.

use super::{kdf, shared_x, Envelope, IV_SIZE, SALT_SIZE};
use crate::{AffinePoint, EncodedPoint, Error, NonZeroScalar, PublicKey, Result};
use aes_gcm::{aead::Aead, Aes256Gcm, KeyInit, Nonce};
use rand_core::CryptoRngCore;

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// Represents an encryption key used for encrypting messages to the holder
/// of the matching [`DecryptingKey`](super::DecryptingKey).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptingKey {
    public_key: PublicKey,
}

impl EncryptingKey {
    /// Initialize [`EncryptingKey`] from a [`PublicKey`].
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// Initialize [`EncryptingKey`] from a SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        PublicKey::from_sec1_bytes(bytes).map(Self::new)
    }

    /// Initialize [`EncryptingKey`] from an affine point.
    ///
    /// Returns an [`Error`] if the given affine point is the additive identity
    /// (a.k.a. point at infinity).
    pub fn from_affine(affine: AffinePoint) -> Result<Self> {
        PublicKey::from_affine(affine).map(Self::new)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        self.public_key.as_affine()
    }

    /// Borrow the inner [`PublicKey`].
    pub fn as_public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Serialize as a SEC1 [`EncodedPoint`].
    pub fn to_encoded_point(&self) -> EncodedPoint {
        self.public_key.to_encoded_point()
    }

    /// Encrypt `msg`, drawing the ephemeral scalar, salt and IV from `rng`.
    pub fn encrypt_with_rng(&self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Envelope> {
        encrypt(rng, &self.public_key, msg)
    }

    /// Encrypt `msg` using the operating system's random source.
    #[cfg(feature = "getrandom")]
    pub fn encrypt(&self, msg: &[u8]) -> Result<Envelope> {
        self.encrypt_with_rng(&mut OsRng, msg)
    }
}

impl From<PublicKey> for EncryptingKey {
    fn from(public_key: PublicKey) -> EncryptingKey {
        EncryptingKey::new(public_key)
    }
}

impl From<&PublicKey> for EncryptingKey {
    fn from(public_key: &PublicKey) -> EncryptingKey {
        EncryptingKey::new(public_key.clone())
    }
}

pub(super) fn encrypt(
    rng: &mut impl CryptoRngCore,
    public_key: &PublicKey,
    msg: &[u8],
) -> Result<Envelope> {
    let r = NonZeroScalar::random(rng)?;

    let ephemeral_public_key = PublicKey::from_affine(AffinePoint::mul_by_generator(&r))
        .map_err(|_| Error::EphemeralKeyDegenerate)?;
    let shared_x = shared_x(public_key.as_affine(), &r)?;

    let mut salt = [0u8; SALT_SIZE];
    rng.fill_bytes(&mut salt);

    let mut iv = [0u8; IV_SIZE];
    rng.fill_bytes(&mut iv);

    let ciphertext = Aes256Gcm::new(&kdf(&shared_x, &salt))
        .encrypt(Nonce::from_slice(&iv), msg)
        .map_err(|_| Error::EncryptionFailed)?;

    Ok(Envelope::new(ephemeral_public_key, salt, iv, ciphertext))
}
