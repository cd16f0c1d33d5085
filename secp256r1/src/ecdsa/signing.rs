//! Support for ECDSA/P-256 signing.

use super::{hazmat, Signature, VerifyingKey};
use crate::{FieldBytes, NonZeroScalar, Result, SecretKey};
use core::fmt;
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};
use signature::{hazmat::RandomizedPrehashSigner, RandomizedSigner};

#[cfg(feature = "getrandom")]
use {
    rand_core::OsRng,
    signature::{hazmat::PrehashSigner, Signer},
};

/// ECDSA/P-256 secret key used for signing messages and producing signatures.
///
/// Every signature draws a fresh ephemeral scalar from the supplied random
/// source.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`RandomizedSigner`]: sign a message with an explicit random source
/// - [`Signer`]: sign a message using the operating system's random source
///   (requires the `getrandom` feature)
///
/// [`Signer`]: signature::Signer
#[derive(Clone)]
pub struct SigningKey {
    /// Secret key.
    secret_key: SecretKey,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a random [`SigningKey`].
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self> {
        SecretKey::random(rng).map(Self::from)
    }

    /// Parse signing key from big endian-encoded bytes.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        SecretKey::from_bytes(bytes).map(Self::from)
    }

    /// Parse signing key from a big endian-encoded byte slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        SecretKey::from_slice(slice).map(Self::from)
    }

    /// Serialize as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_key.to_bytes()
    }

    /// Borrow the secret [`NonZeroScalar`] value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_nonzero_scalar(&self) -> &NonZeroScalar {
        self.secret_key.as_nonzero_scalar()
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign `message` hashed with SHA-256.
    pub fn sign_message_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        message: &[u8],
    ) -> Result<Signature> {
        self.sign_digest_with_rng(rng, &Sha256::digest(message))
    }

    /// Sign a message digest.
    ///
    /// Digests longer than 32 bytes are truncated to their leading 32 bytes.
    pub fn sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: &[u8],
    ) -> Result<Signature> {
        hazmat::sign_prehashed_with_rng(rng, self.as_nonzero_scalar(), digest)
    }
}

impl From<SecretKey> for SigningKey {
    fn from(secret_key: SecretKey) -> SigningKey {
        let verifying_key = VerifyingKey::from(secret_key.public_key());

        SigningKey {
            secret_key,
            verifying_key,
        }
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key.clone()
    }
}

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

//
// `*Signer` trait impls
//

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.sign_message_with_rng(rng, msg)?)
    }
}

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.sign_digest_with_rng(rng, prehash)?)
    }
}

#[cfg(feature = "getrandom")]
impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        self.try_sign_with_rng(&mut OsRng, msg)
    }
}

#[cfg(feature = "getrandom")]
impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        self.sign_prehash_with_rng(&mut OsRng, prehash)
    }
}
