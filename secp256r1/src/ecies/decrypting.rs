//! ECIES decryption with the recipient's secret key.

use super::{kdf, shared_x, EncryptingKey, Envelope};
use crate::{Error, FieldBytes, NonZeroScalar, Result, SecretKey};
use aes_gcm::{aead::Aead, Aes256Gcm, KeyInit, Nonce};
use alloc::vec::Vec;
use core::fmt;
use rand_core::CryptoRngCore;

/// Represents a decryption key used for opening [`Envelope`]s addressed to
/// its [`EncryptingKey`].
#[derive(Clone)]
pub struct DecryptingKey {
    secret_key: SecretKey,
    encrypting_key: EncryptingKey,
}

impl DecryptingKey {
    /// Generate a random [`DecryptingKey`].
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self> {
        SecretKey::random(rng).map(Self::from)
    }

    /// Parse decrypting key from big endian-encoded bytes.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        SecretKey::from_bytes(bytes).map(Self::from)
    }

    /// Parse decrypting key from a big endian-encoded byte slice.
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

    /// Get the [`EncryptingKey`] which corresponds to this [`DecryptingKey`].
    pub fn encrypting_key(&self) -> &EncryptingKey {
        &self.encrypting_key
    }

    /// Open an [`Envelope`].
    ///
    /// Returns [`Error::AuthenticationFailed`] if the envelope was not
    /// encrypted to this key or was modified in transit.
    pub fn decrypt(&self, envelope: &Envelope) -> Result<Vec<u8>> {
        decrypt(self.as_nonzero_scalar(), envelope)
    }

    /// Parse and open the dot-joined wire form of an [`Envelope`].
    pub fn decrypt_str(&self, envelope: &str) -> Result<Vec<u8>> {
        self.decrypt(&envelope.parse::<Envelope>()?)
    }
}

impl From<SecretKey> for DecryptingKey {
    fn from(secret_key: SecretKey) -> DecryptingKey {
        let encrypting_key = EncryptingKey::new(secret_key.public_key());

        DecryptingKey {
            secret_key,
            encrypting_key,
        }
    }
}

impl fmt::Debug for DecryptingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptingKey")
            .field("encrypting_key", &self.encrypting_key)
            .finish_non_exhaustive()
    }
}

pub(super) fn decrypt(secret_scalar: &NonZeroScalar, envelope: &Envelope) -> Result<Vec<u8>> {
    let shared_x = shared_x(envelope.ephemeral_public_key().as_affine(), secret_scalar)?;

    Aes256Gcm::new(&kdf(&shared_x, envelope.salt()))
        .decrypt(Nonce::from_slice(envelope.iv()), envelope.ciphertext())
        .map_err(|_| {
            tracing::debug!("AES-GCM tag mismatch");
            Error::AuthenticationFailed
        })
}
