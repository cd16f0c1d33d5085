//! ECIES envelope wire format.

use super::{IV_SIZE, SALT_SIZE};
use crate::{EncodedPoint, Error, PublicKey, Result};
use alloc::{string::String, vec::Vec};
use base64::{engine::general_purpose::STANDARD, Engine};
use core::{fmt, str::FromStr};

/// Number of dot-separated segments in an encoded envelope.
const SEGMENTS: usize = 4;

/// Output of ECIES encryption.
///
/// Encodes as four dot-joined standard base64 segments:
///
/// ```text
/// b64(R) . b64(salt) . b64(ciphertext ‖ tag) . b64(iv)
/// ```
///
/// where `R` is the 65-byte SEC1 uncompressed ephemeral public key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Envelope {
    ephemeral_public_key: PublicKey,
    salt: [u8; SALT_SIZE],
    iv: [u8; IV_SIZE],
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub(crate) fn new(
        ephemeral_public_key: PublicKey,
        salt: [u8; SALT_SIZE],
        iv: [u8; IV_SIZE],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            ephemeral_public_key,
            salt,
            iv,
            ciphertext,
        }
    }

    /// Parse the dot-joined wire form.
    ///
    /// Returns [`Error::MalformedEnvelope`] for a wrong segment count, bad
    /// base64, or a salt or IV of the wrong length; [`Error::MalformedKey`]
    /// or [`Error::PointNotOnCurve`] for a bad ephemeral key.
    pub fn decode(encoded: &str) -> Result<Self> {
        let segments: Vec<&str> = encoded.split('.').collect();
        let &[key, salt, ciphertext, iv] = segments.as_slice() else {
            tracing::debug!(segments = segments.len(), "wrong envelope segment count");
            return Err(Error::MalformedEnvelope);
        };

        let key = EncodedPoint::from_bytes(&STANDARD.decode(key)?)?;
        let ephemeral_public_key = PublicKey::from_encoded_point(&key)?;

        let salt = STANDARD
            .decode(salt)?
            .try_into()
            .map_err(|_| Error::MalformedEnvelope)?;
        let iv = STANDARD
            .decode(iv)?
            .try_into()
            .map_err(|_| Error::MalformedEnvelope)?;
        let ciphertext = STANDARD.decode(ciphertext)?;

        Ok(Self::new(ephemeral_public_key, salt, iv, ciphertext))
    }

    /// Serialize to the dot-joined wire form.
    pub fn encode(&self) -> String {
        let segments: [String; SEGMENTS] = [
            STANDARD.encode(self.ephemeral_public_key.to_encoded_point()),
            STANDARD.encode(self.salt),
            STANDARD.encode(&self.ciphertext),
            STANDARD.encode(self.iv),
        ];

        segments.join(".")
    }

    /// Ephemeral public key `R = r·G`.
    pub fn ephemeral_public_key(&self) -> &PublicKey {
        &self.ephemeral_public_key
    }

    /// HKDF salt.
    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    /// AES-GCM nonce.
    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    /// AES-GCM ciphertext with the authentication tag appended.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}

impl FromStr for Envelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
