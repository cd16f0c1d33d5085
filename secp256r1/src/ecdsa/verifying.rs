//! Support for verifying ECDSA/P-256 signatures.

use super::{hazmat, Signature};
use crate::{AffinePoint, EncodedPoint, PublicKey, Result, UNCOMPRESSED_POINT_SIZE};
use sha2::{Digest, Sha256};
use signature::{hazmat::PrehashVerifier, Error, Verifier};

/// ECDSA/P-256 public key used for verifying signatures are valid for a
/// given message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
/// - [`PrehashVerifier`]: verify the low-level raw output bytes of a message digest
///
/// The inherent [`VerifyingKey::verify_message`] and
/// [`VerifyingKey::verify_digest`] return a plain `bool` instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        PublicKey::from_sec1_bytes(bytes).map(Self::from)
    }

    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns an error if the point is the identity.
    pub fn from_affine(affine: AffinePoint) -> Result<Self> {
        PublicKey::from_affine(affine).map(Self::from)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        self.public_key.as_affine()
    }

    /// Borrow the inner [`PublicKey`].
    pub fn as_public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Serialize this [`VerifyingKey`] as a SEC1 [`EncodedPoint`].
    pub fn to_encoded_point(&self) -> EncodedPoint {
        self.public_key.to_encoded_point()
    }

    /// Serialize this [`VerifyingKey`] as SEC1 uncompressed bytes.
    pub fn to_sec1_bytes(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        self.public_key.to_sec1_bytes()
    }

    /// Does `signature` verify `message` hashed with SHA-256?
    pub fn verify_message(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_digest(&Sha256::digest(message), signature)
    }

    /// Does `signature` verify a message digest?
    ///
    /// Digests longer than 32 bytes are truncated to their leading 32 bytes,
    /// exactly as when signing.
    pub fn verify_digest(&self, digest: &[u8], signature: &Signature) -> bool {
        hazmat::verify_prehashed(self.as_affine(), digest, signature)
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_digest(prehash, signature) {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        self.verify_prehash(&Sha256::digest(msg), signature)
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(public_key: PublicKey) -> VerifyingKey {
        VerifyingKey { public_key }
    }
}

impl From<&PublicKey> for VerifyingKey {
    fn from(public_key: &PublicKey) -> VerifyingKey {
        VerifyingKey::from(public_key.clone())
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_bytes(bytes)
    }
}
