//! Elliptic Curve Integrated Encryption Scheme (ECIES) over NIST P-256.
//!
//! ## Algorithm
//!
//! ```text
//! encrypt(Q, m):
//!   pick r uniformly in [1, n-1]
//!   R = r·G                                   ephemeral public key
//!   P = r·Q                                   shared point, fail if ∞
//!   salt ← 32 random bytes, iv ← 12 random bytes
//!   K = HKDF-SHA256(ikm = P.x, salt, info = 0x01, len = 32)
//!   c = AES-256-GCM(K, iv, m)                 ciphertext ‖ 16-byte tag
//!   return b64(R) . b64(salt) . b64(c) . b64(iv)
//!
//! decrypt(d, envelope):
//!   P = d·R, K as above, m = AES-256-GCM⁻¹(K, iv, c)
//! ```
//!
//! `P.x` enters HKDF as its minimal big-endian encoding, without leading
//! zero bytes. `b64` is standard base64 with padding.
//!
//! The [`scheme`] module layers ECDSA on top: the sender signs the envelope
//! string and the signature travels next to it in an outer dot-joined
//! string.
//!
//! ## Usage
//!
#![cfg_attr(all(feature = "std", feature = "getrandom"), doc = "```")]
#![cfg_attr(not(all(feature = "std", feature = "getrandom")), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom' feature
//! use secp256r1::ecies::{DecryptingKey, Envelope};
//!
//! // Encrypting
//! let decrypting_key = DecryptingKey::random(&mut OsRng)?;
//! let encrypting_key = decrypting_key.encrypting_key();
//! let envelope = encrypting_key.encrypt_with_rng(&mut OsRng, b"plaintext")?;
//! let wire = envelope.to_string();
//!
//! // Decrypting
//! let envelope: Envelope = wire.parse()?;
//! let plaintext = decrypting_key.decrypt(&envelope)?;
//! assert_eq!(plaintext, b"plaintext");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod decrypting;
mod encrypting;
mod envelope;
pub mod scheme;

pub use self::{decrypting::DecryptingKey, encrypting::EncryptingKey, envelope::Envelope};

use crate::{util, AffinePoint, Error, FieldElement, NonZeroScalar, Result};
use aes_gcm::{Aes256Gcm, Key};
use hkdf::Hkdf;
use sha2::Sha256;

/// Size of the random HKDF salt in bytes.
pub const SALT_SIZE: usize = 32;

/// Size of the AES-GCM nonce in bytes.
pub const IV_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

/// HKDF `info` parameter.
pub const KDF_INFO: &[u8] = &[0x01];

/// Derive the AES-256-GCM key from the x-coordinate of the shared point.
fn kdf(shared_x: &FieldElement, salt: &[u8; SALT_SIZE]) -> Key<Aes256Gcm> {
    let ikm = util::to_be_bytes_minimal(shared_x.as_uint());
    let mut key = Key::<Aes256Gcm>::default();

    Hkdf::<Sha256>::new(Some(&salt[..]), &ikm)
        .expand(KDF_INFO, key.as_mut_slice())
        .expect("32 bytes is a valid HKDF-SHA256 output length");

    key
}

/// Compute `scalar·point` and return its x-coordinate, failing if the
/// product is the point at infinity.
fn shared_x(point: &AffinePoint, scalar: &NonZeroScalar) -> Result<FieldElement> {
    match point * scalar {
        AffinePoint::Infinity => {
            tracing::debug!("shared point is the point at infinity");
            Err(Error::EphemeralKeyDegenerate)
        }
        AffinePoint::Affine(shared) => Ok(shared.x().clone()),
    }
}
