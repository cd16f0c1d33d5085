//! Elliptic Curve Digital Signature Algorithm (ECDSA) over SHA-256.
//!
//! ## Algorithm
//!
//! ```text
//! sign(d, m):
//!   z = bits2int(SHA-256(m))                 leading 32 bytes of the digest
//!   pick k uniformly in [1, n-1]
//!   (x1, y1) = k·G                           retry if k·G = ∞
//!   r = x1 mod n                             retry if r = 0
//!   s = k⁻¹ (z + r·d) mod n                  retry if s = 0
//!
//! verify(Q, m, (r, s)):
//!   Q ≠ ∞, Q on the curve, n·Q = ∞
//!   r, s in [1, n-1]
//!   w = s⁻¹, u1 = z·w, u2 = r·w
//!   (x1, y1) = u1·G + u2·Q                   reject if ∞
//!   accept iff x1 mod n = r
//! ```
//!
//! ## Usage
//!
#![cfg_attr(all(feature = "std", feature = "getrandom"), doc = "```")]
#![cfg_attr(not(all(feature = "std", feature = "getrandom")), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom' feature
//! use secp256r1::ecdsa::{signature::Signer, Signature, SigningKey};
//!
//! // Signing
//! let signing_key = SigningKey::random(&mut OsRng)?;
//! let verifying_key_bytes = signing_key.verifying_key().to_sec1_bytes();
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature: Signature = signing_key.sign(message);
//!
//! // Verifying
//! use secp256r1::ecdsa::{signature::Verifier, VerifyingKey};
//!
//! let verifying_key = VerifyingKey::from_sec1_bytes(&verifying_key_bytes)?;
//! verifying_key.verify(message, &signature)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod der;
pub mod hazmat;
mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};
pub use signature;

use crate::{util, AffinePoint, EncodedPoint, Error, Result, Scalar, FIELD_BYTES_SIZE};
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use signature::SignatureEncoding;

/// ECDSA/P-256 signature serialized as bytes: `r ‖ s`, each left-padded to
/// 32 bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// ECDSA/P-256 signature (fixed-size).
///
/// Decoding only checks the byte length. Whether `r` and `s` lie in
/// `[1, n-1]` is checked at verification time, so a [`Signature`] may hold
/// out-of-range components received from the wire.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Size of an encoded ECDSA/P-256 signature in bytes.
    pub const BYTE_SIZE: usize = 2 * FIELD_BYTES_SIZE;

    /// Parse a signature from `r ‖ s` bytes.
    ///
    /// Returns [`Error::MalformedSignature`] unless `bytes` is exactly 64
    /// bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTE_SIZE {
            return Err(Error::MalformedSignature);
        }

        let (r_bytes, s_bytes) = bytes.split_at(FIELD_BYTES_SIZE);

        Ok(Self {
            r: BigUint::from_bytes_be(r_bytes),
            s: BigUint::from_bytes_be(s_bytes),
        })
    }

    /// Create a [`Signature`] from the scalars produced by signing.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Self {
        Self {
            r: r.into_uint(),
            s: s.into_uint(),
        }
    }

    /// Create a [`Signature`] from raw integer components.
    ///
    /// Returns [`Error::MalformedSignature`] if either does not fit in 32
    /// bytes.
    pub fn from_components(r: BigUint, s: BigUint) -> Result<Self> {
        let limit = 8 * FIELD_BYTES_SIZE as u64;

        if r.bits() > limit || s.bits() > limit {
            return Err(Error::MalformedSignature);
        }

        Ok(Self { r, s })
    }

    /// Serialize this signature as `r ‖ s` bytes.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(FIELD_BYTES_SIZE);
        r_bytes.copy_from_slice(&util::to_be_bytes_padded::<FIELD_BYTES_SIZE>(&self.r));
        s_bytes.copy_from_slice(&util::to_be_bytes_padded::<FIELD_BYTES_SIZE>(&self.s));
        ret
    }

    /// Convert this signature into a byte vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

/// Verify an ECDSA/SHA-256 signature given raw SEC1 public key bytes and raw
/// `r ‖ s` signature bytes.
///
/// Malformed encodings are errors ([`Error::MalformedKey`],
/// [`Error::MalformedSignature`]); a well-formed key that is off the curve
/// or a signature that does not verify yields `Ok(false)`.
pub fn verify_message(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let encoded = EncodedPoint::from_bytes(public_key)?;
    let signature = Signature::from_bytes(signature)?;

    let point = match AffinePoint::from_encoded_point(&encoded) {
        Ok(point) => point,
        Err(_) => {
            tracing::trace!("public key is not on the curve");
            return Ok(false);
        }
    };

    Ok(hazmat::verify_prehashed(
        &point,
        &Sha256::digest(message),
        &signature,
    ))
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecdsa::Signature<NistP256>(")?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_bytes(bytes)
    }
}
