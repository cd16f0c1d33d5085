//! Error types.

use core::fmt;

/// Result type with the `secp256r1` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Public key bytes are not a 65-byte SEC1 uncompressed point, or are
    /// otherwise not decodable (bad base64, identity point).
    MalformedKey,

    /// Signature bytes are not a 64-byte `r ‖ s` pair or valid DER.
    MalformedSignature,

    /// Envelope string does not have the expected number of segments, or a
    /// segment fails to decode.
    MalformedEnvelope,

    /// Coordinates do not satisfy the curve equation or are not reduced
    /// modulo the field prime.
    PointNotOnCurve,

    /// Value has no multiplicative inverse modulo the requested modulus.
    InverseDoesNotExist,

    /// Scalar is zero where a non-zero scalar is required.
    ZeroScalar,

    /// AEAD tag did not verify: wrong key or tampered ciphertext, salt or IV.
    AuthenticationFailed,

    /// AEAD encryption refused the plaintext (longer than AES-GCM allows).
    EncryptionFailed,

    /// Ephemeral or shared point collapsed to the point at infinity.
    EphemeralKeyDegenerate,

    /// Random source failed to produce an in-range scalar within
    /// [`MAX_SAMPLING_ATTEMPTS`](crate::MAX_SAMPLING_ATTEMPTS) draws.
    SamplingExhausted,
}

impl Error {
    /// Is this an error about the shape of untrusted input, as opposed to a
    /// cryptographic check failing?
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::MalformedKey | Error::MalformedSignature | Error::MalformedEnvelope
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedKey => f.write_str("malformed public key encoding"),
            Error::MalformedSignature => f.write_str("malformed signature encoding"),
            Error::MalformedEnvelope => f.write_str("malformed envelope"),
            Error::PointNotOnCurve => f.write_str("point is not on the P-256 curve"),
            Error::InverseDoesNotExist => f.write_str("modular inverse does not exist"),
            Error::ZeroScalar => f.write_str("scalar is zero"),
            Error::AuthenticationFailed => f.write_str("authenticated decryption failed"),
            Error::EncryptionFailed => f.write_str("authenticated encryption failed"),
            Error::EphemeralKeyDegenerate => {
                f.write_str("ephemeral key agreement produced the point at infinity")
            }
            Error::SamplingExhausted => f.write_str("random scalar sampling exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "ecdsa")]
impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

#[cfg(feature = "ecdsa")]
impl From<der::Error> for Error {
    fn from(_: der::Error) -> Error {
        Error::MalformedSignature
    }
}

#[cfg(feature = "ecies")]
impl From<base64::DecodeError> for Error {
    fn from(_: base64::DecodeError) -> Error {
        Error::MalformedEnvelope
    }
}
