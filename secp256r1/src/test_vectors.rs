//! secp256r1 test vectors.

pub mod group;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;
