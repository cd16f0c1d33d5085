#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! Pure Rust implementation of the NIST P-256 elliptic curve (a.k.a.
//! secp256r1, prime256v1) over arbitrary-precision integers.
//!
//! The crate is layered:
//!
//! - [`FieldElement`] and [`Scalar`]: integers modulo the field prime `p` and
//!   the group order `n`, including the modular inverse.
//! - [`AffinePoint`]: curve points in affine coordinates with an explicit
//!   point at infinity, the group law and double-and-add scalar
//!   multiplication.
//! - [`EncodedPoint`], [`PublicKey`] and [`SecretKey`]: SEC1 uncompressed
//!   encoding and key pairs.
//! - [`ecdsa`]: ECDSA over SHA-256 (requires the `ecdsa` feature).
//! - [`ecies`]: ECIES with HKDF-SHA256 and AES-256-GCM, plus the
//!   sign-then-encrypt envelope scheme (requires the `ecies` feature).
//!
//! ## ⚠️ Security Warning
//!
//! Point arithmetic in this crate is variable-time: it branches on secret
//! scalar bits and uses non-constant-time bignum operations. It is suitable
//! for interoperability and testing, not for environments where timing
//! side channels are a concern.
//!
//! USE AT YOUR OWN RISK!
//!
//! ## Example
//!
//! ```
//! # #[cfg(all(feature = "ecies", feature = "getrandom"))]
//! # {
//! use secp256r1::{ecies::scheme, rand_core::OsRng, SecretKey};
//!
//! let alice = SecretKey::random(&mut OsRng)?;
//! let bob = SecretKey::random(&mut OsRng)?;
//!
//! let sealed = scheme::sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"hello bob")?;
//! let opened = scheme::verify_and_decrypt(&alice.public_key(), &bob, &sealed)?;
//! assert_eq!(opened.message(), Some(&b"hello bob"[..]));
//! # }
//! # Ok::<(), secp256r1::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod arithmetic;
mod error;
mod public_key;
mod sec1;
mod secret_key;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

#[cfg(feature = "ecies")]
pub mod ecies;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{
        affine::{AffinePoint, Coordinates},
        field::FieldElement,
        scalar::{NonZeroScalar, Scalar, MAX_SAMPLING_ATTEMPTS},
        util, CURVE_EQUATION_A, CURVE_EQUATION_B, GENERATOR, MODULUS, ORDER,
    },
    error::{Error, Result},
    public_key::PublicKey,
    sec1::{EncodedPoint, TAG_UNCOMPRESSED, UNCOMPRESSED_POINT_SIZE},
    secret_key::SecretKey,
};
pub use num_bigint::{self, BigInt, BigUint};
pub use rand_core;

/// Size in bytes of a serialized field element or scalar.
pub const FIELD_BYTES_SIZE: usize = 32;

/// NIST P-256 field element serialized as bytes.
///
/// Byte array containing a serialized field element value (base field or
/// scalar) in big-endian order, left-padded with zeros.
pub type FieldBytes = [u8; FIELD_BYTES_SIZE];

/// Field modulus serialized as hexadecimal.
///
/// ```text
/// p = FFFFFFFF 00000001 00000000 00000000 00000000 FFFFFFFF FFFFFFFF FFFFFFFF
///   = 2^256 - 2^224 + 2^192 + 2^96 - 1
/// ```
const MODULUS_HEX: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// Order of NIST P-256's elliptic curve group (i.e. scalar modulus) serialized
/// as hexadecimal.
///
/// ```text
/// n = FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC632551
/// ```
///
/// # Calculating the order
/// One way to calculate the order is with `GP/PARI`:
///
/// ```text
/// p = (2^224) * (2^32 - 1) + 2^192 + 2^96 - 1
/// b = 41058363725152142129326129780047268409114441015993725554835256314039467401291
/// E = ellinit([Mod(-3, p), Mod(b, p)])
/// default(parisize, 120000000)
/// n = ellsea(E)
/// isprime(n)
/// ```
const ORDER_HEX: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// `b` coefficient of the curve equation.
const EQUATION_B_HEX: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

/// Affine x-coordinate of the base point.
const GENERATOR_X_HEX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// Affine y-coordinate of the base point.
const GENERATOR_Y_HEX: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// NIST P-256 elliptic curve.
///
/// This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG)
/// and is specified in [NIST SP 800-186]:
/// Recommendations for Discrete Logarithm-based Cryptography:
/// Elliptic Curve Domain Parameters.
///
/// Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field where `b` is
/// the "verifiably random"† constant:
///
/// ```text
/// b = 41058363725152142129326129780047268409114441015993725554835256314039467401291
/// ```
///
/// † *NOTE: the specific origins of this constant have never been fully disclosed
///   (it is the SHA-1 digest of an unknown NSA-selected constant)*
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP256;

impl NistP256 {
    /// Object identifier of the curve (`prime256v1`).
    pub const OID: &'static str = "1.2.840.10045.3.1.7";

    /// Curve name as used by JOSE.
    pub const CRV: &'static str = "P-256";
}
