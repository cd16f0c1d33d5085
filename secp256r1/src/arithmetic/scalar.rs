//! Scalar field arithmetic modulo n = 115792089210356248762697446949407573529996955224135760342422259061068512044369

#![allow(clippy::op_ref, clippy::should_implement_trait)]

use super::ORDER;
use crate::{Error, FieldBytes, Result, FIELD_BYTES_SIZE};
use core::{fmt, ops::Deref};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

/// Upper bound on rejection-sampling draws before giving up.
///
/// A single draw is rejected with probability below 2^-32, so reaching the
/// bound means the random source is broken.
pub const MAX_SAMPLING_ATTEMPTS: usize = 1 << 16;

/// Scalars are elements in the finite field modulo n.
///
/// # Trait impls
///
/// Much of the important functionality of scalars is provided by traits from
/// [`core::ops`], implemented for both owned and borrowed operands:
///
/// - [`Add`](core::ops::Add), [`Sub`](core::ops::Sub) and [`Mul`](core::ops::Mul)
/// - the `*Assign` variants of the above
/// - [`Neg`](core::ops::Neg)
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Scalar(BigUint);

modular_arithmetic!(Scalar, ORDER);

impl Scalar {
    /// Interpret the leading 32 bytes of `bytes` as a big-endian integer and
    /// reduce it modulo n.
    ///
    /// This is the conversion ECDSA applies to message digests.
    pub fn from_bytes_reduced(bytes: &[u8]) -> Self {
        let len = bytes.len().min(FIELD_BYTES_SIZE);
        Self::from_uint_reduced(&BigUint::from_bytes_be(&bytes[..len]))
    }
}

/// Non-zero scalar in `[1, n)`.
///
/// Used for secret keys and ECDSA nonces.
#[derive(Clone, Eq, PartialEq)]
pub struct NonZeroScalar(Scalar);

impl NonZeroScalar {
    /// Create a [`NonZeroScalar`], returning `None` if `scalar` is zero.
    pub fn new(scalar: Scalar) -> Option<Self> {
        (!scalar.is_zero()).then(|| Self(scalar))
    }

    /// Create a [`NonZeroScalar`] from a canonical integer in `[1, n)`.
    pub fn from_uint(uint: BigUint) -> Option<Self> {
        Scalar::from_uint(uint).and_then(Self::new)
    }

    /// Decode a [`NonZeroScalar`] from big-endian bytes, returning `None` if
    /// the value is zero or not less than n.
    pub fn from_bytes(bytes: &FieldBytes) -> Option<Self> {
        Scalar::from_bytes(bytes).and_then(Self::new)
    }

    /// Draw a uniformly random scalar in `[1, n)` by rejection sampling
    /// 32-byte strings from `rng`.
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self> {
        let mut bytes = FieldBytes::default();

        for attempt in 0..MAX_SAMPLING_ATTEMPTS {
            rng.fill_bytes(&mut bytes);

            if let Some(scalar) = Self::from_bytes(&bytes) {
                return Ok(scalar);
            }

            tracing::trace!(attempt, "rejected out-of-range scalar sample");
        }

        tracing::warn!(
            attempts = MAX_SAMPLING_ATTEMPTS,
            "random source never produced a scalar in [1, n)"
        );
        Err(Error::SamplingExhausted)
    }

    /// Multiplicative inverse modulo n.
    ///
    /// # Panics
    ///
    /// Panics if the inverse does not exist, which would mean the group order
    /// is not prime.
    pub fn invert(&self) -> Scalar {
        self.0
            .invert()
            .expect("nonzero scalars are invertible modulo the prime group order")
    }

    /// Borrow the inner [`Scalar`].
    pub fn as_scalar(&self) -> &Scalar {
        &self.0
    }
}

impl AsRef<Scalar> for NonZeroScalar {
    fn as_ref(&self) -> &Scalar {
        &self.0
    }
}

impl Deref for NonZeroScalar {
    type Target = Scalar;

    fn deref(&self) -> &Scalar {
        &self.0
    }
}

impl From<NonZeroScalar> for Scalar {
    fn from(scalar: NonZeroScalar) -> Scalar {
        scalar.0
    }
}

impl TryFrom<Scalar> for NonZeroScalar {
    type Error = Error;

    fn try_from(scalar: Scalar) -> Result<Self> {
        Self::new(scalar).ok_or(Error::ZeroScalar)
    }
}

impl fmt::Debug for NonZeroScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NonZeroScalar(...)")
    }
}
