//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces: they operate on
//! message digests rather than messages and [`sign_prehashed`] takes the
//! ephemeral scalar `k` from the caller. Reusing `k` across two messages
//! reveals the secret key.

use super::Signature;
use crate::{AffinePoint, Error, NonZeroScalar, Result, Scalar, MAX_SAMPLING_ATTEMPTS, ORDER};
use rand_core::CryptoRngCore;

/// Convert a message digest into a scalar: interpret its leading 32 bytes as
/// a big-endian integer and reduce modulo n.
pub fn bits2int(prehash: &[u8]) -> Scalar {
    Scalar::from_bytes_reduced(prehash)
}

/// Sign a message digest with secret scalar `d` and ephemeral scalar `k`.
///
/// Returns `None` when `k` yields a degenerate signature (`k·G = ∞`, `r = 0`
/// or `s = 0`); the caller must then pick a fresh `k`.
pub fn sign_prehashed(d: &NonZeroScalar, k: &NonZeroScalar, prehash: &[u8]) -> Option<Signature> {
    let x = match AffinePoint::mul_by_generator(k) {
        AffinePoint::Infinity => return None,
        AffinePoint::Affine(point) => point.x().clone(),
    };

    let r = Scalar::from_uint_reduced(x.as_uint());
    if r.is_zero() {
        return None;
    }

    let z = bits2int(prehash);
    let s = k.invert().multiply(&z.add(&r.multiply(d)));
    if s.is_zero() {
        return None;
    }

    Some(Signature::from_scalars(r, s))
}

/// Sign a message digest with secret scalar `d`, drawing ephemeral scalars
/// from `rng` until one yields a non-degenerate signature.
pub fn sign_prehashed_with_rng(
    rng: &mut impl CryptoRngCore,
    d: &NonZeroScalar,
    prehash: &[u8],
) -> Result<Signature> {
    for attempt in 0..MAX_SAMPLING_ATTEMPTS {
        let k = NonZeroScalar::random(rng)?;

        if let Some(signature) = sign_prehashed(d, &k, prehash) {
            return Ok(signature);
        }

        tracing::debug!(attempt, "degenerate ECDSA nonce, retrying");
    }

    tracing::warn!(
        attempts = MAX_SAMPLING_ATTEMPTS,
        "no ECDSA nonce produced a valid signature"
    );
    Err(Error::SamplingExhausted)
}

/// Verify a signature over a message digest.
///
/// Never fails: every rejection reason (invalid public key, out-of-range
/// `r` or `s`, mismatch) yields `false`.
pub fn verify_prehashed(public_key: &AffinePoint, prehash: &[u8], signature: &Signature) -> bool {
    if public_key.is_identity() {
        tracing::trace!("public key is the point at infinity");
        return false;
    }

    if !public_key.is_on_curve() {
        tracing::trace!("public key is not on the curve");
        return false;
    }

    if !public_key.mul_uint(&ORDER).is_identity() {
        tracing::trace!("public key is not in the prime-order subgroup");
        return false;
    }

    let (r, s) = match (
        NonZeroScalar::from_uint(signature.r().clone()),
        NonZeroScalar::from_uint(signature.s().clone()),
    ) {
        (Some(r), Some(s)) => (r, s),
        _ => {
            tracing::trace!("signature component outside [1, n-1]");
            return false;
        }
    };

    let z = bits2int(prehash);
    let w = s.invert();
    let u1 = z.multiply(&w);
    let u2 = r.multiply(&w);

    let point = AffinePoint::mul_by_generator(&u1).add(&public_key.mul_uint(u2.as_uint()));

    match point {
        AffinePoint::Infinity => {
            tracing::trace!("u1·G + u2·Q is the point at infinity");
            false
        }
        AffinePoint::Affine(point) => {
            let valid = Scalar::from_uint_reduced(point.x().as_uint()) == *r;

            if !valid {
                tracing::trace!("signature does not match");
            }

            valid
        }
    }
}
