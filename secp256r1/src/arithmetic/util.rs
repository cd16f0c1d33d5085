//! Integer helpers shared by the field, scalar and encoding layers.

use crate::{Error, Result};
use alloc::vec::Vec;
use core::mem;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduce a signed integer into the canonical residue in `[0, modulus)`.
pub fn reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
    value.mod_floor(&modulus).into_parts().1
}

/// Compute the multiplicative inverse of `value` modulo `modulus` with the
/// iterative extended Euclidean algorithm.
///
/// `value` is reduced first, so any non-negative input is accepted. Returns
/// [`Error::InverseDoesNotExist`] when `gcd(value, modulus) != 1`, which
/// includes `value ≡ 0`.
pub fn invert(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InverseDoesNotExist);
    }

    let mut old_r = BigInt::from(value % modulus);
    let mut r = BigInt::from(modulus.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = old_r.div_floor(&r);

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::InverseDoesNotExist);
    }

    Ok(reduce(&old_s, modulus))
}

/// Minimal big-endian encoding with no leading zero bytes.
///
/// Zero encodes as a single `0x00` byte.
pub fn to_be_bytes_minimal(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Big-endian encoding left-padded with zeros to exactly `N` bytes.
///
/// Values wider than `N` bytes keep their `N` least significant bytes.
pub fn to_be_bytes_padded<const N: usize>(value: &BigUint) -> [u8; N] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; N];

    if bytes.len() >= N {
        out.copy_from_slice(&bytes[bytes.len() - N..]);
    } else {
        out[N - bytes.len()..].copy_from_slice(&bytes);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{invert, reduce, to_be_bytes_minimal, to_be_bytes_padded};
    use crate::{Error, MODULUS, ORDER};
    use hex_literal::hex;
    use num_bigint::{BigInt, BigUint};

    fn uint(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn reduce_negative() {
        assert_eq!(reduce(&BigInt::from(-1), &uint(13)), uint(12));
        assert_eq!(reduce(&BigInt::from(-26), &uint(13)), uint(0));
        assert_eq!(reduce(&BigInt::from(40), &uint(13)), uint(1));
    }

    #[test]
    fn invert_small_moduli() {
        assert_eq!(invert(&uint(11), &uint(13)), Ok(uint(6)));
        assert_eq!(invert(&uint(3), &uint(23)), Ok(uint(8)));
        assert_eq!(invert(&uint(1), &uint(23)), Ok(uint(1)));
    }

    #[test]
    fn invert_without_inverse() {
        assert_eq!(invert(&uint(0), &uint(13)), Err(Error::InverseDoesNotExist));
        assert_eq!(invert(&uint(26), &uint(13)), Err(Error::InverseDoesNotExist));
        assert_eq!(invert(&uint(6), &uint(9)), Err(Error::InverseDoesNotExist));
    }

    #[test]
    fn invert_curve_moduli() {
        for modulus in [&*MODULUS, &*ORDER] {
            let value = modulus - uint(2);
            let inverse = invert(&value, modulus).expect("prime modulus");
            assert_eq!((value * inverse) % modulus, uint(1));
        }
    }

    #[test]
    fn padded_encoding() {
        assert_eq!(to_be_bytes_padded::<4>(&uint(0x0102)), hex!("00000102"));
        assert_eq!(to_be_bytes_padded::<2>(&uint(0x010203)), hex!("0203"));
        assert_eq!(to_be_bytes_padded::<2>(&uint(0)), [0, 0]);
    }

    #[test]
    fn minimal_encoding() {
        assert_eq!(to_be_bytes_minimal(&uint(0x0102)), hex!("0102"));
        assert_eq!(to_be_bytes_minimal(&uint(0)), [0]);
    }
}
