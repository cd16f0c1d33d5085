//! Pure Rust implementation of group operations on secp256r1.
//!
//! Field elements and scalars are canonical residues held in [`BigUint`]s and
//! points are kept in affine coordinates, so every addition costs one field
//! inversion.

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod scalar;
pub mod util;

use self::{
    affine::{AffinePoint, Coordinates},
    field::FieldElement,
};
use crate::{EQUATION_B_HEX, GENERATOR_X_HEX, GENERATOR_Y_HEX, MODULUS_HEX, ORDER_HEX};
use num_bigint::BigUint;
use num_traits::Num;

lazy_static::lazy_static! {
    /// Field modulus `p`.
    pub static ref MODULUS: BigUint = uint_from_hex(MODULUS_HEX);

    /// Group order `n` (scalar modulus).
    pub static ref ORDER: BigUint = uint_from_hex(ORDER_HEX);

    /// a = -3 (mod p)
    pub static ref CURVE_EQUATION_A: FieldElement = FieldElement::from(3).neg();

    /// b = 0x5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B
    pub static ref CURVE_EQUATION_B: FieldElement =
        FieldElement::from_uint_reduced(&uint_from_hex(EQUATION_B_HEX));

    /// Base point of the prime-order group.
    pub static ref GENERATOR: AffinePoint = AffinePoint::Affine(Coordinates::new_unchecked(
        FieldElement::from_uint_reduced(&uint_from_hex(GENERATOR_X_HEX)),
        FieldElement::from_uint_reduced(&uint_from_hex(GENERATOR_Y_HEX)),
    ));
}

/// Parse one of the curve's hexadecimal constants.
fn uint_from_hex(hex: &str) -> BigUint {
    BigUint::from_str_radix(hex, 16).expect("curve constants are valid hex")
}

#[cfg(test)]
mod tests {
    use super::{CURVE_EQUATION_A, GENERATOR, MODULUS, ORDER};
    use crate::FieldElement;
    use num_bigint::BigUint;

    #[test]
    fn equation_a_is_p_minus_three() {
        let expected = &*MODULUS - BigUint::from(3u8);
        assert_eq!(CURVE_EQUATION_A.as_uint(), &expected);
        assert_eq!(&*CURVE_EQUATION_A + &FieldElement::from(3), FieldElement::zero());
    }

    #[test]
    fn modulus_matches_generalized_mersenne_form() {
        let two = BigUint::from(2u8);
        let expected = two.pow(256) - two.pow(224) + two.pow(192) + two.pow(96) - 1u8;
        assert_eq!(*MODULUS, expected);
    }

    #[test]
    fn order_is_less_than_modulus() {
        assert!(*ORDER < *MODULUS);
        assert_eq!(ORDER.bits(), 256);
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(GENERATOR.is_on_curve());
        assert!(!GENERATOR.is_identity());
    }
}
