//! Field arithmetic modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1

#![allow(clippy::op_ref, clippy::should_implement_trait)]

use super::MODULUS;
use num_bigint::BigUint;

/// An element in the finite field modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1.
///
/// Always holds the canonical residue in `[0, p)`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FieldElement(BigUint);

modular_arithmetic!(FieldElement, MODULUS);

impl FieldElement {
    /// Returns `self³`.
    pub fn cube(&self) -> Self {
        self.square().multiply(self)
    }
}
