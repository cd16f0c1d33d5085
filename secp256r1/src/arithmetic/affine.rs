//! Affine points

#![allow(clippy::op_ref, clippy::should_implement_trait)]

use super::{field::FieldElement, scalar::Scalar, CURVE_EQUATION_A, CURVE_EQUATION_B, GENERATOR};
use crate::{EncodedPoint, Error, NonZeroScalar, Result};
use core::ops::{Add, Mul, Neg};
use num_bigint::{BigInt, BigUint, Sign};

/// Coordinates `(x, y)` of a finite point known to satisfy the curve equation.
///
/// The only way to obtain [`Coordinates`] is through [`Coordinates::new`],
/// which validates the point, so every [`AffinePoint::Affine`] is on the
/// curve.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coordinates {
    x: FieldElement,
    y: FieldElement,
}

impl Coordinates {
    /// Validate that `(x, y)` satisfies `y² = x³ + ax + b`.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        if satisfies_curve_equation(&x, &y) {
            Ok(Self { x, y })
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Validate raw integer coordinates, rejecting any that are not reduced
    /// modulo p.
    pub fn from_uints(x: BigUint, y: BigUint) -> Result<Self> {
        match (FieldElement::from_uint(x), FieldElement::from_uint(y)) {
            (Some(x), Some(y)) => Self::new(x, y),
            _ => Err(Error::PointNotOnCurve),
        }
    }

    /// Skip validation. Only for constants known to be on the curve.
    pub(crate) fn new_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &FieldElement {
        &self.y
    }
}

/// NIST P-256 (secp256r1) curve point expressed in affine coordinates, or
/// the point at infinity.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum AffinePoint {
    /// Point at infinity: the identity of the group law.
    Infinity,

    /// Finite point on the curve.
    Affine(Coordinates),
}

/// Slope of the chord through two points, or of the tangent at one.
enum Slope {
    /// The line is vertical and meets the curve again at infinity.
    Vertical,
    Finite(FieldElement),
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub fn identity() -> Self {
        Self::Infinity
    }

    /// Base point of NIST P-256.
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Does this point satisfy the curve equation?
    ///
    /// The point at infinity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Affine(point) => satisfies_curve_equation(&point.x, &point.y),
        }
    }

    /// Coordinates of a finite point.
    pub fn coordinates(&self) -> Option<&Coordinates> {
        match self {
            Self::Infinity => None,
            Self::Affine(point) => Some(point),
        }
    }

    /// Affine x-coordinate of a finite point.
    pub fn x(&self) -> Option<&FieldElement> {
        self.coordinates().map(Coordinates::x)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Affine(point) => Self::Affine(Coordinates {
                x: point.x.clone(),
                y: -&point.y,
            }),
        }
    }

    /// Returns `self + other` under the chord-and-tangent group law.
    pub fn add(&self, other: &Self) -> Self {
        let (p1, p2) = match (self, other) {
            (Self::Infinity, _) => return other.clone(),
            (_, Self::Infinity) => return self.clone(),
            (Self::Affine(p1), Self::Affine(p2)) => (p1, p2),
        };

        debug_assert!(satisfies_curve_equation(&p1.x, &p1.y));
        debug_assert!(satisfies_curve_equation(&p2.x, &p2.y));

        match slope(p1, p2) {
            Slope::Vertical => Self::Infinity,
            Slope::Finite(m) => {
                let x = &(&m.square() - &p1.x) - &p2.x;
                let y = &(&m * &(&p1.x - &x)) - &p1.y;
                Self::Affine(Coordinates { x, y })
            }
        }
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Multiply by a non-negative integer with least-significant-bit-first
    /// double-and-add.
    ///
    /// This is **not** constant time: the sequence of group operations
    /// depends on the bits of `k`.
    pub fn mul_uint(&self, k: &BigUint) -> Self {
        let bits = k.bits();
        let mut result = Self::Infinity;
        let mut addend = self.clone();

        for i in 0..bits {
            if k.bit(i) {
                result = result.add(&addend);
            }

            if i + 1 < bits {
                addend = addend.double();
            }
        }

        result
    }

    /// Multiply by a signed integer: `k·P` for `k ≥ 0`, `|k|·(-P)` otherwise.
    ///
    /// `k` is not reduced modulo the group order, so `n·P` is the identity
    /// for every point of the prime-order group.
    pub fn mul_int(&self, k: &BigInt) -> Self {
        match k.sign() {
            Sign::Minus => self.neg().mul_uint(k.magnitude()),
            Sign::NoSign | Sign::Plus => self.mul_uint(k.magnitude()),
        }
    }

    /// Returns `k·G`.
    pub fn mul_by_generator(k: &Scalar) -> Self {
        GENERATOR.mul_uint(k.as_uint())
    }

    /// Decode a SEC1 uncompressed point, checking that it is on the curve.
    pub fn from_encoded_point(encoded: &EncodedPoint) -> Result<Self> {
        let x = BigUint::from_bytes_be(&encoded.x());
        let y = BigUint::from_bytes_be(&encoded.y());
        Coordinates::from_uints(x, y).map(Self::Affine)
    }

    /// Encode a finite point as SEC1 uncompressed bytes.
    ///
    /// Returns `None` for the point at infinity, which has no uncompressed
    /// encoding.
    pub fn to_encoded_point(&self) -> Option<EncodedPoint> {
        self.coordinates().map(|point| {
            EncodedPoint::from_affine_coordinates(&point.x.to_bytes(), &point.y.to_bytes())
        })
    }
}

impl From<Coordinates> for AffinePoint {
    fn from(point: Coordinates) -> AffinePoint {
        AffinePoint::Affine(point)
    }
}

impl TryFrom<&EncodedPoint> for AffinePoint {
    type Error = Error;

    fn try_from(encoded: &EncodedPoint) -> Result<AffinePoint> {
        AffinePoint::from_encoded_point(encoded)
    }
}

impl Add<&AffinePoint> for &AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: &AffinePoint) -> AffinePoint {
        AffinePoint::add(self, other)
    }
}

impl Add<&AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: &AffinePoint) -> AffinePoint {
        AffinePoint::add(&self, other)
    }
}

impl Add for AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: AffinePoint) -> AffinePoint {
        AffinePoint::add(&self, &other)
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint::neg(self)
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint::neg(&self)
    }
}

impl Mul<&Scalar> for &AffinePoint {
    type Output = AffinePoint;

    fn mul(self, scalar: &Scalar) -> AffinePoint {
        self.mul_uint(scalar.as_uint())
    }
}

impl Mul<&NonZeroScalar> for &AffinePoint {
    type Output = AffinePoint;

    fn mul(self, scalar: &NonZeroScalar) -> AffinePoint {
        self.mul_uint(scalar.as_uint())
    }
}

impl Mul<&BigInt> for &AffinePoint {
    type Output = AffinePoint;

    fn mul(self, k: &BigInt) -> AffinePoint {
        self.mul_int(k)
    }
}

fn satisfies_curve_equation(x: &FieldElement, y: &FieldElement) -> bool {
    let lhs = y.square();
    let rhs = &(&x.cube() + &(&*CURVE_EQUATION_A * x)) + &*CURVE_EQUATION_B;
    lhs == rhs
}

fn slope(p1: &Coordinates, p2: &Coordinates) -> Slope {
    // P + (-P), including the tangent at a point with y = 0
    if p1.x == p2.x && p1.y == -&p2.y {
        return Slope::Vertical;
    }

    let (numerator, denominator) = if p1 == p2 {
        let xx = p1.x.square();
        (&(&xx.double() + &xx) + &*CURVE_EQUATION_A, p1.y.double())
    } else {
        (&p2.y - &p1.y, &p2.x - &p1.x)
    };

    let inverse = denominator
        .invert()
        .expect("distinct on-curve points that are not inverses have distinct x");

    Slope::Finite(&numerator * &inverse)
}
