//! Macros for implementing arithmetic modulo a prime over [`BigUint`].
//!
//! [`BigUint`]: num_bigint::BigUint

/// Implement modular arithmetic for a newtype wrapping a canonical
/// [`BigUint`] residue in `[0, modulus)`.
///
/// The modulus is given as a `lazy_static` reference and must be prime for
/// `invert` to succeed on every nonzero element.
///
/// [`BigUint`]: num_bigint::BigUint
macro_rules! modular_arithmetic {
    ($name:ident, $modulus:ident) => {
        impl $name {
            /// Zero element.
            pub fn zero() -> Self {
                Self(num_bigint::BigUint::default())
            }

            /// Multiplicative identity.
            pub fn one() -> Self {
                Self(num_bigint::BigUint::from(1u8))
            }

            /// Create an element from a canonical integer, returning `None`
            /// if it is not in `[0, modulus)`.
            pub fn from_uint(uint: num_bigint::BigUint) -> Option<Self> {
                (uint < *$modulus).then(|| Self(uint))
            }

            /// Create an element by reducing an arbitrary non-negative integer.
            pub fn from_uint_reduced(uint: &num_bigint::BigUint) -> Self {
                Self(uint % &*$modulus)
            }

            /// Create an element by reducing an arbitrary signed integer into
            /// its canonical non-negative residue.
            pub fn from_int_reduced(int: &num_bigint::BigInt) -> Self {
                Self($crate::arithmetic::util::reduce(int, &$modulus))
            }

            /// Decode an element from big-endian bytes, returning `None` if
            /// the encoded integer is not canonical.
            pub fn from_bytes(bytes: &$crate::FieldBytes) -> Option<Self> {
                Self::from_uint(num_bigint::BigUint::from_bytes_be(bytes))
            }

            /// Encode the element as left-padded big-endian bytes.
            pub fn to_bytes(&self) -> $crate::FieldBytes {
                $crate::arithmetic::util::to_be_bytes_padded(&self.0)
            }

            /// Borrow the canonical integer.
            pub fn as_uint(&self) -> &num_bigint::BigUint {
                &self.0
            }

            /// Convert into the canonical integer.
            pub fn into_uint(self) -> num_bigint::BigUint {
                self.0
            }

            /// Determine if this element is zero.
            pub fn is_zero(&self) -> bool {
                num_traits::Zero::is_zero(&self.0)
            }

            /// Returns `self + rhs mod modulus`.
            pub fn add(&self, rhs: &Self) -> Self {
                let sum = &self.0 + &rhs.0;

                if sum >= *$modulus {
                    Self(sum - &*$modulus)
                } else {
                    Self(sum)
                }
            }

            /// Returns `2 * self mod modulus`.
            pub fn double(&self) -> Self {
                self.add(self)
            }

            /// Returns `self - rhs mod modulus`.
            pub fn sub(&self, rhs: &Self) -> Self {
                if self.0 >= rhs.0 {
                    Self(&self.0 - &rhs.0)
                } else {
                    Self(&*$modulus - &rhs.0 + &self.0)
                }
            }

            /// Returns `self * rhs mod modulus`.
            pub fn multiply(&self, rhs: &Self) -> Self {
                Self((&self.0 * &rhs.0) % &*$modulus)
            }

            /// Returns `self * self mod modulus`.
            pub fn square(&self) -> Self {
                self.multiply(self)
            }

            /// Returns `-self mod modulus`.
            pub fn neg(&self) -> Self {
                if self.is_zero() {
                    Self::zero()
                } else {
                    Self(&*$modulus - &self.0)
                }
            }

            /// Returns the multiplicative inverse of `self`, or `None` if
            /// `self` is zero.
            pub fn invert(&self) -> Option<Self> {
                $crate::arithmetic::util::invert(&self.0, &$modulus)
                    .ok()
                    .map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> $name {
                Self::from_uint_reduced(&num_bigint::BigUint::from(n))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{:064x}", self.0)
            }
        }

        field_op!($name, Add, add, add, AddAssign, add_assign);
        field_op!($name, Sub, sub, sub, SubAssign, sub_assign);
        field_op!($name, Mul, mul, multiply, MulAssign, mul_assign);

        impl core::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                <$name>::neg(&self)
            }
        }

        impl core::ops::Neg for &$name {
            type Output = $name;

            fn neg(self) -> $name {
                <$name>::neg(self)
            }
        }
    };
}

/// Emit impls for a `core::ops` trait for all combinations of reference types,
/// which thunk to the given function.
macro_rules! field_op {
    ($name:tt, $op:tt, $op_fn:ident, $func:ident, $assign:tt, $assign_fn:ident) => {
        impl core::ops::$op for $name {
            type Output = $name;

            #[inline]
            fn $op_fn(self, rhs: $name) -> $name {
                <$name>::$func(&self, &rhs)
            }
        }

        impl core::ops::$op<&$name> for $name {
            type Output = $name;

            #[inline]
            fn $op_fn(self, rhs: &$name) -> $name {
                <$name>::$func(&self, rhs)
            }
        }

        impl core::ops::$op<&$name> for &$name {
            type Output = $name;

            #[inline]
            fn $op_fn(self, rhs: &$name) -> $name {
                <$name>::$func(self, rhs)
            }
        }

        impl core::ops::$assign for $name {
            #[inline]
            fn $assign_fn(&mut self, rhs: $name) {
                *self = <$name>::$func(self, &rhs);
            }
        }

        impl core::ops::$assign<&$name> for $name {
            #[inline]
            fn $assign_fn(&mut self, rhs: &$name) {
                *self = <$name>::$func(self, rhs);
            }
        }
    };
}
