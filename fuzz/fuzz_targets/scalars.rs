#![no_main]
use libfuzzer_sys::fuzz_target;
use secp256r1::{BigUint, FieldElement, Scalar};

macro_rules! test_field {
    ($ty:ty, $a:expr, $b:expr, $c:expr) => {{
        let (a, b, c): ($ty, $ty, $ty) = ($a, $b, $c);

        // Associativity
        assert_eq!(&a + &(&b + &c), &(&a + &b) + &c);
        assert_eq!(&a * &(&b * &c), &(&a * &b) * &c);

        // Commutativity
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);

        // Identity
        assert_eq!(&a + &<$ty>::zero(), a);
        assert_eq!(&a * &<$ty>::one(), a);
        assert_eq!(&a - &a, <$ty>::zero());

        // Distributivity
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));

        // Inverse
        assert_eq!(&a + &-&a, <$ty>::zero());
        match a.invert() {
            Some(inverse) => assert_eq!(&a * &inverse, <$ty>::one()),
            None => assert!(a.is_zero()),
        }

        // Serialization
        assert_eq!(<$ty>::from_bytes(&a.to_bytes()), Some(a.clone()));
    }};
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let element = |i: usize| BigUint::from_bytes_be(&data[32 * i..32 * (i + 1)]);

    test_field!(
        FieldElement,
        FieldElement::from_uint_reduced(&element(0)),
        FieldElement::from_uint_reduced(&element(1)),
        FieldElement::from_uint_reduced(&element(2))
    );
    test_field!(
        Scalar,
        Scalar::from_bytes_reduced(&data[0..32]),
        Scalar::from_bytes_reduced(&data[32..64]),
        Scalar::from_bytes_reduced(&data[64..96])
    );
});
