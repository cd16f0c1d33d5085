#![no_main]
use libfuzzer_sys::fuzz_target;
use secp256r1::{AffinePoint, EncodedPoint, Scalar};

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let p1 = AffinePoint::mul_by_generator(&Scalar::from_bytes_reduced(&data[0..32]));
    let p2 = EncodedPoint::from_bytes(&data[32..])
        .and_then(|encoded| AffinePoint::from_encoded_point(&encoded))
        .unwrap_or_else(|_| AffinePoint::mul_by_generator(&Scalar::from_bytes_reduced(&data[32..64])));
    let s = Scalar::from_bytes_reduced(&data[64..96]);

    let sum = &p1 + &p2;
    assert!(sum.is_on_curve());

    // Addition and doubling are consistent
    assert_eq!(p1.double(), &p1 + &p1);

    // Negation
    assert_eq!(&sum + &-&sum, AffinePoint::identity());

    // Scalar multiplication distributes over scalar addition
    let scalar_mul = &p1 * &s;
    assert_eq!(&scalar_mul + &scalar_mul, &p1 * &(&s + &s));

    // Encoding round trip
    if let Some(encoded) = sum.to_encoded_point() {
        assert_eq!(AffinePoint::from_encoded_point(&encoded), Ok(sum));
    }
});
