//! Affine arithmetic and key encoding tests.

#![cfg(feature = "ecies")]

use hex_literal::hex;
use proptest::prelude::*;
use secp256r1::{
    AffinePoint, BigInt, BigUint, Coordinates, EncodedPoint, Error, PublicKey, Scalar, SecretKey,
};

const UNCOMPRESSED_BASEPOINT: &[u8] = &hex!(
    "04 6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296
        4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"
);

fn decimal(s: &str) -> BigUint {
    s.parse().expect("decimal")
}

fn secret_key(d: &str) -> SecretKey {
    let bytes = secp256r1::util::to_be_bytes_padded::<32>(&decimal(d));
    SecretKey::from_bytes(&bytes).expect("in range")
}

#[test]
fn uncompressed_round_trip() {
    let pubkey = EncodedPoint::from_bytes(UNCOMPRESSED_BASEPOINT).unwrap();
    let point = AffinePoint::from_encoded_point(&pubkey).unwrap();
    assert_eq!(point, AffinePoint::generator());

    let res = point.to_encoded_point().unwrap();
    assert_eq!(res, pubkey);
}

#[test]
fn compressed_points_rejected() {
    let compressed = hex!("03 6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296");
    assert_eq!(
        EncodedPoint::from_bytes(&compressed),
        Err(Error::MalformedKey)
    );

    let mut wrong_tag = UNCOMPRESSED_BASEPOINT.to_vec();
    wrong_tag[0] = 0x05;
    assert_eq!(EncodedPoint::from_bytes(&wrong_tag), Err(Error::MalformedKey));
}

#[test]
fn affine_negation() {
    let basepoint = AffinePoint::generator();
    assert_eq!(-(-basepoint.clone()), basepoint);
    assert_eq!(&basepoint + &-&basepoint, AffinePoint::identity());
}

#[test]
fn identity_has_no_encoding() {
    assert!(AffinePoint::identity().to_encoded_point().is_none());
    assert_eq!(
        PublicKey::from_affine(AffinePoint::identity()),
        Err(Error::MalformedKey)
    );
}

#[test]
fn parse_base64_key_of_known_secret() {
    let encoded =
        "BK0BoBphDGOeiuNqHzQabXhSAB+vTU85xDIFgibnImE40TAuxEuv3N+ar7HqDXfJVa2Zd1Sn7kZe+i2PkXyLDt4=";
    let d = secret_key(
        "61361177301120546798353184446776238059365544349563880419457840251303464899864",
    );

    assert!(PublicKey::is_valid_base64(encoded));
    let public_key = PublicKey::from_base64(encoded).unwrap();
    assert!(public_key.as_affine().is_on_curve());
    assert_eq!(public_key, d.public_key());
    assert_eq!(public_key.to_base64(), encoded);
}

#[test]
fn parse_base64_key_off_curve() {
    for encoded in [
        "BIggmIpM8FE/khj8PzhL0fihwFJxucVbSOX/RPV7jFi1AH0uIr1gQWf21ybWvQ9F30dv510F/ym4uV+85nn1XdI=",
        "BMoyo0heUlP47wQ6cLI/w0+H6QKrpajIulcsy8zYoTS5AL6eNlZ3T/lBPEB+sxVrg8eTgzRCPQB5U/XPPhZjnEw=",
    ] {
        assert!(!PublicKey::is_valid_base64(encoded));
        assert_eq!(PublicKey::from_base64(encoded), Err(Error::PointNotOnCurve));

        let bytes = EncodedPoint::from_bytes(
            &base64::Engine::decode(&base64::engine::general_purpose::STANDARD, encoded).unwrap(),
        )
        .unwrap();
        assert!(!bytes.is_on_curve());
    }
}

#[test]
fn leading_zero_coordinate_round_trip() {
    let d = secret_key(
        "91911031212055937943075599530209940377312524244214428406112119031385011201007",
    );
    let expected: AffinePoint = Coordinates::from_uints(
        decimal("2068152062813992596252679913034127308650187859897158051694209218341442256524"),
        decimal("84985869280810938822619903456973871732398535116278624509039233274490587561469"),
    )
    .unwrap()
    .into();
    assert_eq!(d.public_key().as_affine(), &expected);

    // x has fewer than 32 significant bytes and must be left-padded
    let public_key = d.public_key();
    assert_eq!(
        public_key.to_base64(),
        "BASSiFeE+68nRD4UhjBG3QJQ67tNwJRoZdPYInFDIX6Mu+RMIpQ6Ey4D8BFwRKZHAFovQ1eHxhiOECxr+079vf0="
    );
    assert_eq!(PublicKey::from_base64(&public_key.to_base64()), Ok(public_key));

    // same coordinates with x shifted by one byte
    let shifted =
        "BABJKIV4T7rydEPhSGMEbdAlDru03AlGhl09gicUMhfou+RMIpQ6Ey4D8BFwRKZHAFovQ1eHxhiOECxr+079vf0=";
    assert_eq!(PublicKey::from_base64(shifted), Err(Error::PointNotOnCurve));
}

#[test]
fn malformed_base64_keys() {
    assert_eq!(PublicKey::from_base64("not base64!"), Err(Error::MalformedKey));
    assert_eq!(PublicKey::from_base64("BAEC"), Err(Error::MalformedKey));
    assert!(!PublicKey::is_valid_base64(""));
}

#[test]
fn spki_der_round_trip() {
    let d = secret_key("1");
    let der = d.public_key().to_public_key_der();
    assert_eq!(der.len(), 91);
    assert_eq!(&der[der.len() - 65..], UNCOMPRESSED_BASEPOINT);
    assert_eq!(PublicKey::from_public_key_der(&der), Ok(d.public_key()));
    assert_eq!(
        PublicKey::from_public_key_der(&der[1..]),
        Err(Error::MalformedKey)
    );
}

#[test]
fn signed_multiples() {
    let g = AffinePoint::generator();
    let k = BigInt::from(-5);
    let five = Scalar::from(5);

    assert_eq!(&g * &k, -(&g * &five));
    assert_eq!(&g * &BigInt::from(0), AffinePoint::identity());
}

prop_compose! {
    fn point()(bytes in any::<[u8; 32]>()) -> AffinePoint {
        AffinePoint::mul_by_generator(&Scalar::from_bytes_reduced(&bytes))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn negation_stays_on_curve(p in point()) {
        let neg = -&p;
        prop_assert!(neg.is_on_curve());
        prop_assert!((&p + &neg).is_identity());
        prop_assert_eq!(-neg, p);
    }
}
