//! ECIES tests.

#![cfg(feature = "ecies")]

use base64::{engine::general_purpose::STANDARD, Engine};
use proptest::prelude::*;
use rand_core::OsRng;
use secp256r1::{
    ecies::{DecryptingKey, EncryptingKey, Envelope, TAG_SIZE},
    Error, PublicKey,
};

fn split(wire: &str) -> Vec<String> {
    wire.split('.').map(String::from).collect()
}

fn replace_segment(wire: &str, index: usize, bytes: &[u8]) -> String {
    let mut segments = split(wire);
    segments[index] = STANDARD.encode(bytes);
    segments.join(".")
}

#[test]
fn round_trip() {
    let decrypting_key = DecryptingKey::random(&mut OsRng).unwrap();
    let envelope = decrypting_key
        .encrypting_key()
        .encrypt_with_rng(&mut OsRng, b"the quick brown fox")
        .unwrap();

    assert_eq!(envelope.ciphertext().len(), 19 + TAG_SIZE);
    assert_eq!(decrypting_key.decrypt(&envelope).unwrap(), b"the quick brown fox");
    assert_eq!(
        decrypting_key.decrypt_str(&envelope.to_string()).unwrap(),
        b"the quick brown fox"
    );
}

#[test]
fn encryption_is_randomized() {
    let decrypting_key = DecryptingKey::random(&mut OsRng).unwrap();
    let encrypting_key = decrypting_key.encrypting_key();

    let first = encrypting_key.encrypt_with_rng(&mut OsRng, b"same").unwrap();
    let second = encrypting_key.encrypt_with_rng(&mut OsRng, b"same").unwrap();

    assert_ne!(first.ephemeral_public_key(), second.ephemeral_public_key());
    assert_ne!(first.salt(), second.salt());
    assert_ne!(first.to_string(), second.to_string());
}

#[test]
fn wrong_key_fails_authentication() {
    let alice = DecryptingKey::random(&mut OsRng).unwrap();
    let eve = DecryptingKey::random(&mut OsRng).unwrap();
    let envelope = alice
        .encrypting_key()
        .encrypt_with_rng(&mut OsRng, b"for alice")
        .unwrap();

    assert_eq!(eve.decrypt(&envelope), Err(Error::AuthenticationFailed));
}

#[test]
fn tampered_salt_and_iv_fail_authentication() {
    let decrypting_key = DecryptingKey::random(&mut OsRng).unwrap();
    let wire = decrypting_key
        .encrypting_key()
        .encrypt_with_rng(&mut OsRng, b"payload")
        .unwrap()
        .to_string();

    let mut salt = STANDARD.decode(&split(&wire)[1]).unwrap();
    salt[0] ^= 0x80;
    assert_eq!(
        decrypting_key.decrypt_str(&replace_segment(&wire, 1, &salt)),
        Err(Error::AuthenticationFailed)
    );

    let mut iv = STANDARD.decode(&split(&wire)[3]).unwrap();
    iv[11] ^= 0x01;
    assert_eq!(
        decrypting_key.decrypt_str(&replace_segment(&wire, 3, &iv)),
        Err(Error::AuthenticationFailed)
    );
}

#[test]
fn substituted_ephemeral_key_fails_authentication() {
    let decrypting_key = DecryptingKey::random(&mut OsRng).unwrap();
    let wire = decrypting_key
        .encrypting_key()
        .encrypt_with_rng(&mut OsRng, b"payload")
        .unwrap()
        .to_string();

    let other = DecryptingKey::random(&mut OsRng).unwrap();
    let forged = replace_segment(
        &wire,
        0,
        other.encrypting_key().to_encoded_point().as_bytes(),
    );
    assert_eq!(
        decrypting_key.decrypt_str(&forged),
        Err(Error::AuthenticationFailed)
    );
}

#[test]
fn malformed_envelopes() {
    let decrypting_key = DecryptingKey::random(&mut OsRng).unwrap();
    let wire = decrypting_key
        .encrypting_key()
        .encrypt_with_rng(&mut OsRng, b"payload")
        .unwrap()
        .to_string();

    assert!(wire.parse::<Envelope>().is_ok());
    assert_eq!("a.b.c".parse::<Envelope>(), Err(Error::MalformedEnvelope));
    assert_eq!(
        replace_segment(&wire, 1, &[0; 31]).parse::<Envelope>(),
        Err(Error::MalformedEnvelope)
    );

    let mut off_curve = decrypting_key.encrypting_key().to_encoded_point().to_bytes();
    off_curve[64] ^= 1;
    assert_eq!(
        replace_segment(&wire, 0, &off_curve).parse::<Envelope>(),
        Err(Error::PointNotOnCurve)
    );
}

#[test]
fn encrypting_key_from_public_key() {
    let decrypting_key = DecryptingKey::random(&mut OsRng).unwrap();
    let public_key = PublicKey::from_base64(
        &decrypting_key.encrypting_key().as_public_key().to_base64(),
    )
    .unwrap();

    let envelope = EncryptingKey::from(&public_key)
        .encrypt_with_rng(&mut OsRng, b"")
        .unwrap();
    assert_eq!(envelope.ciphertext().len(), TAG_SIZE);
    assert!(decrypting_key.decrypt(&envelope).unwrap().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn tampered_ciphertext_rejected(msg in proptest::collection::vec(any::<u8>(), 1..64), bit in any::<usize>()) {
        let decrypting_key = DecryptingKey::random(&mut OsRng).unwrap();
        let wire = decrypting_key
            .encrypting_key()
            .encrypt_with_rng(&mut OsRng, &msg)
            .unwrap()
            .to_string();

        let mut ciphertext = STANDARD.decode(&split(&wire)[2]).unwrap();
        let bit = bit % (ciphertext.len() * 8);
        ciphertext[bit / 8] ^= 1 << (bit % 8);

        prop_assert_eq!(
            decrypting_key.decrypt_str(&replace_segment(&wire, 2, &ciphertext)),
            Err(Error::AuthenticationFailed)
        );
    }
}
