//! Signed envelope scheme tests.

#![cfg(feature = "ecies")]

use base64::{engine::general_purpose::STANDARD, Engine};
use rand_core::OsRng;
use secp256r1::{
    ecdsa::{SigningKey, VerifyingKey},
    ecies::{
        scheme::{sign_and_encrypt, verify_and_decrypt, Opened, SignedEnvelope},
        Envelope,
    },
    Error, SecretKey,
};
use sha2::{Digest, Sha256};

struct Parties {
    sender: SecretKey,
    recipient: SecretKey,
    stranger: SecretKey,
}

fn parties() -> Parties {
    Parties {
        sender: SecretKey::random(&mut OsRng).unwrap(),
        recipient: SecretKey::random(&mut OsRng).unwrap(),
        stranger: SecretKey::random(&mut OsRng).unwrap(),
    }
}

fn seal(parties: &Parties, msg: &[u8]) -> String {
    sign_and_encrypt(
        &mut OsRng,
        &parties.sender,
        &parties.recipient.public_key(),
        msg,
    )
    .unwrap()
}

#[test]
fn round_trip() {
    let parties = parties();
    let sealed = seal(&parties, b"meet me at the usual place");

    let opened = verify_and_decrypt(
        &parties.sender.public_key(),
        &parties.recipient,
        &sealed,
    )
    .unwrap();
    assert_eq!(opened.message(), Some(&b"meet me at the usual place"[..]));
}

#[test]
fn wire_layout() {
    let parties = parties();
    let sealed = seal(&parties, b"layout");

    let segments: Vec<&str> = sealed.split('.').collect();
    assert_eq!(segments.len(), 2);

    let envelope = String::from_utf8(STANDARD.decode(segments[0]).unwrap()).unwrap();
    let signature = STANDARD.decode(segments[1]).unwrap();
    assert_eq!(signature.len(), 64);
    assert!(envelope.parse::<Envelope>().is_ok());

    // the signature covers SHA-256 of the envelope string
    let verifying_key = VerifyingKey::from(parties.sender.public_key());
    let signature = secp256r1::ecdsa::Signature::from_bytes(&signature).unwrap();
    assert!(verifying_key.verify_digest(&Sha256::digest(envelope.as_bytes()), &signature));
    assert!(verifying_key.verify_message(envelope.as_bytes(), &signature));
}

#[test]
fn wrong_sender_key() {
    let parties = parties();
    let sealed = seal(&parties, b"hi");

    let opened = verify_and_decrypt(
        &parties.stranger.public_key(),
        &parties.recipient,
        &sealed,
    )
    .unwrap();
    assert_eq!(opened, Opened::Rejected);
}

#[test]
fn wrong_recipient_key() {
    let parties = parties();
    let sealed = seal(&parties, b"hi");

    let opened =
        verify_and_decrypt(&parties.sender.public_key(), &parties.stranger, &sealed).unwrap();
    assert!(!opened.is_valid());
    assert_eq!(opened.into_message(), None);
}

#[test]
fn re_signed_by_stranger() {
    let parties = parties();
    let sealed = seal(&parties, b"hi");
    let signed = SignedEnvelope::decode(&sealed).unwrap();

    let stranger = SigningKey::from(parties.stranger.clone());
    let signature = stranger
        .sign_message_with_rng(&mut OsRng, signed.envelope_str().as_bytes())
        .unwrap();
    let forged = format!(
        "{}.{}",
        STANDARD.encode(signed.envelope_str()),
        STANDARD.encode(signature.to_bytes())
    );

    let opened =
        verify_and_decrypt(&parties.sender.public_key(), &parties.recipient, &forged).unwrap();
    assert_eq!(opened, Opened::Rejected);

    let opened =
        verify_and_decrypt(&parties.stranger.public_key(), &parties.recipient, &forged).unwrap();
    assert_eq!(opened.message(), Some(&b"hi"[..]));
}

#[test]
fn tampered_inner_ciphertext() {
    let parties = parties();
    let sealed = seal(&parties, b"tamper with me");
    let signed = SignedEnvelope::decode(&sealed).unwrap();

    let mut segments: Vec<String> = signed
        .envelope_str()
        .split('.')
        .map(String::from)
        .collect();
    let mut ciphertext = STANDARD.decode(&segments[2]).unwrap();
    ciphertext[0] ^= 1;
    segments[2] = STANDARD.encode(ciphertext);

    let forged = format!(
        "{}.{}",
        STANDARD.encode(segments.join(".")),
        STANDARD.encode(signed.signature().to_bytes())
    );
    let opened =
        verify_and_decrypt(&parties.sender.public_key(), &parties.recipient, &forged).unwrap();
    assert_eq!(opened, Opened::Rejected);
}

#[test]
fn malformed_input() {
    let parties = parties();
    let sender = parties.sender.public_key();
    let recipient = &parties.recipient;

    assert_eq!(
        verify_and_decrypt(&sender, recipient, ""),
        Err(Error::MalformedEnvelope)
    );
    assert_eq!(
        verify_and_decrypt(&sender, recipient, "a.b.c"),
        Err(Error::MalformedEnvelope)
    );

    let sealed = seal(&parties, b"hi");
    let (envelope, _) = sealed.split_once('.').unwrap();
    let short = format!("{}.{}", envelope, STANDARD.encode([0u8; 32]));
    assert_eq!(
        verify_and_decrypt(&sender, recipient, &short),
        Err(Error::MalformedSignature)
    );

    let not_utf8 = format!("{}.{}", STANDARD.encode([0xff, 0xfe]), STANDARD.encode([0u8; 64]));
    assert_eq!(
        verify_and_decrypt(&sender, recipient, &not_utf8),
        Err(Error::MalformedEnvelope)
    );
}
