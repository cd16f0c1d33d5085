#![no_main]
use libfuzzer_sys::fuzz_target;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};
use secp256r1::{
    ecdsa::{verify_message, Signature},
    ecies::{
        scheme::{verify_and_decrypt, SignedEnvelope},
        Envelope,
    },
    EncodedPoint, PublicKey, SecretKey,
};

fuzz_target!(|data: &[u8]| {
    // Binary decoders never panic
    let _ = EncodedPoint::from_bytes(data);
    let _ = PublicKey::from_sec1_bytes(data);
    let _ = PublicKey::from_public_key_der(data);
    let _ = SecretKey::from_slice(data);

    if let Ok(signature) = Signature::from_bytes(data) {
        assert_eq!(&signature.to_bytes()[..], data);
    }

    if let Ok(signature) = Signature::from_der(data) {
        let der = signature.to_der().expect("encodable");
        assert_eq!(Signature::from_der(&der), Ok(signature));
    }

    if data.len() >= 129 {
        let _ = verify_message(&data[..65], &data[129..], &data[65..129]);
    }

    // Text decoders never panic
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let _ = PublicKey::from_base64(text);

    if let Ok(envelope) = text.parse::<Envelope>() {
        assert_eq!(envelope.to_string().parse::<Envelope>(), Ok(envelope));
    }

    if SignedEnvelope::decode(text).is_ok() {
        let mut rng = ChaChaRng::from_seed([7; 32]);
        let sender = SecretKey::random(&mut rng).expect("sampling");
        let recipient = SecretKey::random(&mut rng).expect("sampling");
        let _ = verify_and_decrypt(&sender.public_key(), &recipient, text);
    }
});
