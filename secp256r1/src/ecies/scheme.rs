//! Sign-then-encrypt envelope scheme.
//!
//! The sender encrypts a message to the recipient with ECIES, then signs the
//! envelope string with ECDSA/SHA-256. The result is two dot-joined standard
//! base64 segments:
//!
//! ```text
//! b64(envelope) . b64(r ‖ s)
//! ```
//!
//! where `envelope` is the four-segment [`Envelope`] wire string and the
//! signature covers `SHA-256(envelope)`.
//!
//! Opening distinguishes a structurally malformed input, which is an
//! [`Error`], from a well-formed input that fails the signature check or
//! decryption, which yields [`Opened::Rejected`].

use super::{decrypting, encrypting, Envelope};
use crate::{
    ecdsa::{hazmat, Signature},
    Error, PublicKey, Result, SecretKey,
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use core::fmt;
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};

/// Outcome of [`verify_and_decrypt`].
#[derive(Clone, Eq, PartialEq)]
pub enum Opened {
    /// The signature verified and the envelope decrypted.
    Authentic(Vec<u8>),

    /// The signature did not verify or the envelope did not decrypt.
    Rejected,
}

impl Opened {
    /// Did both the signature check and decryption succeed?
    pub fn is_valid(&self) -> bool {
        matches!(self, Opened::Authentic(_))
    }

    /// Borrow the plaintext, if authentic.
    pub fn message(&self) -> Option<&[u8]> {
        match self {
            Opened::Authentic(message) => Some(message),
            Opened::Rejected => None,
        }
    }

    /// Take the plaintext, if authentic.
    pub fn into_message(self) -> Option<Vec<u8>> {
        match self {
            Opened::Authentic(message) => Some(message),
            Opened::Rejected => None,
        }
    }
}

impl fmt::Debug for Opened {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opened::Authentic(message) => write!(f, "Authentic({} bytes)", message.len()),
            Opened::Rejected => f.write_str("Rejected"),
        }
    }
}

/// An envelope string together with the sender's signature over it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedEnvelope {
    envelope: String,
    signature: Signature,
}

impl SignedEnvelope {
    /// Parse the dot-joined wire form.
    ///
    /// Only the outer layer is checked here: the inner envelope string is
    /// parsed by [`SignedEnvelope::envelope`].
    pub fn decode(encoded: &str) -> Result<Self> {
        let Some((envelope, signature)) = encoded.split_once('.') else {
            tracing::debug!("signed envelope has no separator");
            return Err(Error::MalformedEnvelope);
        };

        if signature.contains('.') {
            tracing::debug!("signed envelope has more than two segments");
            return Err(Error::MalformedEnvelope);
        }

        let envelope =
            String::from_utf8(STANDARD.decode(envelope)?).map_err(|_| Error::MalformedEnvelope)?;
        let signature = Signature::from_bytes(&STANDARD.decode(signature)?)?;

        Ok(Self {
            envelope,
            signature,
        })
    }

    /// Serialize to the dot-joined wire form.
    pub fn encode(&self) -> String {
        let mut encoded = STANDARD.encode(&self.envelope);
        encoded.push('.');
        encoded.push_str(&STANDARD.encode(self.signature.to_bytes()));
        encoded
    }

    /// The signed envelope string, exactly as it was signed.
    pub fn envelope_str(&self) -> &str {
        &self.envelope
    }

    /// Parse the inner envelope.
    pub fn envelope(&self) -> Result<Envelope> {
        self.envelope.parse()
    }

    /// The sender's signature over `SHA-256(envelope)`.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Check the sender's signature over the envelope string.
    pub fn verify(&self, sender: &PublicKey) -> bool {
        hazmat::verify_prehashed(
            sender.as_affine(),
            &Sha256::digest(self.envelope.as_bytes()),
            &self.signature,
        )
    }
}

impl fmt::Display for SignedEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl core::str::FromStr for SignedEnvelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// Encrypt `msg` to `recipient` and sign the resulting envelope with
/// `sender`'s key.
pub fn sign_and_encrypt(
    rng: &mut impl CryptoRngCore,
    sender: &SecretKey,
    recipient: &PublicKey,
    msg: &[u8],
) -> Result<String> {
    let envelope = encrypting::encrypt(rng, recipient, msg)?.to_string();
    let signature = hazmat::sign_prehashed_with_rng(
        rng,
        sender.as_nonzero_scalar(),
        &Sha256::digest(envelope.as_bytes()),
    )?;

    Ok(SignedEnvelope {
        envelope,
        signature,
    }
    .encode())
}

/// Check `sender`'s signature and decrypt with `recipient`'s key.
///
/// Structural problems with `signed` (segment counts, base64, lengths, an
/// invalid ephemeral key) are errors. A well-formed input whose signature
/// does not verify, or whose ciphertext does not authenticate, yields
/// [`Opened::Rejected`]. Decryption is attempted even when the signature
/// fails so that both checks always run.
pub fn verify_and_decrypt(
    sender: &PublicKey,
    recipient: &SecretKey,
    signed: &str,
) -> Result<Opened> {
    let signed = SignedEnvelope::decode(signed)?;
    let envelope = signed.envelope()?;

    let signature_valid = signed.verify(sender);
    let plaintext = match decrypting::decrypt(recipient.as_nonzero_scalar(), &envelope) {
        Ok(plaintext) => Some(plaintext),
        Err(Error::AuthenticationFailed | Error::EphemeralKeyDegenerate) => None,
        Err(err) => return Err(err),
    };

    match (signature_valid, plaintext) {
        (true, Some(plaintext)) => Ok(Opened::Authentic(plaintext)),
        (signature_valid, plaintext) => {
            tracing::debug!(
                signature_valid,
                decrypted = plaintext.is_some(),
                "signed envelope rejected"
            );
            Ok(Opened::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sign_and_encrypt, verify_and_decrypt, Opened, SignedEnvelope};
    use crate::{Error, SecretKey};
    use alloc::{format, vec};
    use base64::{engine::general_purpose::STANDARD, Engine};
    use rand_core::OsRng;

    fn keys() -> (SecretKey, SecretKey) {
        (
            SecretKey::random(&mut OsRng).expect("rng"),
            SecretKey::random(&mut OsRng).expect("rng"),
        )
    }

    #[test]
    fn round_trip() {
        let (alice, bob) = keys();
        let sealed =
            sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"attack at dawn").expect("seal");

        let opened = verify_and_decrypt(&alice.public_key(), &bob, &sealed).expect("well-formed");
        assert!(opened.is_valid());
        assert_eq!(opened.into_message(), Some(b"attack at dawn".to_vec()));
    }

    #[test]
    fn empty_message() {
        let (alice, bob) = keys();
        let sealed = sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"").expect("seal");
        let opened = verify_and_decrypt(&alice.public_key(), &bob, &sealed).expect("well-formed");
        assert_eq!(opened, Opened::Authentic(vec![]));
    }

    #[test]
    fn wrong_sender_rejected() {
        let (alice, bob) = keys();
        let (mallory, _) = keys();
        let sealed = sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"hi").expect("seal");

        let opened = verify_and_decrypt(&mallory.public_key(), &bob, &sealed).expect("well-formed");
        assert_eq!(opened, Opened::Rejected);
        assert_eq!(opened.message(), None);
    }

    #[test]
    fn wrong_recipient_rejected() {
        let (alice, bob) = keys();
        let (eve, _) = keys();
        let sealed = sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"hi").expect("seal");

        let opened = verify_and_decrypt(&alice.public_key(), &eve, &sealed).expect("well-formed");
        assert!(!opened.is_valid());
    }

    #[test]
    fn signature_over_envelope_string() {
        let (alice, bob) = keys();
        let sealed = sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"hi").expect("seal");

        let signed = SignedEnvelope::decode(&sealed).expect("well-formed");
        assert!(signed.verify(&alice.public_key()));
        assert_eq!(signed.envelope_str().split('.').count(), 4);
        assert_eq!(signed.encode(), sealed);
    }

    #[test]
    fn swapped_signature_rejected() {
        let (alice, bob) = keys();
        let first = sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"one").expect("seal");
        let second = sign_and_encrypt(&mut OsRng, &alice, &bob.public_key(), b"two").expect("seal");

        let (envelope, _) = first.split_once('.').expect("two segments");
        let (_, signature) = second.split_once('.').expect("two segments");
        let forged = format!("{}.{}", envelope, signature);

        let opened = verify_and_decrypt(&alice.public_key(), &bob, &forged).expect("well-formed");
        assert_eq!(opened, Opened::Rejected);
    }

    #[test]
    fn malformed_outer_layer() {
        let (alice, bob) = keys();
        let sender = alice.public_key();

        assert_eq!(
            verify_and_decrypt(&sender, &bob, "no-separator"),
            Err(Error::MalformedEnvelope)
        );
        assert_eq!(
            verify_and_decrypt(&sender, &bob, "AA==.AA==.AA=="),
            Err(Error::MalformedEnvelope)
        );
        assert_eq!(
            verify_and_decrypt(&sender, &bob, "!!!!.AA=="),
            Err(Error::MalformedEnvelope)
        );

        let envelope = STANDARD.encode("a.b.c.d");
        let short_signature = STANDARD.encode([1u8; 63]);
        assert_eq!(
            verify_and_decrypt(&sender, &bob, &format!("{}.{}", envelope, short_signature)),
            Err(Error::MalformedSignature)
        );
    }

    #[test]
    fn malformed_inner_envelope() {
        let (alice, bob) = keys();
        let envelope = STANDARD.encode("only.three.segments");
        let signature = STANDARD.encode([1u8; 64]);

        assert_eq!(
            verify_and_decrypt(&alice.public_key(), &bob, &format!("{}.{}", envelope, signature)),
            Err(Error::MalformedEnvelope)
        );
    }
}
