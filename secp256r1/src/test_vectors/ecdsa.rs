//! ECDSA/secp256r1 test vectors

use hex_literal::hex;

/// ECDSA test vector with a fixed ephemeral scalar.
#[derive(Copy, Clone, Debug)]
pub struct TestVector {
    /// Secret scalar.
    pub d: &'static [u8; 32],

    /// Public key x-coordinate.
    pub q_x: &'static [u8; 32],

    /// Public key y-coordinate.
    pub q_y: &'static [u8; 32],

    /// Ephemeral scalar.
    pub k: &'static [u8; 32],

    /// Message digest.
    pub m: &'static [u8; 32],

    /// Signature `r` component.
    pub r: &'static [u8; 32],

    /// Signature `s` component.
    pub s: &'static [u8; 32],
}

/// ECDSA/P-256 test vectors.
///
/// Adapted from [RFC 6979 Section A.2.5] (P-256, SHA-256). The `m` field
/// contains the SHA-256 digest of the messages `"sample"` and `"test"`.
///
/// [RFC 6979 Section A.2.5]: https://datatracker.ietf.org/doc/html/rfc6979#appendix-A.2.5
pub const ECDSA_TEST_VECTORS: &[TestVector; 2] = &[
    TestVector {
        d: &hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        q_x: &hex!("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"),
        q_y: &hex!("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"),
        k: &hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60"),
        m: &hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf"),
        r: &hex!("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"),
        s: &hex!("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"),
    },
    TestVector {
        d: &hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        q_x: &hex!("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"),
        q_y: &hex!("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"),
        k: &hex!("d16b6ae827f17175e040871a1c7ec3500192c4c92677336ec2537acaee0008e0"),
        m: &hex!("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"),
        r: &hex!("f1abb023518351cd71d881567b1ea663ed3efcf6c5132b354f28d3b0b7d38367"),
        s: &hex!("019f4113742a2b14bd25926b49c649155f267e60d3814b4c0cc84250e46f0083"),
    },
];
