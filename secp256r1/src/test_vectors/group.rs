//! Group law test vectors.

use hex_literal::hex;

/// Affine coordinates of a point as big-endian bytes.
pub type AffineBytes = ([u8; 32], [u8; 32]);

/// Repeated addition of the generator.
///
/// These are the first 5 multiples of the generator `k·G` for `k` in `1..=5`,
/// ordered by `k`.
pub const ADD_TEST_VECTORS: &[AffineBytes] = &[
    (
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
    (
        hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    ),
    (
        hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    ),
    (
        hex!("e2534a3532d08fbba02dde659ee62bd0031fe2db785596ef509302446b030852"),
        hex!("e0f1575a4c633cc719dfee5fda862d764efc96c3f30ee0055c42c23f184ed8c6"),
    ),
    (
        hex!("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
        hex!("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
    ),
];

/// Scalar multiplication with the generator.
///
/// Pairs of a big-endian scalar `k` and the affine coordinates of `k·G`.
pub const MUL_TEST_VECTORS: &[([u8; 32], AffineBytes)] = &[
    (
        hex!("000000000000000000000000000000000000000000000000000000000000000a"),
        (
            hex!("cef66d6b2a3a993e591214d1ea223fb545ca6c471c48306e4c36069404c5723f"),
            hex!("878662a229aaae906e123cdd9d3b4c10590ded29fe751eeeca34bbaa44af0773"),
        ),
    ),
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000014"),
        (
            hex!("83a01a9378395bab9bcd6a0ad03cc56d56e6b19250465a94a234dc4c6b28da9a"),
            hex!("76e49b6de2f73234ae6a5eb9d612b75c9f2202bb6923f54ff8240aaa86f640b8"),
        ),
    ),
    (
        hex!("000000000000000000000000000000000000000000000000018ebbb95eed0e13"),
        (
            hex!("339150844ec15234807fe862a86be77977dbfb3ae3d96f4c22795513aeaab82f"),
            hex!("b1c14ddfdc8ec1b2583f51e85a5eb3a155840f2034730e9b5ada38b674336a21"),
        ),
    ),
    (
        hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550"),
        (
            hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            hex!("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a"),
        ),
    ),
];
