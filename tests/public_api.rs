//! End-to-end tests for the public API: round-trip laws across message
//! lengths and key shapes, output framing guarantees, and error paths.

use simpledes::{decrypt, encrypt, DesCipher, DesError};

/// Keys used across the round-trip sweeps: empty, 1-byte, short,
/// exactly 8 bytes, and longer than 8 bytes.
const KEYS: [&[u8]; 5] = [
    b"",
    b"k",
    b"secret",
    b"key12345",
    b"a much longer key than eight bytes",
];

/// Deterministic pseudo-random filler for test plaintexts.
fn test_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(131).wrapping_add(7) % 256) as u8).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Round-trip laws
// ═══════════════════════════════════════════════════════════════════════

/// decrypt(encrypt(d, k), k) == d for every length 0..=128 and every key.
#[test]
fn full_roundtrip_short_lengths() {
    for key in KEYS {
        for len in 0..=128 {
            let plaintext = test_data(len);
            let ciphertext = encrypt(&plaintext, key);
            assert_eq!(
                decrypt(&ciphertext, key).unwrap(),
                plaintext,
                "roundtrip failed for len={}, key={:?}",
                len,
                key
            );
        }
    }
}

/// Round-trip at multi-kilobyte sizes.
#[test]
fn full_roundtrip_large_messages() {
    for len in [1024, 4096, 8191] {
        let plaintext = test_data(len);
        let ciphertext = encrypt(&plaintext, b"large message key");
        assert_eq!(decrypt(&ciphertext, b"large message key").unwrap(), plaintext);
    }
}

/// Single-block round-trip through the block-level entry points.
#[test]
fn block_roundtrip() {
    let cipher = DesCipher::new(b"block key");
    for block in [[0u8; 8], [0xFFu8; 8], [1, 2, 3, 4, 5, 6, 7, 8]] {
        let encrypted = cipher.encrypt_block(&block).unwrap();
        assert_eq!(cipher.decrypt_block(&encrypted).unwrap(), block);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Output framing
// ═══════════════════════════════════════════════════════════════════════

/// Ciphertext is always a multiple of 8 bytes and 1..=8 bytes longer than
/// the plaintext.
#[test]
fn ciphertext_framing() {
    for len in 0..=64 {
        let ciphertext = encrypt(&test_data(len), b"framing");
        assert_eq!(ciphertext.len() % 8, 0, "unaligned for len {}", len);
        let growth = ciphertext.len() - len;
        assert!((1..=8).contains(&growth), "growth {} for len {}", growth, len);
    }
}

/// Empty plaintext encrypts to exactly one block.
#[test]
fn empty_plaintext_one_block() {
    let ciphertext = encrypt(b"", b"key");
    assert_eq!(ciphertext.len(), 8);
    assert_eq!(decrypt(&ciphertext, b"key").unwrap(), b"");
}

// ═══════════════════════════════════════════════════════════════════════
// Key handling
// ═══════════════════════════════════════════════════════════════════════

/// Keys are truncated to 8 bytes: variants agreeing on the first 8 bytes
/// are the same key.
#[test]
fn key_truncation() {
    let plaintext = b"key truncation subject";
    let a = encrypt(plaintext, b"12345678");
    let b = encrypt(plaintext, b"12345678 and then some");
    assert_eq!(a, b);
}

/// Short keys are zero-padded: an explicit zero-padded key is equivalent.
#[test]
fn key_zero_padding() {
    let plaintext = b"key padding subject";
    let a = encrypt(plaintext, b"abc");
    let b = encrypt(plaintext, &[b'a', b'b', b'c', 0, 0, 0, 0, 0]);
    assert_eq!(a, b);
}

/// The empty key is valid and behaves like the all-zero key.
#[test]
fn empty_key_is_zero_key() {
    let plaintext = b"empty key subject";
    assert_eq!(encrypt(plaintext, b""), encrypt(plaintext, &[0u8; 8]));
}

/// Two ciphers with the same key produce identical output.
#[test]
fn deterministic_across_instances() {
    let plaintext = test_data(100);
    let a = DesCipher::new(b"determinism").encrypt(&plaintext);
    let b = DesCipher::new(b"determinism").encrypt(&plaintext);
    assert_eq!(a, b);
}

// ═══════════════════════════════════════════════════════════════════════
// Error paths
// ═══════════════════════════════════════════════════════════════════════

/// decrypt rejects any length that is not a multiple of 8.
#[test]
fn decrypt_invalid_length() {
    for len in [1, 3, 7, 9, 15, 1001] {
        assert_eq!(
            decrypt(&vec![0u8; len], b"key"),
            Err(DesError::InvalidCiphertextLength),
            "length {} accepted",
            len
        );
    }
}

/// Block-level entry points reject anything but exactly 8 bytes.
#[test]
fn block_invalid_length() {
    let cipher = DesCipher::new(b"key");
    for len in [0, 7, 9, 16] {
        assert_eq!(
            cipher.encrypt_block(&vec![0u8; len]),
            Err(DesError::InvalidBlockLength),
            "encrypt_block accepted length {}",
            len
        );
        assert_eq!(
            cipher.decrypt_block(&vec![0u8; len]),
            Err(DesError::InvalidBlockLength),
            "decrypt_block accepted length {}",
            len
        );
    }
}

/// Decrypting garbage whose final block yields an invalid padding byte
/// returns the full decoded buffer unchanged (silent passthrough policy).
#[test]
fn garbage_ciphertext_never_panics() {
    for len in [0, 8, 16, 64] {
        let garbage = test_data(len);
        let result = decrypt(&garbage, b"some key").unwrap();
        assert!(result.len() <= len.max(8));
    }
}
