//! Master key normalization and round subkey derivation.
//!
//! The schedule is the simplified bit-shift derivation of the original C++
//! implementation, not the standard permuted-choice DES schedule. Round
//! keys must match the reference byte-for-byte, so the derivation is
//! reproduced exactly.

use crate::block_codec;

/// Number of Feistel rounds (and therefore subkeys).
pub(crate) const NUM_ROUNDS: usize = 16;

/// Mask selecting the low 48 bits of a 64-bit value.
const SUBKEY_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// Normalizes arbitrary key material to an exact 8-byte master key.
///
/// Keys longer than 8 bytes are truncated; shorter keys are right-padded
/// with zero bytes. Never fails: any input, including empty, maps
/// deterministically to a valid master key.
///
/// # Parameters
/// - `raw_key`: User-supplied key material of any length.
///
/// # Returns
/// The 8-byte master key.
pub(crate) fn normalize_key(raw_key: &[u8]) -> [u8; 8] {
    let mut key = [0u8; 8];
    let len = raw_key.len().min(8);
    key[..len].copy_from_slice(&raw_key[..len]);
    key
}

/// Derives the 16 round subkeys from an 8-byte master key.
///
/// Subkey `i` is the master key (interpreted as a big-endian 64-bit
/// integer) shifted right by `i` bits and masked to 48 bits. Deterministic:
/// the same key always yields the same subkey set.
///
/// # Parameters
/// - `key`: The normalized 8-byte master key.
///
/// # Returns
/// The 16 subkeys in round order, each holding 48 significant bits.
pub(crate) fn derive_subkeys(key: &[u8; 8]) -> [u64; NUM_ROUNDS] {
    let key_value = block_codec::bytes_to_block(key);
    let mut subkeys = [0u64; NUM_ROUNDS];
    for (i, subkey) in subkeys.iter_mut().enumerate() {
        *subkey = (key_value >> i) & SUBKEY_MASK;
    }
    subkeys
}
