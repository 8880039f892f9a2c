//! Conversion between 8-byte sequences and 64-bit blocks.
//!
//! Blocks use big-endian byte ordering: the first input byte occupies the
//! most significant position, replicating the `stringToBitset64` /
//! `bitset64ToString` pair of the original C++ implementation.

/// Packs 8 bytes into a 64-bit block using big-endian byte ordering.
///
/// # Parameters
/// - `bytes`: The 8 bytes to pack; the first byte becomes the most
///   significant byte of the block.
///
/// # Returns
/// The packed 64-bit block value.
pub(crate) fn bytes_to_block(bytes: &[u8; 8]) -> u64 {
    let mut block: u64 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        block |= (byte as u64) << (8 * (7 - i));
    }
    block
}

/// Unpacks a 64-bit block into 8 bytes using big-endian byte ordering.
///
/// The inverse of [`bytes_to_block`]; succeeds for any 64-bit value.
///
/// # Parameters
/// - `block`: The 64-bit block to unpack.
///
/// # Returns
/// The 8 bytes, most significant first.
pub(crate) fn block_to_bytes(block: u64) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = ((block >> (8 * (7 - i))) & 0xFF) as u8;
    }
    bytes
}
