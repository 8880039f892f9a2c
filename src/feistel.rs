//! Feistel round function: expansion, key mixing, substitution, permutation.
//!
//! All table lookups copy single bits, 1-indexed from the most significant
//! bit, replicating the `bitset` string indexing of the original C++
//! implementation. The outputs are assembled most significant bit first.

use crate::tables::{EXPANSION_TABLE, P_TABLE, SBOX};

/// Expands a 32-bit half-block to 48 bits using the expansion table.
///
/// Output bit `i` (counting from the most significant of 48) copies the
/// input bit at the 1-indexed position `EXPANSION_TABLE[i]`.
pub(crate) fn expand(half: u32) -> u64 {
    let mut expanded: u64 = 0;
    for &pos in EXPANSION_TABLE.iter() {
        let bit = (half >> (32 - pos)) & 1;
        expanded = (expanded << 1) | bit as u64;
    }
    expanded
}

/// Substitutes a 48-bit value down to 32 bits via the S-boxes.
///
/// Splits the input into 8 groups of 6 bits. In each group the outer two
/// bits select the S-box row and the inner four bits the column; the 4-bit
/// entries are concatenated in group order.
pub(crate) fn substitute(mixed: u64) -> u32 {
    let mut result: u32 = 0;
    for group in 0..8 {
        let six_bits = ((mixed >> (42 - 6 * group)) & 0x3F) as u32;
        let row = (((six_bits >> 4) & 0b10) | (six_bits & 1)) as usize;
        let col = ((six_bits >> 1) & 0xF) as usize;
        result = (result << 4) | SBOX[row][col];
    }
    result
}

/// Permutes a 32-bit value using the P-table.
///
/// Output bit `i` copies the input bit at the 1-indexed position
/// `P_TABLE[i]`.
pub(crate) fn permute(substituted: u32) -> u32 {
    let mut permuted: u32 = 0;
    for &pos in P_TABLE.iter() {
        let bit = (substituted >> (32 - pos)) & 1;
        permuted = (permuted << 1) | bit;
    }
    permuted
}

/// The complete Feistel round function:
/// `permute(substitute(expand(half) ^ subkey))`.
///
/// # Parameters
/// - `half`: The 32-bit right half-block.
/// - `subkey`: The 48-bit round subkey.
///
/// # Returns
/// The 32-bit value mixed into the left half-block.
pub(crate) fn round_function(half: u32, subkey: u64) -> u32 {
    permute(substitute(expand(half) ^ subkey))
}
