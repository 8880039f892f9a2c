//! Static lookup tables for the Feistel round function.
//!
//! Bit positions in the expansion and permutation tables are 1-indexed and
//! count from the most significant bit, matching the `std::bitset` string
//! ordering used by the original C++ implementation. The tables hold fixed
//! literal values and never change at runtime.

/// Expansion table: maps a 32-bit half-block to 48 bits.
///
/// Sixteen of the 32 input positions appear twice (the standard DES
/// duplication pattern, wrapping around at positions 32 and 1).
pub(crate) const EXPANSION_TABLE: [u32; 48] = [
    32, 1, 2, 3, 4, 5, 4, 5, 6, 7, 8, 9, 8, 9, 10, 11, 12, 13, 12, 13, 14, 15, 16, 17, 16, 17, 18,
    19, 20, 21, 20, 21, 22, 23, 24, 25, 24, 25, 26, 27, 28, 29, 28, 29, 30, 31, 32, 1,
];

/// Permutation table: reorders the 32 bits produced by substitution.
pub(crate) const P_TABLE: [u32; 32] = [
    16, 7, 20, 21, 29, 12, 28, 17, 1, 15, 23, 26, 5, 18, 31, 10, 2, 8, 24, 14, 32, 27, 3, 9, 19,
    13, 30, 6, 22, 11, 4, 25,
];

/// Substitution boxes: 4 rows of 16 entries, each entry a 4-bit output.
///
/// The outer two bits of a 6-bit group select the row, the inner four bits
/// select the column. The same 4x16 table serves all 8 groups (the C++
/// `DESEncoder` reuses the four rows of DES S-box 1 throughout).
pub(crate) const SBOX: [[u32; 16]; 4] = [
    [14, 4, 13, 1, 2, 15, 11, 8, 3, 10, 6, 12, 5, 9, 0, 7],
    [0, 15, 7, 4, 14, 2, 13, 1, 10, 6, 12, 11, 9, 5, 3, 8],
    [4, 1, 14, 8, 13, 6, 2, 11, 15, 12, 9, 7, 3, 10, 5, 0],
    [15, 12, 8, 2, 4, 9, 1, 7, 5, 11, 3, 14, 10, 0, 6, 13],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_table_positions_in_range() {
        for &pos in EXPANSION_TABLE.iter() {
            assert!((1..=32).contains(&pos), "position {} out of range", pos);
        }
    }

    #[test]
    fn test_expansion_table_covers_all_input_bits() {
        // Every input position 1..=32 appears, 16 of them twice.
        let mut counts = [0usize; 33];
        for &pos in EXPANSION_TABLE.iter() {
            counts[pos as usize] += 1;
        }
        let duplicated = counts[1..].iter().filter(|&&c| c == 2).count();
        assert_eq!(counts[1..].iter().filter(|&&c| c == 0).count(), 0);
        assert_eq!(duplicated, 16);
    }

    #[test]
    fn test_p_table_is_a_permutation() {
        let mut seen = [false; 33];
        for &pos in P_TABLE.iter() {
            assert!((1..=32).contains(&pos), "position {} out of range", pos);
            assert!(!seen[pos as usize], "position {} duplicated", pos);
            seen[pos as usize] = true;
        }
    }

    #[test]
    fn test_sbox_rows_are_permutations() {
        for (r, row) in SBOX.iter().enumerate() {
            let mut seen = [false; 16];
            for &entry in row.iter() {
                assert!(entry < 16, "row {} entry {} out of range", r, entry);
                assert!(!seen[entry as usize], "row {} entry {} duplicated", r, entry);
                seen[entry as usize] = true;
            }
        }
    }
}
