//! The immutable numeric tables of ISO/IEC 18004 (Tables 7-9, Annex E),
//! shared process-wide. Row 0 of every per-version table is padding so the
//! version number indexes directly.

use crate::ecc_level::EccLevel;
use crate::mode::Mode;
use crate::version::Version;

/// Total codewords (data + error correction) per version.
pub const TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

/// Error correction codewords per block, by [ECC ordinal][version].
pub const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    // Low
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // Medium
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    // Quartile
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // High
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

/// Number of error correction blocks, by [ECC ordinal][version].
pub const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    // Low
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    // Medium
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    // Quartile
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    // High
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

/// Leftover bits in the symbol after the final codeword, per version.
pub const REMAINDER_BITS: [u8; 41] = [
    0, 0, 7, 7, 7, 7, 7, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3,
    3, 3, 3, 3, 0, 0, 0, 0, 0, 0,
];

/// Alignment pattern center coordinates per version (Annex E rows).
pub const ALIGNMENT_PATTERN_POSITIONS: [&[u8]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// How one version/ECC combination splits into Reed-Solomon blocks.
///
/// Group 2 blocks carry one data codeword more than group 1 blocks;
/// `group2_blocks` may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStructure {
    pub ec_per_block: usize,
    pub group1_blocks: usize,
    pub group1_data_len: usize,
    pub group2_blocks: usize,
    pub group2_data_len: usize,
}

/// Total codeword budget of `version`.
pub fn total_codewords(version: Version) -> usize {
    usize::from(TOTAL_CODEWORDS[usize::from(version.value())])
}

/// Data codeword budget of `version` at `level`.
pub fn data_codewords(version: Version, level: EccLevel) -> usize {
    let v = usize::from(version.value());
    let ec = usize::from(ECC_CODEWORDS_PER_BLOCK[level.ordinal()][v]);
    let blocks = usize::from(NUM_ERROR_CORRECTION_BLOCKS[level.ordinal()][v]);
    total_codewords(version) - ec * blocks
}

/// Remainder zero-bits appended after the interleaved codewords.
pub fn remainder_bits(version: Version) -> usize {
    usize::from(REMAINDER_BITS[usize::from(version.value())])
}

/// Alignment pattern centers for `version`, ascending.
pub fn alignment_positions(version: Version) -> &'static [u8] {
    ALIGNMENT_PATTERN_POSITIONS[usize::from(version.value())]
}

/// The group/block descriptor for `version` at `level`.
pub fn block_structure(version: Version, level: EccLevel) -> BlockStructure {
    let v = usize::from(version.value());
    let blocks = usize::from(NUM_ERROR_CORRECTION_BLOCKS[level.ordinal()][v]);
    let data = data_codewords(version, level);
    let group1_data_len = data / blocks;
    let group2_blocks = data % blocks;
    BlockStructure {
        ec_per_block: usize::from(ECC_CODEWORDS_PER_BLOCK[level.ordinal()][v]),
        group1_blocks: blocks - group2_blocks,
        group1_data_len,
        group2_blocks,
        group2_data_len: group1_data_len + 1,
    }
}

/// Character capacity of `version` at `level` in `mode`, bit-exact with
/// ISO/IEC 18004 Table 7.
pub fn character_capacity(version: Version, level: EccLevel, mode: Mode) -> usize {
    let budget = data_codewords(version, level) * 8;
    let header = 4 + mode.char_count_bits(version);
    let avail = budget.saturating_sub(header);
    match mode {
        Mode::Numeric => {
            let full = avail / 10 * 3;
            match avail % 10 {
                7..=9 => full + 2,
                4..=6 => full + 1,
                _ => full,
            }
        }
        Mode::Alphanumeric => avail / 11 * 2 + usize::from(avail % 11 >= 6),
        Mode::Byte => avail / 8,
        Mode::Kanji => avail / 13,
    }
}

#[cfg(test)]
mod should {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn hold_the_standard_codeword_totals() {
        assert_eq!(total_codewords(v(1)), 26);
        assert_eq!(total_codewords(v(7)), 196);
        assert_eq!(total_codewords(v(40)), 3706);
    }

    #[test]
    fn compute_data_codeword_budgets() {
        assert_eq!(data_codewords(v(1), EccLevel::Medium), 16);
        assert_eq!(data_codewords(v(1), EccLevel::Quartile), 13);
        assert_eq!(data_codewords(v(1), EccLevel::High), 9);
        assert_eq!(data_codewords(v(40), EccLevel::Low), 2956);
    }

    #[test]
    fn split_version_five_quartile_into_two_groups() {
        // Table 9: 2 blocks of (33, 15) then 2 blocks of (33, 16), 18 ECC each.
        let b = block_structure(v(5), EccLevel::Quartile);
        assert_eq!(
            b,
            BlockStructure {
                ec_per_block: 18,
                group1_blocks: 2,
                group1_data_len: 15,
                group2_blocks: 2,
                group2_data_len: 16,
            }
        );
    }

    #[test]
    fn keep_single_block_versions_in_group_one() {
        let b = block_structure(v(1), EccLevel::Low);
        assert_eq!(b.group1_blocks, 1);
        assert_eq!(b.group1_data_len, 19);
        assert_eq!(b.group2_blocks, 0);
        assert_eq!(b.ec_per_block, 7);
    }

    #[test]
    fn account_for_every_codeword_in_every_configuration() {
        for ver in 1..=40u8 {
            for level in EccLevel::ALL {
                let b = block_structure(v(ver), level);
                let data = b.group1_blocks * b.group1_data_len + b.group2_blocks * b.group2_data_len;
                let ec = (b.group1_blocks + b.group2_blocks) * b.ec_per_block;
                assert_eq!(data + ec, total_codewords(v(ver)), "v{ver} {level:?}");
            }
        }
    }

    #[test]
    fn reproduce_table_seven_character_capacities() {
        assert_eq!(character_capacity(v(1), EccLevel::Low, Mode::Numeric), 41);
        assert_eq!(character_capacity(v(1), EccLevel::Medium, Mode::Numeric), 34);
        assert_eq!(character_capacity(v(1), EccLevel::Medium, Mode::Byte), 14);
        assert_eq!(character_capacity(v(1), EccLevel::High, Mode::Kanji), 4);
        assert_eq!(character_capacity(v(2), EccLevel::Medium, Mode::Byte), 26);
        assert_eq!(
            character_capacity(v(6), EccLevel::Low, Mode::Alphanumeric),
            195
        );
        assert_eq!(
            character_capacity(v(7), EccLevel::High, Mode::Alphanumeric),
            93
        );
        assert_eq!(character_capacity(v(40), EccLevel::Low, Mode::Byte), 2953);
        assert_eq!(character_capacity(v(40), EccLevel::Low, Mode::Numeric), 7089);
    }

    #[test]
    fn list_alignment_rows_with_the_annex_endpoints() {
        assert!(alignment_positions(v(1)).is_empty());
        assert_eq!(alignment_positions(v(2)), &[6, 18]);
        assert_eq!(alignment_positions(v(7)), &[6, 22, 38]);
        assert_eq!(alignment_positions(v(32)), &[6, 34, 60, 86, 112, 138]);
        for ver in 2..=40u8 {
            let row = alignment_positions(v(ver));
            assert_eq!(row[0], 6);
            assert_eq!(usize::from(row[row.len() - 1]), v(ver).side() - 7);
        }
    }

    #[test]
    fn expose_remainder_bits_by_version_band() {
        assert_eq!(remainder_bits(v(1)), 0);
        assert_eq!(remainder_bits(v(2)), 7);
        assert_eq!(remainder_bits(v(7)), 0);
        assert_eq!(remainder_bits(v(14)), 3);
        assert_eq!(remainder_bits(v(21)), 4);
        assert_eq!(remainder_bits(v(28)), 3);
        assert_eq!(remainder_bits(v(35)), 0);
    }
}
