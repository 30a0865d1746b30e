use crate::models::{ECLevel, Version};

/// Block structure of one (version, level) pair.
///
/// Blocks come in at most two groups: `num_short_blocks` blocks carrying
/// `short_block_data_len` data codewords, followed by long blocks carrying one
/// more. Every block carries `ecc_per_block` ECC codewords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Total blocks
    pub num_blocks: usize,
    /// ECC codewords in every block
    pub ecc_per_block: usize,
    /// Blocks in the short group
    pub num_short_blocks: usize,
    /// Data codewords in a short block
    pub short_block_data_len: usize,
}

impl EcBlockInfo {
    /// Blocks in the long group
    pub fn num_long_blocks(&self) -> usize {
        self.num_blocks - self.num_short_blocks
    }

    /// Data codewords in a long block
    pub fn long_block_data_len(&self) -> usize {
        self.short_block_data_len + 1
    }

    /// Data codewords of block `index`
    pub fn block_data_len(&self, index: usize) -> usize {
        if index < self.num_short_blocks {
            self.short_block_data_len
        } else {
            self.long_block_data_len()
        }
    }

    /// Data codewords over all blocks
    pub fn data_codewords(&self) -> usize {
        self.num_blocks * self.short_block_data_len + self.num_long_blocks()
    }

    /// ECC codewords over all blocks
    pub fn ecc_codewords(&self) -> usize {
        self.num_blocks * self.ecc_per_block
    }

    /// Data plus ECC codewords
    pub fn total_codewords(&self) -> usize {
        self.data_codewords() + self.ecc_codewords()
    }
}

// Tables from the QR Code specification (Model 2), ISO/IEC 18004 table 9.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Block layout for a version and level.
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let v = version.number() as usize;
    let idx = ec_level.ordinal();
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize;
    let ecc_per_block = ECC_CODEWORDS_PER_BLOCK[idx][v] as usize;
    let raw_codewords = num_raw_data_modules(version) / 8;
    EcBlockInfo {
        num_blocks,
        ecc_per_block,
        num_short_blocks: num_blocks - raw_codewords % num_blocks,
        short_block_data_len: raw_codewords / num_blocks - ecc_per_block,
    }
}

/// Modules left for codewords once all function patterns are placed,
/// including the 0-7 remainder bits that do not form a whole codeword.
pub fn num_raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codewords (data + ECC) a version holds.
pub fn num_total_codewords(version: Version) -> usize {
    num_raw_data_modules(version) / 8
}

/// Data codewords available at a version and level.
pub fn num_data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let idx = ec_level.ordinal();
    let v = version.number() as usize;
    num_total_codewords(version)
        - ECC_CODEWORDS_PER_BLOCK[idx][v] as usize * NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize
}

/// Alignment pattern center coordinates (used for both axes).
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let last = version.size() - 7;
    let mut positions = vec![6usize; num_align];
    for (i, pos) in positions.iter_mut().enumerate().skip(1) {
        *pos = last - (num_align - 1 - i) * step;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_known_capacities() {
        // ISO/IEC 18004 table 7
        assert_eq!(num_data_codewords(v(1), ECLevel::L), 19);
        assert_eq!(num_data_codewords(v(1), ECLevel::H), 9);
        assert_eq!(num_data_codewords(v(5), ECLevel::Q), 62);
        assert_eq!(num_data_codewords(v(10), ECLevel::M), 216);
        assert_eq!(num_data_codewords(v(40), ECLevel::L), 2956);
        assert_eq!(num_data_codewords(v(40), ECLevel::H), 1276);
        assert_eq!(num_total_codewords(v(1)), 26);
        assert_eq!(num_total_codewords(v(40)), 3706);
    }

    #[test]
    fn test_block_info_consistent() {
        for version in Version::MIN.range_to(Version::MAX) {
            for level in ECLevel::ALL {
                let info = ec_block_info(version, level);
                assert!(info.num_short_blocks >= 1);
                assert_eq!(info.total_codewords(), num_total_codewords(version));
                assert_eq!(info.data_codewords(), num_data_codewords(version, level));
            }
        }
    }

    #[test]
    fn test_split_blocks() {
        // 5-Q: 2 blocks of 15 + 2 blocks of 16 data codewords, 18 ECC each
        let info = ec_block_info(v(5), ECLevel::Q);
        assert_eq!(info.num_blocks, 4);
        assert_eq!(info.ecc_per_block, 18);
        assert_eq!(info.num_short_blocks, 2);
        assert_eq!(info.short_block_data_len, 15);
        assert_eq!(info.block_data_len(3), 16);
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        assert_eq!(alignment_pattern_positions(v(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(v(7)), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(v(32)), vec![6, 34, 60, 86, 112, 138]);
        assert_eq!(
            alignment_pattern_positions(v(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }
}
