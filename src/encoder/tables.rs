use crate::models::{ECLevel, Version};

/// Block layout for one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    pub num_blocks: usize,
    pub ecc_per_block: usize,
}

impl EcBlockInfo {
    /// ECC codewords across all blocks
    pub fn total_ecc(&self) -> usize {
        self.num_blocks * self.ecc_per_block
    }
}

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version]; column 0 is unused.
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level.ordinal();
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Modules available for data and ECC bits after every function pattern is
/// drawn. Includes the 0-7 remainder bits, so not always a multiple of 8.
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            // two 6x3 version information blocks
            result -= 36;
        }
    }
    result
}

/// Whole codewords in the symbol, data and ECC together
pub fn raw_codewords(version: Version) -> usize {
    raw_data_modules(version) / 8
}

/// Data codewords available at `version` and `ec_level`
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    raw_codewords(version) - ec_block_info(version, ec_level).total_ecc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_raw_data_modules() {
        assert_eq!(raw_data_modules(v(1)), 208);
        assert_eq!(raw_data_modules(v(2)), 359);
        assert_eq!(raw_data_modules(v(7)), 1568);
        assert_eq!(raw_data_modules(Version::MAX), 29648);
    }

    #[test]
    fn test_data_codewords() {
        assert_eq!(data_codewords(v(1), ECLevel::L), 19);
        assert_eq!(data_codewords(v(1), ECLevel::M), 16);
        assert_eq!(data_codewords(v(1), ECLevel::Q), 13);
        assert_eq!(data_codewords(v(1), ECLevel::H), 9);
        assert_eq!(data_codewords(v(40), ECLevel::L), 2956);
        assert_eq!(data_codewords(v(40), ECLevel::H), 1276);
    }

    #[test]
    fn test_block_info() {
        let info = ec_block_info(v(5), ECLevel::Q);
        assert_eq!(info, EcBlockInfo { num_blocks: 4, ecc_per_block: 18 });
        assert_eq!(info.total_ecc(), 72);
    }

    #[test]
    fn test_blocks_partition_raw_codewords() {
        // Every block must hold at least one data codeword plus its ECC,
        // and long blocks exceed short ones by exactly one.
        for n in 1..=40 {
            for level in ECLevel::ALL {
                let version = v(n);
                let info = ec_block_info(version, level);
                assert!(info.num_blocks >= 1 && info.ecc_per_block >= 7);
                let raw = raw_codewords(version);
                let short_len = raw / info.num_blocks;
                let num_short = info.num_blocks - raw % info.num_blocks;
                assert!(short_len > info.ecc_per_block);
                assert_eq!(
                    num_short * short_len + (info.num_blocks - num_short) * (short_len + 1),
                    raw
                );
                assert!(data_codewords(version, level) > 0);
            }
        }
    }
}
