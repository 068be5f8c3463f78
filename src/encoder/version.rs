/// Version information placement for QR codes v7+
use crate::encoder::bch::BchEncoder;
use crate::encoder::function_mask::FunctionMask;
use crate::models::Version;

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    version: Version,
}

impl VersionInfo {
    /// `None` below version 7, which carries no version block
    pub fn new(version: Version) -> Option<Self> {
        version.has_version_info().then_some(Self { version })
    }

    /// 18-bit word: version number followed by its BCH remainder
    pub fn word(&self) -> u32 {
        let word = BchEncoder::encode_version(self.version.number());
        assert!(word >> 18 == 0, "version word wider than 18 bits");
        word
    }

    /// Write the 6x3 block above the bottom-left finder and its transpose
    /// left of the top-right finder
    pub fn draw(&self, grid: &mut FunctionMask) {
        let word = self.word();
        let size = grid.size();
        for i in 0..18 {
            let bit = (word >> i) & 1 != 0;
            let a = size - 11 + i % 3;
            let b = i / 3;
            grid.set_function(a, b, bit);
            grid.set_function(b, a, bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ECLevel;

    #[test]
    fn test_small_versions_have_no_block() {
        assert!(VersionInfo::new(Version::new(6).unwrap()).is_none());
        assert!(VersionInfo::new(Version::new(7).unwrap()).is_some());
    }

    #[test]
    fn test_version_7_word() {
        let info = VersionInfo::new(Version::new(7).unwrap()).unwrap();
        assert_eq!(info.word(), 0b000111_110010_010100);
    }

    #[test]
    fn test_blocks_are_transposed() {
        let version = Version::new(7).unwrap();
        let grid = FunctionMask::new(version, ECLevel::M);
        let size = grid.size();
        for i in 0..18 {
            let a = size - 11 + i % 3;
            let b = i / 3;
            assert!(grid.is_function(a, b));
            assert!(grid.is_function(b, a));
            assert_eq!(grid.module(a, b), grid.module(b, a));
        }
        // Bit 0 of 0x07C94 is 0, bit 2 is 1
        assert!(!grid.module(size - 11, 0));
        assert!(grid.module(size - 9, 0));
    }
}
