/// Format information placement
use crate::encoder::bch::BchEncoder;
use crate::encoder::function_mask::FunctionMask;
use crate::models::{ECLevel, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC)
/// Written twice: around the top-left finder, and split between the
/// top-right and bottom-left finders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// Masked 15-bit word: level bits, mask bits, BCH remainder, XOR 0x5412
    pub fn word(&self) -> u16 {
        let data = (self.ec_level.format_bits() << 3) | self.mask_pattern.bits();
        let word = BchEncoder::encode_format(data) ^ BchEncoder::FORMAT_XOR_MASK;
        assert!(word >> 15 == 0, "format word wider than 15 bits");
        word
    }

    /// Write both copies plus the always-dark module, marking them as function modules
    pub fn draw(&self, grid: &mut FunctionMask) {
        let word = self.word();
        let bit = |i: usize| (word >> i) & 1 != 0;
        let size = grid.size();

        // First copy, wrapped around the top-left finder
        for i in 0..=5 {
            grid.set_function(8, i, bit(i));
        }
        grid.set_function(8, 7, bit(6));
        grid.set_function(8, 8, bit(7));
        grid.set_function(7, 8, bit(8));
        for i in 9..15 {
            grid.set_function(14 - i, 8, bit(i));
        }

        // Second copy: low bits along the top-right, high bits down the bottom-left
        for i in 0..8 {
            grid.set_function(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            grid.set_function(8, size - 15 + i, bit(i));
        }

        grid.set_function(8, size - 8, true);
    }
}
