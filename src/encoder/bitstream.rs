/// Codeword placement into the QR code matrix
use crate::encoder::function_mask::FunctionMask;

/// Places raw codewords following the zigzag pattern
pub struct CodewordPlacer;

impl CodewordPlacer {
    /// Write `codewords` MSB first into every data module.
    ///
    /// Column pairs are scanned right to left, alternating upward and
    /// downward, with the vertical timing column skipped. Remainder modules
    /// past the last codeword stay light.
    ///
    /// Panics unless `codewords` fills the data modules to within 7 bits.
    pub fn place(grid: &mut FunctionMask, codewords: &[u8]) {
        let size = grid.size();
        let total_bits = codewords.len() * 8;
        let mut i = 0usize;

        for (x, y) in Self::data_order(size) {
            if grid.is_function(x, y) {
                continue;
            }
            if i < total_bits {
                let bit = (codewords[i >> 3] >> (7 - (i & 7))) & 1 != 0;
                grid.modules_mut().set(x, y, bit);
                i += 1;
            }
        }

        assert_eq!(i, total_bits, "codeword stream does not fit the data modules");
        assert!(
            grid.data_modules_count() - total_bits < 8,
            "codeword stream leaves whole codewords unused"
        );
    }

    /// Every (x, y) in placement order, function modules included
    fn data_order(size: usize) -> impl Iterator<Item = (usize, usize)> {
        let mut rights = Vec::with_capacity(size / 2);
        let mut right = size as isize - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            rights.push(right as usize);
            right -= 2;
        }

        rights.into_iter().flat_map(move |right| {
            let upward = (right + 1) & 2 == 0;
            (0..size).flat_map(move |vert| {
                let y = if upward { size - 1 - vert } else { vert };
                [(right, y), (right - 1, y)]
            })
        })
    }
}
