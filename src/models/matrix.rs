/// Compact square bit grid for QR modules (true = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-light bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a `size` x `size` matrix
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y); out-of-range reads are light
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Toggle bit at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        self.data[byte_index] ^= 1 << bit_index;
    }

    /// Number of set (dark) cells
    pub fn count_ones(&self) -> usize {
        // Padding bits past width * height are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Row `y` as booleans, left to right
    pub fn row(&self, y: usize) -> Vec<bool> {
        (0..self.width).map(|x| self.get(x, y)).collect()
    }

    /// Get raw data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn locate(&self, x: usize, y: usize) -> (usize, usize) {
        let index = y * self.width + x;
        (index / 8, index % 8)
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
