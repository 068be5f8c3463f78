/// Append-only bit sequence, most significant bit first within each byte
use crate::encoder::segment::Segment;
use crate::error::{QrError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bits` without reallocating
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    /// Buffer holding whole bytes, 8 bits each
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            bytes: data.to_vec(),
            bit_len: data.len() * 8,
        }
    }

    /// Number of bits appended so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Backing bytes; trailing bits of the last byte are zero
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Bit at `index` (0 = first appended)
    pub fn bit(&self, index: usize) -> bool {
        index < self.bit_len && (self.bytes[index >> 3] >> (7 - (index & 7))) & 1 != 0
    }

    /// Append the low `count` bits of `value`, most significant first.
    ///
    /// Requires `count <= 31` and `value < 2^count`.
    pub fn append_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count > 31 {
            return Err(QrError::BitCountOutOfRange(count));
        }
        if value >> count != 0 {
            return Err(QrError::ValueTooWide { value, bits: count });
        }
        for i in (0..count).rev() {
            self.push_bit((value >> i) & 1 != 0);
        }
        Ok(())
    }

    /// Append a segment's packed payload bits
    pub fn append_segment(&mut self, segment: &Segment) {
        self.append_buffer(segment.data());
    }

    /// Append every bit of `other`
    pub fn append_buffer(&mut self, other: &BitBuffer) {
        if self.bit_len % 8 == 0 {
            // Byte-aligned: trailing bits of `other` are already zero.
            self.bytes.truncate(self.bit_len / 8);
            self.bytes.extend_from_slice(&other.bytes);
            self.bit_len += other.bit_len;
            return;
        }
        for i in 0..other.bit_len {
            self.push_bit(other.bit(i));
        }
    }

    fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_len >> 3;
        if byte_index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - (self.bit_len & 7));
        }
        self.bit_len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_bits_msb_first() {
        let mut bits = BitBuffer::new();
        bits.append_bits(0b101, 3).unwrap();
        bits.append_bits(0b1, 1).unwrap();
        assert_eq!(bits.bit_len(), 4);
        assert_eq!(bits.bytes(), &[0b1011_0000]);

        bits.append_bits(0xABC, 12).unwrap();
        assert_eq!(bits.bit_len(), 16);
        assert_eq!(bits.bytes(), &[0b1011_1010, 0b1011_1100]);
    }

    #[test]
    fn test_append_zero_bits() {
        let mut bits = BitBuffer::new();
        bits.append_bits(0, 0).unwrap();
        assert_eq!(bits.bit_len(), 0);
        assert!(bits.bytes().is_empty());
    }

    #[test]
    fn test_append_bits_range_checks() {
        let mut bits = BitBuffer::new();
        assert_eq!(
            bits.append_bits(0, 32),
            Err(QrError::BitCountOutOfRange(32))
        );
        assert_eq!(
            bits.append_bits(8, 3),
            Err(QrError::ValueTooWide { value: 8, bits: 3 })
        );
        assert_eq!(
            bits.append_bits(1, 0),
            Err(QrError::ValueTooWide { value: 1, bits: 0 })
        );
        assert!(bits.append_bits(0x7FFF_FFFF, 31).is_ok());
        assert_eq!(bits.bit_len(), 31);
    }

    #[test]
    fn test_append_buffer_unaligned() {
        let mut a = BitBuffer::new();
        a.append_bits(0b1, 1).unwrap();
        let mut b = BitBuffer::new();
        b.append_bits(0b0110_0110_1, 9).unwrap();
        a.append_buffer(&b);
        assert_eq!(a.bit_len(), 10);
        assert_eq!(a.bytes(), &[0b1011_0011, 0b0100_0000]);
    }

    #[test]
    fn test_append_buffer_aligned() {
        let mut a = BitBuffer::from_bytes(&[0xFF]);
        let mut b = BitBuffer::new();
        b.append_bits(0b101, 3).unwrap();
        a.append_buffer(&b);
        assert_eq!(a.bit_len(), 11);
        assert_eq!(a.bytes(), &[0xFF, 0b1010_0000]);
        assert!(a.bit(8));
        assert!(!a.bit(9));
        assert!(!a.bit(11));
    }
}
