/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::Mode;
use crate::error::{QrError, Result};

/// True when `input` is non-empty and every byte is an ASCII digit
pub fn is_numeric(input: &[u8]) -> bool {
    !input.is_empty() && input.iter().all(u8::is_ascii_digit)
}

pub struct NumericEncoder;

impl NumericEncoder {
    /// Pack decimal digits into a fresh bit buffer
    pub fn encode(digits: &[u8]) -> Result<BitBuffer> {
        let mut bits = BitBuffer::with_capacity(digits.len() * 10 / 3 + 4);

        for group in digits.chunks(3) {
            let mut value: u32 = 0;
            for &c in group {
                if !c.is_ascii_digit() {
                    return Err(QrError::InvalidCharacter {
                        mode: Mode::Numeric,
                        byte: c,
                    });
                }
                value = value * 10 + u32::from(c - b'0');
            }
            // 3 digits -> 10 bits, 2 -> 7, 1 -> 4
            bits.append_bits(value, group.len() as u8 * 3 + 1)?;
        }

        Ok(bits)
    }
}
