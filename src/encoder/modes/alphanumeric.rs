/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
/// Pairs = 11 bits, single = 6 bits
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::Mode;
use crate::error::{QrError, Result};

// Rank of each ASCII byte in the 45-symbol set, -1 if not a member.
const ALPHANUMERIC_RANK: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, //
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, //
    36, -1, -1, -1, 37, 38, -1, -1, -1, -1, 39, 40, -1, 41, 42, 43, //
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 44, -1, -1, -1, -1, -1, //
    -1, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, //
    25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, -1, -1, -1, -1, -1, //
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, //
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, //
];

/// Rank 0-44 of `c` in the alphanumeric set
pub fn rank(c: u8) -> Option<u8> {
    match ALPHANUMERIC_RANK.get(c as usize) {
        Some(&r) if r >= 0 => Some(r as u8),
        _ => None,
    }
}

/// True when `input` is non-empty and every byte is in the 45-symbol set
pub fn is_alphanumeric(input: &[u8]) -> bool {
    !input.is_empty() && input.iter().all(|&c| rank(c).is_some())
}

pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    pub fn encode(text: &[u8]) -> Result<BitBuffer> {
        let mut bits = BitBuffer::with_capacity(text.len() * 11 / 2 + 6);

        for pair in text.chunks(2) {
            let first = Self::rank_of(pair[0])?;
            match pair.get(1) {
                Some(&c) => {
                    let second = Self::rank_of(c)?;
                    bits.append_bits(first * 45 + second, 11)?;
                }
                None => bits.append_bits(first, 6)?,
            }
        }

        Ok(bits)
    }

    fn rank_of(c: u8) -> Result<u32> {
        rank(c).map(u32::from).ok_or(QrError::InvalidCharacter {
            mode: Mode::Alphanumeric,
            byte: c,
        })
    }
}
