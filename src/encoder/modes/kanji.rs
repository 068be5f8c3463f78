/// Kanji mode (Mode 1000) detection
///
/// Shift-JIS double-byte characters in 0x8140-0x9FFC and 0xE040-0xEBBF are
/// recognised so callers get a clear error instead of a silent Byte fallback.
/// Packing them into 13-bit words is not implemented.
use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::Mode;
use crate::error::{QrError, Result};

/// Whether a big-endian 2-byte word is a Shift-JIS Kanji code point
pub fn is_kanji_word(word: u16) -> bool {
    let trail = (word & 0xFF) as u8;
    let trail_ok = (0x40..=0xFC).contains(&trail) && trail != 0x7F;
    trail_ok && ((0x8140..=0x9FFC).contains(&word) || (0xE040..=0xEBBF).contains(&word))
}

/// True when `input` is a non-empty sequence of Shift-JIS Kanji words
pub fn is_kanji(input: &[u8]) -> bool {
    !input.is_empty()
        && input.len() % 2 == 0
        && input
            .chunks_exact(2)
            .all(|w| is_kanji_word(u16::from_be_bytes([w[0], w[1]])))
}

pub struct KanjiEncoder;

impl KanjiEncoder {
    pub fn encode(_sjis: &[u8]) -> Result<BitBuffer> {
        Err(QrError::UnsupportedMode(Mode::Kanji))
    }
}
