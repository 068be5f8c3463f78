//! A run of input encoded under a single data mode

use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::Mode;
use crate::encoder::modes::alphanumeric::AlphanumericEncoder;
use crate::encoder::modes::byte::ByteEncoder;
use crate::encoder::modes::kanji::KanjiEncoder;
use crate::encoder::modes::numeric::NumericEncoder;
use crate::error::{QrError, Result};
use crate::models::Version;

/// Immutable once built. `data.bit_len()` is the packed payload length and
/// `data.bytes().len() == ceil(bit_len / 8)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    char_count: usize,
    data: BitBuffer,
}

impl Segment {
    /// Build a segment from already-packed payload bits
    pub fn new(mode: Mode, char_count: usize, data: BitBuffer) -> Self {
        Self {
            mode,
            char_count,
            data,
        }
    }

    /// Decimal digits only
    pub fn make_numeric(digits: &str) -> Result<Self> {
        let data = NumericEncoder::encode(digits.as_bytes())?;
        Ok(Self::new(Mode::Numeric, digits.len(), data))
    }

    /// Digits, uppercase A-Z, space and `$%*+-./:`
    pub fn make_alphanumeric(text: &str) -> Result<Self> {
        let data = AlphanumericEncoder::encode(text.as_bytes())?;
        Ok(Self::new(Mode::Alphanumeric, text.len(), data))
    }

    /// Arbitrary bytes, 8 bits each
    pub fn make_bytes(data: &[u8]) -> Self {
        Self::new(Mode::Byte, data.len(), ByteEncoder::encode(data))
    }

    /// Shift-JIS Kanji; always fails with [`QrError::UnsupportedMode`]
    pub fn make_kanji(sjis: &[u8]) -> Result<Self> {
        let data = KanjiEncoder::encode(sjis)?;
        Ok(Self::new(Mode::Kanji, sjis.len() / 2, data))
    }

    /// Single segment in the most compact mode for `text`. Empty input is rejected.
    pub fn make_segments(text: &str) -> Result<Vec<Self>> {
        if text.is_empty() {
            return Err(QrError::EmptyInput);
        }
        let segment = match Mode::classify(text) {
            Mode::Numeric => Self::make_numeric(text)?,
            Mode::Alphanumeric => Self::make_alphanumeric(text)?,
            Mode::Byte => Self::make_bytes(text.as_bytes()),
            Mode::Kanji => Self::make_kanji(text.as_bytes())?,
        };
        Ok(vec![segment])
    }

    /// Single segment for raw bytes, classified with Kanji detection.
    /// Kanji-classified input fails with [`QrError::UnsupportedMode`].
    pub fn make_segments_from_bytes(data: &[u8]) -> Result<Vec<Self>> {
        if data.is_empty() {
            return Err(QrError::EmptyInput);
        }
        let segment = match Mode::classify_bytes(data) {
            Mode::Kanji => Self::make_kanji(data)?,
            // Numeric/alphanumeric classification implies ASCII, hence valid UTF-8.
            Mode::Numeric => Self::new(Mode::Numeric, data.len(), NumericEncoder::encode(data)?),
            Mode::Alphanumeric => Self::new(
                Mode::Alphanumeric,
                data.len(),
                AlphanumericEncoder::encode(data)?,
            ),
            Mode::Byte => Self::make_bytes(data),
        };
        Ok(vec![segment])
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of input characters (bytes for Byte mode)
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Packed payload length in bits, excluding mode and count indicators
    pub fn bit_len(&self) -> usize {
        self.data.bit_len()
    }

    pub fn data(&self) -> &BitBuffer {
        &self.data
    }

    /// Bits needed for `segments` at `version`, including the 4-bit mode and
    /// count indicators. `None` if a character count overflows its indicator.
    pub fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
        let mut total: usize = 0;
        for seg in segments {
            let cc_bits = seg.mode.char_count_bits(version.number());
            if cc_bits == 0 || seg.char_count >= 1usize << cc_bits {
                return None;
            }
            total = total.checked_add(4 + cc_bits as usize + seg.bit_len())?;
        }
        Some(total)
    }
}
