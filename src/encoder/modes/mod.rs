//! QR data modes and input classification
//!
//! Each mode packs characters into bits differently:
//! - Numeric: digits 0-9, 3 digits per 10 bits
//! - Alphanumeric: 45-symbol set, 2 characters per 11 bits
//! - Byte: raw 8-bit data (UTF-8 text, binary)
//! - Kanji: Shift-JIS double-byte characters (recognised, not packed)

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

/// Data mode. Discriminants are the 4-bit mode indicators written to the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Mode 0001
    Numeric = 0b0001,
    /// Mode 0010
    Alphanumeric = 0b0010,
    /// Mode 0100
    Byte = 0b0100,
    /// Mode 1000
    Kanji = 0b1000,
}

// Character count indicator widths; rows are versions 1-9, 10-26, 27-40.
// Columns: Numeric, Alphanumeric, Byte, Kanji.
const CHAR_COUNT_BITS: [[u8; 4]; 3] = [[10, 9, 8, 8], [12, 11, 16, 10], [14, 13, 16, 12]];

impl Mode {
    /// 4-bit mode indicator
    pub fn mode_bits(&self) -> u32 {
        *self as u32
    }

    /// Width of the character count indicator at `version`.
    ///
    /// Returns 0 for a version outside 1..=40, which callers treat as unsupported.
    pub fn char_count_bits(&self, version: u8) -> u8 {
        let row = match version {
            1..=9 => 0,
            10..=26 => 1,
            27..=40 => 2,
            _ => return 0,
        };
        let column = match self {
            Mode::Numeric => 0,
            Mode::Alphanumeric => 1,
            Mode::Byte => 2,
            Mode::Kanji => 3,
        };
        CHAR_COUNT_BITS[row][column]
    }

    /// Most compact mode able to represent `text`.
    ///
    /// `&str` is UTF-8, so Kanji (Shift-JIS) is never chosen here.
    pub fn classify(text: &str) -> Mode {
        let bytes = text.as_bytes();
        if numeric::is_numeric(bytes) {
            Mode::Numeric
        } else if alphanumeric::is_alphanumeric(bytes) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    /// Most compact mode able to represent raw `data`, including Shift-JIS Kanji detection
    pub fn classify_bytes(data: &[u8]) -> Mode {
        if numeric::is_numeric(data) {
            Mode::Numeric
        } else if alphanumeric::is_alphanumeric(data) {
            Mode::Alphanumeric
        } else if kanji::is_kanji(data) {
            Mode::Kanji
        } else {
            Mode::Byte
        }
    }
}
