//! Error types for QR symbol generation.
//!
//! [`QrError`] covers caller-visible failures: arguments outside their legal
//! range and payloads that do not fit any permitted version. Internal
//! invariant violations are not represented here; they panic.

use crate::encoder::modes::Mode;
use thiserror::Error;

/// Errors that can occur while building a QR Code symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Version number outside 1..=40.
    #[error("version {0} out of range (1-40)")]
    VersionOutOfRange(u8),

    /// Minimum version is greater than maximum version.
    #[error("invalid version range: min {min} > max {max}")]
    InvalidVersionRange {
        /// Requested lower bound.
        min: u8,
        /// Requested upper bound.
        max: u8,
    },

    /// Mask value outside -1..=7 (-1 meaning automatic).
    #[error("mask {0} out of range (-1 for automatic, or 0-7)")]
    MaskOutOfRange(i32),

    /// Reed-Solomon generator degree outside 1..=255.
    #[error("Reed-Solomon degree {0} out of range (1-255)")]
    DegreeOutOfRange(usize),

    /// More than 31 bits requested in a single append.
    #[error("bit count {0} out of range (0-31)")]
    BitCountOutOfRange(u8),

    /// Value does not fit in the declared number of bits.
    #[error("value {value} does not fit in {bits} bits")]
    ValueTooWide {
        /// Value that was appended.
        value: u32,
        /// Declared width.
        bits: u8,
    },

    /// Zero-length payload.
    #[error("input is empty")]
    EmptyInput,

    /// A byte is not encodable in the requested mode.
    #[error("byte 0x{byte:02X} is not valid in {mode:?} mode")]
    InvalidCharacter {
        /// Mode the segment was built for.
        mode: Mode,
        /// Offending input byte.
        byte: u8,
    },

    /// Mode is recognised but packing is not implemented.
    #[error("{0:?} mode is not supported")]
    UnsupportedMode(Mode),

    /// A segment's character count exceeds its count indicator at every permitted version.
    #[error("{mode:?} segment of {chars} characters exceeds the count indicator up to version {max_version}")]
    SegmentTooLong {
        /// Mode of the offending segment.
        mode: Mode,
        /// Character count of the offending segment.
        chars: usize,
        /// Largest version that was tried.
        max_version: u8,
    },

    /// Data does not fit in the largest permitted version.
    #[error("data too long: {needed_bits} bits needed, {capacity_bits} bits available")]
    DataTooLong {
        /// Bits required by the segments at the largest permitted version.
        needed_bits: usize,
        /// Data capacity of that version at the requested ECL.
        capacity_bits: usize,
    },

    /// Caller-supplied data codewords do not match the version/ECL capacity.
    #[error("expected {expected} data codewords, got {actual}")]
    CodewordCountMismatch {
        /// Data codeword capacity for the version/ECL.
        expected: usize,
        /// Number of codewords supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QrError::DataTooLong {
            needed_bits: 30000,
            capacity_bits: 10208,
        };
        assert_eq!(
            err.to_string(),
            "data too long: 30000 bits needed, 10208 bits available"
        );

        let err = QrError::InvalidCharacter {
            mode: Mode::Numeric,
            byte: b'x',
        };
        assert_eq!(err.to_string(), "byte 0x78 is not valid in Numeric mode");
    }
}
