//! RustQR encode - QR Code (Model 2) symbol generation
//!
//! A pure Rust QR code encoder: text or bytes in, a square grid of dark and
//! light modules out. Covers versions 1-40 at all four error correction
//! levels, automatic mode and version selection, and mask scoring.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (segments, error correction, placement, masking)
pub mod encoder;
/// Error type shared by every fallible operation
pub mod error;
/// Core data structures (QRCode, BitMatrix, Version, etc.)
pub mod models;

pub use encoder::config::EncodeOptions;
pub use encoder::modes::Mode;
pub use encoder::qr_encoder::QrEncoder;
pub use encoder::segment::Segment;
pub use error::{QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

/// Encode Unicode text at `ec_level` or higher
///
/// The text becomes a single segment in the most compact mode that holds it
/// (numeric, alphanumeric, else UTF-8 bytes). Version, level boost and mask
/// come from [`EncodeOptions::default`].
///
/// # Errors
/// [`QrError::EmptyInput`] for `""`, [`QrError::DataTooLong`] when the text
/// does not fit the largest permitted version.
pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<QRCode> {
    let segments = Segment::make_segments(text)?;
    QrEncoder::encode_segments(&segments, ec_level, &EncodeOptions::default())
}

/// Encode arbitrary bytes as a single Byte mode segment
///
/// # Errors
/// [`QrError::EmptyInput`] for an empty slice, [`QrError::DataTooLong`] or
/// [`QrError::SegmentTooLong`] when the data does not fit.
pub fn encode_binary(data: &[u8], ec_level: ECLevel) -> Result<QRCode> {
    if data.is_empty() {
        return Err(QrError::EmptyInput);
    }
    let segments = [Segment::make_bytes(data)];
    QrEncoder::encode_segments(&segments, ec_level, &EncodeOptions::default())
}

/// Encode caller-built segments with explicit options
///
/// An empty segment list is accepted and yields a symbol holding only padding.
pub fn encode_segments(
    segments: &[Segment],
    ec_level: ECLevel,
    options: &EncodeOptions,
) -> Result<QRCode> {
    QrEncoder::encode_segments(segments, ec_level, options)
}
