//! QR code encoding modules
//!
//! Everything needed to turn input data into a finished symbol:
//! - Segment construction and data modes (numeric, alphanumeric, byte, kanji)
//! - Error correction (Reed-Solomon, BCH)
//! - Function pattern drawing and codeword placement
//! - Masking and penalty scoring

/// BCH codes for format and version info
pub mod bch;
/// Append-only bit sequence used to build segments
pub mod bit_buffer;
/// Zigzag placement of codewords into the data modules
pub mod bitstream;
pub mod config;
/// Format information drawing (mask pattern, EC level)
pub mod format;
/// Function module grid builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// Data mask application
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Penalty rules used to rank mask patterns
pub mod penalty;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Mode-tagged runs of encoded data
pub mod segment;
/// QR capacity tables (ECC codewords/blocks)
pub mod tables;
/// Version information drawing (versions 7-40)
pub mod version;
