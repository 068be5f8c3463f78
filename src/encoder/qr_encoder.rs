//! Main QR encoder - wires everything together

use tracing::{debug, instrument};

use crate::encoder::bitstream::CodewordPlacer;
use crate::encoder::config::EncodeOptions;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::segment::Segment;
use crate::encoder::tables;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, QRCode, Version};

mod capacity;
mod codewords;
mod masking;


/// Builds finished symbols from segments or raw data codewords
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `segments` at `ec_level` or higher, within the options' version range.
    #[instrument(skip_all, fields(segments = segments.len(), requested = ?ec_level))]
    pub fn encode_segments(
        segments: &[Segment],
        ec_level: ECLevel,
        options: &EncodeOptions,
    ) -> Result<QRCode> {
        let (min, max) = options.validate()?;
        let selection = capacity::select_version(segments, ec_level, min, max, options.boost_ecl)?;
        debug!(
            version = selection.version.number(),
            ec_level = ?selection.ec_level,
            used_bits = selection.used_bits,
            "selected version"
        );

        let data = codewords::assemble_data_codewords(segments, selection.version, selection.ec_level)?;
        Ok(Self::build(
            selection.version,
            selection.ec_level,
            &data,
            options.mask,
            options.parallel_masks,
        ))
    }

    /// Build a symbol from caller-supplied data codewords, which must fill
    /// the data capacity of `version` at `ec_level` exactly.
    pub fn encode_codewords(
        version: Version,
        ec_level: ECLevel,
        data: &[u8],
        mask: Option<MaskPattern>,
    ) -> Result<QRCode> {
        let expected = tables::data_codewords(version, ec_level);
        if data.len() != expected {
            return Err(QrError::CodewordCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        let parallel = EncodeOptions::default().parallel_masks;
        Ok(Self::build(version, ec_level, data, mask, parallel))
    }

    fn build(
        version: Version,
        ec_level: ECLevel,
        data: &[u8],
        mask: Option<MaskPattern>,
        parallel: bool,
    ) -> QRCode {
        let all_codewords = codewords::add_ecc_and_interleave(data, version, ec_level);

        let mut grid = FunctionMask::new(version, ec_level);
        CodewordPlacer::place(&mut grid, &all_codewords);

        let mask = mask.unwrap_or_else(|| masking::select_mask(&grid, ec_level, parallel));
        masking::commit_mask(&mut grid, ec_level, mask);
        debug!(version = version.number(), mask = mask.bits(), "committed mask");

        let (modules, function) = grid.into_parts();
        QRCode::from_parts(version, ec_level, mask, modules, function)
    }
}

/// Undo the committed mask of `code` and apply `mask` (or the best one)
pub(crate) fn remask(code: &QRCode, mask: Option<MaskPattern>) -> QRCode {
    let version = code.version();
    let ec_level = code.ec_level();
    let mut grid = FunctionMask::from_parts(
        version,
        code.modules().clone(),
        code.function_map().clone(),
    );
    grid.apply_mask(code.mask());

    let parallel = EncodeOptions::default().parallel_masks;
    let mask = mask.unwrap_or_else(|| masking::select_mask(&grid, ec_level, parallel));
    masking::commit_mask(&mut grid, ec_level, mask);

    let (modules, function) = grid.into_parts();
    QRCode::from_parts(version, ec_level, mask, modules, function)
}
