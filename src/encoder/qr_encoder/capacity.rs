use tracing::debug;

use crate::encoder::segment::Segment;
use crate::encoder::tables::data_codewords;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};

/// Outcome of the version search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Selection {
    pub version: Version,
    pub ec_level: ECLevel,
    pub used_bits: usize,
}

/// Smallest version in `min..=max` whose data capacity at `ec_level` holds
/// `segments`, then (if `boost`) the strongest level that still fits that version.
pub(super) fn select_version(
    segments: &[Segment],
    ec_level: ECLevel,
    min: Version,
    max: Version,
    boost: bool,
) -> Result<Selection> {
    let mut last_needed = None;
    let mut found = None;
    for version in min.range_to(max) {
        let capacity_bits = data_codewords(version, ec_level) * 8;
        last_needed = Segment::total_bits(segments, version);
        if let Some(used) = last_needed.filter(|&used| used <= capacity_bits) {
            found = Some((version, used));
            break;
        }
    }

    let Some((version, used_bits)) = found else {
        return Err(too_long(segments, ec_level, max, last_needed));
    };

    let mut chosen = ec_level;
    if boost {
        for level in [ECLevel::M, ECLevel::Q, ECLevel::H] {
            if level > chosen && used_bits <= data_codewords(version, level) * 8 {
                chosen = level;
            }
        }
        if chosen != ec_level {
            debug!(requested = ?ec_level, boosted = ?chosen, "boosted error correction level");
        }
    }

    Ok(Selection {
        version,
        ec_level: chosen,
        used_bits,
    })
}

fn too_long(
    segments: &[Segment],
    ec_level: ECLevel,
    max: Version,
    needed_bits: Option<usize>,
) -> QrError {
    let capacity_bits = data_codewords(max, ec_level) * 8;
    match needed_bits {
        Some(needed_bits) => QrError::DataTooLong {
            needed_bits,
            capacity_bits,
        },
        None => {
            // Some count indicator overflowed even at the largest permitted version
            let max_number = max.number();
            match segments.iter().find(|seg| {
                let bits = seg.mode().char_count_bits(max_number);
                bits == 0 || seg.char_count() >= 1usize << bits
            }) {
                Some(seg) => QrError::SegmentTooLong {
                    mode: seg.mode(),
                    chars: seg.char_count(),
                    max_version: max_number,
                },
                None => QrError::DataTooLong {
                    needed_bits: usize::MAX,
                    capacity_bits,
                },
            }
        }
    }
}
