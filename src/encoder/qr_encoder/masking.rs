use rayon::prelude::*;
use tracing::{debug, trace};

use crate::encoder::format::FormatInfo;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::penalty::penalty_score;
use crate::models::{ECLevel, MaskPattern};

/// Penalty the symbol would have with `mask` committed, scored on a scratch copy
fn trial_penalty(grid: &FunctionMask, ec_level: ECLevel, mask: MaskPattern) -> u32 {
    let mut trial = grid.clone();
    commit_mask(&mut trial, ec_level, mask);
    let penalty = penalty_score(trial.modules());
    trace!(mask = mask.bits(), penalty, "mask candidate");
    penalty
}

/// Lowest-penalty mask for an unmasked grid; ties go to the lower pattern number
pub(super) fn select_mask(grid: &FunctionMask, ec_level: ECLevel, parallel: bool) -> MaskPattern {
    let penalties: Vec<(u32, MaskPattern)> = if parallel {
        MaskPattern::ALL
            .into_par_iter()
            .map(|mask| (trial_penalty(grid, ec_level, mask), mask))
            .collect()
    } else {
        MaskPattern::ALL
            .into_iter()
            .map(|mask| (trial_penalty(grid, ec_level, mask), mask))
            .collect()
    };

    // Both paths keep pattern order and min_by_key returns the first minimum
    let (penalty, mask) = penalties
        .into_iter()
        .min_by_key(|&(penalty, _)| penalty)
        .unwrap_or((0, MaskPattern::Pattern0));
    debug!(mask = mask.bits(), penalty, parallel, "selected mask");
    mask
}

/// Draw the format bits for `mask`, then XOR it into the data modules
pub(super) fn commit_mask(grid: &mut FunctionMask, ec_level: ECLevel, mask: MaskPattern) {
    FormatInfo::new(ec_level, mask).draw(grid);
    grid.apply_mask(mask);
}
