/// Mask application on data modules
use crate::models::{BitMatrix, MaskPattern};

/// XOR the mask pattern into every non-function module.
/// Applying the same pattern twice restores the grid.
pub fn apply_mask(modules: &mut BitMatrix, function: &BitMatrix, mask_pattern: MaskPattern) {
    let width = modules.width();
    let height = modules.height();

    for y in 0..height {
        for x in 0..width {
            if !function.get(x, y) && mask_pattern.is_masked(y, x) {
                modules.toggle(x, y);
            }
        }
    }
}
