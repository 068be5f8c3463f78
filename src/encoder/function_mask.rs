use crate::encoder::format::FormatInfo;
use crate::encoder::mask::apply_mask;
use crate::encoder::version::VersionInfo;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Module grid with every function pattern drawn, plus the map of which
/// modules are function modules (true) and which carry data (false).
#[derive(Debug, Clone)]
pub struct FunctionMask {
    modules: BitMatrix,
    function: BitMatrix,
    version: Version,
}

impl FunctionMask {
    /// Draw timing, finder, alignment, format and version patterns for `version`.
    ///
    /// Format bits are drawn with a placeholder mask so their modules are
    /// reserved; the committed mask overwrites them.
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        let size = version.size();
        let mut grid = Self {
            modules: BitMatrix::square(size),
            function: BitMatrix::square(size),
            version,
        };

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            grid.set_function(6, i, i % 2 == 0);
            grid.set_function(i, 6, i % 2 == 0);
        }

        // Finder patterns + separators (overwrite part of the timing lines)
        grid.draw_finder(3, 3);
        grid.draw_finder(size - 4, 3);
        grid.draw_finder(3, size - 4);

        // Alignment patterns
        let align = alignment_pattern_positions(version);
        let n = align.len();
        for (i, &cx) in align.iter().enumerate() {
            for (j, &cy) in align.iter().enumerate() {
                // Skip the three finder corners
                if (i == 0 && j == 0) || (i == 0 && j == n - 1) || (i == n - 1 && j == 0) {
                    continue;
                }
                grid.draw_alignment(cx, cy);
            }
        }

        FormatInfo::new(ec_level, MaskPattern::Pattern0).draw(&mut grid);
        if let Some(info) = VersionInfo::new(version) {
            info.draw(&mut grid);
        }

        grid
    }

    /// Rebuild from a finished symbol's grids
    pub(crate) fn from_parts(version: Version, modules: BitMatrix, function: BitMatrix) -> Self {
        Self {
            modules,
            function,
            version,
        }
    }

    pub fn size(&self) -> usize {
        self.modules.width()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// Current color at (x, y)
    pub fn module(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    pub fn modules_mut(&mut self) -> &mut BitMatrix {
        &mut self.modules
    }

    pub fn function_map(&self) -> &BitMatrix {
        &self.function
    }

    pub fn into_parts(self) -> (BitMatrix, BitMatrix) {
        (self.modules, self.function)
    }

    /// Set a module's color and mark it non-maskable
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.function.set(x, y, true);
    }

    /// XOR `mask` into the data modules; function modules are left alone
    pub fn apply_mask(&mut self, mask: MaskPattern) {
        apply_mask(&mut self.modules, &self.function, mask);
    }

    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.function.count_ones()
    }

    /// 9x9 finder centered at (cx, cy): rings at Chebyshev distance 2 and 4
    /// are light, clipped to the symbol
    fn draw_finder(&mut self, cx: usize, cy: usize) {
        let size = self.size() as isize;
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if (0..size).contains(&x) && (0..size).contains(&y) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
                }
            }
        }
    }

    /// 5x5 alignment pattern centered at (cx, cy): light ring at distance 1
    fn draw_alignment(&mut self, cx: usize, cy: usize) {
        for dy in -2isize..=2 {
            for dx in -2isize..=2 {
                let x = (cx as isize + dx) as usize;
                let y = (cy as isize + dy) as usize;
                self.set_function(x, y, dx.abs().max(dy.abs()) != 1);
            }
        }
    }
}

/// Alignment pattern centers for a given version, ascending.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let size = version.size();
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos = pos.saturating_sub(step);
    }
    positions
}
