/// Module grid construction: function patterns and codeword placement
use crate::encoder::format::FormatInfo;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::mask::apply_mask;
use crate::encoder::tables::alignment_pattern_positions;
use crate::encoder::version::VersionInfo;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Grid under construction: module colors plus function module flags
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    version: Version,
    modules: BitMatrix,
    function: FunctionMask,
}

impl ModuleGrid {
    /// Grid with every function pattern drawn and the format area reserved
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut grid = Self {
            version,
            modules: BitMatrix::new(size, size),
            function: FunctionMask::empty(size),
        };

        grid.draw_finder_pattern(3, 3);
        grid.draw_finder_pattern(size - 4, 3);
        grid.draw_finder_pattern(3, size - 4);
        grid.draw_timing_patterns();
        grid.draw_alignment_patterns();
        grid.reserve_format_area();
        if version.has_version_info() {
            VersionInfo::new(version).draw(&mut grid);
        }
        grid
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Module colors, dark = true
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Function module flags
    pub fn function_mask(&self) -> &FunctionMask {
        &self.function
    }

    /// Drop the function flags, keep the modules
    pub fn into_modules(self) -> BitMatrix {
        self.modules
    }

    /// Set a module and mark it as a function module
    pub(crate) fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.function.mark(x, y);
    }

    /// 7x7 finder centered at (cx, cy) plus its light separator ring,
    /// clipped at the symbol edge
    fn draw_finder_pattern(&mut self, cx: usize, cy: usize) {
        let size = self.size() as isize;
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if !(0..size).contains(&x) || !(0..size).contains(&y) {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
            }
        }
    }

    /// Row 6 and column 6 between the separators
    fn draw_timing_patterns(&mut self) {
        let size = self.size();
        for i in 8..size - 8 {
            self.set_function(6, i, i % 2 == 0);
            self.set_function(i, 6, i % 2 == 0);
        }
    }

    fn draw_alignment_patterns(&mut self) {
        let positions = alignment_pattern_positions(self.version);
        let Some(&last) = positions.last() else {
            return;
        };
        for &cy in &positions {
            for &cx in &positions {
                // The three corners are occupied by finder patterns
                let on_finder =
                    (cx == 6 && cy == 6) || (cx == 6 && cy == last) || (cx == last && cy == 6);
                if !on_finder {
                    self.draw_alignment_pattern(cx, cy);
                }
            }
        }
    }

    /// 5x5 alignment pattern centered at (cx, cy)
    fn draw_alignment_pattern(&mut self, cx: usize, cy: usize) {
        for dy in -2isize..=2 {
            for dx in -2isize..=2 {
                let dark = dx.abs().max(dy.abs()) != 1;
                self.set_function(
                    (cx as isize + dx) as usize,
                    (cy as isize + dy) as usize,
                    dark,
                );
            }
        }
    }

    /// Mark both format strips (and the dark module) before data placement
    fn reserve_format_area(&mut self) {
        FormatInfo::new(ECLevel::L, MaskPattern::Pattern0).draw_placeholder(self);
    }

    /// Write the final format information for a level and mask
    pub fn draw_format_bits(&mut self, ec_level: ECLevel, mask: MaskPattern) {
        FormatInfo::new(ec_level, mask).draw(self);
    }

    /// Fill the data area with `codewords` in zig-zag order.
    ///
    /// Column pairs are walked from the right edge, alternating upward and
    /// downward, skipping the vertical timing column and every function
    /// module. Modules beyond the last codeword bit stay light.
    pub fn draw_codewords(&mut self, codewords: &[u8]) {
        let size = self.size();
        let total_bits = codewords.len() * 8;
        let mut bit_index = 0;
        let mut upward = true;
        let mut col = size as isize - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            for step in 0..size {
                let row = if upward { size - 1 - step } else { step };
                for x in [col as usize, col as usize - 1] {
                    if self.function.is_function(x, row) {
                        continue;
                    }
                    let dark = bit_index < total_bits
                        && (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 != 0;
                    self.modules.set(x, row, dark);
                    bit_index += 1;
                }
            }

            upward = !upward;
            col -= 2;
        }

        debug_assert_eq!(bit_index, self.function.data_modules_count());
    }

    /// XOR a mask over the data modules
    pub fn apply_mask(&mut self, mask: MaskPattern) {
        apply_mask(&mut self.modules, &mask, &self.function);
    }
}
