/// Data masking and penalty scoring
use rayon::prelude::*;

use crate::debug::debug_log;
use crate::encoder::config;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::placement::ModuleGrid;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// XOR a mask pattern over every non-function module.
/// Applying the same mask twice restores the original grid.
pub fn apply_mask(matrix: &mut BitMatrix, mask_pattern: &MaskPattern, func: &FunctionMask) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if !func.is_function(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Total penalty of a finished grid (all four rules)
pub fn penalty_score(matrix: &BitMatrix) -> u32 {
    let size = matrix.width();
    let mut result = 0;

    for y in 0..size {
        result += line_penalty(size, |x| matrix.get(x, y));
    }
    for x in 0..size {
        result += line_penalty(size, |y| matrix.get(x, y));
    }

    // 2x2 blocks of one color
    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    result + balance_penalty(matrix.count_ones(), size * size)
}

/// Rule 4: 10 points per full 5% step away from a 50% dark ratio
fn balance_penalty(dark: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let k = (2 * dark).abs_diff(total) * 10 / total;
    k as u32 * PENALTY_N4
}

/// Rules 1 and 3 over one row or column
fn line_penalty(size: usize, get: impl Fn(usize) -> bool) -> u32 {
    let mut result = 0;
    let mut run_color = false;
    let mut run_len = 0;
    let mut history = RunHistory::new(size);

    for i in 0..size {
        let color = get(i);
        if color == run_color {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            history.push(run_len);
            if !run_color {
                result += history.count_finder_like() * PENALTY_N3;
            }
            run_color = color;
            run_len = 1;
        }
    }
    result + history.terminate(run_color, run_len) * PENALTY_N3
}

/// Last seven run lengths of a line, newest first.
/// The area outside the symbol counts as a light run of `size` modules.
struct RunHistory {
    size: usize,
    runs: [usize; 7],
}

impl RunHistory {
    fn new(size: usize) -> Self {
        Self { size, runs: [0; 7] }
    }

    fn push(&mut self, mut run_len: usize) {
        // First run touches the edge: extend it with the light border
        if self.runs[0] == 0 {
            run_len += self.size;
        }
        self.runs.copy_within(0..6, 1);
        self.runs[0] = run_len;
    }

    /// 1:1:3:1:1 dark/light/dark/light/dark core, counted once for each side
    /// with 4 light units while the other side has at least one
    fn count_finder_like(&self) -> u32 {
        let r = &self.runs;
        let n = r[1];
        let core = n > 0 && r[2] == n && r[3] == n * 3 && r[4] == n && r[5] == n;
        (core && r[0] >= n * 4 && r[6] >= n) as u32 + (core && r[6] >= n * 4 && r[0] >= n) as u32
    }

    fn terminate(mut self, run_color: bool, mut run_len: usize) -> u32 {
        if run_color {
            self.push(run_len);
            run_len = 0;
        }
        run_len += self.size;
        self.push(run_len);
        self.count_finder_like()
    }
}

/// Penalty of one candidate mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskScore {
    /// Candidate mask
    pub mask: MaskPattern,
    /// Sum of the four penalty rules with format bits drawn
    pub penalty: u32,
}

/// Score one mask on a copy of the unmasked grid, format bits included
fn score_mask(grid: &ModuleGrid, ec_level: ECLevel, mask: MaskPattern) -> MaskScore {
    let mut candidate = grid.clone();
    candidate.apply_mask(mask);
    candidate.draw_format_bits(ec_level, mask);
    MaskScore {
        mask,
        penalty: penalty_score(candidate.modules()),
    }
}

/// Scores for all eight masks, in mask id order
pub fn score_masks(grid: &ModuleGrid, ec_level: ECLevel) -> Vec<MaskScore> {
    let parallel =
        config::parallel_masks() && grid.version().number() >= config::parallel_min_version();

    if parallel {
        MaskPattern::ALL
            .par_iter()
            .map(|&mask| score_mask(grid, ec_level, mask))
            .collect()
    } else {
        MaskPattern::ALL
            .iter()
            .map(|&mask| score_mask(grid, ec_level, mask))
            .collect()
    }
}

/// Lowest penalty wins; ties go to the lowest mask id
pub fn select_mask(grid: &ModuleGrid, ec_level: ECLevel) -> MaskPattern {
    let scores = score_masks(grid, ec_level);
    for score in &scores {
        debug_log!("mask {} penalty {}", score.mask.id(), score.penalty);
    }
    scores
        .iter()
        .min_by_key(|s| (s.penalty, s.mask.id()))
        .map(|s| s.mask)
        .unwrap_or(MaskPattern::Pattern0)
}
