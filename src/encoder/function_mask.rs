use crate::models::BitMatrix;

/// Function module flags for a symbol under construction.
/// true = function module (not data), false = data module.
///
/// Filled in as function patterns are drawn and dropped once the mask is
/// committed.
#[derive(Debug, Clone)]
pub struct FunctionMask {
    mask: BitMatrix,
}

impl FunctionMask {
    /// No function modules yet
    pub fn empty(size: usize) -> Self {
        Self {
            mask: BitMatrix::new(size, size),
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Flag a module as part of a function pattern
    pub fn mark(&mut self, x: usize, y: usize) {
        self.mask.set(x, y, true);
    }

    /// True for finder, timing, alignment, format and version modules
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Modules left for codewords and remainder bits
    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }
}
