/// Format information encoding and placement
use crate::encoder::bch::BchEncoder;
use crate::encoder::placement::ModuleGrid;
use crate::models::{ECLevel, MaskPattern};

/// XOR pattern applied so the format string is never all zero
pub const FORMAT_MASK: u16 = 0x5412;

/// Format info is 15 bits (5 data + 10 ECC)
/// Written twice: around the top-left finder, and split between the
/// top-right and bottom-left finders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Applied mask
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Format info for a level and mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// 5 data bits: level (2) then mask id (3)
    pub fn data_bits(&self) -> u16 {
        ((self.ec_level.format_bits() as u16) << 3) | self.mask_pattern.id() as u16
    }

    /// BCH(15,5) codeword before the 0x5412 mask
    pub fn unmasked_bits(&self) -> u16 {
        BchEncoder::encode(self.data_bits() as u32, BchEncoder::FORMAT_GENERATOR) as u16
    }

    /// Final 15-bit value written into the symbol
    pub fn encode(&self) -> u16 {
        self.unmasked_bits() ^ FORMAT_MASK
    }

    /// Write both copies; bit 0 is the least significant bit
    pub fn draw(&self, grid: &mut ModuleGrid) {
        let bits = self.encode();
        Self::place(grid, |i| (bits >> i) & 1 != 0);
    }

    /// Mark the format area as function modules, all light
    pub(crate) fn draw_placeholder(&self, grid: &mut ModuleGrid) {
        Self::place(grid, |_| false);
    }

    fn place(grid: &mut ModuleGrid, bit: impl Fn(usize) -> bool) {
        let size = grid.size();

        // Top-left: column 8 going down, then row 8 going left,
        // skipping the timing modules
        for i in 0..6 {
            grid.set_function(8, i, bit(i));
        }
        grid.set_function(8, 7, bit(6));
        grid.set_function(8, 8, bit(7));
        grid.set_function(7, 8, bit(8));
        for i in 9..15 {
            grid.set_function(14 - i, 8, bit(i));
        }

        // Row 8 under the top-right finder, column 8 beside the bottom-left
        for i in 0..8 {
            grid.set_function(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            grid.set_function(8, size - 15 + i, bit(i));
        }

        // Always dark
        grid.set_function(8, size - 8, true);
    }
}
