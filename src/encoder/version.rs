/// Version information block (versions 7 and up)
use crate::encoder::bch::BchEncoder;
use crate::encoder::placement::ModuleGrid;
use crate::models::Version;

/// 18-bit version info: 6 data bits + 12 BCH bits, no XOR mask.
/// Drawn as a 6x3 block above the bottom-left finder and its transpose
/// left of the top-right finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    /// Symbol version
    pub version: Version,
}

impl VersionInfo {
    /// Version info for `version`
    pub fn new(version: Version) -> Self {
        Self { version }
    }

    /// 18-bit word: 6 version bits then 12 BCH bits
    pub fn encode(&self) -> u32 {
        BchEncoder::encode(self.version.number() as u32, BchEncoder::VERSION_GENERATOR)
    }

    /// Draw both blocks; no-op below version 7
    pub fn draw(&self, grid: &mut ModuleGrid) {
        let bits = self.encode();
        let size = grid.size();
        for i in 0..18 {
            let dark = (bits >> i) & 1 != 0;
            let a = size - 11 + i % 3;
            let b = i / 3;
            grid.set_function(a, b, dark);
            grid.set_function(b, a, dark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codewords() {
        let v7 = VersionInfo::new(Version::new(7).unwrap());
        assert_eq!(v7.encode(), 0x07C94);
        let v40 = VersionInfo::new(Version::MAX);
        assert_eq!(v40.encode(), 0x28C69);
    }

    #[test]
    fn test_blocks_are_transposed() {
        let grid = ModuleGrid::new(Version::new(12).unwrap());
        let size = grid.size();
        let m = grid.modules();
        for b in 0..6 {
            for a in size - 11..size - 8 {
                assert_eq!(m.get(a, b), m.get(b, a));
                assert!(grid.function_mask().is_function(a, b));
                assert!(grid.function_mask().is_function(b, a));
            }
        }
    }

    #[test]
    fn test_bit_positions() {
        let version = Version::new(7).unwrap();
        let grid = ModuleGrid::new(version);
        let bits = VersionInfo::new(version).encode();
        let size = grid.size();
        // Bit 0 at the top-left of the top-right block, bit 17 at its corner
        assert_eq!(grid.modules().get(size - 11, 0), bits & 1 != 0);
        assert_eq!(grid.modules().get(size - 9, 5), (bits >> 17) & 1 != 0);
    }

    #[test]
    fn test_small_versions_have_no_block() {
        let grid = ModuleGrid::new(Version::new(6).unwrap());
        let size = grid.size();
        assert!(!grid.function_mask().is_function(size - 11, 0));
    }
}
