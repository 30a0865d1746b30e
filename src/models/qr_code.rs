use std::fmt;
use std::str::FromStr;

use super::BitMatrix;
use crate::error::QrError;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest version (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self, QrError> {
        if (1..=40).contains(&number) {
            Ok(Version(number))
        } else {
            Err(QrError::invalid_parameter(
                "version",
                format!("{number} is outside 1..=40"),
            ))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Iterate every version from `self` to `last` inclusive
    pub fn range_to(self, last: Version) -> impl Iterator<Item = Version> {
        (self.0..=last.0).map(Version)
    }

    /// Whether this version carries the two 18-bit version blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels from weakest to strongest
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Table index (0=L .. 3=H)
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Two-bit value stored in the format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    #[cfg(test)]
    pub(crate) fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    /// Next stronger level, if any
    pub fn stronger(&self) -> Option<ECLevel> {
        match self {
            ECLevel::L => Some(ECLevel::M),
            ECLevel::M => Some(ECLevel::Q),
            ECLevel::Q => Some(ECLevel::H),
            ECLevel::H => None,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    /// Accepts single letters and the names used by styling front ends
    /// ("Low", "Medium", "MediumHigh", "Quartile", "High").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ECLevel::L),
            "m" | "medium" => Ok(ECLevel::M),
            "q" | "quartile" | "mediumhigh" | "medium_high" => Ok(ECLevel::Q),
            "h" | "high" => Ok(ECLevel::H),
            other => Err(QrError::invalid_parameter(
                "ec_level",
                format!("unknown level '{other}'"),
            )),
        }
    }
}

/// Mask pattern (0-7); `i` is the row, `j` the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Validate a mask id
    pub fn new(id: u8) -> Result<Self, QrError> {
        Self::ALL.get(id as usize).copied().ok_or_else(|| {
            QrError::invalid_parameter("mask", format!("{id} is outside 0..=7"))
        })
    }

    /// Mask id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` should be inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoded QR symbol
///
/// The grid is final: function patterns, codewords, mask and format/version
/// information are all committed. Consumers read it through
/// [`Symbol::get_module`] and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    modules: BitMatrix,
}

impl Symbol {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        modules: BitMatrix,
    ) -> Self {
        debug_assert_eq!(modules.width(), version.size());
        debug_assert_eq!(modules.height(), version.size());
        Self {
            version,
            ec_level,
            mask,
            modules,
        }
    }

    /// QR version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side length in modules (4 * version + 17)
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Error correction level actually used (may be boosted)
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Committed mask pattern
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Module at column `x`, row `y` (true = dark); outside the grid is light
    pub fn get_module(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Module matrix (true = dark)
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::MAX.size(), 177);
        assert!(Version::new(0).is_err());
        assert!(Version::new(41).is_err());
        assert_eq!(Version::MIN.range_to(Version::MAX).count(), 40);
    }

    #[test]
    fn test_ec_level() {
        for level in ECLevel::ALL {
            assert_eq!(ECLevel::from_format_bits(level.format_bits()), level);
        }
        assert_eq!(ECLevel::L.stronger(), Some(ECLevel::M));
        assert_eq!(ECLevel::H.stronger(), None);
        assert_eq!("MediumHigh".parse::<ECLevel>().unwrap(), ECLevel::Q);
        assert_eq!("h".parse::<ECLevel>().unwrap(), ECLevel::H);
        assert!("extreme".parse::<ECLevel>().is_err());
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        // Row-based vs column-based patterns
        assert!(MaskPattern::Pattern1.is_masked(2, 1));
        assert!(!MaskPattern::Pattern1.is_masked(1, 2));
        assert!(MaskPattern::Pattern2.is_masked(1, 3));
        assert!(!MaskPattern::Pattern2.is_masked(3, 1));

        assert_eq!(MaskPattern::new(7).unwrap(), MaskPattern::Pattern7);
        assert!(MaskPattern::new(8).is_err());
    }
}
