/// Main QR encoder - wires every stage together
use crate::debug::debug_log;
use crate::encoder::bitstream::assemble_codewords;
use crate::encoder::capacity::select_version;
use crate::encoder::config;
use crate::encoder::interleave::add_ecc_and_interleave;
use crate::encoder::mask::select_mask;
use crate::encoder::placement::ModuleGrid;
use crate::encoder::segment::Segment;
use crate::encoder::tables::{ec_block_info, num_total_codewords};
use crate::error::QrError;
use crate::models::{ECLevel, MaskPattern, Symbol, Version};

/// Call-level encoding options
///
/// Raw numbers are kept as given and validated when encoding starts, so an
/// out-of-range value surfaces as [`QrError::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Requested (minimum) error correction level
    pub ec_level: ECLevel,
    /// Smallest version to consider (1-40)
    pub min_version: u8,
    /// Largest version to consider (1-40)
    pub max_version: u8,
    /// Forced mask id (0-7); `None` picks the lowest-penalty mask
    pub mask: Option<u8>,
    /// Raise the level while the chosen version still fits
    pub boost_ecc: bool,
}

impl EncodeOptions {
    /// Full version range, automatic mask, boost on
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            min_version: Version::MIN.number(),
            max_version: Version::MAX.number(),
            mask: None,
            boost_ecc: true,
        }
    }

    /// Restrict the version search to `min..=max`
    pub fn with_version_range(mut self, min: u8, max: u8) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Force a mask id instead of scoring all eight
    pub fn with_mask(mut self, mask: u8) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Enable or disable the error correction boost
    pub fn with_boost_ecc(mut self, boost_ecc: bool) -> Self {
        self.boost_ecc = boost_ecc;
        self
    }

    fn version_range(&self) -> Result<(Version, Version), QrError> {
        let min = Version::new(self.min_version)?;
        let max = Version::new(self.max_version)?;
        if min > max {
            return Err(QrError::invalid_parameter(
                "version range",
                format!("min version {min} is greater than max version {max}"),
            ));
        }
        Ok((min, max))
    }

    fn forced_mask(&self) -> Result<Option<MaskPattern>, QrError> {
        self.mask.map(MaskPattern::new).transpose()
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new(config::default_ec_level())
    }
}

/// Main QR encoder that turns segments into a finished symbol
pub struct QrEncoder;

impl QrEncoder {
    /// Encode text, choosing the mode from its character set
    pub fn encode_text(text: &str, options: &EncodeOptions) -> Result<Symbol, QrError> {
        let segments = Segment::make_segments(text);
        Self::encode_segments(&segments, options)
    }

    /// Encode raw bytes as a single byte-mode segment
    pub fn encode_binary(data: &[u8], options: &EncodeOptions) -> Result<Symbol, QrError> {
        Self::encode_segments(&[Segment::make_bytes(data)], options)
    }

    /// Encode caller-built segments
    pub fn encode_segments(
        segments: &[Segment],
        options: &EncodeOptions,
    ) -> Result<Symbol, QrError> {
        let (min, max) = options.version_range()?;
        let forced_mask = options.forced_mask()?;

        // Pick version and (possibly boosted) level
        let choice = select_version(segments, options.ec_level, min, max, options.boost_ecc)?;
        let version = choice.version;
        let ec_level = choice.ec_level;

        // Data codewords, then ECC and interleaving
        let data = assemble_codewords(segments, version, ec_level)?;
        let codewords = add_ecc_and_interleave(&data, &ec_block_info(version, ec_level));
        let expected = num_total_codewords(version);
        if codewords.len() != expected {
            return Err(QrError::CapacityMismatch {
                expected_bits: expected * 8,
                actual_bits: codewords.len() * 8,
            });
        }

        // Function patterns and data placement
        let mut grid = ModuleGrid::new(version);
        grid.draw_codewords(&codewords);

        // Mask and final format information
        let mask = match forced_mask {
            Some(mask) => mask,
            None => select_mask(&grid, ec_level),
        };
        grid.apply_mask(mask);
        grid.draw_format_bits(ec_level, mask);
        debug_log!(
            "committed version {} level {:?} mask {}",
            version,
            ec_level,
            mask.id()
        );

        Ok(Symbol::new(version, ec_level, mask, grid.into_modules()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = EncodeOptions::new(ECLevel::M);
        assert_eq!(options.min_version, 1);
        assert_eq!(options.max_version, 40);
        assert_eq!(options.mask, None);
        assert!(options.boost_ecc);
    }

    #[test]
    fn test_hello_world_low() {
        let options = EncodeOptions::new(ECLevel::L).with_boost_ecc(false);
        let symbol = QrEncoder::encode_text("HELLO WORLD", &options).unwrap();
        assert_eq!(symbol.version(), Version::MIN);
        assert_eq!(symbol.size(), 21);
        assert_eq!(symbol.ec_level(), ECLevel::L);
    }

    #[test]
    fn test_forced_mask() {
        for id in 0..8 {
            let options = EncodeOptions::new(ECLevel::Q).with_mask(id);
            let symbol = QrEncoder::encode_text("forced", &options).unwrap();
            assert_eq!(symbol.mask().id(), id);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let bad_mask = EncodeOptions::new(ECLevel::L).with_mask(8);
        assert!(matches!(
            QrEncoder::encode_text("x", &bad_mask),
            Err(QrError::InvalidParameter { name: "mask", .. })
        ));

        let bad_version = EncodeOptions::new(ECLevel::L).with_version_range(0, 40);
        assert!(matches!(
            QrEncoder::encode_text("x", &bad_version),
            Err(QrError::InvalidParameter {
                name: "version",
                ..
            })
        ));

        let inverted = EncodeOptions::new(ECLevel::L).with_version_range(10, 2);
        assert!(matches!(
            QrEncoder::encode_text("x", &inverted),
            Err(QrError::InvalidParameter {
                name: "version range",
                ..
            })
        ));
    }

    #[test]
    fn test_binary_uses_byte_mode() {
        let options = EncodeOptions::new(ECLevel::M).with_boost_ecc(false);
        // 17 bytes fit 1-M only as digits; as bytes they need version 2
        let digits = "12345678901234567";
        let text = QrEncoder::encode_text(digits, &options).unwrap();
        let binary = QrEncoder::encode_binary(digits.as_bytes(), &options).unwrap();
        assert_eq!(text.version(), Version::MIN);
        assert_eq!(binary.version().number(), 2);
    }

    #[test]
    fn test_largest_symbol() {
        // 2953 bytes is the 40-L byte capacity
        let data = vec![0xA5u8; 2953];
        let options = EncodeOptions::new(ECLevel::L);
        let symbol = QrEncoder::encode_binary(&data, &options).unwrap();
        assert_eq!(symbol.version(), Version::MAX);
        assert_eq!(symbol.size(), 177);

        let too_big = vec![0u8; 2954];
        assert!(matches!(
            QrEncoder::encode_binary(&too_big, &options),
            Err(QrError::DataTooLong { .. })
        ));
    }
}
