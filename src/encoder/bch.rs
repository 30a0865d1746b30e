/// BCH encoding for QR code format and version info
pub struct BchEncoder;

impl BchEncoder {
    /// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
    pub const FORMAT_GENERATOR: u32 = 0x537;
    /// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
    pub const VERSION_GENERATOR: u32 = 0x1F25;

    /// Systematic codeword: `data` followed by the remainder of
    /// data(x) * x^deg(g) divided by g(x)
    pub fn encode(data: u32, generator: u32) -> u32 {
        let shifted = data << Self::degree(generator);
        shifted | Self::remainder(shifted, generator)
    }

    /// True when `codeword` is a multiple of `generator`
    pub fn check(codeword: u32, generator: u32) -> bool {
        Self::remainder(codeword, generator) == 0
    }

    fn degree(poly: u32) -> u32 {
        31 - poly.leading_zeros()
    }

    fn remainder(mut value: u32, generator: u32) -> u32 {
        let gen_degree = Self::degree(generator);
        while value != 0 && Self::degree(value) >= gen_degree {
            value ^= generator << (Self::degree(value) - gen_degree);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_codewords() {
        // Level M (00), mask 5 (101): ISO/IEC 18004 annex C example
        assert_eq!(
            BchEncoder::encode(0b00101, BchEncoder::FORMAT_GENERATOR),
            0b001010011011100
        );
        assert!(BchEncoder::check(0b001010011011100, BchEncoder::FORMAT_GENERATOR));
        assert!(!BchEncoder::check(0b001010011011101, BchEncoder::FORMAT_GENERATOR));
    }

    #[test]
    fn test_version_codewords() {
        // Version 7: 000111 110010 010100
        assert_eq!(
            BchEncoder::encode(7, BchEncoder::VERSION_GENERATOR),
            0b000111110010010100
        );
        assert_eq!(BchEncoder::encode(40, BchEncoder::VERSION_GENERATOR), 0x28C69);
    }

    #[test]
    fn test_zero_data() {
        assert_eq!(BchEncoder::encode(0, BchEncoder::FORMAT_GENERATOR), 0);
        assert!(BchEncoder::check(0, BchEncoder::VERSION_GENERATOR));
    }
}
