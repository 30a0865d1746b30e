//! Segments and the text segmenter
//!
//! A segment is one run of input encoded under a single mode. The segmenter
//! picks one mode for the whole string: numeric if every character is a
//! digit, alphanumeric if every character is in the 45-symbol set, bytes of
//! the UTF-8 encoding otherwise.

use crate::encoder::bitstream::BitBuffer;
use crate::error::QrError;
use crate::models::Version;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
pub const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Segment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9
    Numeric,
    /// The 45-character set
    Alphanumeric,
    /// Raw 8-bit bytes
    Byte,
    /// Shift-JIS double-byte characters
    Kanji,
    /// Extended Channel Interpretation designator
    Eci,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn mode_bits(&self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
            Mode::Kanji => 0x8,
            Mode::Eci => 0x7,
        }
    }

    /// Width of the character count field at a version.
    /// Tiers: versions 1-9, 10-26, 27-40.
    pub fn char_count_bits(&self, version: Version) -> u8 {
        let widths: [u8; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
            Mode::Eci => [0, 0, 0],
        };
        widths[(version.number() as usize + 7) / 17]
    }
}

/// One encoded run: mode, character count and payload bits (MSB first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    num_chars: usize,
    data: Vec<bool>,
}

impl Segment {
    /// Build a segment from already-encoded bits.
    ///
    /// Used for modes without a builder here (Kanji) and by callers doing
    /// their own segmentation. No validation beyond what the mode implies at
    /// encode time.
    pub fn new(mode: Mode, num_chars: usize, data: Vec<bool>) -> Self {
        Self {
            mode,
            num_chars,
            data,
        }
    }

    /// Encoding mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Character count written in the header
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Payload bits, header excluded
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Byte mode segment, one 8-bit value per input byte
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer::with_capacity(data.len() * 8);
        for &b in data {
            bb.append_bits(b as u32, 8);
        }
        Segment::new(Mode::Byte, data.len(), bb.into_bits())
    }

    /// Numeric segment: digits packed 3 per 10 bits (trailing 1 or 2 digits
    /// use 4 or 7 bits)
    pub fn make_numeric(digits: &str) -> Result<Self, QrError> {
        let mut bb = BitBuffer::with_capacity(digits.len() * 10 / 3 + 4);
        let mut accum: u32 = 0;
        let mut count: u8 = 0;
        for (position, c) in digits.chars().enumerate() {
            let digit = c.to_digit(10).ok_or(QrError::InvalidCharacter {
                mode: Mode::Numeric,
                character: c,
                position,
            })?;
            accum = accum * 10 + digit;
            count += 1;
            if count == 3 {
                bb.append_bits(accum, 10);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            bb.append_bits(accum, count * 3 + 1);
        }
        Ok(Segment::new(Mode::Numeric, digits.len(), bb.into_bits()))
    }

    /// Alphanumeric segment: pairs packed as 45*first + second in 11 bits,
    /// a trailing character in 6 bits
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        let mut bb = BitBuffer::with_capacity(text.len() * 11 / 2 + 6);
        let mut accum: u32 = 0;
        let mut count: usize = 0;
        let mut num_chars = 0;
        for (position, c) in text.chars().enumerate() {
            let index = alphanumeric_index(c).ok_or(QrError::InvalidCharacter {
                mode: Mode::Alphanumeric,
                character: c,
                position,
            })?;
            accum = accum * 45 + index;
            count += 1;
            num_chars += 1;
            if count == 2 {
                bb.append_bits(accum, 11);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            bb.append_bits(accum, 6);
        }
        Ok(Segment::new(Mode::Alphanumeric, num_chars, bb.into_bits()))
    }

    /// ECI designator segment (assignment value 0..=999999)
    pub fn make_eci(value: u32) -> Result<Self, QrError> {
        let mut bb = BitBuffer::with_capacity(24);
        if value < (1 << 7) {
            bb.append_bits(value, 8);
        } else if value < (1 << 14) {
            bb.append_bits(0b10, 2);
            bb.append_bits(value, 14);
        } else if value < 1_000_000 {
            bb.append_bits(0b110, 3);
            bb.append_bits(value, 21);
        } else {
            return Err(QrError::invalid_parameter(
                "eci",
                format!("assignment value {value} is outside 0..=999999"),
            ));
        }
        Ok(Segment::new(Mode::Eci, 0, bb.into_bits()))
    }

    /// Split text into segments, one mode for the whole string.
    /// Empty text yields no segments.
    pub fn make_segments(text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return Vec::new();
        }
        let seg = if is_numeric(text) {
            Segment::make_numeric(text).ok()
        } else if is_alphanumeric(text) {
            Segment::make_alphanumeric(text).ok()
        } else {
            None
        };
        vec![seg.unwrap_or_else(|| Segment::make_bytes(text.as_bytes()))]
    }

    /// Bits needed to encode `segments` at `version`, or `None` if a
    /// character count does not fit its count field.
    pub fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segments {
            let cc_bits = seg.mode.char_count_bits(version);
            if seg.num_chars >= 1usize << cc_bits {
                return None;
            }
            result = result.checked_add(4 + cc_bits as usize + seg.data.len())?;
        }
        Some(result)
    }
}

/// Only the digits 0-9
pub fn is_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Only characters from [`ALPHANUMERIC_CHARSET`]
pub fn is_alphanumeric(text: &str) -> bool {
    text.chars().all(|c| alphanumeric_index(c).is_some())
}

fn alphanumeric_index(c: char) -> Option<u32> {
    ALPHANUMERIC_CHARSET.find(c).map(|i| i as u32)
}
