/// Bitstream assembly: segments -> padded data codewords
use crate::encoder::segment::Segment;
use crate::encoder::tables::num_data_codewords;
use crate::error::QrError;
use crate::models::{ECLevel, Version};

/// Pad codewords appended alternately after the terminator
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Growable MSB-first bit sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer(Vec<bool>);

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self(Vec::with_capacity(bits))
    }

    /// Append the low `len` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, len: u8) {
        debug_assert!(len <= 31 && value >> len == 0, "value does not fit in {len} bits");
        self.0.extend((0..len).rev().map(|i| (value >> i) & 1 != 0));
    }

    /// Append bits as they are
    pub fn extend_from_bits(&mut self, bits: &[bool]) {
        self.0.extend_from_slice(bits);
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no bits were appended
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bits in order
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// Take the bits
    pub fn into_bits(self) -> Vec<bool> {
        self.0
    }

    /// Pack into bytes, MSB first; a trailing partial byte is zero-filled
    pub fn to_codewords(&self) -> Vec<u8> {
        self.0
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Mode indicator, count field and payload of every segment, unpadded
pub fn segment_bits(segments: &[Segment], version: Version) -> BitBuffer {
    let mut bb = BitBuffer::new();
    for seg in segments {
        bb.append_bits(seg.mode().mode_bits(), 4);
        bb.append_bits(seg.num_chars() as u32, seg.mode().char_count_bits(version));
        bb.extend_from_bits(seg.data());
    }
    bb
}

/// Serialize segments into exactly the data codewords of (version, level).
///
/// Appends the terminator (up to 4 zero bits), zero-pads to a byte boundary
/// and fills the rest with 0xEC 0x11 ... The result length is checked against
/// the capacity table.
pub fn assemble_codewords(
    segments: &[Segment],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, QrError> {
    let capacity_bits = num_data_codewords(version, ec_level) * 8;
    let mut bb = segment_bits(segments, version);
    if bb.len() > capacity_bits {
        return Err(QrError::DataTooLong {
            required_bits: Some(bb.len()),
            capacity_bits,
        });
    }

    let terminator = (capacity_bits - bb.len()).min(4);
    bb.append_bits(0, terminator as u8);
    let byte_pad = bb.len().wrapping_neg() & 7;
    bb.append_bits(0, byte_pad as u8);

    for &pad in PAD_CODEWORDS.iter().cycle() {
        if bb.len() >= capacity_bits {
            break;
        }
        bb.append_bits(pad as u32, 8);
    }

    if bb.len() != capacity_bits {
        return Err(QrError::CapacityMismatch {
            expected_bits: capacity_bits,
            actual_bits: bb.len(),
        });
    }
    Ok(bb.to_codewords())
}
