/// Version and error correction level selection
use crate::debug::debug_log;
use crate::encoder::segment::Segment;
use crate::encoder::tables::num_data_codewords;
use crate::error::QrError;
use crate::models::{ECLevel, Version};

/// Smallest fitting version and the (possibly boosted) level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionChoice {
    /// Smallest version that fits
    pub version: Version,
    /// Level after boosting
    pub ec_level: ECLevel,
    /// Bits the segments occupy at `version`, before terminator and padding
    pub data_bits: usize,
}

/// Data capacity in bits of (version, level)
pub fn capacity_bits(version: Version, ec_level: ECLevel) -> usize {
    num_data_codewords(version, ec_level) * 8
}

/// Pick the smallest version in `min..=max` whose capacity at `ec_level`
/// holds the segments. With `boost_ecc`, raise the level as far as the
/// chosen version still holds the data.
pub fn select_version(
    segments: &[Segment],
    ec_level: ECLevel,
    min: Version,
    max: Version,
    boost_ecc: bool,
) -> Result<VersionChoice, QrError> {
    if min > max {
        return Err(QrError::invalid_parameter(
            "version range",
            format!("min version {min} is greater than max version {max}"),
        ));
    }

    let found = min.range_to(max).find_map(|version| {
        let used = Segment::total_bits(segments, version)?;
        (used <= capacity_bits(version, ec_level)).then_some((version, used))
    });

    let Some((version, data_bits)) = found else {
        return Err(QrError::DataTooLong {
            required_bits: Segment::total_bits(segments, max),
            capacity_bits: capacity_bits(max, ec_level),
        });
    };
    debug_log!("selected version {version} ({data_bits} bits at level {ec_level:?})");

    let mut level = ec_level;
    if boost_ecc {
        while let Some(stronger) = level.stronger() {
            if data_bits > capacity_bits(version, stronger) {
                break;
            }
            level = stronger;
        }
        if level != ec_level {
            debug_log!("boosted error correction {ec_level:?} -> {level:?}");
        }
    }

    Ok(VersionChoice {
        version,
        ec_level: level,
        data_bits,
    })
}
