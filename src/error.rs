//! Error type shared by every encoding stage.

use thiserror::Error;

use crate::encoder::segment::Mode;

/// Errors that can occur while building segments or encoding a symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// No version in the allowed range holds the data at the requested level.
    ///
    /// `required_bits` is `None` when a segment's character count overflows
    /// its count field even at the largest allowed version.
    #[error("Data too long: needs {} bits, largest allowed version holds {capacity_bits}", fmt_bits(.required_bits))]
    DataTooLong {
        /// Bits the segments need at the largest allowed version.
        required_bits: Option<usize>,
        /// Data capacity of the largest allowed version at the requested level.
        capacity_bits: usize,
    },

    /// A segment builder was given a character outside its mode's alphabet.
    #[error("Invalid character {character:?} at position {position} for {mode:?} mode")]
    InvalidCharacter {
        /// Mode whose alphabet was violated.
        mode: Mode,
        /// Offending character.
        character: char,
        /// Character index in the input.
        position: usize,
    },

    /// A caller-supplied parameter is out of range.
    #[error("Invalid {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The assembled data bitstream does not match the capacity table.
    #[error("Bitstream length {actual_bits} does not match capacity {expected_bits}")]
    CapacityMismatch {
        /// Data capacity in bits from the tables.
        expected_bits: usize,
        /// Bits actually produced.
        actual_bits: usize,
    },
}

impl QrError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        QrError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

fn fmt_bits(bits: &Option<usize>) -> String {
    match bits {
        Some(n) => n.to_string(),
        None => "more".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QrError::DataTooLong {
            required_bits: Some(154),
            capacity_bits: 152,
        };
        assert_eq!(
            err.to_string(),
            "Data too long: needs 154 bits, largest allowed version holds 152"
        );

        let err = QrError::invalid_parameter("mask", "9 is outside 0..=7");
        assert_eq!(err.to_string(), "Invalid mask: 9 is outside 0..=7");
    }
}
