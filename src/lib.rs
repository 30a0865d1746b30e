//! RustQR Gen - deterministic QR Code Model 2 encoder
//!
//! Turns text, bytes or caller-built segments into a finished module grid:
//! version selection, Reed-Solomon error correction, interleaving, function
//! patterns, mask scoring and format/version information.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

pub(crate) mod debug;
/// QR code encoding modules (segments, error correction, placement, masking)
pub mod encoder;
/// Encoder error type
pub mod error;
/// Core data structures (Symbol, BitMatrix, Version, etc.)
pub mod models;
/// Structured payload builders (Wi-Fi, vCard, URL, ...)
pub mod payload;
/// Plain renderers for symbols (ASCII, grayscale image)
pub mod tools;

pub use encoder::qr_encoder::{EncodeOptions, QrEncoder};
pub use encoder::segment::{Mode, Segment};
pub use error::QrError;
pub use models::{BitMatrix, ECLevel, MaskPattern, Symbol, Version};
pub use payload::QrPayload;

/// Encode text at `ec_level` with the default options
///
/// The whole string becomes one numeric, alphanumeric or byte segment,
/// whichever is the most compact mode that covers every character.
///
/// # Example
/// ```
/// use rust_qr_gen::{ECLevel, encode_text};
///
/// let symbol = encode_text("HELLO WORLD", ECLevel::Q).unwrap();
/// assert_eq!(symbol.size(), 21);
/// ```
pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<Symbol, QrError> {
    encode_text_with(text, &EncodeOptions::new(ec_level))
}

/// Encode text with explicit options
pub fn encode_text_with(text: &str, options: &EncodeOptions) -> Result<Symbol, QrError> {
    QrEncoder::encode_text(text, options)
}

/// Encode raw bytes as a single byte-mode segment
pub fn encode_binary(data: &[u8], ec_level: ECLevel) -> Result<Symbol, QrError> {
    encode_binary_with(data, &EncodeOptions::new(ec_level))
}

/// Encode raw bytes with explicit options
pub fn encode_binary_with(data: &[u8], options: &EncodeOptions) -> Result<Symbol, QrError> {
    QrEncoder::encode_binary(data, options)
}

/// Encode caller-built segments in order
pub fn encode_segments(segments: &[Segment], ec_level: ECLevel) -> Result<Symbol, QrError> {
    encode_segments_with(segments, &EncodeOptions::new(ec_level))
}

/// Encode caller-built segments with explicit options
pub fn encode_segments_with(
    segments: &[Segment],
    options: &EncodeOptions,
) -> Result<Symbol, QrError> {
    QrEncoder::encode_segments(segments, options)
}

/// Encode the text form of a structured payload
pub fn encode_payload<P: QrPayload + ?Sized>(
    payload: &P,
    options: &EncodeOptions,
) -> Result<Symbol, QrError> {
    QrEncoder::encode_text(&payload.encode(), options)
}
