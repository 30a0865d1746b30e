//! QR code encoding modules
//!
//! This module contains every stage between input data and a finished symbol:
//! - Segment building (numeric, alphanumeric, byte, ECI)
//! - Version selection and bitstream assembly
//! - Error correction (Reed-Solomon, BCH) and block interleaving
//! - Function pattern and codeword placement, masking and penalty scoring

/// BCH codes for format and version info
pub mod bch;
/// Bitstream assembly and padding
pub mod bitstream;
/// Smallest-version search and ECC boost
pub mod capacity;
/// Environment configuration (parallel masks, default level)
pub mod config;
/// Format information (EC level, mask pattern)
pub mod format;
/// Function module flags (finder/timing/format/alignment/version)
pub mod function_mask;
/// Block splitting and codeword interleaving
pub mod interleave;
/// Mask application and penalty scoring
pub mod mask;
/// Module grid construction and zig-zag placement
pub mod placement;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon ECC generation
pub mod reed_solomon;
/// Data segments and their modes
pub mod segment;
/// QR specification tables (ECC codewords/blocks, alignment positions)
pub mod tables;
/// Version information (versions 7-40)
pub mod version;
