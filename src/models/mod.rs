/// Packed bit matrix
pub mod matrix;
/// Version, level, mask and symbol types
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, Symbol, Version};
