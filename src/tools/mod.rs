use crate::models::Symbol;
use image::{GrayImage, Luma};
use std::path::Path;

/// Quiet zone width recommended for scanning, in modules
pub const DEFAULT_BORDER: usize = 4;

fn dark_at(symbol: &Symbol, x: usize, y: usize, border: usize) -> bool {
    x >= border && y >= border && symbol.get_module(x - border, y - border)
}

/// Render a symbol as text, two characters per module so it stays square.
/// Dark modules are `██`, light modules and the border are spaces.
pub fn to_ascii(symbol: &Symbol, border: usize) -> String {
    let side = symbol.size() + 2 * border;
    let mut out = String::with_capacity(side * (side * 2 * 3 + 1));
    for y in 0..side {
        for x in 0..side {
            out.push_str(if dark_at(symbol, x, y, border) {
                "██"
            } else {
                "  "
            });
        }
        out.push('\n');
    }
    out
}

/// Render a symbol as a grayscale image, `scale` pixels per module
pub fn to_luma_image(symbol: &Symbol, scale: u32, border: usize) -> GrayImage {
    let scale = scale.max(1);
    let side = (symbol.size() + 2 * border) as u32 * scale;
    GrayImage::from_fn(side, side, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        if dark_at(symbol, x, y, border) {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// Write a symbol to an image file; the format follows the extension.
pub fn save_image<P: AsRef<Path>>(
    symbol: &Symbol,
    path: P,
    scale: u32,
    border: usize,
) -> Result<(), image::ImageError> {
    to_luma_image(symbol, scale, border).save(path)
}
