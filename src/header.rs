//! Bit packing and PROGMEM header rendering.
//!
//! Every output row holds `ceil(width / 8)` bytes. Within a byte, bit `k`
//! (least-significant first) covers column `xb*8 + k`; the bit is 1 when
//! that column lies inside the image and the pixel is clear (light
//! background), i.e. the polarity is inverted relative to the bitmap's
//! "set" meaning. Columns at or beyond `width` pad the final byte with
//! 0 bits.

use std::path::Path;

use crate::bitmap::MonoBitmap;

/// Number of packed bytes per output row for a given pixel width.
#[inline]
pub fn row_bytes(width: u32) -> u32 {
    width.div_ceil(8)
}

/// Derive the C array name from the input path.
///
/// Takes the final path component and truncates it at the first `.`:
/// `logo.bmp` becomes `logo`, `a.b.c.png` becomes `a`.
pub fn array_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Render the full PROGMEM array declaration for a thresholded bitmap.
///
/// One source line is emitted per bitmap row, prefixed with a tab; every
/// packed byte is written as `0xNN, ` (uppercase, zero-padded). The element
/// count inside the brackets is written as the literal product
/// `rowBytes*height` and left for the target compiler to fold.
pub fn render_header(name: &str, bitmap: &MonoBitmap, width: u32, height: u32) -> String {
    debug_assert!(
        width <= bitmap.width(),
        "packed width ({width}) must not exceed the bitmap width ({})",
        bitmap.width(),
    );

    let mut out = format!(
        "prog_uchar {}[{}*{}] PROGMEM = {{\n",
        name,
        row_bytes(width),
        height
    );
    for y in 0..bitmap.height() {
        out.push('\t');
        for xb in 0..row_bytes(width) {
            let mut byte = 0u8;
            for k in 0..8 {
                let x = xb * 8 + k;
                // Bit 1 = light/background; right padding stays 0.
                if x < width && !bitmap.is_set(x, y) {
                    byte |= 1 << k;
                }
            }
            out.push_str(&format!("0x{byte:02X}, "));
        }
        out.push('\n');
    }
    out.push_str("};");

    tracing::debug!(
        name,
        rows = bitmap.height(),
        bytes_per_row = row_bytes(width),
        "rendered PROGMEM header"
    );

    out
}
