//! Compositing and thresholding of decoded images.
//!
//! [`MonoBitmap`] is the 1-bit intermediate form of the conversion: every
//! pixel is either set (dark foreground) or clear (light background).
//! Transparency is resolved before thresholding by blending each pixel over
//! an opaque white canvas, so a fully transparent pixel always reads as
//! background no matter what its RGB channels contain.

use image::DynamicImage;

/// Luma cutoff for the 1-bit threshold. Pixels with BT.601 luma below this
/// value are set (dark); everything else is clear (light).
const LUMA_CUTOFF: u32 = 128;

/// A thresholded 1-bit image.
///
/// Stores one flag per pixel in row-major order ("set" = dark foreground),
/// along with the image dimensions.
///
/// # Example
///
/// ```
/// use img2header::MonoBitmap;
///
/// // 2x1 bitmap: dark pixel, then light pixel
/// let bitmap = MonoBitmap::new(vec![true, false], 2, 1);
///
/// assert!(bitmap.is_set(0, 0));
/// assert!(!bitmap.is_set(1, 0));
/// ```
pub struct MonoBitmap {
    /// Set flags, one per pixel, row-major order.
    set: Vec<bool>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

impl MonoBitmap {
    /// Create a `MonoBitmap` from per-pixel set flags.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `set.len() == width * height`.
    pub fn new(set: Vec<bool>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            set.len(),
            (width * height) as usize,
            "set length ({}) must match width * height ({}x{}={})",
            set.len(),
            width,
            height,
            width * height,
        );
        Self { set, width, height }
    }

    /// Threshold a decoded image to 1 bit per pixel.
    ///
    /// The image is first composited over an opaque white canvas of its own
    /// size, using each pixel's alpha as the blend weight. The composited
    /// pixel is then set (dark) when its ITU-R BT.601 luma
    /// `(299*R + 587*G + 114*B) / 1000` falls below 128, clear otherwise.
    /// No dithering is applied, so the result is deterministic.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        let set = rgba
            .pixels()
            .map(|pixel| {
                let [r, g, b] = composite_over_white(pixel.0);
                luma(r, g, b) < LUMA_CUTOFF
            })
            .collect();

        tracing::debug!(width, height, "thresholded image to 1-bit");

        Self { set, width, height }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is set (dark foreground).
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `(x, y)` lies inside the image.
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} bitmap",
            self.width,
            self.height,
        );
        self.set[(y * self.width + x) as usize]
    }
}

/// Alpha-composite a single RGBA pixel against an opaque white background.
fn composite_over_white(pixel: [u8; 4]) -> [u8; 3] {
    let [r, g, b, a] = pixel;
    if a == 255 {
        [r, g, b]
    } else if a == 0 {
        [255, 255, 255]
    } else {
        let af = a as u16;
        let cr = ((r as u16 * af + 255 * (255 - af)) / 255) as u8;
        let cg = ((g as u16 * af + 255 * (255 - af)) / 255) as u8;
        let cb = ((b as u16 * af + 255 * (255 - af)) / 255) as u8;
        [cr, cg, cb]
    }
}

/// Integer ITU-R BT.601 luma in the 0-255 range.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u32 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn image_of(pixels: &[Rgba<u8>], width: u32, height: u32) -> DynamicImage {
        let mut img = RgbaImage::new(width, height);
        for (i, pixel) in pixels.iter().enumerate() {
            img.put_pixel(i as u32 % width, i as u32 / width, *pixel);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_from_image_dimensions() {
        let img = image_of(&[Rgba([0, 0, 0, 255]); 6], 3, 2);
        let bitmap = MonoBitmap::from_image(&img);
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
    }

    #[test]
    fn test_black_is_set_white_is_clear() {
        let img = image_of(&[Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 255])], 2, 1);
        let bitmap = MonoBitmap::from_image(&img);
        assert!(bitmap.is_set(0, 0), "opaque black should threshold as set");
        assert!(!bitmap.is_set(1, 0), "opaque white should threshold as clear");
    }

    #[test]
    fn test_luma_threshold_boundary() {
        // Grey 127 has luma 127 (set); grey 128 has luma 128 (clear).
        let img = image_of(
            &[Rgba([127, 127, 127, 255]), Rgba([128, 128, 128, 255])],
            2,
            1,
        );
        let bitmap = MonoBitmap::from_image(&img);
        assert!(bitmap.is_set(0, 0), "luma 127 should be below the cutoff");
        assert!(!bitmap.is_set(1, 0), "luma 128 should be at the cutoff");
    }

    #[test]
    fn test_transparent_black_reads_as_background() {
        let img = image_of(&[Rgba([0, 0, 0, 0])], 1, 1);
        let bitmap = MonoBitmap::from_image(&img);
        assert!(
            !bitmap.is_set(0, 0),
            "fully transparent pixels composite to white"
        );
    }

    #[test]
    fn test_partial_alpha_blends_against_white() {
        // Black at alpha 200 composites to grey 55 (set); at alpha 10 it
        // composites to grey 245 (clear).
        let img = image_of(&[Rgba([0, 0, 0, 200]), Rgba([0, 0, 0, 10])], 2, 1);
        let bitmap = MonoBitmap::from_image(&img);
        assert!(bitmap.is_set(0, 0));
        assert!(!bitmap.is_set(1, 0));
    }

    #[test]
    fn test_colored_pixels_use_bt601_weights() {
        // Pure green has luma 149 (clear); pure blue has luma 29 (set).
        let img = image_of(&[Rgba([0, 255, 0, 255]), Rgba([0, 0, 255, 255])], 2, 1);
        let bitmap = MonoBitmap::from_image(&img);
        assert!(!bitmap.is_set(0, 0), "green is bright under BT.601");
        assert!(bitmap.is_set(1, 0), "blue is dark under BT.601");
    }

    #[test]
    fn test_composite_over_white_extremes() {
        assert_eq!(composite_over_white([10, 20, 30, 255]), [10, 20, 30]);
        assert_eq!(composite_over_white([10, 20, 30, 0]), [255, 255, 255]);
    }
}
