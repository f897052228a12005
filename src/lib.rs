//! img2header - bitmap to PROGMEM header converter
//!
//! Converts an image file into a 1-bit, bit-packed C array declaration for
//! embedding in firmware as a read-only lookup table. Each pixel becomes one
//! bit (set = dark, clear = light), eight pixels per byte, least-significant
//! bit first, with every row padded to a byte boundary. [`pack`] is the
//! single entry point; the binary prints its result to stdout.

pub mod bitmap;
pub mod error;
pub mod header;

pub use bitmap::MonoBitmap;
pub use error::PackError;
pub use header::{array_name, render_header, row_bytes};

use std::path::Path;

/// Convert the image at `path` into a PROGMEM array declaration.
///
/// The decoded image must measure exactly `width` x `height` pixels;
/// anything else is rejected with [`PackError::DimensionMismatch`] rather
/// than emitting a header whose declared size disagrees with its row count.
/// The array is named after the path's final component, truncated at its
/// first `.`.
///
/// # Errors
///
/// [`PackError::Decode`] when the file is missing, unreadable, or in a
/// format the `image` crate cannot decode; [`PackError::DimensionMismatch`]
/// as described above. No partial output is produced on failure.
pub fn pack(path: &Path, width: u32, height: u32) -> Result<String, PackError> {
    let image = image::open(path).map_err(|source| PackError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );

    if image.width() != width || image.height() != height {
        return Err(PackError::DimensionMismatch {
            requested_width: width,
            requested_height: height,
            decoded_width: image.width(),
            decoded_height: image.height(),
        });
    }

    let bitmap = MonoBitmap::from_image(&image);
    Ok(render_header(&array_name(path), &bitmap, width, height))
}
