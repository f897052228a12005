use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "image is {decoded_width}x{decoded_height}, but {requested_width}x{requested_height} was requested"
    )]
    DimensionMismatch {
        requested_width: u32,
        requested_height: u32,
        decoded_width: u32,
        decoded_height: u32,
    },
}
