use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizerError {
    #[error("No image selected!")]
    MissingImage,

    #[error("Invalid width or height!")]
    InvalidDimensions,

    #[error("Requested size {width}x{height} is too large!")]
    TooLarge { width: u32, height: u32 },

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ResizerError>;
