use std::path::PathBuf;

use screen5::ConvertError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedPng(String),

    #[error("Invalid job file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the error was caused by the image content rather than the
    /// environment.
    pub fn is_image_error(&self) -> bool {
        matches!(
            self,
            AppError::Convert(
                ConvertError::InvalidAlphaValue { .. }
                    | ConvertError::NoTransparentColorDesignated { .. }
                    | ConvertError::ImageFormat(_)
            ) | AppError::PngDecode(_)
                | AppError::UnsupportedPng(_)
        )
    }
}
