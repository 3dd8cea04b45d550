use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetPackerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("sprite `{key}` has invalid dimensions {width}x{height}")]
    InvalidSpriteSize { key: String, width: u32, height: u32 },
    #[error("layout did not converge after {attempts} attempts (width limit {limit})")]
    NonConvergence { attempts: u32, limit: u32 },
}

pub type Result<T> = std::result::Result<T, SheetPackerError>;
