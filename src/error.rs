use thiserror::Error;

/// Errors raised by the drawing core
#[derive(Error, Debug)]
pub enum CanvasError {
    /// A resize target or configured size had a zero side
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The persistent surface could not be encoded
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while loading the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(#[from] CanvasError),
}
