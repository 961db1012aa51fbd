use thiserror::Error;

/// Errors surfaced by grid construction, sizing and direct cell access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell resolution must be positive, got {resolution}")]
    InvalidResolution { resolution: u32 },
    #[error("cell ({column}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
