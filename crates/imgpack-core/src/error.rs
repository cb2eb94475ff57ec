use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackError>;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid dimension {width}x{height}: {reason}")]
    InvalidDimension {
        width: usize,
        height: usize,
        reason: String,
    },

    #[error("pixel index out of range at ({x},{y}): {index} > 15")]
    PixelIndexOutOfRange { x: usize, y: usize, index: u8 },

    #[error("palette overflow: {count} colors, at most 16 allowed")]
    PaletteOverflow { count: usize },

    #[error("palette is empty")]
    EmptyPalette,

    #[error("malformed color entry {index}: {field}={value} does not fit its bit width")]
    MalformedColorEntry {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("value {value} does not fit a {width}-bit field")]
    FieldOverflow { value: i64, width: u32 },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid carrier parameters: {0}")]
    InvalidCarrier(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
