use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeckleError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Shape mismatch: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Index {index} out of range (limit: {limit})")]
    IndexOutOfRange { index: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SpeckleError>;
