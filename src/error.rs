use thiserror::Error;

/// Errors produced while building payloads, generating matrices or writing output.
#[derive(Error, Debug)]
pub enum QrTermError {
    /// A WiFi credential failed validation.
    #[error("{0}")]
    Validation(String),

    /// A `WIFI:` payload could not be parsed.
    #[error("{0}")]
    Format(String),

    /// The data does not fit any QR code version at the chosen error correction level.
    #[error("QR encoding failed: {0}")]
    Capacity(#[from] qrcode::types::QrError),

    #[error("{0}")]
    EmptyInput(String),

    /// Matrix rows must all have the same length.
    #[error("matrix row {row} has {found} modules, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Border and size multiplier would make the matrix larger than [`MAX_MATRIX_SIDE`](crate::matrix::MAX_MATRIX_SIDE).
    #[error("matrix side of {side} modules exceeds the limit of {max}")]
    TooLarge { side: u64, max: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, QrTermError>;
