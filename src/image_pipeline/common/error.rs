use thiserror::Error;

#[derive(Error, Debug)]
pub enum DpxError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Header field out of bounds: {len} bytes at offset {offset}, but buffer holds {buffer_len}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    #[error("Unknown {table} code: {code}")]
    UnknownCode { table: &'static str, code: u32 },

    #[error("Header validation failed: {0}")]
    Validation(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DpxError>;
