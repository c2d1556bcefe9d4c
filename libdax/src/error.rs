//! error types for the dax codec

use thiserror::Error;

/// Everything that can go wrong while encoding or decoding.
#[derive(Error, Debug)]
pub enum DaxError {
    /// A header field is invalid or inconsistent. Reported before any
    /// block data is processed.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The bit source ran out before the requested bits were available.
    /// Mid-stream, this is a fatal decode error, never a soft signal.
    #[error("unexpected end of stream")]
    EndOfStream,

    /// Input audio is not something the codec accepts (e.g. not 16-bit PCM).
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Underlying file or stream failure.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// result type for dax stuff
pub type Result<T> = std::result::Result<T, DaxError>;
