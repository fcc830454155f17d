use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the glyphfetch rendering pipeline.
///
/// Every variant is recoverable by design: callers absorb these at the
/// narrowest scope and fall through to the next rendering backend or a
/// sentinel value. Nothing here escapes the top-level render call.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Error when decoding or resizing an image resource
    #[error("Failed to decode image {path}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    /// Error when loading a font file for the bitmap banner backend
    #[error("Failed to load font {path}: {message}")]
    FontLoad { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
