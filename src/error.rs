//! Error types for notemark.
//!
//! The rendering engine itself never fails: empty input yields empty
//! output and no operation performs I/O. Errors only arise on the CLI
//! boundary when reading input or writing output.

use thiserror::Error;

/// Result type for notemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the text engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file or stream I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
