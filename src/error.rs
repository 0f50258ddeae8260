//! Error types for the skimming library.
//!
//! Scanning is infallible over arbitrary bytes, so errors only arise on the
//! open/read path before any scanning starts.

/// Result type alias for skimming operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a file for scanning.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
