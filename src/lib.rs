//! # pdfskim
//!
//! Best-effort text skimming for PDF files.
//!
//! `pdfskim` does not parse PDF documents. It scans the raw bytes of a file
//! for text objects (the `BT`..`ET` regions of a content stream) and pulls
//! the literal strings shown inside them out as displayable text. That trade
//! has sharp edges: compressed content streams, string escape sequences, and
//! font encoding tables are all out of scope, and files relying on them
//! yield empty or garbled output rather than an error.
//!
//! What it is good for: quick, dependency-light skimming of PDFs whose
//! content streams are stored uncompressed — generated reports, plain
//! exports, debugging fixtures.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfskim::RawPdf;
//!
//! # fn main() -> pdfskim::Result<()> {
//! let doc = RawPdf::open("report.pdf")?;
//! println!("{}", doc.extract_text());
//! # Ok(())
//! # }
//! ```
//!
//! The scan is a pure function of the byte buffer, so callers that already
//! hold the content can skip the filesystem entirely:
//!
//! ```
//! let text = pdfskim::extract_text(b"BT (Hello) Tj ET");
//! assert_eq!(text, "Hello");
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Byte scanning and fragment extraction
pub mod extractor;
pub mod scanner;

// File loading
pub mod document;

// Re-exports
pub use document::RawPdf;
pub use error::{Error, Result};
pub use extractor::{extract_fragments, extract_text};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdfskim");
    }
}
