//! Owned file content for scanning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::extractor;

/// A file's raw bytes, loaded once and scanned in place.
///
/// No structure is parsed at load time. `RawPdf` is nothing more than the
/// byte buffer plus the extraction entry points, and it makes no attempt to
/// verify that the content actually is a PDF: scanning a non-PDF file just
/// yields an empty or garbled fragment sequence.
#[derive(Debug, Clone)]
pub struct RawPdf {
    data: Vec<u8>,
}

impl RawPdf {
    /// Open and fully read the file at `path`.
    ///
    /// The file handle is released as soon as the content has been read;
    /// scanning happens against the in-memory buffer only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be
    /// opened or read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut data = Vec::new();
        {
            let mut file = File::open(path)?;
            file.read_to_end(&mut data)?;
        }
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self { data })
    }

    /// Wrap content already in memory.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The raw content.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the file was empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Extract every displayable fragment in order of appearance.
    pub fn extract_fragments(&self) -> Vec<String> {
        extractor::extract_fragments(&self.data)
    }

    /// Extract all fragments joined with newlines.
    pub fn extract_text(&self) -> String {
        extractor::extract_text(&self.data)
    }
}
