//! Fragment extraction from scanned byte buffers.
//!
//! Drives the nested scans from [`crate::scanner`] over a buffer and turns
//! each literal string payload into a decoded fragment. Fragments whose
//! content is nothing but whitespace are dropped; everything else is kept in
//! order of appearance and joined with newlines.

use crate::scanner::{literal_strings, text_objects};

/// Decode `bytes` as UTF-8, dropping invalid byte subsequences.
///
/// This never fails: undecodable input shrinks instead of erroring. A
/// payload made entirely of invalid bytes decodes to the empty string, which
/// the fragment filter then excludes. Invalid sequences are dropped rather
/// than replaced with U+FFFD so they stay invisible to the whitespace
/// filter.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            },
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // valid_up_to guarantees this prefix is well-formed UTF-8
                out.push_str(std::str::from_utf8(valid).unwrap());
                match err.error_len() {
                    Some(invalid_len) => rest = &after[invalid_len..],
                    // Truncated sequence at the end of input
                    None => break,
                }
            },
        }
    }
    out
}

/// Scan `buf` and collect every displayable fragment in order of appearance.
///
/// A fragment is kept when its whitespace-trimmed decoding is non-empty, but
/// the value stored is the decoded string *without* trimming, so whitespace
/// inside the parentheses survives into the output. Duplicates are kept.
pub fn extract_fragments(buf: &[u8]) -> Vec<String> {
    let mut fragments = Vec::new();
    for region in text_objects(buf) {
        for payload in literal_strings(region) {
            let text = decode_text(payload);
            if !text.trim().is_empty() {
                fragments.push(text);
            }
        }
    }
    log::debug!("collected {} fragments from {} bytes", fragments.len(), buf.len());
    fragments
}

/// Scan `buf` and return all fragments joined with newlines.
///
/// # Examples
///
/// ```
/// let text = pdfskim::extract_text(b"BT (Hello) (World) ET");
/// assert_eq!(text, "Hello\nWorld");
/// ```
pub fn extract_text(buf: &[u8]) -> String {
    extract_fragments(buf).join("\n")
}
