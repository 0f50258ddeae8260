//! Integration tests for extraction from on-disk files.

use std::io::Write;

use pdfskim::{Error, RawPdf};

const SIMPLE_PDF_PATH: &str = "tests/fixtures/simple.pdf";

#[test]
fn test_extract_text_from_simple_pdf() {
    let doc = RawPdf::open(SIMPLE_PDF_PATH).expect("Failed to open simple.pdf");
    assert_eq!(doc.extract_text(), "Hello, world!\nScanned without a parser.");
}

#[test]
fn test_fragments_appear_in_file_order() {
    let doc = RawPdf::open(SIMPLE_PDF_PATH).expect("Failed to open simple.pdf");
    let fragments = doc.extract_fragments();
    assert_eq!(fragments, vec!["Hello, world!", "Scanned without a parser."]);
}

#[test]
fn test_open_reads_whole_file() {
    let doc = RawPdf::open(SIMPLE_PDF_PATH).expect("Failed to open simple.pdf");
    assert!(!doc.is_empty());
    assert!(doc.bytes().starts_with(b"%PDF-1.4"));
    assert!(doc.bytes().ends_with(b"%%EOF\n"));
}

#[test]
fn test_open_missing_file() {
    let err = RawPdf::open("tests/fixtures/does_not_exist.pdf").unwrap_err();
    match err {
        Error::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
    }
}

#[test]
fn test_round_trip_through_temp_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"garbage BT (from a temp file) Tj ET trailer")
        .expect("Failed to write temp file");

    let doc = RawPdf::open(file.path()).expect("Failed to open temp file");
    assert_eq!(doc.extract_text(), "from a temp file");
}

#[test]
fn test_non_pdf_input_yields_empty_result() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"just some plain prose, nothing else")
        .expect("Failed to write temp file");

    let doc = RawPdf::open(file.path()).expect("Failed to open temp file");
    assert_eq!(doc.extract_text(), "");
    assert!(doc.extract_fragments().is_empty());
}
