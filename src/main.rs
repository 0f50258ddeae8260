//! Command-line front end: skim text out of a PDF and print a preview.

use std::env;
use std::path::Path;
use std::process;

use pdfskim::RawPdf;

/// Longest preview printed before the "more content" notice.
const PREVIEW_CHARS: usize = 5000;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <pdf-file>", args[0]);
        process::exit(1);
    }

    let pdf_path = &args[1];
    if !Path::new(pdf_path).exists() {
        eprintln!("File not found: {}", pdf_path);
        process::exit(1);
    }

    println!("Reading PDF: {}", pdf_path);
    println!("{}", "-".repeat(50));

    // Read failures past the existence check are reported in place of the
    // extracted text rather than aborting the run.
    let text = match RawPdf::open(pdf_path) {
        Ok(doc) => doc.extract_text(),
        Err(e) => format!("Error reading file: {}", e),
    };

    let preview = char_prefix(&text, PREVIEW_CHARS);
    println!("{}", preview);
    if preview.len() < text.len() {
        println!("\n... (more content available)");
    }
}

/// First `max` characters of `s`, cut on a character boundary.
fn char_prefix(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
