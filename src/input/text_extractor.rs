//! Text extraction from uploaded documents

use crate::input::file_detector::FileType;
use log::{debug, warn};
use lopdf::Document;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("Uploaded resume is not a PDF document")]
    NotPdf,

    #[error("Failed to load PDF: {0}")]
    Load(String),

    #[error("Fallback extraction failed: {0}")]
    FallbackFailed(String),

    #[error("PDF parser panicked while {0}")]
    Panicked(String),
}

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Page-by-page PDF text extraction.
///
/// Pages are read in document order and concatenated without a separator.
/// A page whose text cannot be decoded contributes nothing.
pub struct PdfExtractor {
    fallback: bool,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PdfExtractor {
    pub fn new(fallback: bool) -> Self {
        Self { fallback }
    }

    fn extract_pages(document: &Document) -> Result<String, ExtractionError> {
        let pages = contain_panic(|| document.get_pages())
            .map_err(|message| ExtractionError::Panicked(format!("reading page tree: {}", message)))?;
        debug!("PDF has {} pages", pages.len());

        let mut text = String::new();
        for page_number in pages.keys() {
            match contain_panic(|| document.extract_text(&[*page_number])) {
                Ok(Ok(page_text)) => {
                    debug!("Page {}: {} characters", page_number, page_text.chars().count());
                    text.push_str(&page_text);
                }
                Ok(Err(e)) => {
                    warn!("No extractable text on page {}: {}", page_number, e);
                }
                Err(message) => {
                    warn!("Text decoder panicked on page {}: {}", page_number, message);
                }
            }
        }
        Ok(text)
    }

    /// Whole-document extraction with `pdf-extract`.
    fn extract_with_pdf_extract(bytes: &[u8]) -> Result<String, ExtractionError> {
        match contain_panic(|| pdf_extract::extract_text_from_mem(bytes)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractionError::FallbackFailed(e.to_string())),
            Err(message) => Err(ExtractionError::FallbackFailed(message)),
        }
    }
}

/// Run a call into a PDF parser, turning a panic into its message.
///
/// Both `lopdf` and `pdf-extract` panic on some malformed documents.
fn contain_panic<T>(operation: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(operation)).map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "PDF parser panicked".to_string())
    })
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if !FileType::is_pdf_payload(bytes) {
            return Err(ExtractionError::NotPdf);
        }

        let loaded = contain_panic(|| Document::load_mem(bytes))
            .map_err(|message| format!("parser panicked: {}", message))
            .and_then(|result| result.map_err(|e| e.to_string()));

        match loaded {
            Ok(document) => Self::extract_pages(&document),
            Err(e) if self.fallback => {
                warn!("lopdf could not load the document ({}), trying pdf-extract", e);
                Self::extract_with_pdf_extract(bytes)
                    .map_err(|fallback| ExtractionError::Load(format!("{}; {}", e, fallback)))
            }
            Err(e) => Err(ExtractionError::Load(e)),
        }
    }
}

/// Renders a Markdown job description down to plain text.
pub struct MarkdownExtractor {
    tag_regex: Regex,
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownExtractor {
    pub fn new() -> Self {
        let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex");
        Self { tag_regex }
    }

    pub fn to_plain_text(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }

    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n");

        let clean_text = self.tag_regex.replace_all(&text, "");

        let lines: Vec<&str> = clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        lines
            .join("\n")
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }
}
