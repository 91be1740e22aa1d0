//! File type detection

const PDF_MAGIC: &[u8] = b"%PDF-";
// Readers accept the header anywhere in the first kilobyte
const PDF_HEADER_WINDOW: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// Detect a PDF payload by its header, regardless of file name.
    pub fn is_pdf_payload(bytes: &[u8]) -> bool {
        let window = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];
        window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("md"), FileType::Markdown);
        assert_eq!(FileType::from_extension("txt"), FileType::Text);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
    }

    #[test]
    fn test_pdf_payload_detection() {
        assert!(FileType::is_pdf_payload(b"%PDF-1.5\n%\xE2\xE3\xCF\xD3\n"));
        assert!(FileType::is_pdf_payload(b"\r\n  %PDF-1.7"));
        assert!(!FileType::is_pdf_payload(b"PK\x03\x04 word document"));
        assert!(!FileType::is_pdf_payload(b""));
    }
}
