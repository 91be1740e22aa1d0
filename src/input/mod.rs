//! Input processing module
//! Handles file detection, text extraction, and input loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
pub use text_extractor::{PdfExtractor, TextExtractor};
