//! Loads resume and job description files for the command-line front end

use crate::error::{Result, ResumeScorerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::MarkdownExtractor;
use log::info;
use std::path::Path;
use tokio::fs;

#[derive(Default)]
pub struct InputManager {
    markdown: MarkdownExtractor,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the raw bytes of a PDF resume.
    pub async fn read_resume(&self, path: &Path) -> Result<Vec<u8>> {
        self.ensure_exists(path)?;

        match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Reading PDF resume: {}", path.display());
                Ok(fs::read(path).await?)
            }
            _ => Err(ResumeScorerError::InvalidInput(format!(
                "Resume must be a PDF file: {}",
                path.display()
            ))),
        }
    }

    /// Read a job description from a plain text or Markdown file.
    pub async fn read_job_description(&self, path: &Path) -> Result<String> {
        self.ensure_exists(path)?;

        match self.detect_file_type(path)? {
            FileType::Text => {
                info!("Reading plain text job description: {}", path.display());
                Ok(fs::read_to_string(path).await?)
            }
            FileType::Markdown => {
                info!("Reading markdown job description: {}", path.display());
                let markdown = fs::read_to_string(path).await?;
                Ok(self.markdown.to_plain_text(&markdown))
            }
            _ => Err(ResumeScorerError::InvalidInput(format!(
                "Job description must be a .txt or .md file: {}",
                path.display()
            ))),
        }
    }

    fn ensure_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ResumeScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeScorerError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }
}
