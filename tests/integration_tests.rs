//! Integration tests for the resume scorer's file inputs

mod common;

use resume_scorer::config::{Config, OutputFormat};
use resume_scorer::input::InputManager;
use resume_scorer::output::formatter::ReportGenerator;
use resume_scorer::{MatchAnalyzer, ResumeScorerError, ScoreResult};
use tempfile::tempdir;

#[tokio::test]
async fn test_read_pdf_resume_and_text_job() {
    let dir = tempdir().unwrap();
    let resume_path = dir.path().join("resume.pdf");
    let job_path = dir.path().join("job.txt");

    std::fs::write(&resume_path, common::text_pdf("Rust developer Tokio Serde")).unwrap();
    std::fs::write(&job_path, "Hiring a Rust developer who knows Axum").unwrap();

    let manager = InputManager::new();
    let resume = manager.read_resume(&resume_path).await.unwrap();
    let job = manager.read_job_description(&job_path).await.unwrap();

    let result = MatchAnalyzer::default()
        .analyze(Some(resume.as_slice()), Some(job.as_str()))
        .unwrap();

    assert!(result.match_score > 0.0);
    assert_eq!(result.missing_keywords, vec!["hiring", "knows", "axum"]);
}

#[tokio::test]
async fn test_read_markdown_job_description() {
    let dir = tempdir().unwrap();
    let job_path = dir.path().join("job.md");
    std::fs::write(&job_path, "## Senior Engineer\n\n**Must have:** Rust, *Kafka*\n").unwrap();

    let job = InputManager::new().read_job_description(&job_path).await.unwrap();

    assert!(job.contains("Senior Engineer"));
    assert!(job.contains("Rust"));
    assert!(!job.contains("**"));
    assert!(!job.contains("##"));
}

#[tokio::test]
async fn test_non_pdf_resume_rejected() {
    let dir = tempdir().unwrap();
    let resume_path = dir.path().join("resume.docx");
    std::fs::write(&resume_path, b"PK\x03\x04").unwrap();

    let result = InputManager::new().read_resume(&resume_path).await;

    assert!(matches!(result, Err(ResumeScorerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();

    let resume = manager.read_resume(std::path::Path::new("tests/fixtures/missing.pdf")).await;
    let job = manager.read_job_description(std::path::Path::new("tests/fixtures/missing.txt")).await;

    assert!(resume.is_err());
    assert!(job.is_err());
}

#[test]
fn test_json_report_matches_wire_shape() {
    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    let analyzer = MatchAnalyzer::new(&config);

    let result = analyzer
        .score_texts("Python developer React", "Python developer Django")
        .unwrap();
    let json = ReportGenerator::with_options(false, false)
        .generate_report(&result, &config.output.format)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["match_score"].is_number());
    assert!(value["feedback"].is_string());
    assert_eq!(value["missing_keywords"], serde_json::json!(["django"]));

    let parsed: ScoreResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}
