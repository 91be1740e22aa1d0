//! Output formatters for score results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{format_score, ScoreResult};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a score result
pub trait OutputFormatter {
    fn format_result(&self, result: &ScoreResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter using the response wire shape
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

/// Report generator that dispatches on the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 80.0 => ("STRONG", Color::Green),
            s if s >= 60.0 => ("GOOD", Color::Yellow),
            s if s >= 40.0 => ("FAIR", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &ScoreResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME MATCH"));
        output.push_str(&format!(
            "Match score: {}% {}\n",
            format_score(result.match_score),
            self.format_score_badge(result.match_score)
        ));
        output.push_str(&format!("{}\n", result.feedback));

        if result.missing_keywords.is_empty() {
            output.push_str("\nEvery job description keyword appears in the resume.\n");
        } else {
            output.push_str(&self.format_header("MISSING KEYWORDS"));
            for (i, keyword) in result.missing_keywords.iter().enumerate() {
                let keyword = if self.use_colors {
                    keyword.color(Color::Red).to_string()
                } else {
                    keyword.clone()
                };
                output.push_str(&format!("  {}. {}\n", i + 1, keyword));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &ScoreResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &ScoreResult) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Match\n\n");
        output.push_str(&format!("**Match score:** {}%\n\n", format_score(result.match_score)));
        output.push_str(&format!("{}\n", result.feedback));

        if !result.missing_keywords.is_empty() {
            output.push_str("\n## Missing Keywords\n\n");
            for keyword in &result.missing_keywords {
                output.push_str(&format!("- `{}`\n", keyword));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn generate_report(&self, result: &ScoreResult, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_result(result),
            OutputFormat::Json => self.json_formatter.format_result(result),
            OutputFormat::Markdown => self.markdown_formatter.format_result(result),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreResult {
        ScoreResult::new(
            37.21,
            vec!["looking".to_string(), "django".to_string(), "experience".to_string()],
        )
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false).format_result(&sample()).unwrap();

        assert!(output.contains("Match score: 37.21% [WEAK]"));
        assert!(output.contains("  2. django"));
        assert!(output.contains("MISSING KEYWORDS"));
    }

    #[test]
    fn test_console_no_missing_keywords() {
        let result = ScoreResult::new(100.0, Vec::new());
        let output = ConsoleFormatter::new(false).format_result(&result).unwrap();

        assert!(output.contains("[STRONG]"));
        assert!(!output.contains("MISSING KEYWORDS"));
    }

    #[test]
    fn test_json_round_trips() {
        let generator = ReportGenerator::with_options(false, false);
        let json = generator.generate_report(&sample(), &OutputFormat::Json).unwrap();

        let parsed: ScoreResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_markdown() {
        let output = MarkdownFormatter.format_result(&sample()).unwrap();

        assert!(output.starts_with("# Resume Match"));
        assert!(output.contains("- `django`"));
        assert_eq!(MarkdownFormatter.supports_format(), OutputFormat::Markdown);
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("match.md");

        save_report_to_file("# Resume Match", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Resume Match");
    }
}
