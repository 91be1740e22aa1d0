//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use crate::processing::keywords::DEFAULT_MAX_MISSING_KEYWORDS;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub normalizer: NormalizerConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Retry with `pdf-extract` when `lopdf` cannot load the document
    pub fallback_extractor: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Added on top of the built-in English list
    pub extra_stop_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub max_missing_keywords: usize,
    pub rounding: RoundingMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

/// How the match percentage is rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Banker's rounding: 0.125 becomes 0.12
    HalfEven,
    /// Schoolbook rounding: 0.125 becomes 0.13
    HalfAwayFromZero,
}

impl RoundingMode {
    /// Round to two decimals using the exact value stored in the `f64`.
    ///
    /// `1.115` is stored as `1.11499999...`, so it rounds down in both modes.
    /// Only values that are exact ties in binary (`0.125`) reach the tie rule.
    pub fn round_hundredths(self, value: f64) -> f64 {
        if !value.is_finite() || value.abs() >= MAX_EXACT_HUNDREDTHS {
            return value;
        }

        // 60 fractional digits cover the full binary expansion of anything >= 0.004
        let exact = format!("{:.60}", value.abs());
        let Some((whole, fraction)) = exact.split_once('.') else {
            return value;
        };
        let Ok(hundredths) = format!("{}{}", whole, &fraction[..2]).parse::<u64>() else {
            return value;
        };

        let rest = &fraction.as_bytes()[2..];
        let round_up = match rest[0].cmp(&b'5') {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal if rest[1..].iter().any(|&digit| digit != b'0') => true,
            Ordering::Equal => match self {
                RoundingMode::HalfEven => hundredths % 2 == 1,
                RoundingMode::HalfAwayFromZero => true,
            },
        };

        let rounded = (hundredths + u64::from(round_up)) as f64 / 100.0;
        rounded.copysign(value)
    }
}

/// Beyond this a count of hundredths is no longer exact in an `f64`.
const MAX_EXACT_HUNDREDTHS: f64 = 1e13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                fallback_extractor: true,
            },
            normalizer: NormalizerConfig {
                extra_stop_words: Vec::new(),
            },
            scoring: ScoringConfig {
                max_missing_keywords: DEFAULT_MAX_MISSING_KEYWORDS,
                rounding: RoundingMode::HalfEven,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.scoring.max_missing_keywords == 0 {
            return Err(ResumeScorerError::Configuration(
                "scoring.max_missing_keywords must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }
}
