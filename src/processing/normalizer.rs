//! Text normalization: lowercase, strip non-letters, drop stop words

use crate::processing::stop_words::StopWords;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Space-separated lowercase ASCII tokens with stop words removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct TextNormalizer {
    stop_words: Arc<StopWords>,
    non_alpha: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(StopWords::english()))
    }
}

impl TextNormalizer {
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        let non_alpha = Regex::new(r"[^a-z\s]").expect("Invalid non-alphabetic regex");

        Self {
            stop_words,
            non_alpha,
        }
    }

    /// Normalize text; `None` is treated as empty input.
    pub fn normalize(&self, text: Option<&str>) -> NormalizedText {
        let lowered = text.unwrap_or_default().to_lowercase();
        let letters_only = self.non_alpha.replace_all(&lowered, "");

        let tokens: Vec<&str> = letters_only
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .collect();

        NormalizedText(tokens.join(" "))
    }
}
