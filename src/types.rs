//! Core types for rapid_rake_ja
//!
//! This module defines the tokens handed over by a morphological analyzer,
//! the materialized phrase records returned to callers, and the resolved
//! extractor configuration.

use crate::nlp::delimiters::DEFAULT_PHRASE_DELIMITERS;
use crate::nlp::stopwords::DEFAULT_JAPANESE_STOPWORDS;
use crate::words::scoring::WordScoring;
use serde::{Deserialize, Serialize};

// ============================================================================
// Part of speech
// ============================================================================

/// Coarse part-of-speech categories as reported by IPADIC-style analyzers.
///
/// The extractor never interprets these values; they are compared by string
/// equality against the configured content-word allow-list.
pub mod pos {
    /// フィラー
    pub const FILLER: &str = "フィラー";
    /// 感動詞
    pub const INTERJECTION: &str = "感動詞";
    /// 記号
    pub const SYMBOL: &str = "記号";
    /// 形容詞
    pub const ADJECTIVE: &str = "形容詞";
    /// 助詞
    pub const PARTICLE: &str = "助詞";
    /// 助動詞
    pub const AUXILIARY_VERB: &str = "助動詞";
    /// 接続詞
    pub const CONJUNCTION: &str = "接続詞";
    /// 接頭詞
    pub const PREFIX: &str = "接頭詞";
    /// 動詞
    pub const VERB: &str = "動詞";
    /// 副詞
    pub const ADVERB: &str = "副詞";
    /// 名詞
    pub const NOUN: &str = "名詞";

    /// Every category, in IPADIC order
    pub const ALL: &[&str] = &[
        FILLER,
        INTERJECTION,
        SYMBOL,
        ADJECTIVE,
        PARTICLE,
        AUXILIARY_VERB,
        CONJUNCTION,
        PREFIX,
        VERB,
        ADVERB,
        NOUN,
    ];
}

// ============================================================================
// Token
// ============================================================================

/// A token produced by the morphological analyzer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The surface form exactly as it appears in the input
    pub text: String,
    /// Coarse part-of-speech category
    pub pos: String,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
        }
    }
}

// ============================================================================
// Phrase
// ============================================================================

/// A materialized keyphrase with its final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// Concatenated surface forms of the member words
    pub text: String,
    /// Sum of the member words' scores
    pub score: f64,
    /// Number of words in the phrase
    pub word_count: usize,
    /// The rank (1-indexed, based on score)
    pub rank: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Default share of ranked candidates kept by the extractor
pub const DEFAULT_TOP_N_PERCENT: i32 = 33;

/// Resolved configuration for keyphrase extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RakeConfig {
    /// Part-of-speech categories that may form phrases.
    ///
    /// `None` lets every token that is not a stop word or delimiter through.
    #[serde(default)]
    pub content_word_pos: Option<Vec<String>>,
    /// Tokens that split phrases (exact match)
    pub phrase_delimiters: Vec<String>,
    /// Tokens that split phrases and never become words (exact match)
    pub stop_words: Vec<String>,
    /// Word scoring formula
    #[serde(default)]
    pub word_scoring: WordScoring,
    /// Share of the ranked candidates to return, in percent
    pub top_n_percent: i32,
}

impl Default for RakeConfig {
    fn default() -> Self {
        Self {
            content_word_pos: None,
            phrase_delimiters: DEFAULT_PHRASE_DELIMITERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            stop_words: DEFAULT_JAPANESE_STOPWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            word_scoring: WordScoring::DegToFreq,
            top_n_percent: DEFAULT_TOP_N_PERCENT,
        }
    }
}

impl RakeConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: restrict content words to the given categories
    pub fn with_content_word_pos<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_word_pos = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method: drop the content-word restriction
    pub fn without_content_word_pos(mut self) -> Self {
        self.content_word_pos = None;
        self
    }

    /// Builder method: replace the phrase delimiters
    pub fn with_phrase_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrase_delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: replace the stop words
    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set the word scoring formula
    pub fn with_word_scoring(mut self, scoring: WordScoring) -> Self {
        self.word_scoring = scoring;
        self
    }

    /// Builder method: set the share of candidates to keep
    pub fn with_top_n_percent(mut self, percent: i32) -> Self {
        self.top_n_percent = percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = RakeConfig::default();

        assert!(cfg.content_word_pos.is_none());
        assert_eq!(cfg.word_scoring, WordScoring::DegToFreq);
        assert_eq!(cfg.top_n_percent, 33);
        assert!(cfg.stop_words.iter().any(|w| w == "の"));
        assert!(cfg.phrase_delimiters.iter().any(|d| d == "、"));
        assert!(cfg.phrase_delimiters.iter().any(|d| d == "\n"));
    }

    #[test]
    fn test_builder_methods() {
        let cfg = RakeConfig::new()
            .with_content_word_pos([pos::NOUN, pos::VERB])
            .with_phrase_delimiters(["、"])
            .with_stop_words(Vec::<String>::new())
            .with_word_scoring(WordScoring::Freq)
            .with_top_n_percent(100);

        assert_eq!(
            cfg.content_word_pos,
            Some(vec!["名詞".to_string(), "動詞".to_string()])
        );
        assert_eq!(cfg.phrase_delimiters, vec!["、".to_string()]);
        assert!(cfg.stop_words.is_empty());
        assert_eq!(cfg.word_scoring, WordScoring::Freq);
        assert_eq!(cfg.top_n_percent, 100);

        let cfg = cfg.without_content_word_pos();
        assert!(cfg.content_word_pos.is_none());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = RakeConfig::default().with_word_scoring(WordScoring::Deg);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: RakeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_pos_categories() {
        assert_eq!(pos::ALL.len(), 11);
        assert!(pos::ALL.contains(&"名詞"));
    }
}
