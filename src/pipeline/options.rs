//! Extractor options.
//!
//! [`ExtractorOptions`] is the loosely specified input form of the
//! configuration: every field is optional and an absent field means "use
//! the default". Options are resolved once into a [`RakeConfig`] when the
//! extractor is built.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "content_word_pos": ["名詞"],
//!   "phrase_delimiters": ["、", "。"],
//!   "stop_words": ["の", "は"],
//!   "word_scoring": "degToFreq",
//!   "top_n_percent": 33
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::RakeConfig;
use crate::words::scoring::WordScoring;

/// Partial extractor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractorOptions {
    /// Restrict content words to these part-of-speech categories.
    /// Default: no restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_word_pos: Option<Vec<String>>,

    /// Default: the built-in delimiter set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase_delimiters: Option<Vec<String>>,

    /// Explicit stop words. Takes precedence over `stopword_language`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<Vec<String>>,

    /// Load stop words for a language code (e.g. `"ja"`, `"en"`).
    /// Default: the built-in Japanese list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopword_language: Option<String>,

    /// Default: `degToFreq`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_scoring: Option<WordScoring>,

    /// Default: 33.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n_percent: Option<i32>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl ExtractorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fill every absent field with its default
    pub fn resolve(&self) -> RakeConfig {
        if !self.unknown_fields.is_empty() {
            warn_event!(
                fields = ?self.unknown_fields.keys().collect::<Vec<_>>(),
                "ignoring unknown extractor options"
            );
        }

        let defaults = RakeConfig::default();

        let stop_words = match (&self.stop_words, &self.stopword_language) {
            (Some(words), _) => words.clone(),
            (None, Some(language)) => {
                let mut words: Vec<String> = StopwordFilter::for_language(language)
                    .words()
                    .map(str::to_string)
                    .collect();
                words.sort();
                words
            }
            (None, None) => defaults.stop_words,
        };

        RakeConfig {
            content_word_pos: self.content_word_pos.clone(),
            phrase_delimiters: self
                .phrase_delimiters
                .clone()
                .unwrap_or(defaults.phrase_delimiters),
            stop_words,
            word_scoring: self.word_scoring.unwrap_or(defaults.word_scoring),
            top_n_percent: self.top_n_percent.unwrap_or(defaults.top_n_percent),
        }
    }

    pub fn with_content_word_pos<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_word_pos = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_phrase_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrase_delimiters = Some(delimiters.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Some(stop_words.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_stopword_language(mut self, language: impl Into<String>) -> Self {
        self.stopword_language = Some(language.into());
        self
    }

    pub fn with_word_scoring(mut self, scoring: WordScoring) -> Self {
        self.word_scoring = Some(scoring);
        self
    }

    pub fn with_top_n_percent(mut self, percent: i32) -> Self {
        self.top_n_percent = Some(percent);
        self
    }
}

impl From<ExtractorOptions> for RakeConfig {
    fn from(options: ExtractorOptions) -> Self {
        options.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pos;

    #[test]
    fn test_empty_options_resolve_to_defaults() {
        let cfg = ExtractorOptions::new().resolve();
        assert_eq!(cfg, RakeConfig::default());
    }

    #[test]
    fn test_deserialize_minimal() {
        let options = ExtractorOptions::from_json("{}").unwrap();
        assert_eq!(options, ExtractorOptions::default());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "content_word_pos": ["名詞"],
            "phrase_delimiters": ["、", "。", "度"],
            "stop_words": [],
            "word_scoring": "freq",
            "top_n_percent": 50
        }"#;
        let cfg = ExtractorOptions::from_json(json).unwrap().resolve();

        assert_eq!(cfg.content_word_pos, Some(vec![pos::NOUN.to_string()]));
        assert_eq!(cfg.phrase_delimiters.len(), 3);
        assert!(cfg.stop_words.is_empty());
        assert_eq!(cfg.word_scoring, WordScoring::Freq);
        assert_eq!(cfg.top_n_percent, 50);
    }

    #[test]
    fn test_empty_list_is_not_absent() {
        let cfg = ExtractorOptions::new()
            .with_phrase_delimiters(Vec::<String>::new())
            .resolve();

        assert!(cfg.phrase_delimiters.is_empty());
        assert_eq!(cfg.stop_words, RakeConfig::default().stop_words);
    }

    #[test]
    fn test_stopword_language() {
        let cfg = ExtractorOptions::new().with_stopword_language("en").resolve();
        assert!(cfg.stop_words.iter().any(|w| w == "the"));

        let cfg = ExtractorOptions::new()
            .with_stopword_language("en")
            .with_stop_words(["custom"])
            .resolve();
        assert_eq!(cfg.stop_words, vec!["custom".to_string()]);
    }

    #[test]
    fn test_stopword_language_never_resolves_empty() {
        let default_stop_words = RakeConfig::default().stop_words;

        let mut cfg = ExtractorOptions::new().with_stopword_language("jp").resolve();
        cfg.stop_words.sort();
        let mut expected = default_stop_words.clone();
        expected.sort();
        assert_eq!(cfg.stop_words, expected);

        let cfg = ExtractorOptions::new().with_stopword_language("zh").resolve();
        assert!(cfg.stop_words.iter().any(|w| w == "的"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{ "top_n_percent": 10, "bogus": true }"#;
        let options = ExtractorOptions::from_json(json).unwrap();

        assert!(options.unknown_fields.contains_key("bogus"));
        assert_eq!(options.resolve().top_n_percent, 10);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = ExtractorOptions::from_json(r#"{ "top_n_percent": "many" }"#).unwrap_err();
        assert!(matches!(err, crate::errors::RakeError::InvalidOptions(_)));
    }

    #[test]
    fn test_into_config() {
        let cfg: RakeConfig = ExtractorOptions::new()
            .with_word_scoring(WordScoring::Deg)
            .with_top_n_percent(100)
            .into();

        assert_eq!(cfg.word_scoring, WordScoring::Deg);
        assert_eq!(cfg.top_n_percent, 100);
    }
}
