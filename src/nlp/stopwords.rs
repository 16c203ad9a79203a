//! Stopword filtering
//!
//! Stop words end a phrase candidate and never become words themselves.
//! Matching is exact: the analyzer already hands over surface forms, so no
//! case folding or normalization is applied.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Built-in Japanese stop words (IPADIC surface forms)
pub const DEFAULT_JAPANESE_STOPWORDS: &[&str] = &[
    "の",
    "に",
    "は",
    "を",
    "た",
    "が",
    "で",
    "て",
    "と",
    "し",
    "れ",
    "さ",
    "ある",
    "いる",
    "も",
    "する",
    "から",
    "な",
    "こと",
    "として",
    "い",
    "や",
    "など",
    "なっ",
    "ない",
    "この",
    "ため",
    "その",
    "あっ",
    "よう",
    "また",
    "もの",
    "という",
    "あり",
    "まで",
    "られ",
    "なる",
    "へ",
    "か",
    "だ",
    "これ",
    "によって",
    "により",
    "おり",
    "です",
    "でし",
    "ます",
    "ませ",
    "ん",
];

/// Built-in Chinese stop words
pub const DEFAULT_CHINESE_STOPWORDS: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及", "这",
    "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于",
    "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
];

/// A filter for recognizing stop words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::japanese()
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in Japanese list
    pub fn japanese() -> Self {
        Self::from_list(DEFAULT_JAPANESE_STOPWORDS)
    }

    /// Create a filter for the given language
    ///
    /// Japanese and Chinese use built-in lists; other languages are loaded
    /// from the `stop-words` crate. An unknown code logs a warning and falls
    /// back to the Japanese list.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "ja" | "japanese" => return Self::japanese(),
            "zh" | "chinese" => return Self::from_list(DEFAULT_CHINESE_STOPWORDS),
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => {
                warn_event!(language, "unknown stop-word language, using Japanese");
                return Self::japanese();
            }
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an empty filter (no stop words)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// Add additional stop words
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_string());
        }
    }

    /// Remove stop words
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(word.as_ref());
        }
    }

    /// Check if a token text is a stop word
    pub fn is_stopword(&self, text: &str) -> bool {
        self.stopwords.contains(text)
    }

    /// Iterate over the stop words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.stopwords.iter().map(String::as_str)
    }

    /// Get the number of stop words in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
