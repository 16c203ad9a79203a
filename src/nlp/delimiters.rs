//! Phrase delimiters
//!
//! Delimiter tokens end a phrase candidate. Unlike stop words they are
//! usually punctuation, and line breaks some analyzers emit at the end of
//! their output.

use rustc_hash::FxHashSet;

/// Built-in delimiters: Japanese and ASCII punctuation plus line breaks
pub const DEFAULT_PHRASE_DELIMITERS: &[&str] = &[
    "、", "。", "，", "．", "・", "：", "；", "！", "？", "「", "」", "『", "』", "（", "）",
    "【", "】", "〈", "〉", "《", "》", "…", "‥", ",", ".", ":", ";", "!", "?", "(", ")",
    "[", "]", "\"", "'", "\n", "\r", "\r\n", "\t",
];

/// Exact-match set of delimiter strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseDelimiters {
    delimiters: FxHashSet<String>,
}

impl Default for PhraseDelimiters {
    fn default() -> Self {
        Self::from_list(DEFAULT_PHRASE_DELIMITERS)
    }
}

impl PhraseDelimiters {
    /// Create an empty set (nothing delimits phrases)
    pub fn empty() -> Self {
        Self {
            delimiters: FxHashSet::default(),
        }
    }

    /// Create a set from a custom list
    pub fn from_list<S: AsRef<str>>(delimiters: &[S]) -> Self {
        Self {
            delimiters: delimiters.iter().map(|d| d.as_ref().to_string()).collect(),
        }
    }

    /// Check if a token text is a delimiter
    pub fn is_delimiter(&self, text: &str) -> bool {
        self.delimiters.contains(text)
    }

    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let delimiters = PhraseDelimiters::default();

        assert!(delimiters.is_delimiter("、"));
        assert!(delimiters.is_delimiter("。"));
        assert!(delimiters.is_delimiter("\n"));
        assert!(!delimiters.is_delimiter("度"));
    }

    #[test]
    fn test_custom_delimiters() {
        let delimiters = PhraseDelimiters::from_list(&["度"]);

        assert!(delimiters.is_delimiter("度"));
        assert!(!delimiters.is_delimiter("、"));
        assert_eq!(delimiters.len(), 1);
    }

    #[test]
    fn test_empty_delimiters() {
        let delimiters = PhraseDelimiters::empty();

        assert!(delimiters.is_empty());
        assert!(!delimiters.is_delimiter("。"));
    }
}
