//! Tokenization
//!
//! The extractor needs surface forms with a coarse part-of-speech category
//! for each token. Any morphological analyzer can be plugged in through the
//! [`Tokenizer`] trait; this module ships a dictionary-free
//! [`ScriptTokenizer`] and, behind the `ipadic` feature, a Lindera-backed
//! [`IpadicTokenizer`].

use crate::errors::Result;
use crate::types::{pos, Token};

/// A morphological analyzer producing tokens in document order
pub trait Tokenizer {
    /// Split `text` into tokens.
    ///
    /// Empty input must yield an empty token list, not an error.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<Token>>,
{
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        self(text)
    }
}

// ============================================================================
// ScriptTokenizer
// ============================================================================

/// Character classes used by [`ScriptTokenizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Latin,
    Digit,
    Whitespace,
    LineBreak,
    Symbol,
}

impl Script {
    fn of(c: char) -> Self {
        match c {
            '\n' | '\r' => Script::LineBreak,
            c if c.is_whitespace() => Script::Whitespace,
            '\u{3041}'..='\u{309F}' => Script::Hiragana,
            '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => {
                // U+30FB (・) is punctuation even though it sits in the katakana block
                if c == '\u{30FB}' {
                    Script::Symbol
                } else {
                    Script::Katakana
                }
            }
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '々' | '〆' => {
                Script::Kanji
            }
            c if c.is_ascii_digit() => Script::Digit,
            '\u{FF10}'..='\u{FF19}' => Script::Digit,
            c if c.is_alphabetic() => Script::Latin,
            _ => Script::Symbol,
        }
    }

    /// Coarse category assigned to a run of this script
    fn category(self) -> &'static str {
        match self {
            Script::Kanji | Script::Katakana | Script::Latin | Script::Digit => pos::NOUN,
            Script::Hiragana => pos::PARTICLE,
            Script::Whitespace | Script::LineBreak | Script::Symbol => pos::SYMBOL,
        }
    }

    /// Whether consecutive characters of this script merge into one token
    fn merges(self) -> bool {
        !matches!(self, Script::Symbol | Script::LineBreak)
    }
}

/// Dictionary-free tokenizer that splits text into runs of one script.
///
/// Kanji, katakana, Latin and digit runs are reported as nouns, hiragana
/// runs as particles and everything else as symbols. This is far coarser
/// than a real analyzer; pair it with a content-word allow-list such as
/// `[名詞]` so hiragana runs end phrases.
///
/// Whitespace runs are kept as symbol tokens, so under a noun allow-list
/// space-separated Latin words stay separate words. Dropping them glues
/// `machine learning` into `machinelearning`, as MeCab-style analyzers do.
#[derive(Debug, Clone, Copy)]
pub struct ScriptTokenizer {
    keep_whitespace: bool,
}

impl Default for ScriptTokenizer {
    fn default() -> Self {
        Self {
            keep_whitespace: true,
        }
    }
}

impl ScriptTokenizer {
    /// Create a tokenizer that emits whitespace runs as symbol tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep (`true`) or drop (`false`) whitespace runs
    pub fn with_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }
}

impl Tokenizer for ScriptTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut current: Option<(Script, usize)> = None;

        for (idx, c) in text.char_indices() {
            let script = Script::of(c);
            match current {
                Some((prev, _)) if prev == script && script.merges() => {}
                Some((prev, start)) => {
                    self.push_run(&mut tokens, &text[start..idx], prev);
                    current = Some((script, idx));
                }
                None => current = Some((script, idx)),
            }
        }
        if let Some((script, start)) = current {
            self.push_run(&mut tokens, &text[start..], script);
        }

        Ok(tokens)
    }
}

impl ScriptTokenizer {
    fn push_run(&self, tokens: &mut Vec<Token>, run: &str, script: Script) {
        if script == Script::Whitespace && !self.keep_whitespace {
            return;
        }
        tokens.push(Token::new(run, script.category()));
    }
}

// ============================================================================
// IpadicTokenizer
// ============================================================================

#[cfg(feature = "ipadic")]
pub use ipadic::IpadicTokenizer;

#[cfg(feature = "ipadic")]
mod ipadic {
    use super::Tokenizer;
    use crate::errors::{RakeError, Result};
    use crate::types::Token;
    use lindera::{
        dictionary::{load_embedded_dictionary, DictionaryKind},
        mode::Mode,
        segmenter::Segmenter,
        tokenizer::Tokenizer as LinderaTokenizer,
    };

    /// Morphological analyzer backed by Lindera and the embedded IPADIC
    /// dictionary. The first IPADIC feature field becomes the category.
    pub struct IpadicTokenizer {
        tokenizer: LinderaTokenizer,
    }

    impl IpadicTokenizer {
        /// Load the embedded dictionary
        pub fn new() -> Result<Self> {
            let dictionary = load_embedded_dictionary(DictionaryKind::IPADIC)
                .map_err(|e| RakeError::tokenization(e.to_string()))?;
            let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
            Ok(Self {
                tokenizer: LinderaTokenizer::new(segmenter),
            })
        }
    }

    impl Tokenizer for IpadicTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
            if text.is_empty() {
                return Ok(Vec::new());
            }

            let mut analyzed = self
                .tokenizer
                .tokenize(text)
                .map_err(|e| RakeError::tokenization(e.to_string()))?;

            let mut tokens = Vec::with_capacity(analyzed.len());
            for token in analyzed.iter_mut() {
                let category = token
                    .details()
                    .first()
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                tokens.push(Token::new(token.surface.to_string(), category));
            }
            Ok(tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RakeError;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_script_runs() {
        let tokens = ScriptTokenizer::new().tokenize("今日の最高気温は20度").unwrap();

        assert_eq!(texts(&tokens), vec!["今日", "の", "最高気温", "は", "20", "度"]);
        assert_eq!(tokens[0].pos, pos::NOUN);
        assert_eq!(tokens[1].pos, pos::PARTICLE);
        assert_eq!(tokens[4].pos, pos::NOUN);
    }

    #[test]
    fn test_symbols_are_single_tokens() {
        let tokens = ScriptTokenizer::new().tokenize("天気、、予報。").unwrap();

        assert_eq!(texts(&tokens), vec!["天気", "、", "、", "予報", "。"]);
        assert_eq!(tokens[1].pos, pos::SYMBOL);
    }

    #[test]
    fn test_katakana_and_latin() {
        let tokens = ScriptTokenizer::new().tokenize("Rustでコンパイラ・ツール").unwrap();

        assert_eq!(texts(&tokens), vec!["Rust", "で", "コンパイラ", "・", "ツール"]);
        assert_eq!(tokens[3].pos, pos::SYMBOL);
    }

    #[test]
    fn test_whitespace_handling() {
        let kept = ScriptTokenizer::new().tokenize("machine  learning").unwrap();
        assert_eq!(texts(&kept), vec!["machine", "  ", "learning"]);
        assert_eq!(kept[1].pos, pos::SYMBOL);

        let dropped = ScriptTokenizer::new()
            .with_whitespace(false)
            .tokenize("machine  learning\n")
            .unwrap();
        assert_eq!(texts(&dropped), vec!["machine", "learning", "\n"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(ScriptTokenizer::new().tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_closure_tokenizer() {
        let failing = |_: &str| -> Result<Vec<Token>> { Err(RakeError::tokenization("boom")) };
        assert_eq!(failing.tokenize("x"), Err(RakeError::tokenization("boom")));

        let dynamic: &dyn Tokenizer = &ScriptTokenizer::new();
        assert_eq!(dynamic.tokenize("天気").unwrap().len(), 1);
    }

    #[cfg(feature = "ipadic")]
    #[test]
    fn test_ipadic_tokenizer() {
        let tokenizer = IpadicTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("今日は晴れ").unwrap();

        assert_eq!(tokens[0].text, "今日");
        assert_eq!(tokens[0].pos, pos::NOUN);
        assert_eq!(tokens[1].pos, pos::PARTICLE);
        assert!(tokenizer.tokenize("").unwrap().is_empty());
    }
}
