//! Phrase candidate construction
//!
//! Splits the token stream into maximal runs of content words. Tokens are
//! classified in a fixed order (part of speech, stop word, delimiter) and
//! the first matching rule wins, so a token that is both a non-content part
//! of speech and a stop word ends the open candidate exactly once.

use super::candidate::{CandidateCollection, PhraseCandidate};
use crate::nlp::delimiters::PhraseDelimiters;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{RakeConfig, Token};
use crate::words::registry::{WordId, WordRegistry};
use rustc_hash::FxHashSet;

/// How a single token is treated while building candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Part of speech outside the content-word allow-list
    NonContentPos,
    /// Exact match of a stop word
    StopWord,
    /// Exact match of a phrase delimiter
    Delimiter,
    /// Becomes a word of the open candidate
    ContentWord,
}

impl TokenClass {
    /// Whether the token ends the open candidate
    pub fn is_terminator(self) -> bool {
        !matches!(self, TokenClass::ContentWord)
    }
}

/// Output of the construction phase
#[derive(Debug, Default)]
pub struct CandidateSet {
    /// Word statistics gathered from every candidate, duplicates included
    pub registry: WordRegistry,
    /// Unique candidates in first-occurrence order
    pub candidates: CandidateCollection,
    /// Number of candidates closed, duplicates included
    pub closed: usize,
}

/// Builds phrase candidates and word statistics from a token stream
#[derive(Debug, Clone, Default)]
pub struct CandidateBuilder {
    content_word_pos: Option<FxHashSet<String>>,
    stopwords: StopwordFilter,
    delimiters: PhraseDelimiters,
}

impl CandidateBuilder {
    /// Create a builder with the built-in stop words and delimiters and no
    /// part-of-speech restriction
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from a resolved configuration
    pub fn from_config(cfg: &RakeConfig) -> Self {
        Self {
            content_word_pos: cfg
                .content_word_pos
                .as_ref()
                .map(|categories| categories.iter().cloned().collect()),
            stopwords: StopwordFilter::from_list(&cfg.stop_words),
            delimiters: PhraseDelimiters::from_list(&cfg.phrase_delimiters),
        }
    }

    /// Only let tokens of these categories become words
    pub fn with_content_word_pos<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_word_pos = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the stop-word filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the phrase delimiters
    pub fn with_delimiters(mut self, delimiters: PhraseDelimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Classify a token; the first matching rule wins
    pub fn classify(&self, token: &Token) -> TokenClass {
        if let Some(allowed) = &self.content_word_pos {
            if !allowed.contains(&token.pos) {
                return TokenClass::NonContentPos;
            }
        }
        if self.stopwords.is_stopword(&token.text) {
            return TokenClass::StopWord;
        }
        if self.delimiters.is_delimiter(&token.text) {
            return TokenClass::Delimiter;
        }
        TokenClass::ContentWord
    }

    /// Run the candidate state machine over the whole token stream
    pub fn build(&self, tokens: &[Token]) -> CandidateSet {
        let mut set = CandidateSet {
            registry: WordRegistry::with_capacity(tokens.len() / 2),
            candidates: CandidateCollection::new(),
            closed: 0,
        };
        let mut open: Vec<WordId> = Vec::new();

        for token in tokens {
            let class = self.classify(token);
            if class.is_terminator() {
                debug_event!(text = %token.text, pos = %token.pos, ?class, "terminator");
                Self::close(&mut open, &mut set);
                continue;
            }

            let id = set.registry.record_occurrence(&token.text);
            open.push(id);
        }

        // A candidate still open at end of stream is closed like any other
        Self::close(&mut open, &mut set);

        set
    }

    /// Close the open candidate, if any: bump every member's degree by the
    /// candidate length and keep the candidate if its text is new.
    fn close(open: &mut Vec<WordId>, set: &mut CandidateSet) {
        if open.is_empty() {
            return;
        }

        let words = std::mem::take(open);
        let len = words.len();
        for &id in &words {
            set.registry.add_degree(id, len);
        }
        set.closed += 1;

        if let Some(candidate) = PhraseCandidate::new(words, &set.registry) {
            debug_event!(candidate = candidate.text(), words = len, "candidate closed");
            set.candidates.append_if_unique(candidate);
        }
    }
}
