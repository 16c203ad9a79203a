//! Phrase candidates and their de-duplicated collection

use crate::words::registry::{ScoredWords, WordId, WordRegistry};
use rustc_hash::FxHashSet;

/// A maximal run of content words
///
/// Holds word IDs into the registry rather than copies, so the score is
/// always the sum of the member words' current scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCandidate {
    words: Vec<WordId>,
    text: String,
}

impl PhraseCandidate {
    /// Create a candidate from a run of words
    ///
    /// Returns `None` for an empty run; candidates are never empty.
    pub fn new(words: Vec<WordId>, registry: &WordRegistry) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let text = words.iter().map(|&id| registry.text(id)).collect();
        Some(Self { words, text })
    }

    /// Member words, in document order
    pub fn words(&self) -> &[WordId] {
        &self.words
    }

    /// Concatenated surface text, no separators
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of member words (always >= 1)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of the member words' scores
    pub fn score(&self, words: &ScoredWords) -> f64 {
        self.words.iter().map(|&id| words.score(id)).sum()
    }
}

/// Insertion-ordered collection of candidates, unique by text
#[derive(Debug, Clone, Default)]
pub struct CandidateCollection {
    candidates: Vec<PhraseCandidate>,
    seen: FxHashSet<String>,
}

impl CandidateCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate unless one with the same text is already present.
    ///
    /// Returns `true` when the candidate was added.
    pub fn append_if_unique(&mut self, candidate: PhraseCandidate) -> bool {
        if self.seen.contains(candidate.text()) {
            return false;
        }
        self.seen.insert(candidate.text().to_string());
        self.candidates.push(candidate);
        true
    }

    /// Sort by aggregate score, highest first.
    ///
    /// The sort is stable: equal scores keep their insertion order.
    pub fn sort_by_score_desc(&mut self, words: &ScoredWords) {
        self.candidates
            .sort_by(|a, b| b.score(words).total_cmp(&a.score(words)));
    }

    /// Keep the leading `top_n_percent` percent of the candidates.
    ///
    /// The cutoff is `floor(len * percent / 100)`, so small collections may
    /// come back empty even for a positive percentage.
    pub fn export_top_percent(mut self, top_n_percent: i32) -> Self {
        if self.candidates.is_empty() || top_n_percent <= 0 {
            return Self::new();
        }
        if top_n_percent >= 100 {
            return self;
        }

        let n = self.candidates.len() * top_n_percent as usize / 100;
        for dropped in self.candidates.drain(n..) {
            self.seen.remove(dropped.text());
        }
        self
    }

    /// Iterate over the candidates in their current order
    pub fn iter(&self) -> std::slice::Iter<'_, PhraseCandidate> {
        self.candidates.iter()
    }

    /// Get a candidate by position
    pub fn get(&self, index: usize) -> Option<&PhraseCandidate> {
        self.candidates.get(index)
    }

    /// Check whether a candidate with this text is present
    pub fn contains_text(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a CandidateCollection {
    type Item = &'a PhraseCandidate;
    type IntoIter = std::slice::Iter<'a, PhraseCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
