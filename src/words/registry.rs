//! Word registry
//!
//! An arena of word records keyed by surface text. Phrase candidates hold
//! [`WordId`]s into the arena, so every candidate containing a word sees the
//! same frequency and degree counters.

use super::scoring::WordScoring;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Stable handle to a word in a [`WordRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Index of the word in the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Accumulated statistics for one distinct surface form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    /// Surface text (identity, case-sensitive)
    pub text: String,
    /// Occurrences as a content word
    pub frequency: usize,
    /// Sum of the lengths of every closed candidate containing this word
    pub degree: usize,
    /// Derived score, zero until the registry is scored
    pub score: f64,
}

impl Word {
    /// Create a new word with zeroed counters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            frequency: 0,
            degree: 0,
            score: 0.0,
        }
    }
}

/// Mutable registry used while candidates are being built
#[derive(Debug, Default)]
pub struct WordRegistry {
    /// Maps surface text -> word ID
    text_to_id: FxHashMap<String, u32>,
    /// Word storage
    words: Vec<Word>,
}

impl WordRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            words: Vec::with_capacity(capacity),
        }
    }

    /// Get or create the word for the given text, returning its ID
    pub fn get_or_create(&mut self, text: &str) -> WordId {
        if let Some(&id) = self.text_to_id.get(text) {
            return WordId(id);
        }

        let id = self.words.len() as u32;
        self.text_to_id.insert(text.to_string(), id);
        self.words.push(Word::new(text));
        WordId(id)
    }

    /// Count one content-word occurrence of `text`
    ///
    /// Creation and the frequency increment happen together, so a word
    /// reachable through the registry always has `frequency >= 1`.
    pub fn record_occurrence(&mut self, text: &str) -> WordId {
        let id = self.get_or_create(text);
        self.words[id.index()].frequency += 1;
        id
    }

    /// Add `amount` to the degree of a word
    pub fn add_degree(&mut self, id: WordId, amount: usize) {
        if let Some(word) = self.words.get_mut(id.index()) {
            word.degree += amount;
        }
    }

    /// Get a word by ID
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.index())
    }

    /// Get a word ID by surface text
    pub fn get_id(&self, text: &str) -> Option<WordId> {
        self.text_to_id.get(text).copied().map(WordId)
    }

    /// Get the surface text for a word ID
    pub fn text(&self, id: WordId) -> &str {
        self.words
            .get(id.index())
            .map(|w| w.text.as_str())
            .unwrap_or("")
    }

    /// Iterate over all words in creation order
    pub fn words(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u32), w))
    }

    /// Get the number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Score every word and freeze the registry
    ///
    /// Consuming the registry keeps construction and scoring strictly
    /// sequential: nothing can bump a counter once scores exist.
    pub fn score(mut self, scoring: WordScoring) -> ScoredWords {
        for word in &mut self.words {
            word.score = scoring.score(word.frequency, word.degree);
        }
        ScoredWords {
            registry: self,
            scoring,
        }
    }
}

/// Read-only snapshot of the registry after scoring
#[derive(Debug)]
pub struct ScoredWords {
    registry: WordRegistry,
    scoring: WordScoring,
}

impl ScoredWords {
    /// The formula the scores were computed with
    pub fn scoring(&self) -> WordScoring {
        self.scoring
    }

    /// Score of a word, `0.0` for an unknown ID
    pub fn score(&self, id: WordId) -> f64 {
        self.registry.get(id).map_or(0.0, |w| w.score)
    }

    /// Get a word by ID
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.registry.get(id)
    }

    /// Look a word up by surface text
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        self.registry.get_id(text).and_then(|id| self.registry.get(id))
    }

    /// Get the surface text for a word ID
    pub fn text(&self, id: WordId) -> &str {
        self.registry.text(id)
    }

    /// Iterate over all words in creation order
    pub fn words(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.registry.words()
    }

    /// Get the number of distinct words
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_dedupes() {
        let mut registry = WordRegistry::new();

        let id_a = registry.get_or_create("最高");
        let id_b = registry.get_or_create("気温");
        let id_c = registry.get_or_create("最高"); // duplicate

        assert_eq!(id_a, id_c);
        assert_ne!(id_a, id_b);
        assert_eq!(registry.len(), 2);

        let word = registry.get(id_a).unwrap();
        assert_eq!(word.frequency, 0);
        assert_eq!(word.degree, 0);
        assert_eq!(word.score, 0.0);
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        let mut registry = WordRegistry::new();

        let upper = registry.get_or_create("Rust");
        let lower = registry.get_or_create("rust");

        assert_ne!(upper, lower);
    }

    #[test]
    fn test_record_occurrence_counts() {
        let mut registry = WordRegistry::new();

        let id = registry.record_occurrence("気温");
        registry.record_occurrence("気温");

        assert_eq!(registry.get(id).unwrap().frequency, 2);
        assert_eq!(registry.get_id("気温"), Some(id));
        assert_eq!(registry.get_id("湿度"), None);
    }

    #[test]
    fn test_degree_and_scores() {
        let mut registry = WordRegistry::new();

        // [最高, 気温] closed, then [気温] closed
        let best = registry.record_occurrence("最高");
        let temp = registry.record_occurrence("気温");
        registry.add_degree(best, 2);
        registry.add_degree(temp, 2);
        registry.record_occurrence("気温");
        registry.add_degree(temp, 1);

        let scored = registry.score(WordScoring::DegToFreq);

        assert_eq!(scored.get(best).unwrap().degree, 2);
        assert_eq!(scored.get(temp).unwrap().degree, 3);
        assert_eq!(scored.get(temp).unwrap().frequency, 2);
        assert_eq!(scored.score(best), 2.0);
        assert_eq!(scored.score(temp), 1.5);
        assert_eq!(scored.scoring(), WordScoring::DegToFreq);
    }

    #[test]
    fn test_recorded_words_never_have_zero_frequency() {
        let mut registry = WordRegistry::new();
        for text in ["今日", "明日", "今日", "天気"] {
            registry.record_occurrence(text);
        }

        assert!(registry.words().all(|(_, w)| w.frequency > 0));
    }

    #[test]
    fn test_lookup_after_scoring() {
        let mut registry = WordRegistry::new();
        let id = registry.record_occurrence("予報");
        registry.add_degree(id, 3);

        let scored = registry.score(WordScoring::Deg);

        assert_eq!(scored.lookup("予報").map(|w| w.score), Some(3.0));
        assert!(scored.lookup("天気").is_none());
        assert_eq!(scored.text(id), "予報");
        assert_eq!(scored.len(), 1);
    }
}
