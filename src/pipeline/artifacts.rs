//! Extraction results.
//!
//! [`Keyphrases`] owns the frozen word scores together with the ranked,
//! truncated candidates. Each [`Keyphrase`] is a borrowed view whose score is
//! summed from its member words when asked for.

use crate::phrase::candidate::{CandidateCollection, PhraseCandidate};
use crate::types::Phrase;
use crate::words::registry::{ScoredWords, Word};

/// Ranked keyphrases returned by an extraction
#[derive(Debug)]
pub struct Keyphrases {
    words: ScoredWords,
    candidates: CandidateCollection,
}

impl Keyphrases {
    pub(crate) fn new(words: ScoredWords, candidates: CandidateCollection) -> Self {
        Self { words, candidates }
    }

    /// Iterate over the keyphrases, best first
    pub fn iter(&self) -> impl Iterator<Item = Keyphrase<'_>> + '_ {
        self.candidates.iter().map(move |candidate| Keyphrase {
            candidate,
            words: &self.words,
        })
    }

    /// Get a keyphrase by rank position (0-indexed)
    pub fn get(&self, index: usize) -> Option<Keyphrase<'_>> {
        self.candidates.get(index).map(|candidate| Keyphrase {
            candidate,
            words: &self.words,
        })
    }

    /// Texts of all keyphrases, best first
    pub fn texts(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.text()).collect()
    }

    /// Scores of all keyphrases, best first
    pub fn scores(&self) -> Vec<f64> {
        self.iter().map(|k| k.score()).collect()
    }

    /// Final statistics of a word seen anywhere in the document
    ///
    /// Words of candidates dropped by truncation are still available.
    pub fn word(&self, text: &str) -> Option<&Word> {
        self.words.lookup(text)
    }

    /// All scored words of the document
    pub fn words(&self) -> &ScoredWords {
        &self.words
    }

    /// Materialize owned, serializable phrase records
    pub fn to_phrases(&self) -> Vec<Phrase> {
        self.iter()
            .enumerate()
            .map(|(i, k)| Phrase {
                text: k.text().to_string(),
                score: k.score(),
                word_count: k.len(),
                rank: i + 1,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Borrowed view of one ranked keyphrase
#[derive(Debug, Clone, Copy)]
pub struct Keyphrase<'a> {
    candidate: &'a PhraseCandidate,
    words: &'a ScoredWords,
}

impl<'a> Keyphrase<'a> {
    /// Concatenated surface forms, no separators
    pub fn text(&self) -> &'a str {
        self.candidate.text()
    }

    /// Sum of the member words' scores
    pub fn score(&self) -> f64 {
        self.candidate.score(self.words)
    }

    /// Member words, in document order
    pub fn words(&self) -> impl Iterator<Item = &'a Word> + 'a {
        let words = self.words;
        self.candidate
            .words()
            .iter()
            .filter_map(move |&id| words.get(id))
    }

    /// Number of member words
    pub fn len(&self) -> usize {
        self.candidate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidate.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::registry::WordRegistry;
    use crate::words::scoring::WordScoring;

    fn sample() -> Keyphrases {
        let mut registry = WordRegistry::new();
        let mut candidates = CandidateCollection::new();
        for run in [vec!["天気", "予報"], vec!["今日"]] {
            let ids: Vec<_> = run.iter().map(|w| registry.record_occurrence(w)).collect();
            for &id in &ids {
                registry.add_degree(id, ids.len());
            }
            candidates.append_if_unique(PhraseCandidate::new(ids, &registry).unwrap());
        }
        let words = registry.score(WordScoring::DegToFreq);
        candidates.sort_by_score_desc(&words);
        Keyphrases::new(words, candidates)
    }

    #[test]
    fn test_listing_helpers() {
        let result = sample();

        assert_eq!(result.len(), 2);
        assert_eq!(result.texts(), vec!["天気予報", "今日"]);
        assert_eq!(result.scores(), vec![4.0, 1.0]);
    }

    #[test]
    fn test_keyphrase_view() {
        let result = sample();
        let top = result.get(0).unwrap();

        assert_eq!(top.text(), "天気予報");
        assert_eq!(top.len(), 2);
        let members: Vec<_> = top.words().map(|w| w.text.as_str()).collect();
        assert_eq!(members, vec!["天気", "予報"]);
        assert!(result.get(2).is_none());
    }

    #[test]
    fn test_word_lookup() {
        let result = sample();

        let word = result.word("予報").unwrap();
        assert_eq!(word.frequency, 1);
        assert_eq!(word.degree, 2);
        assert_eq!(word.score, 2.0);
        assert!(result.word("明日").is_none());
    }

    #[test]
    fn test_to_phrases_serializes() {
        let phrases = sample().to_phrases();

        assert_eq!(phrases[0].rank, 1);
        assert_eq!(phrases[1].rank, 2);
        assert_eq!(phrases[0].word_count, 2);

        let json = serde_json::to_value(&phrases).unwrap();
        assert_eq!(json[0]["text"], "天気予報");
        assert_eq!(json[0]["score"], 4.0);
    }
}
