//! Extraction runner. Orchestrates stage execution and artifact flow.
//!
//! [`Extractor::extract`] runs the stages strictly in order, each one fully
//! complete before the next starts:
//!
//! 1. Tokenize the text
//! 2. Build phrase candidates, counting word frequency and degree
//! 3. Score every word
//! 4. Sort candidates by score, highest first
//! 5. Keep the configured top percent
//!
//! Every call owns a fresh word registry and candidate collection, and the
//! configuration never changes after construction, so a shared `&Extractor`
//! can serve concurrent calls.

use rayon::prelude::*;

use crate::errors::Result;
use crate::nlp::tokenizer::{ScriptTokenizer, Tokenizer};
use crate::phrase::builder::CandidateBuilder;
use crate::pipeline::artifacts::Keyphrases;
use crate::pipeline::observer::{
    ExtractionObserver, NoopObserver, StageClock, StageReport, STAGE_CANDIDATES, STAGE_SCORE,
    STAGE_SORT, STAGE_TOKENIZE, STAGE_TRUNCATE,
};
use crate::pipeline::options::ExtractorOptions;
use crate::types::{pos, RakeConfig, Token};

/// RAKE keyphrase extractor
#[derive(Debug, Clone)]
pub struct Extractor<T> {
    tokenizer: T,
    config: RakeConfig,
    builder: CandidateBuilder,
}

impl Extractor<ScriptTokenizer> {
    /// Extractor backed by the dictionary-free [`ScriptTokenizer`], limited
    /// to the noun runs it reports.
    pub fn with_script_tokenizer() -> Self {
        Extractor::with_config(
            ScriptTokenizer::new(),
            RakeConfig::default().with_content_word_pos([pos::NOUN]),
        )
    }
}

#[cfg(feature = "ipadic")]
impl Extractor<crate::nlp::tokenizer::IpadicTokenizer> {
    /// Extractor backed by Lindera with the embedded IPADIC dictionary and
    /// the default configuration.
    pub fn with_ipadic() -> Result<Self> {
        Ok(Extractor::new(crate::nlp::tokenizer::IpadicTokenizer::new()?))
    }
}

impl<T> Extractor<T> {
    /// Create an extractor with the default configuration
    pub fn new(tokenizer: T) -> Self {
        Self::with_config(tokenizer, RakeConfig::default())
    }

    /// Create an extractor with a resolved configuration
    pub fn with_config(tokenizer: T, config: RakeConfig) -> Self {
        let builder = CandidateBuilder::from_config(&config);
        Self {
            tokenizer,
            config,
            builder,
        }
    }

    /// Create an extractor from partial options; absent fields take their
    /// defaults
    pub fn from_options(tokenizer: T, options: &ExtractorOptions) -> Self {
        Self::with_config(tokenizer, options.resolve())
    }

    pub fn config(&self) -> &RakeConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Run every stage after tokenization over an already analyzed stream
    pub fn extract_tokens(
        &self,
        tokens: &[Token],
        observer: &mut impl ExtractionObserver,
    ) -> Keyphrases {
        // Stage 2: Build candidates
        let set = {
            trace_stage!(STAGE_CANDIDATES);
            observer.on_stage_start(STAGE_CANDIDATES);
            let clock = StageClock::start();
            let set = self.builder.build(tokens);
            let report = StageReport::new(clock.elapsed()).with_items(set.candidates.len());
            observer.on_stage_end(STAGE_CANDIDATES, &report);
            observer.on_candidates(&set);
            debug_event!(
                words = set.registry.len(),
                candidates = set.candidates.len(),
                closed = set.closed,
                "candidates built"
            );
            set
        };

        // Stage 3: Score words. Consuming the registry freezes the counters.
        let words = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let words = set.registry.score(self.config.word_scoring);
            let report = StageReport::new(clock.elapsed()).with_items(words.len());
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scored(&words);
            words
        };

        // Stage 4: Sort
        let candidates = {
            trace_stage!(STAGE_SORT);
            observer.on_stage_start(STAGE_SORT);
            let clock = StageClock::start();
            let mut candidates = set.candidates;
            candidates.sort_by_score_desc(&words);
            let report = StageReport::new(clock.elapsed()).with_items(candidates.len());
            observer.on_stage_end(STAGE_SORT, &report);
            #[cfg(feature = "tracing")]
            for candidate in &candidates {
                tracing::trace!(
                    keyphrase = candidate.text(),
                    score = candidate.score(&words),
                    "ranked"
                );
            }
            candidates
        };

        // Stage 5: Truncate
        let candidates = {
            trace_stage!(STAGE_TRUNCATE);
            observer.on_stage_start(STAGE_TRUNCATE);
            let clock = StageClock::start();
            let candidates = candidates.export_top_percent(self.config.top_n_percent);
            let report = StageReport::new(clock.elapsed()).with_items(candidates.len());
            observer.on_stage_end(STAGE_TRUNCATE, &report);
            debug_event!(
                kept = candidates.len(),
                top_n_percent = self.config.top_n_percent,
                "truncated"
            );
            candidates
        };

        Keyphrases::new(words, candidates)
    }
}

impl<T: Tokenizer> Extractor<T> {
    /// Extract ranked keyphrases from `text`.
    ///
    /// Fails only when the tokenizer fails; nothing else is attempted in
    /// that case.
    pub fn extract(&self, text: &str) -> Result<Keyphrases> {
        self.extract_with_observer(text, &mut NoopObserver)
    }

    /// Extract keyphrases, reporting every stage to `observer`
    pub fn extract_with_observer(
        &self,
        text: &str,
        observer: &mut impl ExtractionObserver,
    ) -> Result<Keyphrases> {
        // Stage 1: Tokenize
        let tokens = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let tokens = self.tokenizer.tokenize(text)?;
            let report = StageReport::new(clock.elapsed()).with_items(tokens.len());
            observer.on_stage_end(STAGE_TOKENIZE, &report);
            observer.on_tokens(&tokens);
            tokens
        };

        Ok(self.extract_tokens(&tokens, observer))
    }
}

impl<T: Tokenizer + Sync> Extractor<T> {
    /// Extract keyphrases from many independent texts in parallel.
    ///
    /// Results are returned in input order; one failing text does not
    /// affect the others.
    pub fn extract_batch(&self, texts: &[&str]) -> Vec<Result<Keyphrases>> {
        texts.par_iter().map(|text| self.extract(text)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
