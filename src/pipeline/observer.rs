//! Pipeline observer: hooks for profiling and debugging an extraction.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic, e.g. to time stages or to capture intermediate artifacts.

use std::time::{Duration, Instant};

use crate::phrase::builder::CandidateSet;
use crate::types::Token;
use crate::words::registry::ScoredWords;

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_CANDIDATES: &str = "candidates";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SORT: &str = "sort";
pub const STAGE_TRUNCATE: &str = "truncate";

/// Every stage, in execution order
pub const STAGES: [&str; 5] = [
    STAGE_TOKENIZE,
    STAGE_CANDIDATES,
    STAGE_SCORE,
    STAGE_SORT,
    STAGE_TRUNCATE,
];

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        StageClock(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageReport {
    /// Time spent in the stage
    pub elapsed: Duration,
    /// Number of items the stage produced (tokens, candidates, words, ...)
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach an item count
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }
}

/// Receives callbacks while an extraction runs.
///
/// Every method has an empty default so implementors override only what
/// they need.
pub trait ExtractionObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The analyzer's output, before any filtering
    fn on_tokens(&mut self, _tokens: &[Token]) {}

    /// Candidates and raw word counters, before scoring
    fn on_candidates(&mut self, _set: &CandidateSet) {}

    /// Final word scores
    fn on_scored(&mut self, _words: &ScoredWords) {}
}

/// Observer that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}

/// Observer that records the report of every finished stage
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in completion order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a given stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl ExtractionObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
