//! Word statistics
//!
//! This module provides the word registry shared by all phrase candidates
//! and the formulas used to score its words.

pub mod registry;
pub mod scoring;
