//! Extraction pipeline
//!
//! This module provides the extractor that runs the RAKE stages in order,
//! its partial options, the result artifacts, and observer hooks.

pub mod artifacts;
pub mod observer;
pub mod options;
pub mod runner;
