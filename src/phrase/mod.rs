//! Phrase extraction components
//!
//! This module provides phrase candidate construction from a token stream
//! and the de-duplicated, rankable candidate collection.

pub mod builder;
pub mod candidate;
