//! Natural Language Processing components
//!
//! This module provides the tokenizer seam plus stop-word and phrase
//! delimiter filtering.

pub mod delimiters;
pub mod stopwords;
pub mod tokenizer;
