//! # rapid_rake_ja
//!
//! RAKE (Rapid Automatic Keyword Extraction) for Japanese and other
//! languages written without spaces between words.
//!
//! A morphological analyzer splits the text into tokens. Maximal runs of
//! content words, bounded by stop words, phrase delimiters and (optionally)
//! disallowed parts of speech, become phrase candidates. Every word is
//! scored from its frequency and degree, every candidate scores the sum of
//! its words, and the best candidates are returned.
//!
//! ## Quick Start
//!
//! ```
//! use rapid_rake_ja::{pos, Extractor, Result, Token};
//!
//! // Any `Fn(&str) -> Result<Vec<Token>>` works as a tokenizer
//! let analyzer = |_: &str| -> Result<Vec<Token>> {
//!     Ok(vec![
//!         Token::new("天気", pos::NOUN),
//!         Token::new("予報", pos::NOUN),
//!         Token::new("。", pos::SYMBOL),
//!     ])
//! };
//!
//! let extractor = Extractor::new(analyzer);
//! let keyphrases = extractor.extract("天気予報。")?;
//! assert!(keyphrases.is_empty()); // a single candidate is below the default 33%
//! # Ok::<(), rapid_rake_ja::RakeError>(())
//! ```

#[macro_use]
mod macros;

pub mod errors;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod types;
pub mod words;

pub use errors::{RakeError, Result};
pub use nlp::delimiters::{PhraseDelimiters, DEFAULT_PHRASE_DELIMITERS};
pub use nlp::stopwords::{StopwordFilter, DEFAULT_JAPANESE_STOPWORDS};
#[cfg(feature = "ipadic")]
pub use nlp::tokenizer::IpadicTokenizer;
pub use nlp::tokenizer::{ScriptTokenizer, Tokenizer};
pub use phrase::builder::{CandidateBuilder, CandidateSet, TokenClass};
pub use pipeline::artifacts::{Keyphrase, Keyphrases};
pub use pipeline::observer::{
    ExtractionObserver, NoopObserver, StageReport, StageTimingObserver,
};
pub use pipeline::options::ExtractorOptions;
pub use pipeline::runner::Extractor;
pub use types::{pos, Phrase, RakeConfig, Token, DEFAULT_TOP_N_PERCENT};
pub use words::registry::{ScoredWords, Word, WordId, WordRegistry};
pub use words::scoring::WordScoring;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
