//! Word scoring formulas
//!
//! RAKE scores every word from two counters gathered while candidates are
//! built: how often the word occurs and how many words it co-occurs with
//! (its degree).

use serde::{Deserialize, Serialize};

/// Selectable word scoring formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WordScoring {
    /// `degree`: favors words tied to many co-occurring words; surfaces
    /// short, well-connected phrases.
    #[serde(rename = "deg", alias = "degree")]
    Deg,
    /// `frequency`: favors words that simply occur often.
    #[serde(rename = "freq", alias = "frequency")]
    Freq,
    /// `degree / frequency`: the classical RAKE ratio; favors words that
    /// appear in fewer, longer phrases.
    #[default]
    #[serde(rename = "degToFreq", alias = "deg_to_freq")]
    DegToFreq,
}

impl WordScoring {
    /// Score a word from its accumulated counters
    ///
    /// `frequency` is never zero for a registered word; a zero frequency
    /// under [`WordScoring::DegToFreq`] scores `0.0` instead of dividing.
    pub fn score(self, frequency: usize, degree: usize) -> f64 {
        match self {
            WordScoring::Deg => degree as f64,
            WordScoring::Freq => frequency as f64,
            WordScoring::DegToFreq => {
                if frequency == 0 {
                    return 0.0;
                }
                degree as f64 / frequency as f64
            }
        }
    }

    /// The name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            WordScoring::Deg => "deg",
            WordScoring::Freq => "freq",
            WordScoring::DegToFreq => "degToFreq",
        }
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "deg" | "degree" => WordScoring::Deg,
            "freq" | "frequency" => WordScoring::Freq,
            "degtofreq" | "deg_to_freq" => WordScoring::DegToFreq,
            _ => WordScoring::DegToFreq,
        }
    }
}

impl std::str::FromStr for WordScoring {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(WordScoring::parse(value))
    }
}

impl std::fmt::Display for WordScoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formulas() {
        assert_eq!(WordScoring::Deg.score(2, 6), 6.0);
        assert_eq!(WordScoring::Freq.score(2, 6), 2.0);
        assert_eq!(WordScoring::DegToFreq.score(2, 3), 1.5);
    }

    #[test]
    fn test_zero_frequency_does_not_divide() {
        assert_eq!(WordScoring::DegToFreq.score(0, 0), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("deg".parse::<WordScoring>().unwrap(), WordScoring::Deg);
        assert_eq!("Frequency".parse::<WordScoring>().unwrap(), WordScoring::Freq);
        assert_eq!("degToFreq".parse::<WordScoring>().unwrap(), WordScoring::DegToFreq);
        assert_eq!("unknown".parse::<WordScoring>().unwrap(), WordScoring::DegToFreq);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WordScoring::DegToFreq).unwrap();
        assert_eq!(json, "\"degToFreq\"");

        let scoring: WordScoring = serde_json::from_str("\"freq\"").unwrap();
        assert_eq!(scoring, WordScoring::Freq);
        assert_eq!(WordScoring::Deg.to_string(), "deg");
    }

    #[test]
    fn test_serde_accepts_parse_aliases() {
        for (name, expected) in [
            ("degree", WordScoring::Deg),
            ("frequency", WordScoring::Freq),
            ("deg_to_freq", WordScoring::DegToFreq),
        ] {
            let from_json: WordScoring = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(from_json, expected);
            assert_eq!(name.parse::<WordScoring>().unwrap(), expected);
        }
    }
}
