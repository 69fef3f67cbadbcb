//! Name-based selection of a comparator
//!
//! Outer layers (bindings, command-line tools) pick a metric by name. A
//! [`Scorer`] holds any of the crate's comparators and forwards
//! [`Comparator`] calls to it, so the batch operations work unchanged.

use crate::algorithms::{
    CharacterDifference, CompareConfig, Comparator, DamerauLevenshtein, Hamming, Jaccard, Jaro,
    JaroWinkler, LcsDistance, Levenshtein,
};
use crate::error::CompareError;
use crate::preprocessing::Tokenizer;
use tracing::{debug, warn};

const NAMES: &[&str] = &[
    "levenshtein",
    "damerau_levenshtein",
    "lcs",
    "jaro",
    "jaro_winkler",
    "hamming",
    "character_difference",
    "jaccard",
];

/// One of the crate's comparators
#[derive(Debug, Clone)]
pub enum Scorer {
    Levenshtein(Levenshtein),
    DamerauLevenshtein(DamerauLevenshtein),
    Lcs(LcsDistance),
    Jaro(Jaro),
    JaroWinkler(JaroWinkler),
    Hamming(Hamming),
    CharacterDifference(CharacterDifference),
    Jaccard(Jaccard),
}

impl Scorer {
    /// Build the comparator registered under `name`.
    ///
    /// `damerau` is accepted as an alias of `damerau_levenshtein`. Jaccard
    /// uses the whitespace tokenizer; build [`Jaccard`] directly for another
    /// one.
    pub fn from_name(name: &str, config: CompareConfig) -> Result<Self, CompareError> {
        let scorer = match name {
            "levenshtein" => Scorer::Levenshtein(Levenshtein::from_config(config)),
            "damerau_levenshtein" | "damerau" => {
                Scorer::DamerauLevenshtein(DamerauLevenshtein::from_config(config))
            }
            "lcs" => Scorer::Lcs(LcsDistance::from_config(config)),
            "jaro" => Scorer::Jaro(Jaro::from_config(config)),
            "jaro_winkler" => Scorer::JaroWinkler(JaroWinkler::from_config(config)),
            "hamming" => Scorer::Hamming(Hamming::from_config(config)),
            "character_difference" => {
                Scorer::CharacterDifference(CharacterDifference::from_config(config))
            }
            "jaccard" => Scorer::Jaccard(Jaccard::from_config(Tokenizer::whitespace(), config)),
            _ => {
                warn!(name, "unknown scorer requested");
                return Err(CompareError::UnknownAlgorithm(name.to_string()));
            }
        };
        debug!(name = scorer.name(), ?config, "resolved scorer");
        Ok(scorer)
    }

    /// Names accepted by [`from_name`](Self::from_name), aliases excluded.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        NAMES
    }
}

impl Comparator for Scorer {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        match self {
            Scorer::Levenshtein(c) => c.compare(s, t),
            Scorer::DamerauLevenshtein(c) => c.compare(s, t),
            Scorer::Lcs(c) => c.compare(s, t),
            Scorer::Jaro(c) => c.compare(s, t),
            Scorer::JaroWinkler(c) => c.compare(s, t),
            Scorer::Hamming(c) => c.compare(s, t),
            Scorer::CharacterDifference(c) => c.compare(s, t),
            Scorer::Jaccard(c) => c.compare(s, t),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Scorer::Levenshtein(c) => c.name(),
            Scorer::DamerauLevenshtein(c) => c.name(),
            Scorer::Lcs(c) => c.name(),
            Scorer::Jaro(c) => c.name(),
            Scorer::JaroWinkler(c) => c.name(),
            Scorer::Hamming(c) => c.name(),
            Scorer::CharacterDifference(c) => c.name(),
            Scorer::Jaccard(c) => c.name(),
        }
    }
}

macro_rules! impl_from_comparator {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scorer {
                fn from(comparator: $ty) -> Self {
                    Scorer::$variant(comparator)
                }
            }
        )*
    };
}

impl_from_comparator! {
    Levenshtein => Levenshtein,
    DamerauLevenshtein => DamerauLevenshtein,
    Lcs => LcsDistance,
    Jaro => Jaro,
    JaroWinkler => JaroWinkler,
    Hamming => Hamming,
    CharacterDifference => CharacterDifference,
    Jaccard => Jaccard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_every_name_resolves() {
        for &name in Scorer::names() {
            let scorer = Scorer::from_name(name, CompareConfig::default()).unwrap();
            assert_eq!(scorer.name(), name);
        }
    }

    #[test]
    fn test_alias() {
        let scorer = Scorer::from_name("damerau", CompareConfig::default()).unwrap();
        assert_eq!(scorer.name(), "damerau_levenshtein");
    }

    #[test]
    fn test_unknown_name() {
        let err = Scorer::from_name("soundex", CompareConfig::default()).unwrap_err();
        assert_eq!(err, CompareError::UnknownAlgorithm("soundex".into()));
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_scorer_delegates() {
        let config = CompareConfig::new().with_normalize(false);
        let mut scorer = Scorer::from_name("levenshtein", config).unwrap();
        assert_eq!(scorer.compare("kitten", "sitting"), 3.0);

        let mut scorer = Scorer::from_name("damerau_levenshtein", config).unwrap();
        assert_eq!(scorer.elementwise(&["ca"], &["ac"]).unwrap(), vec![1.0]);

        let mut scorer = Scorer::from(Jaccard::new(Tokenizer::ngram(1)));
        assert_eq!(scorer.compare("ab", "ba"), 1.0);
    }

    #[test]
    fn test_identical_strings_across_scorers() {
        let config = CompareConfig::new().with_similarity(true);
        for &name in Scorer::names() {
            let mut scorer = Scorer::from_name(name, config).unwrap();
            assert_eq!(scorer.compare("record linkage", "record linkage"), 1.0, "{name}");
        }
    }
}
