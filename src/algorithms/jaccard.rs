//! Jaccard similarity over token multisets
//!
//! `|A ∩ B| / |A ∪ B|` where `A` and `B` are the token bags produced by the
//! configured [`Tokenizer`]. Counts respect multiplicity.
//!
//! The result is always the raw overlap ratio: the `normalize` and
//! `similarity` configuration fields are stored but do not change it.

use super::normalize::CompareConfig;
use super::Comparator;
use crate::preprocessing::{Multiset, Tokenizer};

/// Jaccard comparator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Jaccard {
    tokenizer: Tokenizer,
    config: CompareConfig,
}

impl Jaccard {
    #[must_use]
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self::from_config(tokenizer, CompareConfig::default())
    }

    #[must_use]
    pub fn from_config(tokenizer: Tokenizer, config: CompareConfig) -> Self {
        Self { tokenizer, config }
    }

    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[must_use]
    pub fn config(&self) -> CompareConfig {
        self.config
    }
}

impl Comparator for Jaccard {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        let s_tokens = self.tokenizer.tokenize(s);
        let t_tokens = self.tokenizer.tokenize(t);
        multiset_jaccard(&s_tokens, &t_tokens)
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Jaccard ratio of two bags; two empty bags are identical and score 1.0.
#[must_use]
pub fn multiset_jaccard(a: &Multiset, b: &Multiset) -> f64 {
    let union = a.union_count(b);
    if union == 0 {
        return 1.0;
    }
    a.intersection_count(b) as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_jaccard() {
        let mut jaccard = Jaccard::new(Tokenizer::whitespace());
        assert_eq!(jaccard.compare("a b c", "a b c"), 1.0);
        assert_eq!(jaccard.compare("a b", "c d"), 0.0);
        assert_eq!(jaccard.compare("a b c", "a b d"), 0.5);
    }

    #[test]
    fn test_multiplicity_counts() {
        let mut jaccard = Jaccard::new(Tokenizer::whitespace());
        // intersection {a, a}, union {a, a, a, b}
        assert_eq!(jaccard.compare("a a a b", "a a"), 0.5);
    }

    #[test]
    fn test_ngram_jaccard() {
        let mut jaccard = Jaccard::new(Tokenizer::ngram(2));
        // {ni, ig, gh, ht} vs {na, ac, ch, ht}: 1 shared of 7
        let score = jaccard.compare("night", "nacht");
        assert!((score - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_configuration_does_not_change_value() {
        let tokenizer = Tokenizer::delim(",").unwrap();
        let mut plain = Jaccard::new(tokenizer.clone());
        for config in [
            CompareConfig::new().with_similarity(true),
            CompareConfig::new().with_normalize(false),
            CompareConfig::new().with_normalize(false).with_similarity(true),
        ] {
            let mut configured = Jaccard::from_config(tokenizer.clone(), config);
            assert_eq!(
                configured.compare("x,y,z", "y,z,w"),
                plain.compare("x,y,z", "y,z,w")
            );
        }
        assert_eq!(plain.compare("x,y,z", "y,z,w"), 0.5);
    }

    #[test]
    fn test_empty_token_bags() {
        let mut jaccard = Jaccard::new(Tokenizer::whitespace());
        assert_eq!(jaccard.compare("", ""), 1.0);
        assert_eq!(jaccard.compare("   ", ""), 1.0);
        assert_eq!(jaccard.compare("a", ""), 0.0);
    }
}
