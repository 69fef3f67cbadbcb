//! stringmetrics - string distance and similarity metrics
//!
//! Pairwise scores for fuzzy search, deduplication and record linkage.
//!
//! # Features
//! - Edit distances (Levenshtein, Damerau-Levenshtein, LCS) with reusable
//!   scratch buffers
//! - Jaro and Jaro-Winkler
//! - Token and character overlap (Jaccard, character difference)
//! - Hamming distance
//! - Sequential and parallel batch comparison
//! - Unicode support (strings are compared character by character)
//!
//! # Example
//! ```
//! use stringmetrics::{CompareConfig, Comparator, Jaccard, Levenshtein, Tokenizer};
//!
//! let mut lev = Levenshtein::from_config(CompareConfig::new().with_normalize(false));
//! assert_eq!(lev.compare("kitten", "sitting"), 3.0);
//!
//! let mut jaccard = Jaccard::new(Tokenizer::whitespace());
//! assert_eq!(jaccard.compare("a b c", "a b c"), 1.0);
//!
//! let matrix = lev.pairwise(&["kitten", "mitten"], &["sitting"]);
//! assert_eq!(matrix, vec![vec![3.0], vec![3.0]]);
//! ```

pub mod algorithms;
pub mod error;
pub mod preprocessing;
pub mod scorer;

pub use algorithms::{
    jaro_similarity, jaro_winkler_similarity, CharacterDifference, CompareConfig, Comparator,
    DamerauLevenshtein, Hamming, Jaccard, Jaro, JaroWinkler, LcsDistance, Levenshtein,
    NormalizationPolicy, ScratchBuffer,
};
pub use error::{CompareError, ErrorKind};
pub use preprocessing::{Delimiter, Multiset, Tokenizer};
pub use scorer::Scorer;
