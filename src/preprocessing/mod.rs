//! Tokenization into token multisets, used by the set-overlap metrics.

pub mod multiset;
pub mod tokenizer;

pub use multiset::Multiset;
pub use tokenizer::{Delimiter, Tokenizer};
