//! Token multiset (bag of tokens)

use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

/// Ordered multiset of string tokens, stored as a map from token to count.
///
/// A token that is present always has a count of at least one; removing its
/// last occurrence deletes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multiset {
    counts: BTreeMap<String, usize>,
}

impl Multiset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one occurrence of `token`.
    pub fn insert(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Remove one occurrence of `token`. Missing tokens are ignored.
    pub fn remove(&mut self, token: &str) {
        if let Some(count) = self.counts.get_mut(token) {
            if *count <= 1 {
                self.counts.remove(token);
            } else {
                *count -= 1;
            }
        }
    }

    /// Occurrences of `token` (0 when absent).
    #[must_use]
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Size of the intersection of two bags: per shared token, the smaller
    /// of the two counts.
    #[must_use]
    pub fn intersection_count(&self, other: &Multiset) -> usize {
        let (small, large) = if self.counts.len() < other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .filter_map(|(token, &count)| large.counts.get(token).map(|&c| c.min(count)))
            .sum()
    }

    /// Size of the union of two bags.
    #[must_use]
    pub fn union_count(&self, other: &Multiset) -> usize {
        self.total() + other.total() - self.intersection_count(other)
    }

    /// Total number of tokens, including multiplicity.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct tokens in order.
    #[must_use]
    pub fn elements(&self) -> BTreeSet<String> {
        self.counts.keys().cloned().collect()
    }

    /// Iterate `(token, count)` pairs in token order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.counts.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Multiset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut result = Multiset::new();
        result.extend(iter);
        result
    }
}

impl<S: Into<String>> Extend<S> for Multiset {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl<'a> IntoIterator for &'a Multiset {
    type Item = (&'a String, &'a usize);
    type IntoIter = btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
