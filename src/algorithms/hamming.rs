//! Hamming distance implementation
//!
//! Counts positions where characters differ. Strings of different length are
//! accepted: every position past the end of the shorter string counts as a
//! mismatch.
//!
//! Normalization uses the length of the longest string: the unnormalized
//! similarity is `len - d`, and both distance and similarity are divided by
//! `len` when normalized.

use super::normalize::CompareConfig;
use super::Comparator;

/// Hamming distance comparator
///
/// Stateless calculator - `buffer_capacity` is ignored.
///
/// # Complexity
/// - Time: O(n) where n is the longer string length
/// - Space: O(1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming {
    config: CompareConfig,
}

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: CompareConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> CompareConfig {
        self.config
    }
}

impl Comparator for Hamming {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        let s_len = s.chars().count();
        let t_len = t.chars().count();
        let policy = self.config.policy();

        let len = s_len.max(t_len);
        if len == 0 {
            return policy.empty_baseline();
        }

        policy.apply_length_max(hamming_distance(s, t) as f64, len as f64)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Positional mismatches plus the difference in length.
#[must_use]
pub fn hamming_distance(s: &str, t: &str) -> usize {
    let mut s_chars = s.chars();
    let mut t_chars = t.chars();
    let mut distance = 0;

    loop {
        match (s_chars.next(), t_chars.next()) {
            (Some(a), Some(b)) => distance += usize::from(a != b),
            (Some(_), None) | (None, Some(_)) => distance += 1,
            (None, None) => return distance,
        }
    }
}
