//! Levenshtein (edit) distance implementation
//!
//! Unit-cost insertions, deletions and substitutions, computed with a single
//! rolling row that lives in the comparator and is reused across calls.
//!
//! # Complexity
//! - Time: O(m*n) where m and n are string lengths
//! - Space: O(m) for the row, m being the length of the first string

use super::buffer::ScratchBuffer;
use super::normalize::CompareConfig;
use super::Comparator;
use smallvec::SmallVec;

/// Levenshtein distance comparator
///
/// Length-sum normalization: with `len = |s| + |t|` the normalized distance
/// is `2d / (len + d)`.
///
/// ```
/// use stringmetrics::{CompareConfig, Comparator, Levenshtein};
///
/// let mut lev = Levenshtein::from_config(CompareConfig::new().with_normalize(false));
/// assert_eq!(lev.compare("kitten", "sitting"), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct Levenshtein {
    config: CompareConfig,
    buffer: ScratchBuffer,
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self::from_config(CompareConfig::default())
    }
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration
    #[must_use]
    pub fn from_config(config: CompareConfig) -> Self {
        Self {
            config,
            buffer: ScratchBuffer::new(1, config.buffer_capacity),
        }
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> CompareConfig {
        self.config
    }

    /// Current width of the scratch row.
    #[must_use]
    pub fn buffer_capacity(&self) -> usize {
        self.buffer.width()
    }

    /// Raw edit distance between `s` and `t`.
    pub fn distance(&mut self, s: &str, t: &str) -> usize {
        let s_chars: SmallVec<[char; 64]> = s.chars().collect();
        let t_chars: SmallVec<[char; 64]> = t.chars().collect();
        self.distance_chars(&s_chars, &t_chars)
    }

    fn distance_chars(&mut self, s: &[char], t: &[char]) -> usize {
        let m = s.len();
        let row = self.buffer.reserve(m + 1, "levenshtein");

        for (i, cell) in row[..=m].iter_mut().enumerate() {
            *cell = i;
        }

        let mut p = m;
        for (j, &tc) in t.iter().enumerate() {
            // `diag` holds row[i - 1] from the previous column
            let mut diag = j;
            p = j + 1;
            for i in 1..=m {
                let cost = usize::from(s[i - 1] != tc);
                p = (p + 1).min(row[i] + 1).min(diag + cost);
                diag = row[i];
                row[i] = p;
            }
        }

        p
    }
}

impl Comparator for Levenshtein {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        let s_chars: SmallVec<[char; 64]> = s.chars().collect();
        let t_chars: SmallVec<[char; 64]> = t.chars().collect();

        let policy = self.config.policy();
        let len = s_chars.len() + t_chars.len();
        if len == 0 {
            return policy.empty_baseline();
        }

        let dist = self.distance_chars(&s_chars, &t_chars);
        policy.apply_length_sum(dist as f64, len as f64)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}
