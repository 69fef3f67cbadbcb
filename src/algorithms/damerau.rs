//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with transposition of adjacent characters.
//! Particularly useful for typo detection where letter swaps are common.
//!
//! This is the "restricted" variant (optimal string alignment): a substring
//! is never edited again after being transposed. The transposition check
//! looks two rows back, so three rolling rows are kept and indexed modulo 3.

use super::buffer::ScratchBuffer;
use super::normalize::CompareConfig;
use super::Comparator;
use smallvec::SmallVec;

const ROWS: usize = 3;

/// Damerau-Levenshtein distance comparator
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(m), three rows of the first string's length
#[derive(Debug, Clone)]
pub struct DamerauLevenshtein {
    config: CompareConfig,
    buffer: ScratchBuffer,
}

impl Default for DamerauLevenshtein {
    fn default() -> Self {
        Self::from_config(CompareConfig::default())
    }
}

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: CompareConfig) -> Self {
        Self {
            config,
            buffer: ScratchBuffer::new(ROWS, config.buffer_capacity),
        }
    }

    #[must_use]
    pub fn config(&self) -> CompareConfig {
        self.config
    }

    /// Current width of each scratch row.
    #[must_use]
    pub fn buffer_capacity(&self) -> usize {
        self.buffer.width()
    }

    /// Raw restricted Damerau-Levenshtein distance.
    pub fn distance(&mut self, s: &str, t: &str) -> usize {
        let s_chars: SmallVec<[char; 64]> = s.chars().collect();
        let t_chars: SmallVec<[char; 64]> = t.chars().collect();
        self.distance_chars(&s_chars, &t_chars)
    }

    fn distance_chars(&mut self, s: &[char], t: &[char]) -> usize {
        let m = s.len();
        let n = t.len();
        let dmat = self.buffer.reserve(m + 1, "damerau_levenshtein");
        let w = dmat.len() / ROWS;

        for (i, cell) in dmat[..=m].iter_mut().enumerate() {
            *cell = i;
        }

        for j in 1..=n {
            let cur = (j % ROWS) * w;
            let prev = ((j - 1) % ROWS) * w;
            let prev2 = ((j + 1) % ROWS) * w; // (j - 2) mod 3

            dmat[prev] = j - 1;
            dmat[cur] = j;

            for i in 1..=m {
                let cost = usize::from(s[i - 1] != t[j - 1]);
                let mut cell = (dmat[cur + i - 1] + 1)
                    .min(dmat[prev + i] + 1)
                    .min(dmat[prev + i - 1] + cost);

                if i > 1 && j > 1 && s[i - 1] == t[j - 2] && s[i - 2] == t[j - 1] {
                    cell = cell.min(dmat[prev2 + i - 2] + 1);
                }

                dmat[cur + i] = cell;
            }
        }

        dmat[(n % ROWS) * w + m]
    }
}

impl Comparator for DamerauLevenshtein {
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
        "damerau_levenshtein"
    }
}
