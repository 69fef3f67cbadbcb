//! Longest Common Subsequence (LCS) distance
//!
//! Counts the characters that are *not* part of a common subsequence:
//! `|s| + |t| - 2 * L`. `L` comes from a single-row recurrence: on a
//! mismatch the running value is the larger of the carried value and the
//! stored row value, on a match it is the diagonal predecessor plus one.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(m), one reusable row

use super::buffer::ScratchBuffer;
use super::normalize::CompareConfig;
use super::Comparator;
use smallvec::SmallVec;

/// LCS-based distance comparator
#[derive(Debug, Clone)]
pub struct LcsDistance {
    config: CompareConfig,
    buffer: ScratchBuffer,
}

impl Default for LcsDistance {
    fn default() -> Self {
        Self::from_config(CompareConfig::default())
    }
}

impl LcsDistance {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: CompareConfig) -> Self {
        Self {
            config,
            buffer: ScratchBuffer::new(1, config.buffer_capacity),
        }
    }

    #[must_use]
    pub fn config(&self) -> CompareConfig {
        self.config
    }

    #[must_use]
    pub fn buffer_capacity(&self) -> usize {
        self.buffer.width()
    }

    /// The common-run length `L` used by the distance.
    pub fn common_length(&mut self, s: &str, t: &str) -> usize {
        let s_chars: SmallVec<[char; 64]> = s.chars().collect();
        let t_chars: SmallVec<[char; 64]> = t.chars().collect();
        self.common_length_chars(&s_chars, &t_chars)
    }

    fn common_length_chars(&mut self, s: &[char], t: &[char]) -> usize {
        let m = s.len();
        let row = self.buffer.reserve(m + 1, "lcs");
        row[..=m].fill(0);

        let mut p = 0;
        for &tc in t {
            let mut diag = 0;
            p = 0;
            for i in 1..=m {
                if s[i - 1] != tc {
                    p = p.max(row[i]);
                } else {
                    p = diag + 1;
                }
                diag = row[i];
                row[i] = p;
            }
        }

        p
    }
}

impl Comparator for LcsDistance {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        let s_chars: SmallVec<[char; 64]> = s.chars().collect();
        let t_chars: SmallVec<[char; 64]> = t.chars().collect();

        let policy = self.config.policy();
        let len = s_chars.len() + t_chars.len();
        if len == 0 {
            return policy.empty_baseline();
        }

        let common = self.common_length_chars(&s_chars, &t_chars);
        let dist = len - 2 * common;
        policy.apply_length_sum(dist as f64, len as f64)
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> LcsDistance {
        LcsDistance::from_config(CompareConfig::new().with_normalize(false))
    }

    // Golden values pinned against the recurrence as implemented.
    #[test]
    fn test_common_length_golden() {
        let mut lcs = raw();
        assert_eq!(lcs.common_length("", ""), 0);
        assert_eq!(lcs.common_length("abc", ""), 0);
        assert_eq!(lcs.common_length("", "abc"), 0);
        assert_eq!(lcs.common_length("abc", "abc"), 3);
        assert_eq!(lcs.common_length("abc", "def"), 0);
        assert_eq!(lcs.common_length("ABCDGH", "AEDFHR"), 3);
        assert_eq!(lcs.common_length("AGGTAB", "GXTXAYB"), 4);
        assert_eq!(lcs.common_length("kitten", "sitting"), 4);
    }

    #[test]
    fn test_distance_golden() {
        let mut lcs = raw();
        assert_eq!(lcs.compare("ABCDGH", "AEDFHR"), 6.0);
        assert_eq!(lcs.compare("AGGTAB", "GXTXAYB"), 5.0);
        assert_eq!(lcs.compare("kitten", "sitting"), 5.0);
        assert_eq!(lcs.compare("abc", ""), 3.0);
        assert_eq!(lcs.compare("abc", "abc"), 0.0);
    }

    #[test]
    fn test_distance_normalized_golden() {
        // kitten/sitting: len 13, distance 5 -> 10 / 18
        let dist = LcsDistance::new().compare("kitten", "sitting");
        assert!((dist - 10.0 / 18.0).abs() < 1e-12);

        let mut sim = LcsDistance::from_config(CompareConfig::new().with_similarity(true));
        // sim = 4, normalized 4 / 9
        assert!((sim.compare("kitten", "sitting") - 4.0 / 9.0).abs() < 1e-12);
        assert_eq!(sim.compare("abc", "abc"), 1.0);
    }

    #[test]
    fn test_empty_inputs_return_baseline() {
        assert_eq!(LcsDistance::new().compare("", ""), 0.0);
        let mut sim = LcsDistance::from_config(CompareConfig::new().with_similarity(true));
        assert_eq!(sim.compare("", ""), 1.0);
    }

    #[test]
    fn test_stale_buffer_contents_do_not_leak() {
        let mut lcs = raw();
        lcs.compare("aaaaaaaaaa", "aaaaaaaaaa");
        assert_eq!(lcs.common_length("ab", "cd"), 0);
        assert_eq!(lcs.common_length("abc", "bxc"), 2);
    }
}
