//! Character-difference distance
//!
//! Treats each string as a bag of characters and ignores their order. The
//! raw distance is the number of characters left over once the common
//! characters are paired off: `|s| + |t| - 2 * common`.

use super::normalize::CompareConfig;
use super::Comparator;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Character multiset distance comparator
///
/// Stateless; uses the same length-sum normalization as the edit-distance
/// family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterDifference {
    config: CompareConfig,
}

impl CharacterDifference {
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

impl Comparator for CharacterDifference {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        let mut s_chars: SmallVec<[char; 64]> = s.chars().collect();
        let mut t_chars: SmallVec<[char; 64]> = t.chars().collect();

        let policy = self.config.policy();
        let len = s_chars.len() + t_chars.len();
        if len == 0 {
            return policy.empty_baseline();
        }

        s_chars.sort_unstable();
        t_chars.sort_unstable();
        let dist = len - 2 * sorted_intersection_count(&s_chars, &t_chars);
        policy.apply_length_sum(dist as f64, len as f64)
    }

    fn name(&self) -> &'static str {
        "character_difference"
    }
}

/// Number of characters `s` and `t` have in common, counting multiplicity.
#[must_use]
pub fn common_characters(s: &str, t: &str) -> usize {
    let mut s_chars: SmallVec<[char; 64]> = s.chars().collect();
    let mut t_chars: SmallVec<[char; 64]> = t.chars().collect();
    s_chars.sort_unstable();
    t_chars.sort_unstable();
    sorted_intersection_count(&s_chars, &t_chars)
}

/// Merge-scan of two sorted slices.
fn sorted_intersection_count(a: &[char], b: &[char]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}
