//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! Matching is greedy: every character of the first string binds the first
//! unused equal character of the second string strictly inside the window
//! `max(1, floor(max(m, n) / 2) - 1)`. The scan order (first string outer,
//! second string inner) is part of the result.
//!
//! # Performance Optimization
//!
//! ASCII inputs are compared directly as bytes; everything else is first
//! collected into `char` arrays.

use super::normalize::CompareConfig;
use super::Comparator;
use smallvec::SmallVec;

/// Prefix scaling factor used by Jaro-Winkler
pub const PREFIX_SCALE: f64 = 0.1;

/// Longest common prefix rewarded by Jaro-Winkler
pub const MAX_PREFIX_LENGTH: usize = 4;

// ============================================================================
// Public API
// ============================================================================

/// Jaro comparator
///
/// Stateless; `normalize` and `buffer_capacity` are ignored because the
/// score is already bounded to `[0, 1]`.
///
/// # Complexity
/// - Time: O(m*w) where w is the match window
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro {
    config: CompareConfig,
}

impl Jaro {
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

impl Comparator for Jaro {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        let sim = jaro_similarity(s, t);
        if self.config.similarity {
            sim
        } else {
            1.0 - sim
        }
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Jaro-Winkler comparator
///
/// Boosts the Jaro similarity by `ell * 0.1 * (1 - jaro)` where `ell` is the
/// length of the common prefix, capped at four characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JaroWinkler {
    config: CompareConfig,
}

impl JaroWinkler {
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

impl Comparator for JaroWinkler {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        let sim = jaro_winkler_similarity(s, t);
        if self.config.similarity {
            sim
        } else {
            1.0 - sim
        }
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0; two empty strings score 1.0.
#[inline]
#[must_use]
pub fn jaro_similarity(s: &str, t: &str) -> f64 {
    if s.is_ascii() && t.is_ascii() {
        return jaro_generic(s.as_bytes(), t.as_bytes());
    }

    let s_chars: SmallVec<[char; 64]> = s.chars().collect();
    let t_chars: SmallVec<[char; 64]> = t.chars().collect();
    jaro_generic(&s_chars, &t_chars)
}

/// Calculate Jaro-Winkler similarity with the fixed prefix scale of 0.1.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(s: &str, t: &str) -> f64 {
    let prefix_len = s
        .chars()
        .zip(t.chars())
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(sc, tc)| sc == tc)
        .count();

    let sim = jaro_similarity(s, t);
    sim + prefix_len as f64 * PREFIX_SCALE * (1.0 - sim)
}

/// Jaro over any comparable slice (bytes for ASCII, chars otherwise)
fn jaro_generic<T: PartialEq>(s: &[T], t: &[T]) -> f64 {
    let s_len = s.len();
    let t_len = t.len();

    if s_len + t_len == 0 {
        return 1.0;
    }

    let window = (s_len.max(t_len) / 2).saturating_sub(1).max(1);

    let mut s_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; s_len];
    let mut t_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; t_len];
    let mut matches = 0usize;

    // |i - j| < window
    for i in 0..s_len {
        let start = (i + 1).saturating_sub(window);
        let end = (i + window).min(t_len);

        for j in start..end {
            if t_matched[j] || s[i] != t[j] {
                continue;
            }
            s_matched[i] = true;
            t_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Count transpositions
    let mut k = 0usize;
    let mut transpositions = 0usize;
    for i in 0..s_len {
        if !s_matched[i] {
            continue;
        }
        while !t_matched[k] {
            k += 1;
        }
        if s[i] != t[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let half_transpositions = transpositions as f64 / 2.0;
    (m / s_len as f64 + m / t_len as f64 + (m - half_transpositions) / m) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_jaro_basic() {
        assert!(approx_eq(jaro_similarity("", ""), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "abc"), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "xyz"), 0.0));
        assert_eq!(jaro_similarity("abc", ""), 0.0);
        assert_eq!(jaro_similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_jaro_examples() {
        // Classic examples
        assert!(approx_eq(jaro_similarity("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro_similarity("DWAYNE", "DUANE"), 0.822));
        assert!(approx_eq(jaro_similarity("DIXON", "DICKSONX"), 0.767));
    }

    #[test]
    fn test_window_is_strict() {
        // window = 1 for length 4, so only aligned positions can match
        assert!(approx_eq(jaro_similarity("abcd", "bacd"), 2.0 / 3.0));
        assert_eq!(jaro_similarity("ab", "ba"), 0.0);
    }

    #[test]
    fn test_jaro_winkler_boost() {
        // Jaro-Winkler should boost strings with common prefix
        let jaro = jaro_similarity("MARTHA", "MARHTA");
        let jaro_winkler = jaro_winkler_similarity("MARTHA", "MARHTA");
        assert!(jaro_winkler > jaro);
        assert!(approx_eq(jaro_winkler, 0.961));
        assert!(approx_eq(jaro_winkler_similarity("DIXON", "DICKSONX"), 0.813));
    }

    #[test]
    fn test_jaro_winkler_prefix_capped_at_four() {
        let jaro = jaro_similarity("abcdefx", "abcdefy");
        let expected = jaro + 4.0 * PREFIX_SCALE * (1.0 - jaro);
        assert!((jaro_winkler_similarity("abcdefx", "abcdefy") - expected).abs() < 1e-12);
        assert_eq!(jaro_winkler_similarity("", ""), 1.0);
    }

    #[test]
    fn test_unicode_path() {
        // é vs e: three of four aligned characters match
        let sim = jaro_similarity("café", "cafe");
        assert!(approx_eq(sim, (0.75 + 0.75 + 1.0) / 3.0));
        assert!(approx_eq(jaro_similarity("日本語", "日本語"), 1.0));
    }

    #[test]
    fn test_comparator_modes() {
        let mut jaro = Jaro::new();
        assert_eq!(jaro.compare("abc", "abc"), 0.0);
        assert_eq!(jaro.compare("", ""), 0.0);
        assert_eq!(jaro.compare("abc", "xyz"), 1.0);

        let mut jaro_sim = Jaro::from_config(CompareConfig::new().with_similarity(true));
        assert_eq!(jaro_sim.compare("", ""), 1.0);
        assert!(approx_eq(jaro_sim.compare("MARTHA", "MARHTA"), 0.944));

        let mut jw = JaroWinkler::new();
        assert!(approx_eq(jw.compare("MARTHA", "MARHTA"), 1.0 - 0.961));
        let mut jw_sim = JaroWinkler::from_config(CompareConfig::new().with_similarity(true));
        assert!(approx_eq(jw_sim.compare("MARTHA", "MARHTA"), 0.961));
    }

    #[test]
    fn test_normalize_flag_is_ignored() {
        let mut raw = Jaro::from_config(CompareConfig::new().with_normalize(false));
        let mut normalized = Jaro::new();
        assert_eq!(raw.compare("DWAYNE", "DUANE"), normalized.compare("DWAYNE", "DUANE"));
    }
}
