//! Comparator configuration and score normalization
//!
//! Every length-based metric computes a raw integer distance and then passes
//! it through a [`NormalizationPolicy`] to produce the configured distance or
//! similarity.

use serde::{Deserialize, Serialize};

/// Default width of the scratch rows held by edit-distance comparators
pub const DEFAULT_BUFFER_CAPACITY: usize = 100;

/// Final transform applied to a raw distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationPolicy {
    /// Rescale the result into `[0, 1]`
    pub normalize: bool,
    /// Return a similarity instead of a distance
    pub similarity: bool,
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self {
            normalize: true,
            similarity: false,
        }
    }
}

impl NormalizationPolicy {
    /// Value returned when both inputs are empty.
    #[inline]
    #[must_use]
    pub fn empty_baseline(&self) -> f64 {
        if self.similarity {
            1.0
        } else {
            0.0
        }
    }

    /// Transform for metrics whose length is `|s| + |t|`.
    ///
    /// Distance: `2d / (len + d)` when normalized.
    /// Similarity: `sim = (len - d) / 2`, then `sim / (len - sim)` when normalized.
    ///
    /// `len` must be non-zero; callers return [`empty_baseline`](Self::empty_baseline) first.
    #[inline]
    #[must_use]
    pub fn apply_length_sum(&self, dist: f64, len: f64) -> f64 {
        if self.similarity {
            let sim = (len - dist) / 2.0;
            if self.normalize {
                sim / (len - sim)
            } else {
                sim
            }
        } else if self.normalize {
            2.0 * dist / (len + dist)
        } else {
            dist
        }
    }

    /// Transform for metrics whose length is `max(|s|, |t|)`.
    ///
    /// Similarity is `len - d`; the normalized result is divided by `len`.
    #[inline]
    #[must_use]
    pub fn apply_length_max(&self, dist: f64, len: f64) -> f64 {
        let result = if self.similarity { len - dist } else { dist };
        if self.normalize {
            result / len
        } else {
            result
        }
    }
}

/// Configuration shared by all comparators
///
/// Metrics that have no scratch buffer ignore `buffer_capacity`; the Jaro
/// family and Jaccard also ignore `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Rescale results into `[0, 1]` (default `true`)
    pub normalize: bool,
    /// Return similarities instead of distances (default `false`)
    pub similarity: bool,
    /// Initial width of the scratch rows (default 100)
    pub buffer_capacity: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            similarity: false,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl CompareConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    #[must_use]
    pub fn with_similarity(mut self, similarity: bool) -> Self {
        self.similarity = similarity;
        self
    }

    #[must_use]
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    #[must_use]
    pub fn policy(&self) -> NormalizationPolicy {
        NormalizationPolicy {
            normalize: self.normalize,
            similarity: self.similarity,
        }
    }
}
