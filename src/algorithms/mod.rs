//! String comparison algorithms
//!
//! Each metric is a comparator value that owns its configuration (and, for
//! the edit-distance family, a reusable scratch buffer). All of them
//! implement [`Comparator`], which provides the batch operations.

pub mod buffer;
pub mod character;
pub mod damerau;
pub mod hamming;
pub mod jaccard;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod normalize;

pub use buffer::ScratchBuffer;
pub use character::CharacterDifference;
pub use damerau::DamerauLevenshtein;
pub use hamming::Hamming;
pub use jaccard::Jaccard;
pub use jaro::{jaro_similarity, jaro_winkler_similarity, Jaro, JaroWinkler};
pub use lcs::LcsDistance;
pub use levenshtein::Levenshtein;
pub use normalize::{CompareConfig, NormalizationPolicy};

use crate::error::CompareError;
use rayon::prelude::*;

/// Minimum number of rows before the parallel batch operations hand work to
/// rayon. Smaller inputs are compared sequentially.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Trait implemented by every string metric.
///
/// `compare` takes `&mut self` because edit-distance comparators reuse an
/// internal buffer; one instance can therefore never be used by two callers
/// at once. The parallel batch operations give each worker its own clone.
pub trait Comparator: Send + Sync {
    /// Score a single pair of strings.
    fn compare(&mut self, s: &str, t: &str) -> f64;

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;

    /// Compare `left[i]` with `right[i]` for every `i`.
    ///
    /// Fails with [`CompareError::LengthMismatch`] when the lists differ in size.
    fn elementwise<A, B>(&mut self, left: &[A], right: &[B]) -> Result<Vec<f64>, CompareError>
    where
        Self: Sized,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        check_same_size(left.len(), right.len())?;
        Ok(left
            .iter()
            .zip(right)
            .map(|(a, b)| self.compare(a.as_ref(), b.as_ref()))
            .collect())
    }

    /// Full `left.len() x right.len()` matrix of scores.
    fn pairwise<A, B>(&mut self, left: &[A], right: &[B]) -> Vec<Vec<f64>>
    where
        Self: Sized,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        left.iter()
            .map(|a| {
                right
                    .iter()
                    .map(|b| self.compare(a.as_ref(), b.as_ref()))
                    .collect()
            })
            .collect()
    }

    /// Parallel [`elementwise`](Self::elementwise). Each rayon worker compares
    /// with its own clone of `self`.
    fn par_elementwise<A, B>(&self, left: &[A], right: &[B]) -> Result<Vec<f64>, CompareError>
    where
        Self: Sized + Clone,
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        check_same_size(left.len(), right.len())?;
        if left.len() < PARALLEL_THRESHOLD {
            return self.clone().elementwise(left, right);
        }

        Ok(left
            .par_iter()
            .zip(right.par_iter())
            .map_init(
                || self.clone(),
                |cmp, (a, b)| cmp.compare(a.as_ref(), b.as_ref()),
            )
            .collect())
    }

    /// Parallel [`pairwise`](Self::pairwise), partitioned by row.
    fn par_pairwise<A, B>(&self, left: &[A], right: &[B]) -> Vec<Vec<f64>>
    where
        Self: Sized + Clone,
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        if left.len() < PARALLEL_THRESHOLD {
            return self.clone().pairwise(left, right);
        }

        left.par_iter()
            .map_init(
                || self.clone(),
                |cmp, a| {
                    right
                        .iter()
                        .map(|b| cmp.compare(a.as_ref(), b.as_ref()))
                        .collect::<Vec<f64>>()
                },
            )
            .collect()
    }
}

/// Boxed comparators, including `Box<dyn Comparator>`, get the batch
/// operations too.
impl<C: Comparator + ?Sized> Comparator for Box<C> {
    fn compare(&mut self, s: &str, t: &str) -> f64 {
        (**self).compare(s, t)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[inline]
fn check_same_size(left: usize, right: usize) -> Result<(), CompareError> {
    if left != right {
        return Err(CompareError::LengthMismatch { left, right });
    }
    Ok(())
}
