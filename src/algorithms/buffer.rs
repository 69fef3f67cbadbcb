//! Reusable dynamic-programming rows for the edit-distance comparators.

use tracing::debug;

/// Fixed number of integer rows laid out in one flat allocation.
///
/// The row width only ever grows. Cell contents are undefined between calls:
/// every computation must initialize the cells it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchBuffer {
    data: Vec<usize>,
    rows: usize,
    width: usize,
}

impl ScratchBuffer {
    #[must_use]
    pub fn new(rows: usize, width: usize) -> Self {
        let rows = rows.max(1);
        Self {
            data: vec![0; rows * width],
            rows,
            width,
        }
    }

    /// Current width of each row.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grow every row to at least `width` cells and return the whole buffer.
    ///
    /// Row `k` starts at `k * self.width()` in the returned slice.
    #[inline]
    pub fn reserve(&mut self, width: usize, metric: &'static str) -> &mut [usize] {
        if width > self.width {
            debug!(
                metric,
                old_width = self.width,
                new_width = width,
                "growing scratch buffer"
            );
            self.width = width;
            self.data.resize(self.rows * width, 0);
        }
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_grows_monotonically() {
        let mut buffer = ScratchBuffer::new(3, 4);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.reserve(2, "test").len(), 12);
        assert_eq!(buffer.width(), 4);

        assert_eq!(buffer.reserve(10, "test").len(), 30);
        assert_eq!(buffer.width(), 10);

        // never shrinks
        buffer.reserve(1, "test");
        assert_eq!(buffer.width(), 10);
    }

    #[test]
    fn test_zero_capacity_buffer() {
        let mut buffer = ScratchBuffer::new(1, 0);
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.reserve(5, "test").len(), 5);
    }
}
