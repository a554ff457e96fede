/// Running mean of icon sizes, used by gesture code to size touch targets.
///
/// Stores only the current mean and the 1-based sample count; each sample is
/// folded in with `avg += (value - avg) / n` in integer arithmetic, so the
/// remainder is dropped at every step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeEstimator {
    samples: usize,
    avg_width: i32,
    avg_height: i32,
}

impl SizeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one more `(width, height)` sample into the mean
    pub fn update(&mut self, width: u32, height: u32) {
        self.samples += 1;
        let n = self.samples as i32;
        self.avg_width += (width as i32 - self.avg_width) / n;
        self.avg_height += (height as i32 - self.avg_height) / n;
        log::debug!(
            "icon size sample {}x{} -> average {}x{} over {} samples",
            width,
            height,
            self.average_width(),
            self.average_height(),
            self.samples
        );
    }

    pub fn average_width(&self) -> i32 {
        self.avg_width
    }

    pub fn average_height(&self) -> i32 {
        self.avg_height
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_estimator_reads_zero() {
        let estimator = SizeEstimator::new();
        assert_eq!(estimator.average_width(), 0);
        assert_eq!(estimator.average_height(), 0);
        assert_eq!(estimator.samples(), 0);
    }

    #[test]
    fn test_zero_seed_biases_mean() {
        let mut estimator = SizeEstimator::new();
        estimator.update(0, 0);
        estimator.update(10, 20);
        estimator.update(30, 40);

        assert_eq!(estimator.samples(), 3);
        assert_eq!(estimator.average_width(), 13);
        assert_eq!(estimator.average_height(), 20);
    }

    #[test]
    fn test_remainder_dropped_at_each_step() {
        let mut estimator = SizeEstimator::new();
        estimator.update(0, 0);
        estimator.update(3, 3);
        estimator.update(3, 3);

        // 0 -> 3/2 = 1 -> 1 + 2/3 = 1, where the exact mean would be 2
        assert_eq!(estimator.average_width(), 1);
        assert_eq!(estimator.average_height(), 1);
    }

    #[test]
    fn test_shrinking_sample_truncates_toward_zero() {
        let mut estimator = SizeEstimator::new();
        estimator.update(10, 10);
        estimator.update(5, 4);

        // 10 + (-5 / 2) = 10 - 2
        assert_eq!(estimator.average_width(), 8);
        assert_eq!(estimator.average_height(), 7);
    }
}
