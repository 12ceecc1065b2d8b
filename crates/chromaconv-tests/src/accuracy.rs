//! Accuracy measurement
//!
//! Absolute per-component error between expected and computed vectors.
//! The conversions are exact linear algebra, so a plain max-abs metric is
//! what the tests need.

use chromaconv_core::Vector3;

/// Statistics from a component-wise comparison
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean of the per-sample max component error
    pub mean: f64,
    /// Largest component error seen
    pub max: f64,
    /// Index of the sample with the largest error
    pub worst: usize,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Compare pairs of (expected, actual)
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Vector3, Vector3)>) -> Self {
        let mut sum = 0.0;
        let mut max: f64 = 0.0;
        let mut worst = 0;
        let mut count = 0;

        for (i, (expected, actual)) in pairs.into_iter().enumerate() {
            let err = max_component_error(expected, actual);
            sum += err;
            if !max.is_nan() && (err > max || err.is_nan()) {
                max = err;
                worst = i;
            }
            count += 1;
        }

        Self {
            mean: if count > 0 { sum / count as f64 } else { 0.0 },
            max,
            worst,
            count,
        }
    }

    /// Check that every sample is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Largest absolute component difference; NaN if either side is NaN
pub fn max_component_error(expected: Vector3, actual: Vector3) -> f64 {
    (0..3)
        .map(|i| (expected[i] - actual[i]).abs())
        .fold(0.0, |acc: f64, e| {
            if acc.is_nan() || e.is_nan() {
                f64::NAN
            } else {
                acc.max(e)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let v = Vector3::new(0.1, 0.2, 0.3);
        let stats = ErrorStats::from_pairs([(v, v), (v, v)]);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.count, 2);
        assert!(stats.within(0.0));
    }

    #[test]
    fn test_worst_sample() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let b = Vector3::new(0.1, 0.25, 0.3);
        let stats = ErrorStats::from_pairs([(a, a), (a, b), (a, a)]);
        assert!((stats.max - 0.05).abs() < 1e-12);
        assert_eq!(stats.worst, 1);
        assert!(!stats.within(0.01));
    }

    #[test]
    fn test_nan_fails() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let stats = ErrorStats::from_pairs([(a, Vector3::new(f64::NAN, 0.2, 0.3))]);
        assert!(stats.max.is_nan());
        assert!(!stats.within(1.0));
    }

    #[test]
    fn test_nan_in_any_component_fails() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        for i in 0..3 {
            let mut b = a;
            b[i] = f64::NAN;
            assert!(max_component_error(a, b).is_nan(), "component {i}");
        }

        // The first NaN sample stays the worst one
        let b = Vector3::new(0.1, f64::NAN, 0.3);
        let stats = ErrorStats::from_pairs([(a, a), (a, b), (a, Vector3::splat(5.0))]);
        assert!(stats.max.is_nan());
        assert_eq!(stats.worst, 1);
        assert!(!stats.within(f64::INFINITY));
    }
}
