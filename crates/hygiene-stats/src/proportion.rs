//! Proportion estimates with exact binomial confidence intervals
//!
//! A [`ProportionEstimate`] pairs `count / total` with a confidence interval
//! obtained from the binomial quantiles at the estimated proportion (see
//! [`crate::binomial`]). The interval bounds are the boundary success counts
//! divided by `total`.
//!
//! A category that was never observed (`count == 0`) gets the collapsed
//! interval `(0.0, 0.0)` instead of a one-sided upper bound.
//!
//! # Examples
//!
//! ```
//! use hygiene_stats::proportion::{ConfidenceInterval, ProportionEstimate};
//!
//! let estimate = ProportionEstimate::new(5, 10).unwrap();
//! assert_eq!(estimate.proportion, 0.5);
//! assert_eq!(estimate.confidence_interval, ConfidenceInterval { lower: 0.2, upper: 0.8 });
//!
//! let never = ProportionEstimate::new(0, 10).unwrap();
//! assert_eq!(never.confidence_interval, ConfidenceInterval::COLLAPSED);
//!
//! // An empty population has no proportion.
//! assert!(ProportionEstimate::new(0, 0).is_none());
//! ```

use serde::Serialize;

use crate::binomial;

/// Confidence level used throughout the survey statistics.
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// A `(lower, upper)` bound pair around a proportion.
///
/// Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "(f64, f64)")]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Interval reported for categories with zero observations.
    pub const COLLAPSED: Self = Self {
        lower: 0.0,
        upper: 0.0,
    };

    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` if `value` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(ci: ConfidenceInterval) -> Self {
        (ci.lower, ci.upper)
    }
}

/// Count, eligible total, proportion and confidence interval of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProportionEstimate {
    /// Number of observations in the category.
    pub count: u64,
    /// Number of eligible observations (the denominator).
    pub total: u64,
    /// `count / total`.
    pub proportion: f64,
    /// Confidence interval at [`CONFIDENCE_LEVEL`].
    pub confidence_interval: ConfidenceInterval,
}

impl ProportionEstimate {
    /// Estimates `count / total` with a 95% confidence interval.
    ///
    /// Returns `None` when `total` is zero; callers are expected to skip
    /// categories with no eligible observations.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds `total`.
    #[must_use]
    pub fn new(count: u64, total: u64) -> Option<Self> {
        Self::with_confidence(count, total, CONFIDENCE_LEVEL)
    }

    /// Estimates `count / total` with a confidence interval at the given level.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds `total`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn with_confidence(count: u64, total: u64, confidence: f64) -> Option<Self> {
        assert!(
            count <= total,
            "count ({count}) must not exceed total ({total})"
        );
        if total == 0 {
            return None;
        }

        let n = total as f64;
        let proportion = count as f64 / n;
        let confidence_interval = if count == 0 {
            ConfidenceInterval::COLLAPSED
        } else {
            let (lower, upper) = binomial::central_interval(confidence, total, proportion)?;
            ConfidenceInterval {
                lower: lower as f64 / n,
                upper: upper as f64 / n,
            }
        };

        Some(Self {
            count,
            total,
            proportion,
            confidence_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_ordered() {
        for total in 1..=30_u64 {
            for count in 0..=total {
                let estimate = ProportionEstimate::new(count, total).unwrap();
                let ci = estimate.confidence_interval;
                if count == 0 {
                    assert_eq!(ci, ConfidenceInterval::COLLAPSED);
                    continue;
                }
                assert!(0.0 <= ci.lower, "{count}/{total}: {ci:?}");
                assert!(ci.lower <= estimate.proportion, "{count}/{total}: {ci:?}");
                assert!(estimate.proportion <= ci.upper, "{count}/{total}: {ci:?}");
                assert!(ci.upper <= 1.0, "{count}/{total}: {ci:?}");
            }
        }
    }

    #[test]
    fn test_full_count() {
        let estimate = ProportionEstimate::new(8, 8).unwrap();
        assert!((estimate.proportion - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            estimate.confidence_interval,
            ConfidenceInterval {
                lower: 1.0,
                upper: 1.0
            }
        );
    }

    #[test]
    fn test_zero_count_collapses() {
        let estimate = ProportionEstimate::new(0, 25).unwrap();
        assert!(estimate.proportion.abs() < f64::EPSILON);
        assert_eq!(estimate.confidence_interval, ConfidenceInterval::COLLAPSED);
    }

    #[test]
    fn test_empty_population() {
        assert_eq!(ProportionEstimate::new(0, 0), None);
    }

    #[test]
    #[should_panic(expected = "must not exceed total")]
    fn test_count_above_total() {
        let _ = ProportionEstimate::new(3, 2);
    }

    #[test]
    fn test_interval_serializes_as_pair() {
        let estimate = ProportionEstimate::new(5, 10).unwrap();
        let json = serde_json::to_value(estimate).unwrap();
        assert_eq!(json["count"], 5);
        assert_eq!(json["total"], 10);
        assert_eq!(json["confidence_interval"], serde_json::json!([0.2, 0.8]));
    }

    #[test]
    fn test_contains_and_width() {
        let ci = ConfidenceInterval {
            lower: 0.25,
            upper: 0.75,
        };
        assert!(ci.contains(0.5));
        assert!(!ci.contains(0.8));
        assert!((ci.width() - 0.5).abs() < f64::EPSILON);
    }
}
