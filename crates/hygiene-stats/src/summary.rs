use serde::Serialize;

use crate::{descriptive::DescriptiveStats, percentiles::Percentiles};

const QUARTILE_POINTS: [f64; 2] = [25.0, 75.0];

/// Flat numeric summary of a column.
///
/// Combines descriptive statistics with the first and third quartiles and
/// the interquartile range, in the shape displayed by the survey report.
///
/// # Examples
///
/// ```
/// use hygiene_stats::summary::NumericSummary;
///
/// let summary = NumericSummary::new([15.0, 25.0, 15.0]).unwrap();
/// assert_eq!(summary.count, 3);
/// assert_eq!(summary.median, 15.0);
/// assert_eq!(summary.q1, 15.0);
/// assert_eq!(summary.q3, 20.0);
/// assert_eq!(summary.iqr, 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; `None` for a single value.
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl NumericSummary {
    /// Computes the summary from unsorted values.
    ///
    /// Returns `None` if no values are given.
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes the summary from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let stats = DescriptiveStats::from_sorted(sorted_values)?;
        let quartiles = Percentiles::from_sorted(sorted_values, &QUARTILE_POINTS);
        let q1 = quartiles.get(QUARTILE_POINTS[0])?;
        let q3 = quartiles.get(QUARTILE_POINTS[1])?;

        Some(Self {
            count: stats.count,
            mean: stats.mean,
            median: stats.median,
            std: stats.std_dev,
            min: stats.min,
            max: stats.max,
            q1,
            q3,
            iqr: q3 - q1,
        })
    }

    /// Iterates over `(name, value)` pairs in display order.
    ///
    /// A missing standard deviation is reported as `NaN`.
    #[expect(clippy::cast_precision_loss)]
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("median", self.median),
            ("std", self.std.unwrap_or(f64::NAN)),
            ("min", self.min),
            ("max", self.max),
            ("q1", self.q1),
            ("q3", self.q3),
            ("iqr", self.iqr),
        ]
        .into_iter()
    }
}
