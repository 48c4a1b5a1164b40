//! Staff-size statistics
//!
//! Staff size is recorded as a bucket label. Only the buckets with a known
//! midpoint (see [`StaffSize::midpoint`]) become numbers; the numeric summary
//! is computed over those. Interval estimates are given per original label.

use hygiene_stats::{
    frequency::FrequencyTable, proportion::ProportionEstimate, summary::NumericSummary,
};
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    record::Survey,
    schema::{StaffSize, column},
};

/// Numeric summary of staff sizes plus per-label proportions.
///
/// Both parts are empty when no record has a numeric bucket.
///
/// # Examples
///
/// ```
/// use hygiene_survey::{record::Survey, staff::StaffStatistics};
///
/// let csv = "ID_entreprise,Effectif_du_personnel\nE1,10 à 20\nE2,20 à 30\nE3,10 à 20\n";
/// let survey = Survey::from_reader(csv.as_bytes()).unwrap();
///
/// let stats = StaffStatistics::compute(&survey);
/// let summary = stats.summary.as_ref().unwrap();
/// assert_eq!(summary.count, 3);
/// assert_eq!(summary.median, 15.0);
/// assert_eq!(summary.iqr, 5.0);
///
/// let (label, estimate) = &stats.confidence_intervals[0];
/// assert_eq!(label, "10 à 20");
/// assert_eq!(estimate.count, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StaffStatistics {
    #[serde(flatten)]
    pub summary: Option<NumericSummary>,
    /// Per-label estimates, by descending count.
    #[serde(
        serialize_with = "serialize_intervals",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub confidence_intervals: Vec<(String, ProportionEstimate)>,
}

impl StaffStatistics {
    #[must_use]
    pub fn compute(survey: &Survey) -> Self {
        if !survey.has_column(column::STAFF_SIZE) {
            return Self::default();
        }
        Self::from_sizes(survey.records().iter().map(|r| r.staff_size.as_ref()))
    }

    /// Computes the statistics from one column of staff sizes.
    #[must_use]
    pub fn from_sizes<'a, I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a StaffSize>>,
    {
        let sizes = sizes.into_iter().collect::<Vec<_>>();
        let Some(summary) = NumericSummary::new(sizes.iter().flatten().filter_map(|s| s.midpoint()))
        else {
            return Self::default();
        };

        let total = sizes.len() as u64;
        let mut labels = FrequencyTable::from_values(sizes.iter().flatten().map(|s| s.label()));
        labels.sort_by_count_desc();
        let confidence_intervals = labels
            .iter()
            .filter_map(|(label, count)| {
                Some(((*label).to_owned(), ProportionEstimate::new(count, total)?))
            })
            .collect();

        tracing::debug!(
            numeric = summary.count,
            labels = labels.len(),
            "staff statistics computed"
        );

        Self {
            summary: Some(summary),
            confidence_intervals,
        }
    }

    /// Returns `true` when no record has a numeric staff-size bucket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }

    /// Estimate for one label, if present.
    #[must_use]
    pub fn estimate(&self, label: &str) -> Option<&ProportionEstimate> {
        self.confidence_intervals
            .iter()
            .find_map(|(l, estimate)| (l == label).then_some(estimate))
    }
}

fn serialize_intervals<S>(
    intervals: &[(String, ProportionEstimate)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(intervals.len()))?;
    for (label, estimate) in intervals {
        map.serialize_entry(label, &estimate.confidence_interval)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(labels: &[Option<&str>]) -> Vec<Option<StaffSize>> {
        labels.iter().map(|l| l.map(StaffSize::parse)).collect()
    }

    #[test]
    fn test_three_buckets() {
        let sizes = sizes(&[Some("10 à 20"), Some("20 à 30"), Some("10 à 20")]);
        let stats = StaffStatistics::from_sizes(sizes.iter().map(Option::as_ref));
        let summary = stats.summary.unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 55.0 / 3.0).abs() < 1e-9);
        assert!((summary.median - 15.0).abs() < f64::EPSILON);
        assert!((summary.q1 - 15.0).abs() < f64::EPSILON);
        assert!((summary.q3 - 20.0).abs() < f64::EPSILON);
        assert!((summary.iqr - 5.0).abs() < f64::EPSILON);
        assert!((summary.std.unwrap() - 5.773_502_691_896_258).abs() < 1e-9);
    }

    #[test]
    fn test_unlisted_labels_are_dropped_from_summary() {
        let sizes = sizes(&[Some("10 à 20"), Some("Inconnu"), None, Some("30 à 40")]);
        let stats = StaffStatistics::from_sizes(sizes.iter().map(Option::as_ref));
        assert_eq!(stats.summary.as_ref().unwrap().count, 1);
        assert_eq!(stats.summary.as_ref().unwrap().std, None);

        // Intervals use the whole column, missing cells included.
        let unknown = stats.estimate("Inconnu").unwrap();
        assert_eq!((unknown.count, unknown.total), (1, 4));
        assert_eq!(stats.confidence_intervals.len(), 3);
    }

    #[test]
    fn test_no_numeric_bucket_is_empty() {
        let sizes = sizes(&[Some("Inconnu"), Some("50 et plus"), None]);
        let stats = StaffStatistics::from_sizes(sizes.iter().map(Option::as_ref));
        assert!(stats.is_empty());
        assert!(stats.confidence_intervals.is_empty());
        assert_eq!(serde_json::to_value(&stats).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_labels_in_count_order() {
        let sizes = sizes(&[Some("20 à 30"), Some("10 à 20"), Some("10 à 20")]);
        let stats = StaffStatistics::from_sizes(sizes.iter().map(Option::as_ref));
        let labels = stats
            .confidence_intervals
            .iter()
            .map(|(l, _)| l.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["10 à 20", "20 à 30"]);
    }

    #[test]
    fn test_serialized_shape() {
        let sizes = sizes(&[Some("10 à 20"), Some("20 à 30")]);
        let stats = StaffStatistics::from_sizes(sizes.iter().map(Option::as_ref));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["mean"], 20.0);
        assert!(json["confidence_intervals"]["10 à 20"].is_array());
    }

    #[test]
    fn test_missing_column() {
        let survey = Survey::from_reader("ID_entreprise\nE1\n".as_bytes()).unwrap();
        assert!(StaffStatistics::compute(&survey).is_empty());
    }
}
