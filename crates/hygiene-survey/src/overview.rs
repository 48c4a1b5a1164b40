//! Headline figures: enterprise count, distinct values and missing-data rate

use std::collections::HashSet;

use hygiene_stats::frequency::FrequencyTable;
use serde::Serialize;

use crate::record::Survey;

/// Headline figures of the survey.
///
/// # Examples
///
/// ```
/// use hygiene_survey::{overview::Overview, record::Survey};
///
/// let csv = "ID_entreprise,Localisation,Type _de_produit\n\
///            E1,Dakar,Jus\nE2,Thiès,Jus\nE3,Inconnu,Lait\n";
/// let survey = Survey::from_reader(csv.as_bytes()).unwrap();
///
/// let overview = Overview::compute(&survey);
/// assert_eq!(overview.companies, 3);
/// assert_eq!(overview.locations, 3);
/// assert_eq!(overview.product_types, 2);
/// assert!((overview.missing_rate - 100.0 / 9.0).abs() < 1e-9);
/// assert_eq!(overview.product_distribution.get("Jus"), 2);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    /// Distinct enterprise IDs.
    pub companies: usize,
    /// Distinct non-missing locations.
    pub locations: usize,
    /// Distinct non-missing product types.
    pub product_types: usize,
    /// Percentage of cells holding `Inconnu`.
    pub missing_rate: f64,
    /// Enterprises per product type, most frequent first.
    pub product_distribution: FrequencyTable<String>,
}

impl Overview {
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn compute(survey: &Survey) -> Self {
        let records = survey.records();
        let report = survey.report();
        let cells = report.rows * report.columns;
        let missing_rate = if cells == 0 {
            0.0
        } else {
            report.unknown_cells as f64 / cells as f64 * 100.0
        };

        let mut product_distribution = FrequencyTable::from_values(
            records.iter().filter_map(|r| r.product_type.clone()),
        );
        product_distribution.sort_by_count_desc();

        Self {
            companies: distinct(records.iter().map(|r| r.id.as_str())),
            locations: distinct(records.iter().filter_map(|r| r.location.as_deref())),
            product_types: distinct(records.iter().filter_map(|r| r.product_type.as_deref())),
            missing_rate,
            product_distribution,
        }
    }
}

fn distinct<'a, I>(values: I) -> usize
where
    I: Iterator<Item = &'a str>,
{
    values.collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_survey() {
        let survey = Survey::from_reader("ID_entreprise,Localisation\n".as_bytes()).unwrap();
        let overview = Overview::compute(&survey);
        assert_eq!(overview.companies, 0);
        assert!(overview.missing_rate.abs() < f64::EPSILON);
        assert!(overview.product_distribution.is_empty());
    }

    #[test]
    fn test_missing_values_are_not_distinct_values() {
        let csv = "ID_entreprise,Localisation,Type _de_produit\nE1,,Jus\nE1,Dakar,\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        let overview = Overview::compute(&survey);
        assert_eq!(overview.companies, 1);
        assert_eq!(overview.locations, 1);
        assert_eq!(overview.product_types, 1);
    }

    #[test]
    fn test_product_distribution_order() {
        let csv = "ID_entreprise,Type _de_produit\nE1,Lait\nE2,Jus\nE3,Jus\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        let overview = Overview::compute(&survey);
        assert_eq!(
            serde_json::to_string(&overview.product_distribution).unwrap(),
            r#"{"Jus":2,"Lait":1}"#
        );
    }
}
