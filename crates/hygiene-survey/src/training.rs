//! Training indicators extracted from the free-text training column
//!
//! # Examples
//!
//! ```
//! use hygiene_survey::{record::Survey, schema::TrainingType, training};
//!
//! let csv = "ID_entreprise,Formation_reçue\nE1,\"BPH, HACCP\"\nE2,Aucune\nE3,Inconnu\nE4,BPF\n";
//! let survey = Survey::from_reader(csv.as_bytes()).unwrap();
//!
//! let stats = training::training_statistics(&survey);
//! assert_eq!(stats[&TrainingType::Bph].count, 1);
//! assert_eq!(stats[&TrainingType::Bph].total, 3);
//!
//! let breakdown = training::TrainingBreakdown::compute(&survey);
//! assert_eq!(breakdown.multiple, 1);
//! assert_eq!(breakdown.none, 1);
//! ```

use std::collections::BTreeMap;

use hygiene_stats::proportion::ProportionEstimate;
use serde::Serialize;

use crate::{
    record::Survey,
    schema::{TrainingType, UNKNOWN_LABEL, column},
};

/// Training entries that carry information: present and not `Inconnu`.
fn eligible_entries(survey: &Survey) -> Vec<&str> {
    if !survey.has_column(column::TRAINING) {
        return Vec::new();
    }
    survey
        .records()
        .iter()
        .filter_map(|r| r.training.as_deref())
        .filter(|text| *text != UNKNOWN_LABEL)
        .collect()
}

/// Share of eligible entries mentioning each training type.
///
/// Empty when the column is absent or has no eligible entry.
#[must_use]
pub fn training_statistics(survey: &Survey) -> BTreeMap<TrainingType, ProportionEstimate> {
    training_statistics_from(&eligible_entries(survey))
}

/// Same as [`training_statistics`], over already-filtered entries.
#[must_use]
pub fn training_statistics_from(entries: &[&str]) -> BTreeMap<TrainingType, ProportionEstimate> {
    let total = entries.len() as u64;
    TrainingType::ALL
        .into_iter()
        .filter_map(|training| {
            let count = entries
                .iter()
                .filter(|text| training.is_mentioned_in(text))
                .count() as u64;
            Some((training, ProportionEstimate::new(count, total)?))
        })
        .collect()
}

/// Per-category counts for the training distribution chart.
///
/// Each programme mentioned in an entry is counted. An entry mentioning
/// `Aucune` also counts as no training; otherwise an entry mentioning more
/// than one programme also counts as multiple. An entry can therefore
/// contribute to several categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrainingBreakdown {
    #[serde(rename = "BPH")]
    pub bph: u64,
    #[serde(rename = "BPF")]
    pub bpf: u64,
    #[serde(rename = "HACCP")]
    pub haccp: u64,
    #[serde(rename = "Aucune")]
    pub none: u64,
    #[serde(rename = "Multiple")]
    pub multiple: u64,
}

impl TrainingBreakdown {
    #[must_use]
    pub fn compute(survey: &Survey) -> Self {
        Self::from_entries(eligible_entries(survey))
    }

    #[must_use]
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut breakdown = Self::default();
        for text in entries {
            breakdown.add(text);
        }
        breakdown
    }

    fn add(&mut self, text: &str) {
        let mut programmes = 0;
        for training in TrainingType::PROGRAMMES {
            if training.is_mentioned_in(text) {
                programmes += 1;
                match training {
                    TrainingType::Bph => self.bph += 1,
                    TrainingType::Bpf => self.bpf += 1,
                    TrainingType::Haccp => self.haccp += 1,
                    TrainingType::NoTraining => {}
                }
            }
        }
        if TrainingType::NoTraining.is_mentioned_in(text) {
            self.none += 1;
        } else if programmes > 1 {
            self.multiple += 1;
        }
    }

    /// `(label, count)` pairs in chart order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, u64); 5] {
        [
            ("BPH", self.bph),
            ("BPF", self.bpf),
            ("HACCP", self.haccp),
            ("Aucune", self.none),
            ("Multiple", self.multiple),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_entry() {
        let stats = training_statistics_from(&["BPH, HACCP"]);
        assert_eq!(stats[&TrainingType::Bph].count, 1);
        assert_eq!(stats[&TrainingType::Haccp].count, 1);
        assert_eq!(stats[&TrainingType::Bpf].count, 0);

        let breakdown = TrainingBreakdown::from_entries(["BPH, HACCP"]);
        assert_eq!(
            breakdown,
            TrainingBreakdown {
                bph: 1,
                bpf: 0,
                haccp: 1,
                none: 0,
                multiple: 1,
            }
        );
    }

    #[test]
    fn test_no_training_wins_over_multiple() {
        let breakdown = TrainingBreakdown::from_entries(["Aucune (BPH et BPF prévus)"]);
        assert_eq!(breakdown.none, 1);
        assert_eq!(breakdown.multiple, 0);
        assert_eq!(breakdown.bph, 1);
        assert_eq!(breakdown.bpf, 1);
    }

    #[test]
    fn test_unknown_and_missing_are_not_eligible() {
        let csv = "ID_entreprise,Formation_reçue\nE1,Inconnu\nE2,\nE3,HACCP\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        let stats = training_statistics(&survey);
        assert_eq!(stats[&TrainingType::Haccp].total, 1);
        assert!((stats[&TrainingType::Haccp].proportion - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_eligible_entry_is_empty() {
        let csv = "ID_entreprise,Formation_reçue\nE1,Inconnu\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        assert!(training_statistics(&survey).is_empty());
        assert_eq!(TrainingBreakdown::compute(&survey), TrainingBreakdown::default());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let stats = training_statistics_from(&["haccp", "aucune"]);
        assert_eq!(stats[&TrainingType::Haccp].count, 0);
        assert_eq!(stats[&TrainingType::NoTraining].count, 0);
    }
}
