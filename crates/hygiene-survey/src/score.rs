//! Composite hygiene score and per-company views
//!
//! The hygiene score of an enterprise is the share of `Yes` among its known
//! practice cells. Missing and `Unknown` cells are left out of the
//! denominator, while text outside the answer vocabulary counts as known and
//! non-compliant. A record with no known cell scores `0.0`.
//!
//! # Examples
//!
//! ```
//! use hygiene_survey::{record::Survey, score::{HygieneScore, company_scores}};
//!
//! let csv = "ID_entreprise,Existence_BPH,Existence_BPF,Existence_HACCP\n\
//!            E1,Oui,Non,Inconnu\n\
//!            E2,Inconnu,Inconnu,\n";
//! let survey = Survey::from_reader(csv.as_bytes()).unwrap();
//!
//! let score = HygieneScore::from_record(&survey.records()[0]);
//! assert_eq!(score.score, 0.5);
//! assert_eq!(score.known_practices, 2);
//!
//! let scores = company_scores(&survey);
//! assert_eq!(scores.get("E2").map(|s| s.score), Some(0.0));
//! assert_eq!(scores.get("E2").map(|s| s.known_practices), Some(0));
//! ```

use std::collections::BTreeMap;

use hygiene_stats::descriptive::DescriptiveStats;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    record::{Record, Survey},
    schema::{Answer, Practice, PracticeCell},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HygieneScore {
    /// Share of compliant practices, in `[0, 1]`.
    pub score: f64,
    /// Practices with a cell other than missing or `Unknown`.
    pub known_practices: usize,
    /// Practices answered `Yes`.
    pub compliant_practices: usize,
}

impl HygieneScore {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self::from_cells(record.practices.iter().copied())
    }

    /// Scores a sequence of practice cells, or of plain answers.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<C>>,
        PracticeCell: From<C>,
    {
        let (compliant, known) = cells
            .into_iter()
            .flatten()
            .map(PracticeCell::from)
            .filter(|cell| *cell != PracticeCell::Answer(Answer::Unknown))
            .fold((0, 0), |(compliant, known), cell| {
                let yes = cell == PracticeCell::Answer(Answer::Yes);
                (compliant + usize::from(yes), known + 1)
            });
        let score = if known == 0 {
            0.0
        } else {
            compliant as f64 / known as f64
        };
        Self {
            score,
            known_practices: known,
            compliant_practices: compliant,
        }
    }
}

/// Hygiene score of every enterprise, keyed by ID.
///
/// Entries keep record order. A repeated ID keeps the position of its first
/// occurrence and the score of its last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyScores {
    entries: Vec<(String, HygieneScore)>,
}

impl CompanyScores {
    fn insert(&mut self, id: &str, score: HygieneScore) {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| k == id) {
            *slot = score;
        } else {
            self.entries.push((id.to_owned(), score));
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HygieneScore> {
        self.entries
            .iter()
            .find_map(|(k, score)| (k == id).then_some(score))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HygieneScore)> {
        self.entries.iter().map(|(id, score)| (id.as_str(), score))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptive statistics of the scores.
    #[must_use]
    pub fn stats(&self) -> Option<DescriptiveStats> {
        DescriptiveStats::new(self.entries.iter().map(|(_, s)| s.score))
    }
}

impl Serialize for CompanyScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, score) in &self.entries {
            map.serialize_entry(id, &score.score)?;
        }
        map.end()
    }
}

#[must_use]
pub fn company_scores(survey: &Survey) -> CompanyScores {
    let mut scores = CompanyScores::default();
    for record in survey.records() {
        scores.insert(&record.id, HygieneScore::from_record(record));
    }
    scores
}

/// Mean hygiene score per product type, highest first.
///
/// Only records with a positive score and a product type take part.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn product_type_scores(survey: &Survey) -> Vec<(String, f64)> {
    let mut groups = BTreeMap::<&str, (f64, usize)>::new();
    for record in survey.records() {
        let Some(product_type) = record.product_type.as_deref() else {
            continue;
        };
        let score = HygieneScore::from_record(record).score;
        if score > 0.0 {
            let (sum, count) = groups.entry(product_type).or_default();
            *sum += score;
            *count += 1;
        }
    }

    let mut means = groups
        .into_iter()
        .map(|(product_type, (sum, count))| (product_type.to_owned(), sum / count as f64))
        .collect::<Vec<_>>();
    means.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    means
}

/// Status of one practice in a company profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PracticeStatus {
    pub practice: Practice,
    pub answer: Option<Answer>,
}

impl PracticeStatus {
    /// Position on the radar chart: `Yes` is 1, `No` is 0, anything else 0.5.
    #[must_use]
    pub fn radar_value(&self) -> f64 {
        match self.answer {
            Some(Answer::Yes) => 1.0,
            Some(Answer::No) => 0.0,
            Some(Answer::Unknown) | None => 0.5,
        }
    }
}

/// Everything shown about a single enterprise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub id: String,
    pub location: Option<String>,
    pub product_type: Option<String>,
    pub staff_size: Option<String>,
    pub training: Option<String>,
    pub score: HygieneScore,
    pub practices: Vec<PracticeStatus>,
}

impl CompanyProfile {
    /// Builds the profile of the first record with the given ID.
    #[must_use]
    pub fn find(survey: &Survey, id: &str) -> Option<Self> {
        survey.find(id).map(Self::from_record)
    }

    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            location: record.location.clone(),
            product_type: record.product_type.clone(),
            staff_size: record.staff_size.as_ref().map(|s| s.label().to_owned()),
            training: record.training.clone(),
            score: HygieneScore::from_record(record),
            practices: Practice::ALL
                .into_iter()
                .map(|practice| PracticeStatus {
                    practice,
                    answer: record.practice(practice),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(answers: &[Option<Answer>]) -> HygieneScore {
        HygieneScore::from_cells(answers.iter().copied())
    }

    #[test]
    fn test_all_yes() {
        let s = score(&[Some(Answer::Yes); 9]);
        assert!((s.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(s.known_practices, 9);
    }

    #[test]
    fn test_all_unknown_and_all_no_both_score_zero() {
        let unknown = score(&[Some(Answer::Unknown); 9]);
        let no = score(&[Some(Answer::No); 9]);
        assert!(unknown.score.abs() < f64::EPSILON);
        assert!(no.score.abs() < f64::EPSILON);
        // The two are told apart by the number of known answers.
        assert_eq!(unknown.known_practices, 0);
        assert_eq!(no.known_practices, 9);
    }

    #[test]
    fn test_unlisted_cells_count_as_known_non_compliant() {
        let csv = "ID_entreprise,Existence_BPH,Existence_BPF,Existence_HACCP\n\
                   E1,Oui,Partiel,Inconnu\n\
                   E2,oui,Oui ,\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();

        let first = HygieneScore::from_record(&survey.records()[0]);
        assert!((first.score - 0.5).abs() < f64::EPSILON);
        assert_eq!(first.known_practices, 2);
        assert_eq!(first.compliant_practices, 1);

        let second = HygieneScore::from_record(&survey.records()[1]);
        assert!(second.score.abs() < f64::EPSILON);
        assert_eq!(second.known_practices, 2);

        let mixed = HygieneScore::from_cells([
            Some(PracticeCell::Answer(Answer::Yes)),
            Some(PracticeCell::Unlisted),
            None,
        ]);
        assert!((mixed.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_in_unit_range() {
        let answers = [None, Some(Answer::Yes), Some(Answer::No), Some(Answer::Unknown)];
        for a in answers {
            for b in answers {
                for c in answers {
                    let s = score(&[a, b, c]);
                    assert!((0.0..=1.0).contains(&s.score));
                }
            }
        }
    }

    #[test]
    fn test_duplicate_ids_overwrite_in_place() {
        let csv = "ID_entreprise,Existence_BPH\nE1,Oui\nE2,Non\nE1,Non\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        let scores = company_scores(&survey);
        assert_eq!(scores.len(), 2);
        let ids = scores.iter().map(|(id, _)| id).collect::<Vec<_>>();
        assert_eq!(ids, ["E1", "E2"]);
        assert!(scores.get("E1").unwrap().score.abs() < f64::EPSILON);

        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"E1":0.0,"E2":0.0}"#);
    }

    #[test]
    fn test_product_type_means_skip_zero_scores() {
        let csv = "ID_entreprise,Type _de_produit,Existence_BPH,Existence_BPF\n\
                   E1,Jus,Oui,Oui\n\
                   E2,Jus,Oui,Non\n\
                   E3,Jus,Non,Non\n\
                   E4,Lait,Oui,Oui\n\
                   E5,Céréales,Non,Inconnu\n\
                   E6,,Oui,Oui\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        let means = product_type_scores(&survey);
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].0, "Lait");
        assert!((means[0].1 - 1.0).abs() < f64::EPSILON);
        assert_eq!(means[1].0, "Jus");
        assert!((means[1].1 - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_company_profile_radar() {
        let csv = "ID_entreprise,Localisation,Existence_BPH,Existence_BPF,Existence_HACCP\n\
                   E7,Thiès,Oui,Non,Inconnu\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        let profile = CompanyProfile::find(&survey, "E7").unwrap();
        assert_eq!(profile.location.as_deref(), Some("Thiès"));
        assert_eq!(profile.practices.len(), Practice::ALL.len());

        let radar = profile
            .practices
            .iter()
            .map(PracticeStatus::radar_value)
            .collect::<Vec<_>>();
        assert_eq!(&radar[..4], [1.0, 0.0, 0.5, 0.5]);
        assert!(CompanyProfile::find(&survey, "E8").is_none());
    }
}
