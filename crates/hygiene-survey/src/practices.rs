//! Hygiene practice statistics
//!
//! For every practice column, each answer category gets a count, a
//! proportion over the full column length and a 95% confidence interval.
//! Missing cells stay in the denominator but belong to no category, so the
//! three proportions only sum to one when every cell holds an answer.
//!
//! # Examples
//!
//! ```
//! use hygiene_survey::{
//!     practices::PracticeStatistics,
//!     record::Survey,
//!     schema::{Answer, Practice},
//! };
//!
//! let csv = "ID_entreprise,Existence_HACCP\nE1,Oui\nE2,Non\nE3,Oui\nE4,Inconnu\n";
//! let survey = Survey::from_reader(csv.as_bytes()).unwrap();
//!
//! let stats = PracticeStatistics::collect(&survey);
//! let haccp = &stats[&Practice::Haccp];
//! assert_eq!(haccp.estimate(Answer::Yes).count, 2);
//! assert_eq!(haccp.estimate(Answer::Yes).proportion, 0.5);
//! assert_eq!(haccp.compliance(), Some(2.0 / 3.0));
//!
//! // Columns absent from the file are absent from the result.
//! assert!(!stats.contains_key(&Practice::WrittenProcedures));
//! ```

use std::collections::BTreeMap;

use hygiene_stats::proportion::{ConfidenceInterval, ProportionEstimate};
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    record::Survey,
    schema::{Answer, Practice},
};

/// Per-category statistics of one practice column.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeStatistics {
    pub practice: Practice,
    /// Estimates in [`Answer::ALL`] order.
    pub estimates: [(Answer, ProportionEstimate); 3],
}

impl PracticeStatistics {
    /// Computes statistics for every practice column present in the survey.
    #[must_use]
    pub fn collect(survey: &Survey) -> BTreeMap<Practice, Self> {
        Practice::ALL
            .into_iter()
            .filter(|practice| survey.has_column(practice.column()))
            .filter_map(|practice| {
                let answers = survey.records().iter().map(|r| r.practice(practice));
                Some((practice, Self::from_answers(practice, answers)?))
            })
            .collect()
    }

    /// Computes statistics from one column of answers.
    ///
    /// Returns `None` if the column is empty.
    #[must_use]
    pub fn from_answers<I>(practice: Practice, answers: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Answer>>,
    {
        let mut counts = [0_u64; 3];
        let mut total = 0_u64;
        for answer in answers {
            total += 1;
            if let Some(answer) = answer {
                counts[answer_index(answer)] += 1;
            }
        }

        let estimate = |answer: Answer| {
            ProportionEstimate::new(counts[answer_index(answer)], total)
                .map(|estimate| (answer, estimate))
        };
        Some(Self {
            practice,
            estimates: [
                estimate(Answer::Yes)?,
                estimate(Answer::No)?,
                estimate(Answer::Unknown)?,
            ],
        })
    }

    #[must_use]
    pub fn estimate(&self, answer: Answer) -> &ProportionEstimate {
        &self.estimates[answer_index(answer)].1
    }

    /// Number of cells in the column, including missing ones.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.estimates[0].1.total
    }

    /// Share of `Yes` among the `Yes`/`No` answers.
    ///
    /// Returns `None` if the column has no `Yes` or `No` answer.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn compliance(&self) -> Option<f64> {
        let yes = self.estimate(Answer::Yes).count;
        let no = self.estimate(Answer::No).count;
        (yes + no > 0).then(|| yes as f64 / (yes + no) as f64)
    }
}

fn answer_index(answer: Answer) -> usize {
    match answer {
        Answer::Yes => 0,
        Answer::No => 1,
        Answer::Unknown => 2,
    }
}

impl Serialize for PracticeStatistics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct CategoryShare {
            count: u64,
            proportion: f64,
        }

        let mut map = serializer.serialize_map(Some(self.estimates.len() + 1))?;
        for (answer, estimate) in &self.estimates {
            map.serialize_entry(
                answer,
                &CategoryShare {
                    count: estimate.count,
                    proportion: estimate.proportion,
                },
            )?;
        }
        let intervals = self
            .estimates
            .iter()
            .map(|(answer, estimate)| (*answer, estimate.confidence_interval))
            .collect::<BTreeMap<Answer, ConfidenceInterval>>();
        map.serialize_entry("confidence_intervals", &intervals)?;
        map.end()
    }
}
