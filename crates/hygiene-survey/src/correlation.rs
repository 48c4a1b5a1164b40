//! Correlation between training received and practices in place
//!
//! Each enterprise is turned into indicator variables: one per training
//! programme (1 when the training text mentions it, 0 otherwise, including
//! when the text is missing) and one per practice (1 for `Yes`, 0 for `No`,
//! missing otherwise). The matrix holds the Pearson correlation of every
//! pair of indicators over the enterprises where both are present.

use hygiene_stats::correlation::pairwise_pearson;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    record::{Record, Survey},
    schema::{Answer, Practice, TrainingType},
};

/// A variable of the correlation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Training(TrainingType),
    Practice(Practice),
}

impl Indicator {
    /// Indicators in matrix order: training programmes, then practices.
    pub fn all() -> impl Iterator<Item = Self> {
        TrainingType::PROGRAMMES
            .into_iter()
            .map(Self::Training)
            .chain(Practice::ALL.into_iter().map(Self::Practice))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Training(TrainingType::Bph) => "Formation_BPH",
            Self::Training(TrainingType::Bpf) => "Formation_BPF",
            Self::Training(TrainingType::Haccp) => "Formation_HACCP",
            Self::Training(TrainingType::NoTraining) => "Formation_Aucune",
            Self::Practice(practice) => practice.column(),
        }
    }

    /// Value of the indicator for one enterprise.
    #[must_use]
    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            Self::Training(training) => {
                let mentioned = record
                    .training
                    .as_deref()
                    .is_some_and(|text| training.is_mentioned_in(text));
                Some(if mentioned { 1.0 } else { 0.0 })
            }
            Self::Practice(practice) => match record.practice(practice)? {
                Answer::Yes => Some(1.0),
                Answer::No => Some(0.0),
                Answer::Unknown => None,
            },
        }
    }
}

/// Symmetric correlation matrix over a fixed list of indicators.
///
/// # Examples
///
/// ```
/// use hygiene_survey::{
///     correlation::{CorrelationMatrix, Indicator},
///     record::Survey,
///     schema::{Practice, TrainingType},
/// };
///
/// let csv = "ID_entreprise,Formation_reçue,Existence_HACCP\n\
///            E1,HACCP,Oui\nE2,Aucune,Non\nE3,BPH,Non\nE4,HACCP,Oui\n";
/// let survey = Survey::from_reader(csv.as_bytes()).unwrap();
///
/// let matrix = CorrelationMatrix::training_practice(&survey);
/// let r = matrix
///     .get(
///         Indicator::Training(TrainingType::Haccp),
///         Indicator::Practice(Practice::Haccp),
///     )
///     .unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    indicators: Vec<Indicator>,
    /// Row-major; `None` where the correlation is undefined.
    cells: Vec<Option<f64>>,
}

impl CorrelationMatrix {
    /// Correlation of training programmes and practices across the survey.
    ///
    /// Practices whose column is absent from the file are left out.
    #[must_use]
    pub fn training_practice(survey: &Survey) -> Self {
        let indicators = Indicator::all()
            .filter(|indicator| match indicator {
                Indicator::Training(_) => true,
                Indicator::Practice(practice) => survey.has_column(practice.column()),
            })
            .collect::<Vec<_>>();
        Self::compute(survey.records(), indicators)
    }

    #[must_use]
    pub fn compute(records: &[Record], indicators: Vec<Indicator>) -> Self {
        let series = indicators
            .iter()
            .map(|indicator| {
                records
                    .iter()
                    .map(|record| indicator.value(record))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let n = indicators.len();
        let mut cells = vec![None; n * n];
        for i in 0..n {
            for j in i..n {
                let r = pairwise_pearson(&series[i], &series[j]);
                cells[i * n + j] = r;
                cells[j * n + i] = r;
            }
        }
        Self { indicators, cells }
    }

    #[must_use]
    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Correlation of two indicators, `None` if undefined or not in the matrix.
    #[must_use]
    pub fn get(&self, row: Indicator, col: Indicator) -> Option<f64> {
        let i = self.position(row)?;
        let j = self.position(col)?;
        self.cells[i * self.indicators.len() + j]
    }

    /// Iterates over rows as `(indicator, cells)`.
    pub fn rows(&self) -> impl Iterator<Item = (Indicator, &[Option<f64>])> {
        let n = self.indicators.len().max(1);
        self.indicators
            .iter()
            .copied()
            .zip(self.cells.chunks(n))
    }

    fn position(&self, indicator: Indicator) -> Option<usize> {
        self.indicators.iter().position(|i| *i == indicator)
    }
}

impl Serialize for CorrelationMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct Row<'a> {
            labels: &'a [Indicator],
            cells: &'a [Option<f64>],
        }

        impl Serialize for Row<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut map = serializer.serialize_map(Some(self.labels.len()))?;
                for (indicator, cell) in self.labels.iter().zip(self.cells) {
                    map.serialize_entry(indicator.label(), cell)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.indicators.len()))?;
        for (indicator, cells) in self.rows() {
            map.serialize_entry(
                indicator.label(),
                &Row {
                    labels: &self.indicators,
                    cells,
                },
            )?;
        }
        map.end()
    }
}
