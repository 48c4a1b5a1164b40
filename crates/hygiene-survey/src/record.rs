//! Survey table loading and validation
//!
//! [`Survey`] is the immutable, in-memory form of the survey file. Loading is
//! all-or-nothing: either every row is read and validated, or a
//! [`LoadError`] is returned and nothing is kept.
//!
//! This is the single place where raw cell text is turned into the closed
//! vocabularies of [`crate::schema`]. Empty cells and the usual spreadsheet
//! null markers ([`NA_MARKERS`]) are missing. Obstacle answers outside the
//! vocabulary become `None`; practice cells outside it are kept as
//! [`PracticeCell::Unlisted`]. Both are counted in the [`LoadReport`].
//!
//! # Examples
//!
//! ```
//! use hygiene_survey::{record::Survey, schema::{Answer, Practice}};
//!
//! let csv = "ID_entreprise,Existence_HACCP\nE1,Oui\nE2,Peut-être\n";
//! let survey = Survey::from_reader(csv.as_bytes()).unwrap();
//!
//! assert_eq!(survey.len(), 2);
//! assert_eq!(survey.records()[0].practice(Practice::Haccp), Some(Answer::Yes));
//! assert_eq!(survey.records()[1].practice(Practice::Haccp), None);
//! assert_eq!(survey.report().out_of_vocabulary_cells, 1);
//! ```

use std::{fs::File, io, path::Path, path::PathBuf};

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

use crate::schema::{Answer, Obstacle, Practice, PracticeCell, StaffSize, UNKNOWN_LABEL, column};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Cell texts read as missing values, in addition to the empty cell.
pub const NA_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to open survey file {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("failed to parse survey CSV: {_0}")]
    Csv(#[error(source)] csv::Error),
    #[display("survey file has no '{column}' column")]
    MissingColumn { column: &'static str },
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One surveyed enterprise.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub location: Option<String>,
    pub product_type: Option<String>,
    pub staff_size: Option<StaffSize>,
    /// Free-text description of the training received.
    pub training: Option<String>,
    /// Cells indexed by [`Practice::index`].
    pub practices: [Option<PracticeCell>; 9],
    /// Answers indexed by [`Obstacle::index`].
    pub obstacles: [Option<Answer>; 4],
    /// Free-text list of other obstacles, separated by `,` or `;`.
    pub other_obstacles: Option<String>,
}

impl Record {
    #[must_use]
    pub fn practice(&self, practice: Practice) -> Option<Answer> {
        self.practice_cell(practice).and_then(PracticeCell::answer)
    }

    #[must_use]
    pub fn practice_cell(&self, practice: Practice) -> Option<PracticeCell> {
        self.practices[practice.index()]
    }

    #[must_use]
    pub fn obstacle(&self, obstacle: Obstacle) -> Option<Answer> {
        self.obstacles[obstacle.index()]
    }
}

/// Counters collected while validating the survey file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Number of data rows.
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
    /// Cells (in any column) whose text is exactly `Inconnu`.
    pub unknown_cells: usize,
    /// Categorical cells with a value outside their vocabulary.
    pub out_of_vocabulary_cells: usize,
}

/// Positions of the known columns in the header.
#[derive(Debug, Clone)]
struct ColumnLayout {
    id: usize,
    location: Option<usize>,
    product_type: Option<usize>,
    staff_size: Option<usize>,
    training: Option<usize>,
    practices: [Option<usize>; 9],
    obstacles: [Option<usize>; 4],
    other_obstacles: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &[String]) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        Ok(Self {
            id: position(column::ID).ok_or(LoadError::MissingColumn { column: column::ID })?,
            location: position(column::LOCATION),
            product_type: position(column::PRODUCT_TYPE),
            staff_size: position(column::STAFF_SIZE),
            training: position(column::TRAINING),
            practices: Practice::ALL.map(|p| position(p.column())),
            obstacles: Obstacle::ALL.map(|o| position(o.column())),
            other_obstacles: position(column::OTHER_OBSTACLES),
        })
    }
}

/// The loaded survey table.
///
/// Created once per process and shared by reference with every analysis.
#[derive(Debug, Clone)]
pub struct Survey {
    records: Vec<Record>,
    headers: Vec<String>,
    report: LoadReport,
}

impl Survey {
    /// Loads the survey from a CSV file.
    pub fn open<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
        let survey = Self::from_reader(file)?;
        tracing::debug!(
            path = %path.display(),
            rows = survey.report.rows,
            "survey file loaded"
        );
        Ok(survey)
    }

    /// Loads the survey from any CSV source.
    ///
    /// A leading UTF-8 byte-order mark is ignored. Rows shorter than the
    /// header are accepted; their trailing cells are treated as empty.
    pub fn from_reader<R>(reader: R) -> Result<Self, LoadError>
    where
        R: io::Read,
    {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                if idx == 0 {
                    h.trim_start_matches(BYTE_ORDER_MARK).to_owned()
                } else {
                    h.to_owned()
                }
            })
            .collect::<Vec<_>>();
        let layout = ColumnLayout::from_headers(&headers)?;

        let mut report = LoadReport {
            columns: headers.len(),
            ..LoadReport::default()
        };
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            report.unknown_cells += row
                .iter()
                .take(headers.len())
                .filter(|cell| *cell == UNKNOWN_LABEL)
                .count();
            records.push(parse_record(&layout, &row, &mut report));
        }
        report.rows = records.len();

        tracing::debug!(
            rows = report.rows,
            columns = report.columns,
            unknown_cells = report.unknown_cells,
            out_of_vocabulary_cells = report.out_of_vocabulary_cells,
            "survey validated"
        );

        Ok(Self {
            records,
            headers,
            report,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header names in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns `true` if the file has a column named `name`.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    #[must_use]
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Finds the first record with the given enterprise ID.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Enterprise IDs in ascending order, without duplicates.
    #[must_use]
    pub fn company_ids(&self) -> Vec<&str> {
        let mut ids = self.records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

fn parse_record(layout: &ColumnLayout, row: &StringRecord, report: &mut LoadReport) -> Record {
    let cell = |idx: Option<usize>| {
        idx.and_then(|idx| row.get(idx))
            .filter(|text| !text.is_empty() && !NA_MARKERS.contains(text))
    };

    let practices = layout.practices.map(|idx| {
        let parsed = PracticeCell::parse(cell(idx)?);
        if parsed == PracticeCell::Unlisted {
            report.out_of_vocabulary_cells += 1;
        }
        Some(parsed)
    });
    let obstacles = layout.obstacles.map(|idx| {
        let answer = Answer::parse(cell(idx)?);
        if answer.is_none() {
            report.out_of_vocabulary_cells += 1;
        }
        answer
    });

    let staff_size = cell(layout.staff_size).map(StaffSize::parse);
    if let Some(StaffSize::Unlisted(label)) = &staff_size
        && label != UNKNOWN_LABEL
    {
        report.out_of_vocabulary_cells += 1;
    }

    Record {
        id: cell(Some(layout.id)).unwrap_or_default().to_owned(),
        location: cell(layout.location).map(str::to_owned),
        product_type: cell(layout.product_type).map(str::to_owned),
        staff_size,
        training: cell(layout.training).map(str::to_owned),
        practices,
        obstacles,
        other_obstacles: cell(layout.other_obstacles).map(str::to_owned),
    }
}
