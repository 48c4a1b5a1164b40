//! Survey schema: column names and closed vocabularies
//!
//! Every categorical value in the dataset is matched against one of the
//! enumerations below exactly once, when the file is loaded. Analyses work on
//! these types and never compare raw strings.

use std::fmt;

use serde::Serialize;

/// Column names of the survey file.
pub mod column {
    pub const ID: &str = "ID_entreprise";
    pub const LOCATION: &str = "Localisation";
    pub const PRODUCT_TYPE: &str = "Type _de_produit";
    pub const STAFF_SIZE: &str = "Effectif_du_personnel";
    pub const TRAINING: &str = "Formation_reçue";
    pub const OTHER_OBSTACLES: &str = "Autres_obstacles";
}

/// Cell text used by the survey for "not known".
pub const UNKNOWN_LABEL: &str = "Inconnu";

/// Answer to a practice or obstacle question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Answer {
    #[serde(rename = "Oui")]
    Yes,
    #[serde(rename = "Non")]
    No,
    #[serde(rename = "Inconnu")]
    Unknown,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.label(), f)
    }
}

impl Answer {
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Unknown];

    /// Parses a cell of the survey file.
    ///
    /// Returns `None` for anything outside the `Oui`/`Non`/`Inconnu` vocabulary.
    #[must_use]
    pub fn parse(cell: &str) -> Option<Self> {
        match cell {
            "Oui" => Some(Self::Yes),
            "Non" => Some(Self::No),
            UNKNOWN_LABEL => Some(Self::Unknown),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Oui",
            Self::No => "Non",
            Self::Unknown => UNKNOWN_LABEL,
        }
    }

    /// Returns `true` for `Yes` and `No`.
    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Non-empty cell of a practice column.
///
/// Text outside the answer vocabulary is kept as [`PracticeCell::Unlisted`]:
/// it is a known, non-compliant state for the hygiene score, and is ignored
/// everywhere answers are tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PracticeCell {
    Answer(Answer),
    Unlisted,
}

impl From<Answer> for PracticeCell {
    fn from(answer: Answer) -> Self {
        Self::Answer(answer)
    }
}

impl PracticeCell {
    #[must_use]
    pub fn parse(cell: &str) -> Self {
        Answer::parse(cell).map_or(Self::Unlisted, Self::Answer)
    }

    #[must_use]
    pub fn answer(self) -> Option<Answer> {
        match self {
            Self::Answer(answer) => Some(answer),
            Self::Unlisted => None,
        }
    }
}

/// The nine hygiene practices surveyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Practice {
    #[serde(rename = "Existence_BPH")]
    GoodHygienePractices,
    #[serde(rename = "Existence_BPF")]
    GoodManufacturingPractices,
    #[serde(rename = "Existence_HACCP")]
    Haccp,
    #[serde(rename = "Procedures_ecrites")]
    WrittenProcedures,
    #[serde(rename = "Formation_du_personnel_en_hygiene")]
    StaffHygieneTraining,
    #[serde(rename = "Hygiene_du_personnel")]
    StaffHygiene,
    #[serde(rename = "Hygiene_des_locaux")]
    PremisesHygiene,
    #[serde(rename = "Stockage_des_matieres_premieres")]
    RawMaterialStorage,
    #[serde(rename = "Controle_qualite_regulier")]
    RegularQualityControl,
}

impl fmt::Display for Practice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.label(), f)
    }
}

impl Practice {
    pub const ALL: [Self; 9] = [
        Self::GoodHygienePractices,
        Self::GoodManufacturingPractices,
        Self::Haccp,
        Self::WrittenProcedures,
        Self::StaffHygieneTraining,
        Self::StaffHygiene,
        Self::PremisesHygiene,
        Self::RawMaterialStorage,
        Self::RegularQualityControl,
    ];

    /// Position of the practice in [`Practice::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::GoodHygienePractices => "Existence_BPH",
            Self::GoodManufacturingPractices => "Existence_BPF",
            Self::Haccp => "Existence_HACCP",
            Self::WrittenProcedures => "Procedures_ecrites",
            Self::StaffHygieneTraining => "Formation_du_personnel_en_hygiene",
            Self::StaffHygiene => "Hygiene_du_personnel",
            Self::PremisesHygiene => "Hygiene_des_locaux",
            Self::RawMaterialStorage => "Stockage_des_matieres_premieres",
            Self::RegularQualityControl => "Controle_qualite_regulier",
        }
    }

    /// Short label for charts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GoodHygienePractices => "BPH",
            Self::GoodManufacturingPractices => "BPF",
            Self::Haccp => "HACCP",
            Self::WrittenProcedures => "Procédures écrites",
            Self::StaffHygieneTraining => "Formation personnel",
            Self::StaffHygiene => "Hygiène personnel",
            Self::PremisesHygiene => "Hygiène locaux",
            Self::RawMaterialStorage => "Stockage matières",
            Self::RegularQualityControl => "Contrôle qualité",
        }
    }
}

/// The four obstacle categories surveyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Obstacle {
    #[serde(rename = "Obstacle_technique")]
    Technical,
    #[serde(rename = "Obstacle_financier")]
    Financial,
    #[serde(rename = "Obstacle_organisationnel")]
    Organisational,
    #[serde(rename = "Obstacle_humain")]
    Human,
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.label(), f)
    }
}

impl Obstacle {
    pub const ALL: [Self; 4] = [
        Self::Technical,
        Self::Financial,
        Self::Organisational,
        Self::Human,
    ];

    /// Position of the obstacle in [`Obstacle::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Technical => "Obstacle_technique",
            Self::Financial => "Obstacle_financier",
            Self::Organisational => "Obstacle_organisationnel",
            Self::Human => "Obstacle_humain",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technique",
            Self::Financial => "Financier",
            Self::Organisational => "Organisationnel",
            Self::Human => "Humain",
        }
    }
}

/// Training programmes recognised in the free-text training column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TrainingType {
    #[serde(rename = "BPH")]
    Bph,
    #[serde(rename = "BPF")]
    Bpf,
    #[serde(rename = "HACCP")]
    Haccp,
    #[serde(rename = "Aucune")]
    NoTraining,
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.token(), f)
    }
}

impl TrainingType {
    pub const ALL: [Self; 4] = [Self::Bph, Self::Bpf, Self::Haccp, Self::NoTraining];

    /// Programmes that count as actual training.
    pub const PROGRAMMES: [Self; 3] = [Self::Bph, Self::Bpf, Self::Haccp];

    /// Substring searched for in the training text.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Bph => "BPH",
            Self::Bpf => "BPF",
            Self::Haccp => "HACCP",
            Self::NoTraining => "Aucune",
        }
    }

    /// Returns `true` if `text` mentions this training.
    ///
    /// The match is a case-sensitive substring test, so `"BPHX"` also
    /// mentions BPH.
    #[must_use]
    pub fn is_mentioned_in(self, text: &str) -> bool {
        text.contains(self.token())
    }
}

/// Staff-size bucket.
///
/// Only the two buckets with a representative head count are recognised;
/// every other label is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StaffSize {
    TenToTwenty,
    TwentyToThirty,
    Unlisted(String),
}

impl fmt::Display for StaffSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.label(), f)
    }
}

impl StaffSize {
    const TEN_TO_TWENTY: &'static str = "10 à 20";
    const TWENTY_TO_THIRTY: &'static str = "20 à 30";

    #[must_use]
    pub fn parse(cell: &str) -> Self {
        match cell {
            Self::TEN_TO_TWENTY => Self::TenToTwenty,
            Self::TWENTY_TO_THIRTY => Self::TwentyToThirty,
            other => Self::Unlisted(other.to_owned()),
        }
    }

    /// The label as written in the survey file.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::TenToTwenty => Self::TEN_TO_TWENTY,
            Self::TwentyToThirty => Self::TWENTY_TO_THIRTY,
            Self::Unlisted(label) => label,
        }
    }

    /// Representative head count of the bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use hygiene_survey::schema::StaffSize;
    ///
    /// assert_eq!(StaffSize::parse("10 à 20").midpoint(), Some(15.0));
    /// assert_eq!(StaffSize::parse("20 à 30").midpoint(), Some(25.0));
    /// assert_eq!(StaffSize::parse("30 à 40").midpoint(), None);
    /// ```
    #[must_use]
    pub fn midpoint(&self) -> Option<f64> {
        match self {
            Self::TenToTwenty => Some(15.0),
            Self::TwentyToThirty => Some(25.0),
            Self::Unlisted(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_vocabulary() {
        for answer in Answer::ALL {
            assert_eq!(Answer::parse(answer.label()), Some(answer));
        }
        assert_eq!(Answer::parse("oui"), None);
        assert_eq!(Answer::parse(" Oui"), None);
        assert_eq!(Answer::parse(""), None);
    }

    #[test]
    fn test_indices_follow_all_order() {
        for (idx, practice) in Practice::ALL.into_iter().enumerate() {
            assert_eq!(practice.index(), idx);
        }
        for (idx, obstacle) in Obstacle::ALL.into_iter().enumerate() {
            assert_eq!(obstacle.index(), idx);
        }
    }

    #[test]
    fn test_serialized_names_are_columns() {
        for practice in Practice::ALL {
            let json = serde_json::to_value(practice).unwrap();
            assert_eq!(json, practice.column());
        }
        for obstacle in Obstacle::ALL {
            let json = serde_json::to_value(obstacle).unwrap();
            assert_eq!(json, obstacle.column());
        }
    }

    #[test]
    fn test_training_mention_is_case_sensitive() {
        assert!(TrainingType::Haccp.is_mentioned_in("Formation HACCP"));
        assert!(!TrainingType::Haccp.is_mentioned_in("formation haccp"));
        assert!(TrainingType::NoTraining.is_mentioned_in("Aucune"));
    }

    #[test]
    fn test_staff_label_round_trip() {
        assert_eq!(StaffSize::parse("10 à 20"), StaffSize::TenToTwenty);
        assert_eq!(
            StaffSize::parse("Inconnu"),
            StaffSize::Unlisted("Inconnu".to_owned())
        );
        assert_eq!(StaffSize::parse("Inconnu").label(), "Inconnu");
    }
}
