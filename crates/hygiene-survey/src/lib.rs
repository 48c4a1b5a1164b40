//! Statistics engine for the SME food-hygiene survey
//!
//! This crate loads the survey table (one row per enterprise) and derives the
//! statistics shown by the `hygiene` tool: per-practice proportions with exact
//! binomial confidence intervals, obstacle and training indicators, a
//! staff-size summary and a composite hygiene score per enterprise.
//!
//! # Overview
//!
//! 1. **Load** ([`record::Survey`]): read and validate the CSV file once. Every
//!    categorical cell is matched against the closed vocabularies of
//!    [`schema`] here and nowhere else.
//! 2. **Analyse**: each module takes the survey by reference and returns a
//!    serializable result.
//!    - [`practices`]: answer categories of the nine hygiene practices
//!    - [`staff`]: staff-size summary from bucket midpoints
//!    - [`obstacles`]: obstacle columns and the free-text obstacle tokenizer
//!    - [`training`]: training programmes mentioned in the free-text column
//!    - [`score`]: composite hygiene score, company profiles and product-type means
//!    - [`correlation`]: training/practice correlation matrix
//!    - [`overview`]: headline figures
//! 3. **Summarize** ([`summary::SurveySummary`]): all of the above at once.
//!
//! Missing optional columns never fail an analysis; the corresponding result
//! is empty.
//!
//! # Examples
//!
//! ```
//! use hygiene_survey::{record::Survey, summary::SurveySummary};
//!
//! let csv = "\
//! ID_entreprise,Existence_HACCP,Obstacle_financier,Autres_obstacles
//! E1,Oui,Oui,\"manque d'eau; financement\"
//! E2,Non,Oui,financement
//! E3,Inconnu,Non,Inconnu
//! ";
//! let survey = Survey::from_reader(csv.as_bytes())?;
//! let summary = SurveySummary::compute(&survey);
//!
//! let top = summary.specific_obstacles.iter().next();
//! assert_eq!(top.map(|(token, count)| (token.as_str(), count)), Some(("financement", 2)));
//!
//! println!("{}", serde_json::to_string_pretty(&summary)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod correlation;
pub mod obstacles;
pub mod overview;
pub mod practices;
pub mod record;
pub mod schema;
pub mod score;
pub mod staff;
pub mod summary;
pub mod training;

pub use self::record::{LoadError, Survey};
