use std::collections::BTreeMap;

use hygiene_stats::{frequency::FrequencyTable, proportion::ProportionEstimate};
use serde::Serialize;

use crate::{
    correlation::CorrelationMatrix,
    obstacles,
    overview::Overview,
    practices::PracticeStatistics,
    record::{LoadReport, Survey},
    schema::{Obstacle, Practice, TrainingType},
    score::{self, CompanyScores},
    staff::StaffStatistics,
    training::{self, TrainingBreakdown},
};

/// Every analysis of the survey, computed in one pass.
///
/// This is the document written by the JSON export and the data behind the
/// text report.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub load_report: LoadReport,
    pub overview: Overview,
    pub hygiene: BTreeMap<Practice, PracticeStatistics>,
    pub staff: StaffStatistics,
    pub obstacles: BTreeMap<Obstacle, ProportionEstimate>,
    pub specific_obstacles: FrequencyTable<String>,
    pub training: BTreeMap<TrainingType, ProportionEstimate>,
    pub training_breakdown: TrainingBreakdown,
    pub scores: CompanyScores,
    pub product_type_scores: Vec<(String, f64)>,
    pub training_practice_correlation: CorrelationMatrix,
}

impl SurveySummary {
    #[must_use]
    pub fn compute(survey: &Survey) -> Self {
        let summary = Self {
            load_report: survey.report().clone(),
            overview: Overview::compute(survey),
            hygiene: PracticeStatistics::collect(survey),
            staff: StaffStatistics::compute(survey),
            obstacles: obstacles::obstacle_statistics(survey),
            specific_obstacles: obstacles::specific_obstacles(survey),
            training: training::training_statistics(survey),
            training_breakdown: TrainingBreakdown::compute(survey),
            scores: score::company_scores(survey),
            product_type_scores: score::product_type_scores(survey),
            training_practice_correlation: CorrelationMatrix::training_practice(survey),
        };
        tracing::debug!(
            practices = summary.hygiene.len(),
            obstacles = summary.obstacles.len(),
            training_types = summary.training.len(),
            companies = summary.scores.len(),
            "survey summary computed"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
ID_entreprise,Localisation,Type _de_produit,Effectif_du_personnel,Formation_reçue,\
Existence_BPH,Existence_BPF,Existence_HACCP,Procedures_ecrites,\
Formation_du_personnel_en_hygiene,Hygiene_du_personnel,Hygiene_des_locaux,\
Stockage_des_matieres_premieres,Controle_qualite_regulier,\
Obstacle_technique,Obstacle_financier,Obstacle_organisationnel,Obstacle_humain,Autres_obstacles
E1,Dakar,Jus,10 à 20,\"BPH, HACCP\",Oui,Oui,Oui,Oui,Oui,Oui,Oui,Oui,Oui,Non,Oui,Non,Non,\"manque d'eau, financement\"
E2,Thiès,Lait,20 à 30,Aucune,Non,Non,Non,Non,Inconnu,Oui,Oui,Non,Non,Oui,Oui,Inconnu,Non,financement
E3,Dakar,Jus,10 à 20,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Oui,Non,Non,Inconnu
";

    #[test]
    fn test_full_survey() {
        let survey = Survey::from_reader(FULL.as_bytes()).unwrap();
        let summary = SurveySummary::compute(&survey);

        assert_eq!(summary.hygiene.len(), Practice::ALL.len());
        assert_eq!(summary.obstacles.len(), Obstacle::ALL.len());
        assert_eq!(summary.training.len(), TrainingType::ALL.len());
        assert_eq!(summary.scores.len(), 3);
        assert_eq!(summary.specific_obstacles.get("financement"), 2);
        assert_eq!(summary.training_breakdown.multiple, 1);

        let financial = &summary.obstacles[&Obstacle::Financial];
        assert_eq!((financial.count, financial.total), (3, 3));

        let staff = summary.staff.summary.as_ref().unwrap();
        assert_eq!(staff.count, 3);

        let e3 = summary.scores.get("E3").unwrap();
        assert_eq!(e3.known_practices, 0);
    }

    #[test]
    fn test_minimal_survey_yields_empty_sections() {
        let survey = Survey::from_reader("ID_entreprise\nE1\nE2\n".as_bytes()).unwrap();
        let summary = SurveySummary::compute(&survey);

        assert!(summary.hygiene.is_empty());
        assert!(summary.staff.is_empty());
        assert!(summary.obstacles.is_empty());
        assert!(summary.specific_obstacles.is_empty());
        assert!(summary.training.is_empty());
        assert!(summary.product_type_scores.is_empty());
        assert_eq!(summary.scores.len(), 2);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["staff"], serde_json::json!({}));
        assert_eq!(json["specific_obstacles"], serde_json::json!({}));
        assert_eq!(json["scores"]["E1"], 0.0);
    }

    #[test]
    fn test_export_keys() {
        let survey = Survey::from_reader(FULL.as_bytes()).unwrap();
        let json = serde_json::to_value(SurveySummary::compute(&survey)).unwrap();
        assert!(json["hygiene"]["Existence_HACCP"]["Oui"]["proportion"].is_number());
        assert!(json["obstacles"]["Obstacle_financier"]["confidence_interval"].is_array());
        assert!(json["training"]["HACCP"]["proportion"].is_number());
        assert!(json["staff"]["confidence_intervals"]["10 à 20"].is_array());
        assert_eq!(json["load_report"]["rows"], 3);
    }
}
