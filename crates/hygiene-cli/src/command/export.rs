use std::path::PathBuf;

use hygiene_survey::{Survey, summary::SurveySummary};

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ExportArg {
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(survey: &Survey, arg: &ExportArg) -> anyhow::Result<()> {
    let ExportArg { output } = arg;

    let summary = SurveySummary::compute(survey);
    Output::save_json(&summary, output.clone())?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), "survey summary exported");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURVEY: &str = "\
ID_entreprise,Formation_reçue,Existence_BPH,Existence_HACCP,Obstacle_financier,Autres_obstacles
E1,\"BPH, HACCP\",Oui,Oui,Oui,financement
E2,Aucune,Non,Partiel,Non,
";

    #[test]
    fn test_export_writes_summary_document() {
        let survey = Survey::from_reader(SURVEY.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let arg = ExportArg {
            output: Some(path.clone()),
        };
        run(&survey, &arg).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let json = serde_json::from_str::<serde_json::Value>(&text).unwrap();
        for key in ["hygiene", "obstacles", "training", "scores", "overview"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["hygiene"]["Existence_BPH"]["Oui"]["count"], 1);
        assert!(json["obstacles"]["Obstacle_financier"]["confidence_interval"].is_array());
        assert_eq!(json["scores"]["E1"], 1.0);
        assert_eq!(json["scores"]["E2"], 0.0);
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let survey = Survey::from_reader(SURVEY.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let arg = ExportArg {
            output: Some(dir.path().join("absent").join("summary.json")),
        };
        assert!(run(&survey, &arg).is_err());
    }
}
