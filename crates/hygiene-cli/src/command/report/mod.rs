//! Text report command
//!
//! Prints every analysis of the survey as aligned text tables, one section
//! after another.

mod table;

use hygiene_survey::{
    Survey,
    correlation::{CorrelationMatrix, Indicator},
    schema::{Answer, TrainingType},
    summary::SurveySummary,
};

use self::table::ProportionTableRow;
use crate::util::format_or_na;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Number of specific obstacles to list
    #[arg(long, default_value_t = 15)]
    top_obstacles: usize,
}

pub(crate) fn run(survey: &Survey, arg: &ReportArg) -> anyhow::Result<()> {
    let summary = SurveySummary::compute(survey);

    print_overview(&summary);
    println!();
    print_practices(&summary);
    println!();
    print_staff(&summary);
    println!();
    print_obstacles(&summary, arg.top_obstacles);
    println!();
    print_training(&summary);
    println!();
    print_scores(&summary);
    println!();
    print_correlation(&summary.training_practice_correlation);

    Ok(())
}

fn print_overview(summary: &SurveySummary) {
    let overview = &summary.overview;
    let report = &summary.load_report;

    table::print_title("Survey Overview");
    println!(
        "  Rows: {}, columns: {}, out-of-vocabulary cells: {}",
        report.rows, report.columns, report.out_of_vocabulary_cells
    );
    println!("  Enterprises:        {}", overview.companies);
    println!("  Locations:          {}", overview.locations);
    println!("  Product types:      {}", overview.product_types);
    println!("  Missing data rate:  {:.1}%", overview.missing_rate);
    println!();

    println!("Enterprises by product type");
    table::print_count_table(
        "Product type",
        overview
            .product_distribution
            .iter()
            .map(|(product, count)| (product.as_str(), count)),
    );
}

fn print_practices(summary: &SurveySummary) {
    table::print_title("Hygiene Practices");
    if summary.hygiene.is_empty() {
        println!("  No practice column in the survey.");
        return;
    }
    for stats in summary.hygiene.values() {
        println!(
            "{} ({}), compliance: {}",
            stats.practice,
            stats.practice.column(),
            format_or_na(stats.compliance(), |c| format!("{:.1}%", 100.0 * c)),
        );
        let rows = stats
            .estimates
            .iter()
            .map(|(answer, estimate)| ProportionTableRow {
                label: answer.to_string(),
                estimate,
            })
            .collect();
        table::print_proportion_table("Answer", rows);
        println!();
    }
}

fn print_staff(summary: &SurveySummary) {
    table::print_title("Staff Size");
    let Some(stats) = &summary.staff.summary else {
        println!("  No enterprise with a known staff-size bucket.");
        return;
    };

    table::print_value_table(
        "Statistic",
        "Value",
        stats
            .entries()
            .map(|(name, value)| (name, format!("{value:.2}"))),
    );
    println!();

    let rows = summary
        .staff
        .confidence_intervals
        .iter()
        .map(|(label, estimate)| ProportionTableRow {
            label: label.clone(),
            estimate,
        })
        .collect();
    table::print_proportion_table("Staff size", rows);
}

fn print_obstacles(summary: &SurveySummary, top: usize) {
    table::print_title("Obstacles");
    let rows = summary
        .obstacles
        .iter()
        .map(|(obstacle, estimate)| ProportionTableRow {
            label: obstacle.to_string(),
            estimate,
        })
        .collect();
    table::print_proportion_table("Obstacle (Oui among Oui/Non)", rows);
    println!();

    println!("Other obstacles mentioned");
    if summary.specific_obstacles.is_empty() {
        println!("  None.");
        return;
    }
    table::print_count_table(
        "Obstacle",
        summary
            .specific_obstacles
            .iter()
            .take(top)
            .map(|(token, count)| (token.as_str(), count)),
    );
    let hidden = summary.specific_obstacles.len().saturating_sub(top);
    if hidden > 0 {
        println!("  ... and {hidden} more");
    }
}

fn print_training(summary: &SurveySummary) {
    table::print_title("Training");
    if summary.training.is_empty() {
        println!("  No training information in the survey.");
        return;
    }
    let rows = summary
        .training
        .iter()
        .map(|(training, estimate)| ProportionTableRow {
            label: training.to_string(),
            estimate,
        })
        .collect();
    table::print_proportion_table("Training", rows);
    println!();

    println!("Training distribution");
    table::print_count_table("Category", summary.training_breakdown.entries());
}

fn print_scores(summary: &SurveySummary) {
    table::print_title("Hygiene Scores");
    if let Some(stats) = summary.scores.stats() {
        println!(
            "  Mean: {:.3}, median: {:.3}, min: {:.3}, max: {:.3}, std: {}",
            stats.mean,
            stats.median,
            stats.min,
            stats.max,
            format_or_na(stats.std_dev, |s| format!("{s:.3}")),
        );
        println!();
    }

    let mut scores = summary.scores.iter().collect::<Vec<_>>();
    scores.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));
    table::print_value_table(
        "Enterprise",
        "Score",
        scores.into_iter().map(|(id, score)| {
            let value = if score.known_practices == 0 {
                "N/A".to_owned()
            } else {
                format!("{:.3}", score.score)
            };
            (id, value)
        }),
    );
    println!();

    println!("Mean score by product type (scores above zero)");
    table::print_value_table(
        "Product type",
        "Score",
        summary
            .product_type_scores
            .iter()
            .map(|(product, mean)| (product.as_str(), format!("{mean:.3}"))),
    );
}

fn print_correlation(matrix: &CorrelationMatrix) {
    table::print_title("Training / Practice Correlation");
    let programmes = TrainingType::PROGRAMMES.map(Indicator::Training);

    print!("  {:<34}", "Practice");
    for programme in &programmes {
        print!(" {:>16}", programme.label());
    }
    println!();
    println!("  {}", "-".repeat(34 + 17 * programmes.len()));

    for &indicator in matrix.indicators() {
        let Indicator::Practice(practice) = indicator else {
            continue;
        };
        print!("  {:<34}", practice.column());
        for &programme in &programmes {
            let cell = format_or_na(matrix.get(indicator, programme), |r| format!("{r:+.2}"));
            print!(" {cell:>16}");
        }
        println!();
    }
    println!();
    println!(
        "  Practice indicators: {} = 1, {} = 0, {} excluded.",
        Answer::Yes,
        Answer::No,
        Answer::Unknown
    );
}

#[cfg(test)]
mod tests {
    use hygiene_stats::proportion::ProportionEstimate;

    use super::*;

    #[test]
    fn test_report_runs_on_full_and_minimal_surveys() {
        let csv = "ID_entreprise,Localisation,Effectif_du_personnel,Formation_reçue,\
                   Existence_BPH,Obstacle_humain,Autres_obstacles\n\
                   E1,Dakar,10 à 20,BPH,Oui,Non,\"coût, accès\"\n\
                   E2,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu,Inconnu\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        run(&survey, &ReportArg { top_obstacles: 1 }).unwrap();

        let minimal = Survey::from_reader("ID_entreprise\nE1\n".as_bytes()).unwrap();
        run(&minimal, &ReportArg::default()).unwrap();
    }

    #[test]
    fn test_format_interval() {
        let estimate = ProportionEstimate::new(0, 10).unwrap();
        assert_eq!(
            table::format_interval(estimate.confidence_interval),
            "[0.000, 0.000]"
        );
    }
}
