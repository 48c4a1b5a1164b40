//! Interactive dashboard command
//!
//! Computes every analysis once, then lets the user browse them section by
//! section in the terminal.

use hygiene_survey::{Survey, score::CompanyProfile, summary::SurveySummary};

use self::app::{App, DashboardData};

mod app;
mod sections;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DashboardArg {
    /// Enterprise selected when the dashboard opens
    #[arg(long)]
    company: Option<String>,
}

pub(crate) fn run(survey: &Survey, arg: &DashboardArg) -> anyhow::Result<()> {
    let summary = SurveySummary::compute(survey);
    let companies = survey
        .company_ids()
        .into_iter()
        .filter_map(|id| CompanyProfile::find(survey, id))
        .collect::<Vec<_>>();
    tracing::info!(companies = companies.len(), "dashboard data ready");

    let data = DashboardData { summary, companies };
    let mut app = App::new(data);
    if let Some(id) = &arg.company {
        app.select_company(id);
    }

    let mut terminal = ratatui::init();
    let app_result = app.run(&mut terminal);
    ratatui::restore();
    app_result
}
