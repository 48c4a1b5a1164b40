use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{dashboard::DashboardArg, export::ExportArg, report::ReportArg};

mod dashboard;
mod export;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the survey CSV file
    #[arg(long, global = true, env = "HYGIENE_DATA", default_value = "data.csv")]
    data: PathBuf,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print every analysis as text tables
    Report(#[clap(flatten)] ReportArg),
    /// Write every analysis as JSON
    Export(#[clap(flatten)] ExportArg),
    /// Browse the analyses in an interactive dashboard
    Dashboard(#[clap(flatten)] DashboardArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::util::init_logging(args.verbose);

    let survey = crate::util::load_survey(&args.data)?;
    match args.mode.unwrap_or(Mode::Dashboard(DashboardArg::default())) {
        Mode::Report(arg) => report::run(&survey, &arg)?,
        Mode::Export(arg) => export::run(&survey, &arg)?,
        Mode::Dashboard(arg) => dashboard::run(&survey, &arg)?,
    }
    Ok(())
}
