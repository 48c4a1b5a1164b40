//! Text table display
//!
//! Every proportion in the report is printed with the same columns, so the
//! practice, obstacle, training and staff tables line up.

use hygiene_stats::proportion::{ConfidenceInterval, ProportionEstimate};

const LABEL_WIDTH: usize = 36;

/// A row in a proportion table
pub(super) struct ProportionTableRow<'a> {
    /// Label for this row (e.g., category, obstacle, training type)
    pub label: String,
    pub estimate: &'a ProportionEstimate,
}

pub(super) fn format_interval(ci: ConfidenceInterval) -> String {
    format!("[{:.3}, {:.3}]", ci.lower, ci.upper)
}

fn print_proportion_table_header(label_col: &str) {
    println!(
        "  {:<LABEL_WIDTH$} {:>8} {:>8} {:>10} {:>18}",
        label_col, "Count", "Total", "Percent", "CI 95%",
    );
}

fn print_separator(width: usize) {
    println!("  {}", "-".repeat(width));
}

fn print_proportion_table_row(row: &ProportionTableRow) {
    let estimate = row.estimate;
    println!(
        "  {:<LABEL_WIDTH$} {:>8} {:>8} {:>9.1}% {:>18}",
        row.label,
        estimate.count,
        estimate.total,
        100.0 * estimate.proportion,
        format_interval(estimate.confidence_interval),
    );
}

/// Print a table of proportion estimates
pub(super) fn print_proportion_table(label_col: &str, rows: Vec<ProportionTableRow>) {
    print_proportion_table_header(label_col);
    // label + count(8) + total(8) + percent(10) + ci(18) + spaces(4)
    print_separator(LABEL_WIDTH + 48);
    for row in rows {
        print_proportion_table_row(&row);
    }
}

/// Print a two-column table of labelled counts
pub(super) fn print_count_table<'a, I>(label_col: &str, rows: I)
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    println!("  {:<LABEL_WIDTH$} {:>8}", label_col, "Count");
    print_separator(LABEL_WIDTH + 9);
    for (label, count) in rows {
        println!("  {label:<LABEL_WIDTH$} {count:>8}");
    }
}

/// Print a two-column table of labelled values
pub(super) fn print_value_table<'a, I>(label_col: &str, value_col: &str, rows: I)
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    println!("  {label_col:<LABEL_WIDTH$} {value_col:>10}");
    print_separator(LABEL_WIDTH + 11);
    for (label, value) in rows {
        println!("  {label:<LABEL_WIDTH$} {value:>10}");
    }
}

pub(super) fn print_title(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
}
