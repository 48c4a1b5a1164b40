use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect, Spacing},
    text::Line,
    widgets::{Bar, BarChart, Paragraph, Widget},
};

use super::bordered;
use crate::command::dashboard::app::DashboardData;

pub(super) struct OverviewSection<'a> {
    pub data: &'a DashboardData,
}

impl Widget for OverviewSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let summary = &self.data.summary;
        let overview = &summary.overview;
        let report = &summary.load_report;

        let [figures_pane, products_pane] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .spacing(Spacing::Overlap(1))
                .areas(area);

        let text = vec![
            Line::raw(format!("  Enterprises:        {:>8}", overview.companies)),
            Line::raw(format!("  Locations:          {:>8}", overview.locations)),
            Line::raw(format!("  Product types:      {:>8}", overview.product_types)),
            Line::raw(format!("  Missing data rate:  {:>7.1}%", overview.missing_rate)),
            Line::raw(""),
            Line::raw(format!("  Rows:               {:>8}", report.rows)),
            Line::raw(format!("  Columns:            {:>8}", report.columns)),
            Line::raw(format!("  'Inconnu' cells:    {:>8}", report.unknown_cells)),
            Line::raw(format!(
                "  Unexpected values:  {:>8}",
                report.out_of_vocabulary_cells
            )),
        ];
        let figures = Paragraph::new(text).block(bordered("Survey"));

        let chart = BarChart::new(
            overview
                .product_distribution
                .iter()
                .map(|(product, count)| {
                    Bar::with_label(product.clone(), count).text_value(format!("{count}"))
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered("Enterprises by product type"))
        .direction(Direction::Horizontal)
        .bar_gap(0);

        Widget::render(figures, figures_pane, buf);
        Widget::render(chart, products_pane, buf);
    }
}
