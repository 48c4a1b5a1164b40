use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect, Spacing},
    widgets::{Bar, BarChart, Paragraph, Widget},
};

use super::{bordered, percent};
use crate::command::dashboard::app::DashboardData;

/// The ranking scrolls one enterprise at a time.
pub(super) fn item_count(data: &DashboardData) -> usize {
    data.summary.scores.len()
}

pub(super) struct ComparisonsSection<'a> {
    pub data: &'a DashboardData,
    /// First ranked enterprise shown.
    pub selected: usize,
}

impl Widget for ComparisonsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let summary = &self.data.summary;
        let [ranking_pane, right_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(Spacing::Overlap(1))
                .areas(area);
        let [compliance_pane, product_pane] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(right_area);

        let mut ranking = summary.scores.iter().collect::<Vec<_>>();
        ranking.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));
        let chart = BarChart::new(
            ranking
                .into_iter()
                .skip(self.selected)
                .map(|(id, score)| {
                    Bar::with_label(id.to_owned(), percent(score.score))
                        .text_value(format!("{:.2}", score.score))
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered("Hygiene score by enterprise"))
        .direction(Direction::Horizontal)
        .max(100)
        .bar_gap(0);
        Widget::render(chart, ranking_pane, buf);

        let chart = BarChart::new(
            summary
                .hygiene
                .values()
                .filter_map(|stats| {
                    let compliance = stats.compliance()?;
                    Some(
                        Bar::with_label(stats.practice.label(), percent(compliance))
                            .text_value(format!("{:.0}%", 100.0 * compliance)),
                    )
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered("Compliance by practice (Oui among Oui/Non)"))
        .direction(Direction::Horizontal)
        .max(100)
        .bar_gap(0);
        Widget::render(chart, compliance_pane, buf);

        if summary.product_type_scores.is_empty() {
            Paragraph::new("  No product type with a positive score.")
                .block(bordered("Mean score by product type"))
                .render(product_pane, buf);
            return;
        }
        let chart = BarChart::new(
            summary
                .product_type_scores
                .iter()
                .map(|(product, mean)| {
                    Bar::with_label(product.clone(), percent(*mean))
                        .text_value(format!("{mean:.2}"))
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered("Mean score by product type"))
        .direction(Direction::Horizontal)
        .max(100)
        .bar_gap(0);
        Widget::render(chart, product_pane, buf);
    }
}
