use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect, Spacing},
    text::Line,
    widgets::{Bar, BarChart, Paragraph, Widget},
};

use super::{bordered, estimate_line, percent, render_selector};
use crate::command::dashboard::app::DashboardData;

pub(super) struct ObstaclesSection<'a> {
    pub data: &'a DashboardData,
    pub selected: usize,
}

impl Widget for ObstaclesSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let summary = &self.data.summary;
        let [left_area, specific_pane] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .spacing(Spacing::Overlap(1))
                .areas(area);
        let [list_pane, chart_pane, detail_pane] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .spacing(Spacing::Overlap(1))
        .areas(left_area);

        let labels = summary.obstacles.keys().map(|obstacle| obstacle.to_string());
        render_selector("Obstacles", labels, self.selected, list_pane, buf);

        let chart = BarChart::new(
            summary
                .obstacles
                .iter()
                .map(|(obstacle, estimate)| {
                    Bar::with_label(obstacle.label(), percent(estimate.proportion))
                        .text_value(format!("{:.0}%", 100.0 * estimate.proportion))
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered("Share reporting the obstacle"))
        .bar_width(9)
        .bar_gap(2)
        .max(100);
        Widget::render(chart, chart_pane, buf);

        let detail = summary
            .obstacles
            .iter()
            .nth(self.selected)
            .map(|(obstacle, estimate)| estimate_line(obstacle.label(), estimate))
            .unwrap_or_else(|| Line::raw("  No obstacle column in the survey."));
        Paragraph::new(detail)
            .block(bordered("Oui among Oui/Non"))
            .render(detail_pane, buf);

        let specific = &summary.specific_obstacles;
        if specific.is_empty() {
            Paragraph::new("  No other obstacle mentioned.")
                .block(bordered("Other obstacles"))
                .render(specific_pane, buf);
            return;
        }
        let chart = BarChart::new(
            specific
                .iter()
                .map(|(token, count)| {
                    Bar::with_label(token.clone(), count).text_value(format!("{count}"))
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered("Other obstacles"))
        .direction(Direction::Horizontal)
        .bar_gap(0);
        Widget::render(chart, specific_pane, buf);
    }
}
