use hygiene_survey::correlation::{CorrelationMatrix, Indicator};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Spacing},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, Paragraph, Widget},
};

use super::{bordered, estimate_line, render_selector};
use crate::command::dashboard::app::DashboardData;

pub(super) struct TrainingSection<'a> {
    pub data: &'a DashboardData,
    pub selected: usize,
}

impl Widget for TrainingSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let summary = &self.data.summary;
        let [top_area, correlation_pane] =
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)])
                .spacing(Spacing::Overlap(1))
                .areas(area);
        let [list_pane, breakdown_pane] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(Spacing::Overlap(1))
                .areas(top_area);

        if summary.training.is_empty() {
            Paragraph::new("  No training information in the survey.")
                .block(bordered("Training"))
                .render(list_pane, buf);
        } else {
            let [selector_pane, detail_pane] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(3)])
                    .spacing(Spacing::Overlap(1))
                    .areas(list_pane);
            let labels = summary.training.keys().map(|training| training.to_string());
            render_selector("Training", labels, self.selected, selector_pane, buf);

            let detail = summary
                .training
                .iter()
                .nth(self.selected)
                .map(|(training, estimate)| estimate_line(training.token(), estimate))
                .unwrap_or_default();
            Paragraph::new(detail)
                .block(bordered("Share of informative entries"))
                .render(detail_pane, buf);
        }

        let chart = BarChart::new(
            summary
                .training_breakdown
                .entries()
                .into_iter()
                .map(|(label, count)| Bar::with_label(label, count).text_value(format!("{count}")))
                .collect::<Vec<_>>(),
        )
        .block(bordered("Training distribution"))
        .bar_width(8)
        .bar_gap(1);
        Widget::render(chart, breakdown_pane, buf);

        CorrelationTable {
            matrix: &summary.training_practice_correlation,
        }
        .render(correlation_pane, buf);
    }
}

struct CorrelationTable<'a> {
    matrix: &'a CorrelationMatrix,
}

fn correlation_color(r: f64) -> Color {
    if r >= 0.5 {
        Color::Green
    } else if r <= -0.5 {
        Color::Red
    } else {
        Color::Gray
    }
}

impl Widget for CorrelationTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let programmes = self
            .matrix
            .indicators()
            .iter()
            .copied()
            .filter(|i| matches!(i, Indicator::Training(_)))
            .collect::<Vec<_>>();

        let mut header = vec![Span::raw(format!("  {:<34}", ""))];
        header.extend(programmes.iter().map(|p| Span::raw(format!("{:>17}", p.label()))));
        let mut lines = vec![Line::from(header)];

        for &indicator in self.matrix.indicators() {
            let Indicator::Practice(practice) = indicator else {
                continue;
            };
            let mut spans = vec![Span::raw(format!("  {:<34}", practice.column()))];
            for &programme in &programmes {
                let span = match self.matrix.get(indicator, programme) {
                    Some(r) => Span::styled(
                        format!("{r:>+17.2}"),
                        Style::default().fg(correlation_color(r)),
                    ),
                    None => Span::styled(
                        format!("{:>17}", "-"),
                        Style::default().fg(Color::DarkGray),
                    ),
                };
                spans.push(span);
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(bordered("Training / practice correlation (Pearson)"))
            .render(area, buf);
    }
}
