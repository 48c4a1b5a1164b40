use hygiene_survey::{practices::PracticeStatistics, staff::StaffStatistics};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Spacing},
    text::Line,
    widgets::{Bar, BarChart, Paragraph, Widget},
};

use super::{bordered, estimate_line, percent, render_selector};
use crate::{command::dashboard::app::DashboardData, util::format_or_na};

const STAFF_ITEM: &str = "Effectif du personnel";

/// Practices present in the survey, then the staff-size summary if any.
pub(super) fn item_count(data: &DashboardData) -> usize {
    data.summary.hygiene.len() + usize::from(!data.summary.staff.is_empty())
}

pub(super) struct DescriptiveSection<'a> {
    pub data: &'a DashboardData,
    pub selected: usize,
}

impl Widget for DescriptiveSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let summary = &self.data.summary;
        let [list_pane, detail_pane] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .spacing(Spacing::Overlap(1))
                .areas(area);

        let labels = summary
            .hygiene
            .keys()
            .map(|practice| practice.to_string())
            .chain((!summary.staff.is_empty()).then(|| STAFF_ITEM.to_owned()));
        render_selector("Variables", labels, self.selected, list_pane, buf);

        match summary.hygiene.values().nth(self.selected) {
            Some(stats) => PracticeDetail { stats }.render(detail_pane, buf),
            None if !summary.staff.is_empty() => StaffDetail {
                stats: &summary.staff,
            }
            .render(detail_pane, buf),
            None => Paragraph::new("  No practice or staff-size column in the survey.")
                .block(bordered("Details"))
                .render(detail_pane, buf),
        }
    }
}

struct PracticeDetail<'a> {
    stats: &'a PracticeStatistics,
}

impl Widget for PracticeDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let stats = self.stats;
        let [chart_pane, text_pane] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(8)])
                .spacing(Spacing::Overlap(1))
                .areas(area);

        let chart = BarChart::new(
            stats
                .estimates
                .iter()
                .map(|(answer, estimate)| {
                    Bar::with_label(answer.label(), percent(estimate.proportion))
                        .text_value(format!("{:.1}%", 100.0 * estimate.proportion))
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered(stats.practice.column()))
        .bar_width(12)
        .bar_gap(2)
        .max(100);

        let mut text = stats
            .estimates
            .iter()
            .map(|(answer, estimate)| estimate_line(answer.label(), estimate))
            .collect::<Vec<_>>();
        text.push(Line::raw(""));
        text.push(Line::raw(format!(
            "  Compliance (Oui among Oui/Non): {}",
            format_or_na(stats.compliance(), |c| format!("{:.1}%", 100.0 * c)),
        )));
        let paragraph = Paragraph::new(text).block(bordered("Proportions"));

        Widget::render(chart, chart_pane, buf);
        Widget::render(paragraph, text_pane, buf);
    }
}

struct StaffDetail<'a> {
    stats: &'a StaffStatistics,
}

impl Widget for StaffDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [summary_pane, intervals_pane] =
            Layout::horizontal([Constraint::Length(30), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(area);

        let summary_text = self
            .stats
            .summary
            .iter()
            .flat_map(|summary| summary.entries())
            .map(|(name, value)| Line::raw(format!("  {name:<8} {value:>10.2}")))
            .collect::<Vec<_>>();

        let interval_text = self
            .stats
            .confidence_intervals
            .iter()
            .map(|(label, estimate)| estimate_line(label, estimate))
            .collect::<Vec<_>>();

        Paragraph::new(summary_text)
            .block(bordered("Staff size"))
            .render(summary_pane, buf);
        Paragraph::new(interval_text)
            .block(bordered("Buckets"))
            .render(intervals_pane, buf);
    }
}
