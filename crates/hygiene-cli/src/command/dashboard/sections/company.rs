use hygiene_survey::{schema::Answer, score::CompanyProfile};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect, Spacing},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, Paragraph, Widget},
};

use super::{bordered, render_selector};
use crate::command::dashboard::app::DashboardData;

pub(super) struct CompanySection<'a> {
    pub data: &'a DashboardData,
    pub selected: usize,
}

impl Widget for CompanySection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [list_pane, detail_pane] =
            Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(area);

        let labels = self.data.companies.iter().map(|c| c.id.clone());
        render_selector("Enterprises", labels, self.selected, list_pane, buf);

        match self.data.companies.get(self.selected) {
            Some(profile) => CompanyDetail { profile }.render(detail_pane, buf),
            None => Paragraph::new("  No enterprise in the survey.")
                .block(bordered("Details"))
                .render(detail_pane, buf),
        }
    }
}

struct CompanyDetail<'a> {
    profile: &'a CompanyProfile,
}

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn status_color(answer: Option<Answer>) -> Color {
    match answer {
        Some(Answer::Yes) => Color::Green,
        Some(Answer::No) => Color::Red,
        Some(Answer::Unknown) | None => Color::Yellow,
    }
}

impl Widget for CompanyDetail<'_> {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let profile = self.profile;
        let [info_pane, radar_pane] =
            Layout::vertical([Constraint::Length(9), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(area);

        let score = &profile.score;
        let score_text = if score.known_practices == 0 {
            "N/A (no known practice)".to_owned()
        } else {
            format!(
                "{:.2} ({}/{} practices)",
                score.score, score.compliant_practices, score.known_practices
            )
        };
        let info = Paragraph::new(vec![
            Line::raw(format!(
                "  Location:       {}",
                or_unknown(profile.location.as_deref())
            )),
            Line::raw(format!(
                "  Product type:   {}",
                or_unknown(profile.product_type.as_deref())
            )),
            Line::raw(format!(
                "  Staff size:     {}",
                or_unknown(profile.staff_size.as_deref())
            )),
            Line::raw(format!(
                "  Training:       {}",
                or_unknown(profile.training.as_deref())
            )),
            Line::raw(""),
            Line::raw(format!("  Hygiene score:  {score_text}")),
        ])
        .block(bordered(&profile.id));

        // Radar values 0, 0.5 and 1 drawn as 0, 50 and 100.
        let chart = BarChart::new(
            profile
                .practices
                .iter()
                .map(|status| {
                    let label = status.answer.map_or("Absent", Answer::label);
                    Bar::with_label(status.practice.label(), (status.radar_value() * 100.0) as u64)
                        .text_value(label.to_owned())
                        .style(Style::default().fg(status_color(status.answer)))
                })
                .collect::<Vec<_>>(),
        )
        .block(bordered("Practice profile"))
        .direction(Direction::Horizontal)
        .max(100)
        .bar_gap(0);

        Widget::render(info, info_pane, buf);
        Widget::render(chart, radar_pane, buf);
    }
}
