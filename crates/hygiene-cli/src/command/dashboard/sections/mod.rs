use hygiene_stats::proportion::ProportionEstimate;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, List, ListItem, ListState, StatefulWidget},
};

use super::app::DashboardData;

mod company;
mod comparisons;
mod descriptive;
mod obstacles;
mod overview;
mod training;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    Descriptive,
    Company,
    Obstacles,
    Training,
    Comparisons,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Descriptive,
        Self::Company,
        Self::Obstacles,
        Self::Training,
        Self::Comparisons,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Descriptive => "Descriptive statistics",
            Self::Company => "Company",
            Self::Obstacles => "Obstacles",
            Self::Training => "Training",
            Self::Comparisons => "Comparisons",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Number of selectable items in the section.
    pub fn item_count(self, data: &DashboardData) -> usize {
        match self {
            Self::Overview => 0,
            Self::Descriptive => descriptive::item_count(data),
            Self::Company => data.companies.len(),
            Self::Obstacles => data.summary.obstacles.len(),
            Self::Training => data.summary.training.len(),
            Self::Comparisons => comparisons::item_count(data),
        }
    }

    pub fn draw(self, frame: &mut Frame, area: Rect, data: &DashboardData, selected: usize) {
        match self {
            Self::Overview => frame.render_widget(overview::OverviewSection { data }, area),
            Self::Descriptive => {
                frame.render_widget(descriptive::DescriptiveSection { data, selected }, area);
            }
            Self::Company => frame.render_widget(company::CompanySection { data, selected }, area),
            Self::Obstacles => {
                frame.render_widget(obstacles::ObstaclesSection { data, selected }, area);
            }
            Self::Training => {
                frame.render_widget(training::TrainingSection { data, selected }, area);
            }
            Self::Comparisons => {
                frame.render_widget(comparisons::ComparisonsSection { data, selected }, area);
            }
        }
    }
}

fn bordered(title: &str) -> Block<'_> {
    Block::bordered()
        .title(title)
        .merge_borders(MergeStrategy::Exact)
}

/// Renders a selectable list of labels.
fn render_selector<'a, I>(title: &str, labels: I, selected: usize, area: Rect, buf: &mut Buffer)
where
    I: IntoIterator<Item = String>,
{
    let items = labels.into_iter().map(ListItem::new).collect::<Vec<_>>();
    let list = List::new(items)
        .block(bordered(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    StatefulWidget::render(list, area, buf, &mut list_state);
}

/// Percentage of a proportion, rounded for bar charts.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(proportion: f64) -> u64 {
    (proportion * 100.0).round().clamp(0.0, 100.0) as u64
}

fn estimate_line(label: &str, estimate: &ProportionEstimate) -> Line<'static> {
    let ci = estimate.confidence_interval;
    Line::raw(format!(
        "  {label:<18} {:>6.1}%  ({}/{})  IC 95%: [{:.3}, {:.3}]",
        100.0 * estimate.proportion,
        estimate.count,
        estimate.total,
        ci.lower,
        ci.upper,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle() {
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
        }
        assert_eq!(Section::Comparisons.next(), Section::Overview);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(0.456), 46);
        assert_eq!(percent(1.0), 100);
    }
}
