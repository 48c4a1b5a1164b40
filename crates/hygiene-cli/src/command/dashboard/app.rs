use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use hygiene_survey::{score::CompanyProfile, summary::SurveySummary};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Tabs},
};

use super::sections::Section;

#[derive(Debug)]
pub struct DashboardData {
    pub summary: SurveySummary,
    /// Profiles in ascending ID order.
    pub companies: Vec<CompanyProfile>,
}

#[derive(Debug)]
pub struct App {
    data: DashboardData,
    section: Section,
    /// Selected item of each section, indexed by [`Section::index`].
    selected: [usize; Section::ALL.len()],
    should_exit: bool,
}

impl App {
    pub fn new(data: DashboardData) -> Self {
        Self {
            data,
            section: Section::default(),
            selected: [0; Section::ALL.len()],
            should_exit: false,
        }
    }

    /// Opens the company section on the given enterprise.
    pub fn select_company(&mut self, id: &str) {
        match self.data.companies.iter().position(|c| c.id == id) {
            Some(idx) => {
                self.section = Section::Company;
                self.selected[Section::Company.index()] = idx;
            }
            None => tracing::warn!(id, "unknown enterprise, ignoring selection"),
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_exit {
            terminal.draw(|f| self.draw(f))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let [tabs_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let tabs = Tabs::new(Section::ALL.iter().map(|s| s.title()))
            .block(Block::bordered().title("Hygiene survey"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .select(self.section.index());
        frame.render_widget(tabs, tabs_area);

        self.section
            .draw(frame, main_area, &self.data, self.selected[self.section.index()]);

        let help_text = Text::from("←/→/Tab: Section | ↑/↓: Select | q/Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: event::KeyEvent) {
        let len = self.section.item_count(&self.data);
        let selected = &mut self.selected[self.section.index()];
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Right | KeyCode::Tab => self.section = self.section.next(),
            KeyCode::Left | KeyCode::BackTab => self.section = self.section.prev(),
            KeyCode::Up if len > 0 => {
                *selected = selected.checked_sub(1).unwrap_or(len - 1);
            }
            KeyCode::Down if len > 0 => {
                *selected = (*selected + 1) % len;
            }
            _ => {}
        }
    }
}
