use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Stand-in for the host page's primary content region. The search core
/// only toggles its visibility; it never owns or rewrites this content.
#[derive(Default)]
pub struct PrimaryPane;

impl PrimaryPane {
    pub fn new() -> Self {
        Self
    }

    /// The hints panel shown alongside the mobile overlay while no results
    /// are on screen.
    pub fn render_hints(&self, f: &mut Frame, area: Rect) {
        let hints = Paragraph::new(vec![
            Line::from("Type to search posts."),
            Line::from("Results replace this panel as soon as something matches."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title("Hints").borders(Borders::ALL));
        f.render_widget(hints, area);
    }
}

impl Component for PrimaryPane {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let body = Paragraph::new(vec![
            Line::from("Browse mode."),
            Line::from(""),
            Line::from("Start typing in the search bar to look for posts;"),
            Line::from("results appear after a short pause in typing."),
            Line::from("Esc cancels a search and returns here."),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Content").borders(Borders::ALL));
        f.render_widget(body, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
