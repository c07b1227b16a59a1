use crate::interactive::constants::{FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
use crate::interactive::ui::app_state::ResultsContent;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::markup;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// The results container.
///
/// Sole writer of result content on screen: shows the server fragment as
/// stripped text lines, or one of the canonical fixed messages. Pagination
/// links found in the fragment become selectable targets; activating one
/// emits `Message::PageActivated`, which is the event-delegation stream the
/// controller consumes.
#[derive(Default)]
pub struct ResultPane {
    lines: Vec<String>,
    page_links: Vec<u32>,
    selected_link: usize,
    scroll_offset: u16,
    content_rev: Option<u64>,
}

impl ResultPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the display when the container content changed. `rev` is
    /// the container's revision counter; matching revisions are a no-op so
    /// the fragment is not re-parsed every frame.
    pub fn set_content(&mut self, content: &ResultsContent, rev: u64) {
        if self.content_rev == Some(rev) {
            return;
        }
        self.content_rev = Some(rev);
        self.scroll_offset = 0;
        self.selected_link = 0;
        match content {
            ResultsContent::Empty => {
                self.lines.clear();
                self.page_links.clear();
            }
            ResultsContent::Placeholder => {
                self.lines = vec![NO_RESULTS_MESSAGE.to_string()];
                self.page_links.clear();
            }
            ResultsContent::Failure => {
                self.lines = vec![FETCH_FAILED_MESSAGE.to_string()];
                self.page_links.clear();
            }
            ResultsContent::Page(page) => {
                self.lines = markup::display_lines(&page.results_html);
                self.page_links = markup::page_links(&page.results_html);
            }
        }
    }

    pub fn page_links(&self) -> &[u32] {
        &self.page_links
    }

    pub fn selected_link(&self) -> Option<u32> {
        self.page_links.get(self.selected_link).copied()
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Fragments longer than the scroll range saturate instead of wrapping.
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn pagination_line(&self) -> Line<'_> {
        let mut spans = vec![Span::raw("Pages: ")];
        for (i, page) in self.page_links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if i == self.selected_link {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(format!("[{page}]"), style));
        }
        spans.push(Span::raw("  (Tab to select, Enter to open)"));
        Line::from(spans)
    }
}

impl Component for ResultPane {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let has_pagination = !self.page_links.is_empty();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(if has_pagination {
                vec![Constraint::Min(0), Constraint::Length(1)]
            } else {
                vec![Constraint::Min(0)]
            })
            .split(area);

        let text: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let body = Paragraph::new(text)
            .block(Block::default().title("Results").borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        f.render_widget(body, chunks[0]);

        if has_pagination {
            f.render_widget(Paragraph::new(self.pagination_line()), chunks[1]);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = (self.scroll_offset + 10).min(self.max_scroll());
                None
            }
            KeyCode::Tab => {
                if !self.page_links.is_empty() {
                    self.selected_link = (self.selected_link + 1) % self.page_links.len();
                }
                None
            }
            KeyCode::BackTab => {
                if !self.page_links.is_empty() {
                    self.selected_link = self
                        .selected_link
                        .checked_sub(1)
                        .unwrap_or(self.page_links.len() - 1);
                }
                None
            }
            KeyCode::Enter => self.selected_link().map(Message::PageActivated),
            _ => None,
        }
    }
}
