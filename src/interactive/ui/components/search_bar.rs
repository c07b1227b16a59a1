use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The query input field.
///
/// Owns cursor editing only; every text change is reported upward as
/// `Message::QueryChanged` and the controller decides what to do with it.
/// Cursor positions are in chars, converted to byte offsets at the edit.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor: usize,
    focused: bool,
    cancel_visible: bool,
    status: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.cursor = self.cursor.min(self.query.chars().count());
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_cancel_visible(&mut self, visible: bool) {
        self.cancel_visible = visible;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    #[allow(dead_code)]
    pub fn query(&self) -> &str {
        &self.query
    }

    fn byte_at(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Char position of the start of the word before `from`.
    fn prev_word(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    /// Remove chars in `[start, end)`, reporting the change.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_len() {
            return None;
        }
        let (byte_start, byte_end) = (self.byte_at(start), self.byte_at(end));
        self.query.drain(byte_start..byte_end);
        self.cursor = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert_char(&mut self, c: char) -> Option<Message> {
        let at = self.byte_at(self.cursor);
        self.query.insert(at, c);
        self.cursor += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        // Cursor shown as an inverted cell.
        let before: String = self.query.chars().take(self.cursor).collect();
        let at: String = self
            .query
            .chars()
            .nth(self.cursor)
            .unwrap_or(' ')
            .to_string();
        let after: String = self.query.chars().skip(self.cursor + 1).collect();
        let spans = vec![
            Span::raw(before),
            Span::styled(at, Style::default().bg(Color::White).fg(Color::Black)),
            Span::raw(after),
        ];

        let mut title = "Search".to_string();
        if let Some(status) = &self.status {
            title.push_str(&format!(" - {status}"));
        }
        if self.cancel_visible {
            title.push_str("  [Esc] cancel");
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = self.char_len();
                    None
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor),
                KeyCode::Char('k') => self.delete_range(self.cursor, self.char_len()),
                KeyCode::Char('w') => {
                    let start = self.prev_word(self.cursor);
                    self.delete_range(start, self.cursor)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => self.insert_char(c),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.delete_range(self.cursor - 1, self.cursor)
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    self.delete_range(self.cursor, self.cursor + 1)
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                None
            }
            _ => None,
        }
    }
}
