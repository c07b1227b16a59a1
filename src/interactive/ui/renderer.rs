use crate::interactive::constants::{
    HINTS_PANEL_HEIGHT, SEARCH_BAR_HEIGHT, TOPBAR_HEIGHT, TOPBAR_TITLE,
};
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, primary_pane::PrimaryPane, result_pane::ResultPane, search_bar::SearchBar,
};
use crate::interactive::ui::view_state::ViewState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Frame composition: pushes the relevant slice of [`AppState`] into each
/// component and lays the panels out according to the view-state store.
pub struct Renderer {
    search_bar: SearchBar,
    result_pane: ResultPane,
    primary_pane: PrimaryPane,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_pane: ResultPane::new(),
            primary_pane: PrimaryPane::new(),
        }
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn result_pane_mut(&mut self) -> &mut ResultPane {
        &mut self.result_pane
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let top_height = if state.view.search_bar_visible() {
            SEARCH_BAR_HEIGHT
        } else {
            TOPBAR_HEIGHT
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(top_height), Constraint::Min(0)])
            .split(f.area());

        if state.view.search_bar_visible() {
            self.search_bar.set_query(state.search.query.clone());
            self.search_bar.set_status(state.status.clone());
            self.search_bar.set_focused(state.view.input_focused());
            self.search_bar.set_cancel_visible(state.view.cancel_visible());
            self.search_bar.render(f, chunks[0]);
        } else {
            self.render_topbar(f, chunks[0]);
        }

        match state.view.view() {
            ViewState::Primary => self.primary_pane.render(f, chunks[1]),
            ViewState::Results => self.render_results(f, chunks[1], state),
        }
    }

    /// Mobile chrome while the overlay is closed: title plus the search
    /// trigger hint, standing in for the topbar the host page shows.
    fn render_topbar(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(TOPBAR_TITLE, Style::default().fg(Color::Cyan)),
            Span::raw("   press / to search"),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        self.result_pane.set_content(&state.content, state.content_rev);
        if state.view.hints_visible() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(HINTS_PANEL_HEIGHT), Constraint::Min(0)])
                .split(area);
            self.primary_pane.render_hints(f, chunks[0]);
            self.result_pane.render(f, chunks[1]);
        } else {
            self.result_pane.render(f, area);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
