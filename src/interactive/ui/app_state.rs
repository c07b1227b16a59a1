use crate::client::SearchResultPage;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::interactive::ui::view_state::ViewStateStore;

/// Where the controller is in the fetch pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No query; primary view showing.
    Idle,
    /// Debounce timer armed or a fetch in flight.
    Pending,
    /// Results rendered.
    Loaded,
    /// The failure message rendered.
    Failed,
}

/// What the results container currently holds. The result pane derives its
/// display from this; nothing else writes it except the placeholder path
/// owned by the view-state store.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsContent {
    /// Cleared, nothing to show.
    Empty,
    /// The canonical no-results placeholder.
    Placeholder,
    /// Server markup for a non-empty result page.
    Page(SearchResultPage),
    /// The canonical fetch-failure message.
    Failure,
}

pub struct SearchState {
    /// Raw input text; trimmed before any fetch.
    pub query: String,
    /// Current result page, >= 1. Reset to 1 whenever the query changes.
    pub page: u32,
    pub phase: Phase,
    /// Highest response sequence applied so far; older responses are stale.
    pub last_applied_seq: u64,
}

pub struct AppState {
    pub search: SearchState,
    pub view: ViewStateStore,
    pub content: ResultsContent,
    /// Revision counter for the container; bumped on every content write so
    /// the result pane knows when to re-derive its display.
    pub content_rev: u64,
    /// Transient status line ("typing", "searching").
    pub status: Option<String>,
    debounce_ms: u64,
}

impl AppState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            search: SearchState {
                query: String::new(),
                page: 1,
                phase: Phase::Idle,
                last_applied_seq: 0,
            },
            view: ViewStateStore::new(),
            content: ResultsContent::Empty,
            content_rev: 0,
            status: None,
            debounce_ms,
        }
    }

    fn set_content(&mut self, content: ResultsContent) {
        if self.content != content {
            self.content = content;
            self.content_rev += 1;
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                if self.search.query.trim().is_empty() {
                    // Empty input resets synchronously: no debounce, and any
                    // armed timer or in-flight fetch is fenced off.
                    self.reset_to_primary()
                } else {
                    self.search.phase = Phase::Pending;
                    self.status = Some("typing...".to_string());
                    Command::ScheduleSearch(self.debounce_ms)
                }
            }
            Message::SearchRequested => {
                if self.search.query.trim().is_empty() {
                    return Command::None;
                }
                // A fresh query always starts from the first page.
                self.search.page = 1;
                self.search.phase = Phase::Pending;
                self.status = Some("searching...".to_string());
                Command::ExecuteSearch { page: 1 }
            }
            Message::SearchCompleted(page) => {
                self.search.phase = Phase::Loaded;
                self.status = None;
                if page.is_empty() {
                    self.set_content(ResultsContent::Placeholder);
                } else {
                    self.set_content(ResultsContent::Page(page));
                }
                self.view.show_results();
                Command::None
            }
            Message::SearchFailed(_) => {
                self.search.phase = Phase::Failed;
                self.status = None;
                self.set_content(ResultsContent::Failure);
                // Still flip to the results view so the message is visible.
                self.view.show_results();
                Command::None
            }
            Message::PageActivated(page) => {
                let current_query_live = !self.search.query.trim().is_empty();
                let can_paginate = matches!(self.search.phase, Phase::Loaded | Phase::Failed);
                if page >= 1 && current_query_live && can_paginate {
                    // Same query, new page; the debouncer is bypassed.
                    self.search.page = page;
                    self.search.phase = Phase::Pending;
                    self.status = Some("searching...".to_string());
                    Command::ExecuteSearch { page }
                } else {
                    Command::None
                }
            }
            Message::CancelRequested => {
                self.view.exit_overlay();
                self.reset_to_primary()
            }
            Message::OverlayOpened => {
                self.view.enter_overlay();
                Command::None
            }
            Message::FocusChanged(focused) => {
                self.view.set_focused(focused);
                Command::None
            }
        }
    }

    fn reset_to_primary(&mut self) -> Command {
        self.search.phase = Phase::Idle;
        self.search.page = 1;
        self.status = None;
        let mut container = std::mem::replace(&mut self.content, ResultsContent::Empty);
        self.view.show_primary(&mut container, &mut self.search.query);
        self.set_content(container);
        Command::ClearPending
    }
}
