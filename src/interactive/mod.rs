use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::client::{FetchRequest, FetchResponse, SearchTransport};

pub mod constants;
pub mod debounce;
pub mod ui;

#[cfg(test)]
mod tests;

use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MOBILE_BREAKPOINT_COLS};
use self::debounce::Debouncer;
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// Runtime options for the interactive session.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Debounce quiet interval in milliseconds.
    pub debounce_ms: u64,
    /// Force the mobile overlay layout regardless of terminal width.
    pub force_mobile: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce_ms: constants::SEARCH_DEBOUNCE_MS,
            force_mobile: false,
        }
    }
}

/// The interactive search session: owns the state machine, the debounce
/// timer, the fetch worker and the terminal loop.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    transport: Arc<dyn SearchTransport + Send + Sync>,
    request_tx: Option<Sender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
    debouncer: Debouncer,
    next_seq: u64,
    force_mobile: bool,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveSearch {
    pub fn new<T>(transport: T, options: SearchOptions) -> Self
    where
        T: SearchTransport + Send + Sync + 'static,
    {
        Self {
            state: AppState::new(options.debounce_ms),
            renderer: Renderer::new(),
            transport: Arc::new(transport),
            request_tx: None,
            response_rx: None,
            debouncer: Debouncer::new(),
            next_seq: 0,
            force_mobile: options.force_mobile,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let mobile = self.force_mobile
            || terminal
                .size()
                .map(|size| size.width < MOBILE_BREAKPOINT_COLS)
                .unwrap_or(false);
        self.state.view.set_mobile_layout(mobile);
        tracing::debug!(mobile, "starting interactive session");

        let (tx, rx) = self.start_fetch_worker();
        self.request_tx = Some(tx);
        self.response_rx = Some(rx);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Fetch responses, oldest first; the sequence fence drops any
            // that were superseded while in flight.
            loop {
                let response = match &self.response_rx {
                    Some(rx) => match rx.try_recv() {
                        Ok(response) => response,
                        Err(_) => break,
                    },
                    None => break,
                };
                self.apply_response(response);
            }

            if self.debouncer.fire_ready() {
                self.handle_message(Message::SearchRequested);
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_input(key)? {
                            break;
                        }
                    }
                    Event::FocusGained => self.handle_message(Message::FocusChanged(true)),
                    Event::FocusLost => self.handle_message(Message::FocusChanged(false)),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Apply a worker response unless it is stale. Responses are applied
    /// only when tagged newer than the last applied sequence, so a slow
    /// early fetch can never overwrite a fresher one (or a cleared view).
    fn apply_response(&mut self, response: FetchResponse) {
        if response.seq <= self.state.search.last_applied_seq {
            tracing::debug!(
                seq = response.seq,
                floor = self.state.search.last_applied_seq,
                "discarding stale search response"
            );
            return;
        }
        self.state.search.last_applied_seq = response.seq;
        match response.result {
            Ok(page) => self.handle_message(Message::SearchCompleted(page)),
            Err(e) => {
                tracing::warn!(seq = response.seq, error = %e, "search fetch failed");
                self.handle_message(Message::SearchFailed(e.to_string()));
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Double Ctrl+C to exit.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.status = Some("Press Ctrl+C again to exit".to_string());
            return Ok(false);
        }

        if key.code == KeyCode::Esc {
            self.handle_message(Message::CancelRequested);
            return Ok(false);
        }

        // Mobile layout with the overlay closed: only the search trigger
        // does anything search-related.
        if !self.state.view.search_bar_visible() {
            if key.code == KeyCode::Char('/') {
                self.handle_message(Message::OverlayOpened);
            }
            return Ok(false);
        }

        let message = match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Enter => self.renderer.result_pane_mut().handle_key(key),
            _ => self.renderer.search_bar_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
        Ok(false)
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch(delay_ms) => {
                self.debouncer.arm(Duration::from_millis(delay_ms));
            }
            Command::ExecuteSearch { page } => {
                self.execute_search(page);
            }
            Command::ClearPending => {
                self.debouncer.cancel();
                // Raise the fence to the newest issued sequence: everything
                // still in flight is now stale by definition.
                self.state.search.last_applied_seq = self.next_seq;
            }
        }
    }

    fn execute_search(&mut self, page: u32) {
        let query = self.state.search.query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.next_seq += 1;
        let request = FetchRequest {
            seq: self.next_seq,
            query,
            page,
        };
        tracing::debug!(seq = request.seq, query = %request.query, page, "dispatching search");
        if let Some(sender) = &self.request_tx {
            let _ = sender.send(request);
        }
    }

    /// One worker thread performs the blocking fetches; the loop never
    /// blocks on the network. In-flight requests are not aborted; their
    /// responses are discarded by the sequence fence instead.
    fn start_fetch_worker(&self) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();
        let transport = Arc::clone(&self.transport);

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let result = transport.fetch_page(&request.query, request.page);
                let response = FetchResponse {
                    seq: request.seq,
                    result,
                };
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        (request_tx, response_rx)
    }
}
