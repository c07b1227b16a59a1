use super::*;
use crate::client::{SearchResultPage, TransportError};
use crate::interactive::ui::app_state::{Phase, ResultsContent};
use crate::interactive::ui::view_state::ViewState;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted transport: pops one pre-programmed response per fetch and
/// records every `(query, page)` it was asked for.
struct FakeTransport {
    responses: Mutex<VecDeque<Result<SearchResultPage, TransportError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeTransport {
    fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, response: Result<SearchResultPage, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchTransport for FakeTransport {
    fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, TransportError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(empty_page()))
    }
}

fn empty_page() -> SearchResultPage {
    SearchResultPage {
        results: vec![],
        results_html: String::new(),
    }
}

fn page(html: &str) -> SearchResultPage {
    SearchResultPage {
        results: vec![serde_json::json!(1), serde_json::json!(2)],
        results_html: html.to_string(),
    }
}

/// Session wired to a worker thread backed by the shared fake transport.
fn session_with(transport: Arc<FakeTransport>) -> InteractiveSearch {
    let mut session = InteractiveSearch {
        state: AppState::new(constants::SEARCH_DEBOUNCE_MS),
        renderer: Renderer::new(),
        transport,
        request_tx: None,
        response_rx: None,
        debouncer: Debouncer::new(),
        next_seq: 0,
        force_mobile: false,
        last_ctrl_c_press: None,
    };
    let (tx, rx) = session.start_fetch_worker();
    session.request_tx = Some(tx);
    session.response_rx = Some(rx);
    session
}

/// Wait for the worker's next response and run it through the sequence
/// fence, as the event loop would.
fn pump_one(session: &mut InteractiveSearch) {
    let response = session
        .response_rx
        .as_ref()
        .expect("worker running")
        .recv_timeout(Duration::from_secs(1))
        .expect("worker response");
    session.apply_response(response);
}

#[test]
fn typed_query_debounces_then_loads_results() {
    let transport = Arc::new(FakeTransport::new());
    transport.push(Ok(page("<div>rust hits</div>")));
    let mut session = session_with(Arc::clone(&transport));

    session.handle_message(Message::QueryChanged("rust".to_string()));
    assert!(session.debouncer.is_armed());
    assert_eq!(session.state.search.phase, Phase::Pending);
    // Nothing dispatched until the quiet interval elapses.
    assert!(transport.calls().is_empty());

    // Debounce fires.
    session.handle_message(Message::SearchRequested);
    pump_one(&mut session);

    assert_eq!(transport.calls(), vec![("rust".to_string(), 1)]);
    assert_eq!(session.state.search.phase, Phase::Loaded);
    assert_eq!(session.state.view.view(), ViewState::Results);
    assert!(matches!(session.state.content, ResultsContent::Page(_)));
}

#[test]
fn rapid_typing_issues_a_single_fetch() {
    let transport = Arc::new(FakeTransport::new());
    let mut session = session_with(Arc::clone(&transport));

    for q in ["r", "ru", "rus", "rust"] {
        session.handle_message(Message::QueryChanged(q.to_string()));
    }
    // One armed timer, one eventual fetch.
    session.handle_message(Message::SearchRequested);
    pump_one(&mut session);

    assert_eq!(transport.calls(), vec![("rust".to_string(), 1)]);
}

#[test]
fn pagination_fetches_current_query_at_target_page() {
    let transport = Arc::new(FakeTransport::new());
    transport.push(Ok(page(r#"<a class="page-link" data-page="3">3</a>"#)));
    transport.push(Ok(page("<div>page three</div>")));
    let mut session = session_with(Arc::clone(&transport));

    session.handle_message(Message::QueryChanged("cats".to_string()));
    session.handle_message(Message::SearchRequested);
    pump_one(&mut session);

    session.handle_message(Message::PageActivated(3));
    pump_one(&mut session);

    assert_eq!(
        transport.calls(),
        vec![("cats".to_string(), 1), ("cats".to_string(), 3)]
    );
    assert_eq!(session.state.search.page, 3);
    assert_eq!(session.state.search.query, "cats");
    assert_eq!(session.state.search.phase, Phase::Loaded);
}

#[test]
fn transport_failure_renders_fixed_message() {
    let transport = Arc::new(FakeTransport::new());
    transport.push(Err(TransportError::Status { status: 502 }));
    let mut session = session_with(Arc::clone(&transport));

    session.handle_message(Message::QueryChanged("rust".to_string()));
    session.handle_message(Message::SearchRequested);
    pump_one(&mut session);

    assert_eq!(session.state.search.phase, Phase::Failed);
    assert_eq!(session.state.content, ResultsContent::Failure);
    // The failure is visible: the view still flips to results.
    assert_eq!(session.state.view.view(), ViewState::Results);
}

#[test]
fn empty_results_render_placeholder() {
    let transport = Arc::new(FakeTransport::new());
    transport.push(Ok(empty_page()));
    let mut session = session_with(Arc::clone(&transport));

    session.handle_message(Message::QueryChanged("zz".to_string()));
    session.handle_message(Message::SearchRequested);
    pump_one(&mut session);

    assert_eq!(session.state.content, ResultsContent::Placeholder);
    assert_eq!(session.state.view.view(), ViewState::Results);
}

#[test]
fn stale_response_cannot_overwrite_fresher_one() {
    let transport = Arc::new(FakeTransport::new());
    let mut session = session_with(transport);

    let fresh = page("<div>fresh</div>");
    session.state.search.query = "rust".to_string();
    session.state.search.phase = Phase::Pending;

    session.apply_response(FetchResponse {
        seq: 2,
        result: Ok(fresh.clone()),
    });
    assert_eq!(session.state.content, ResultsContent::Page(fresh.clone()));

    // A slower, earlier fetch lands afterwards; it must be dropped.
    session.apply_response(FetchResponse {
        seq: 1,
        result: Ok(page("<div>stale</div>")),
    });
    assert_eq!(session.state.content, ResultsContent::Page(fresh));
    assert_eq!(session.state.search.last_applied_seq, 2);
}

#[test]
fn clearing_input_fences_off_inflight_fetch() {
    let transport = Arc::new(FakeTransport::new());
    transport.push(Ok(page("<div>late</div>")));
    let mut session = session_with(Arc::clone(&transport));

    session.handle_message(Message::QueryChanged("rust".to_string()));
    session.handle_message(Message::SearchRequested); // fetch seq 1 in flight

    // User clears the input before the response arrives.
    session.handle_message(Message::QueryChanged(String::new()));
    assert_eq!(session.state.search.phase, Phase::Idle);
    assert!(!session.debouncer.is_armed());

    // The late response is discarded; the cleared state survives.
    pump_one(&mut session);
    assert_eq!(session.state.search.phase, Phase::Idle);
    assert_eq!(session.state.view.view(), ViewState::Primary);
    assert_eq!(session.state.content, ResultsContent::Placeholder);
}

#[test]
fn cancel_disarms_pending_debounce() {
    let transport = Arc::new(FakeTransport::new());
    let mut session = session_with(Arc::clone(&transport));

    session.handle_message(Message::QueryChanged("rust".to_string()));
    assert!(session.debouncer.is_armed());

    session.handle_message(Message::CancelRequested);
    assert!(!session.debouncer.is_armed());
    assert_eq!(session.state.search.query, "");
    assert!(transport.calls().is_empty());
}

#[test]
fn full_search_then_paginate_scenario() {
    let transport = Arc::new(FakeTransport::new());
    transport.push(Ok(SearchResultPage {
        results: vec![serde_json::json!(1), serde_json::json!(2)],
        results_html: r#"<div>page one</div><a class="page-link" data-page="2">2</a>"#.to_string(),
    }));
    transport.push(Ok(page("<div>page two</div>")));
    let mut session = session_with(Arc::clone(&transport));

    // Type "rust", let the debounce fire.
    session.handle_message(Message::QueryChanged("rust".to_string()));
    session.handle_message(Message::SearchRequested);
    pump_one(&mut session);

    match &session.state.content {
        ResultsContent::Page(p) => assert!(p.results_html.contains("page one")),
        other => panic!("expected page content, got {other:?}"),
    }

    // Activate the embedded data-page="2" link.
    session.handle_message(Message::PageActivated(2));
    pump_one(&mut session);

    assert_eq!(
        transport.calls(),
        vec![("rust".to_string(), 1), ("rust".to_string(), 2)]
    );
    match &session.state.content {
        ResultsContent::Page(p) => assert!(p.results_html.contains("page two")),
        other => panic!("expected page content, got {other:?}"),
    }
    assert_eq!(session.state.search.query, "rust");
}
