use crate::client::SearchResultPage;

/// Everything that can happen to the search controller, from keystrokes to
/// worker responses. Components translate raw input into messages; the
/// state machine in `app_state` folds them into state and commands.
#[derive(Clone, Debug)]
pub enum Message {
    /// The input field changed; carries the raw (untrimmed) text.
    QueryChanged(String),
    /// The debounce timer fired for the current query.
    SearchRequested,
    /// A fetch resolved with a result page (already sequence-checked).
    SearchCompleted(SearchResultPage),
    /// A fetch failed; carries the diagnostic detail for the log only.
    SearchFailed(String),
    /// A pagination link carrying this target page was activated.
    PageActivated(u32),
    /// The cancel control was activated.
    CancelRequested,
    /// The mobile search trigger was activated.
    OverlayOpened,
    /// Terminal focus changed; purely cosmetic.
    FocusChanged(bool),
}
