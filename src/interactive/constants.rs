//! Shared timing and layout values for the interactive session.

/// Quiet interval between the last keystroke and the dispatched fetch.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Terminal event polling interval in milliseconds.
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C exit confirmation window in seconds.
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Height of the search bar component.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the topbar shown while the mobile search overlay is closed.
pub const TOPBAR_HEIGHT: u16 = 1;

/// Height of the hints panel in the mobile overlay.
pub const HINTS_PANEL_HEIGHT: u16 = 4;

/// Terminals narrower than this start in the mobile overlay layout.
pub const MOBILE_BREAKPOINT_COLS: u16 = 80;

/// Canonical placeholder shown when a search matches nothing, and the
/// content the results container is reset to when the primary view returns.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Canonical message shown when the fetch itself fails.
pub const FETCH_FAILED_MESSAGE: &str = "Search request failed, please try again later.";

/// Title shown in the topbar while the overlay is closed.
pub const TOPBAR_TITLE: &str = "sitesearch";
