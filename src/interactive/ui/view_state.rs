use crate::interactive::ui::app_state::ResultsContent;

/// Which top-level panel is visible. Exactly one at a time, never both and
/// never neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Primary,
    Results,
}

/// Which input-affordance chrome is active. Held as an explicit flag; the
/// cancel control's visibility derives from it, not the other way around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayMode {
    Desktop,
    MobileOverlay,
}

/// Owner of all panel-visibility state.
///
/// Other components never toggle visibility directly; they go through
/// `show_results` / `show_primary`, which are idempotent and keep the
/// panels mutually exclusive. The placeholder repopulation on
/// `show_primary` is the one container write this store is allowed.
pub struct ViewStateStore {
    view: ViewState,
    overlay: OverlayMode,
    mobile_layout: bool,
    hints_visible: bool,
    input_focused: bool,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self {
            view: ViewState::Primary,
            overlay: OverlayMode::Desktop,
            mobile_layout: false,
            hints_visible: false,
            input_focused: false,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn overlay(&self) -> OverlayMode {
        self.overlay
    }

    pub fn hints_visible(&self) -> bool {
        self.hints_visible
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Derived chrome: the cancel affordance shows exactly while the mobile
    /// overlay is active.
    pub fn cancel_visible(&self) -> bool {
        self.overlay == OverlayMode::MobileOverlay
    }

    /// In the mobile layout the search bar hides behind the trigger until
    /// the overlay opens; on desktop it is always inline.
    pub fn search_bar_visible(&self) -> bool {
        !self.mobile_layout || self.overlay == OverlayMode::MobileOverlay
    }

    pub fn set_mobile_layout(&mut self, mobile: bool) {
        self.mobile_layout = mobile;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.input_focused = focused;
    }

    /// Reveal the results container and hide the primary content. In the
    /// mobile overlay this also hides the hints panel.
    pub fn show_results(&mut self) {
        self.view = ViewState::Results;
        if self.overlay == OverlayMode::MobileOverlay {
            self.hints_visible = false;
        }
    }

    /// The inverse of [`show_results`](Self::show_results): reset the
    /// container to the canonical placeholder and clear the query text.
    /// On desktop the primary content returns; in the mobile overlay the
    /// results surface stays up and the hints panel comes back above it,
    /// since the overlay covers the primary content anyway.
    pub fn show_primary(&mut self, container: &mut ResultsContent, query: &mut String) {
        *container = ResultsContent::Placeholder;
        query.clear();
        if self.overlay == OverlayMode::MobileOverlay {
            self.hints_visible = true;
            self.view = ViewState::Results;
        } else {
            self.view = ViewState::Primary;
        }
    }

    /// Activate the mobile search chrome: search bar and hints appear, the
    /// (empty) results container becomes the visible panel. No-op outside
    /// the mobile layout.
    pub fn enter_overlay(&mut self) {
        if !self.mobile_layout {
            return;
        }
        self.overlay = OverlayMode::MobileOverlay;
        self.hints_visible = true;
        self.view = ViewState::Results;
    }

    /// Restore the non-overlay chrome. Safe to call when already inactive.
    pub fn exit_overlay(&mut self) {
        self.overlay = OverlayMode::Desktop;
        self.hints_visible = false;
    }
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::new()
    }
}
