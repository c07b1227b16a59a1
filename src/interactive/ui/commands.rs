/// Side effects requested by the state machine, executed by the event loop.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Arm the debounce timer; delay in milliseconds.
    ScheduleSearch(u64),
    /// Dispatch a fetch for the current query at the given page.
    ExecuteSearch { page: u32 },
    /// Disarm the debounce timer and fence off any in-flight responses so a
    /// stale fetch cannot overwrite the cleared state.
    ClearPending,
}
