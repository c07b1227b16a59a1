use std::time::{Duration, Instant};

/// Quiet-interval timer for one input stream.
///
/// Arming while a deadline is pending restarts the interval, so only the
/// most recent arm ever fires, and each arm fires at most once. The event
/// loop polls [`Debouncer::fire_ready`] on every tick; firing consumes the
/// deadline. The deadline itself is never exposed; arm and cancel are the
/// whole interface.
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Restart the quiet interval, discarding any pending deadline.
    pub fn arm(&mut self, quiet: Duration) {
        self.deadline = Some(Instant::now() + quiet);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the quiet interval has elapsed; consumes the deadline so a
    /// single arm yields a single fire.
    pub fn fire_ready(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
