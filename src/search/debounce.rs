//! Cancellable deferred emission.
//!
//! Zellij timers cannot be cancelled: `set_timeout` always delivers one
//! `Timer` event per call. [`Debouncer`] therefore tracks how many timers it
//! has armed and only emits when the timer belonging to the most recent
//! [`schedule`](Debouncer::schedule) fires. Since every timer uses the same
//! delay and the host delivers them in arming order, that timer is the last
//! one outstanding, and it fires exactly one delay after the last update.

use std::time::Duration;

/// Default quiescence window.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Emits the latest scheduled value once it has been stable for `delay`.
///
/// # Examples
///
/// ```
/// use advocate_directory::search::Debouncer;
/// use std::time::Duration;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// debouncer.schedule("a".to_string());
/// debouncer.schedule("ab".to_string());
///
/// assert_eq!(debouncer.on_timer(), None);
/// assert_eq!(debouncer.on_timer(), Some("ab".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    armed: usize,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            armed: 0,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces the pending value and restarts the wait.
    ///
    /// Returns the delay for which the caller must arm one host timer.
    pub fn schedule(&mut self, value: T) -> Duration {
        self.pending = Some(value);
        self.armed += 1;
        self.delay
    }

    /// Handles one armed timer firing.
    ///
    /// Returns the pending value if this was the last outstanding timer, i.e.
    /// no update arrived during the final window.
    pub fn on_timer(&mut self) -> Option<T> {
        if self.armed == 0 {
            tracing::trace!("timer fired with nothing armed");
            return None;
        }

        self.armed -= 1;
        if self.armed > 0 {
            return None;
        }

        self.pending.take()
    }

    /// Discards any pending emission.
    ///
    /// Timers already armed still fire, but emit nothing.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::trace!(outstanding = self.armed, "pending emission cancelled");
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_emits_only_the_last_value_once() {
        let mut debouncer = Debouncer::default();
        for value in ["a", "ab", "abc"] {
            assert_eq!(debouncer.schedule(value), DEFAULT_DELAY);
        }

        let emitted: Vec<&str> = (0..3).filter_map(|_| debouncer.on_timer()).collect();
        assert_eq!(emitted, vec!["abc"]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn update_during_window_restarts_wait() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule("a");
        debouncer.schedule("ab");

        // First timer fires while the second is still armed.
        assert_eq!(debouncer.on_timer(), None);
        debouncer.schedule("abc");
        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer(), Some("abc"));
    }

    #[test]
    fn separated_values_each_emit() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule(1);
        assert_eq!(debouncer.on_timer(), Some(1));
        debouncer.schedule(2);
        assert_eq!(debouncer.on_timer(), Some(2));
    }

    #[test]
    fn cancel_discards_pending_emission() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule("a");
        debouncer.schedule("ab");
        debouncer.cancel();

        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer(), None);
    }

    #[test]
    fn schedule_after_cancel_waits_for_its_own_timer() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule("old");
        debouncer.cancel();
        debouncer.schedule("new");

        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer(), Some("new"));
    }

    #[test]
    fn stray_timer_is_ignored() {
        let mut debouncer: Debouncer<u8> = Debouncer::default();
        assert_eq!(debouncer.on_timer(), None);
    }

    #[test]
    fn uses_configured_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        assert_eq!(debouncer.schedule(()), Duration::from_millis(50));
    }
}
