//! Unread-notification polling, modeled as a timer-free state machine.
//!
//! The bell component owns the single recurring interval; this type only
//! decides what should happen to it. Keeping the transitions pure makes
//! every polling property checkable without a browser.

/// Phase of the poll controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// Not authenticated, no timer, no network activity.
    Idle,
    /// Recurring timer active.
    Polling,
    /// Halted after a non-timeout failure; waits for a manual restart.
    Stopped,
}

/// What the driver must do with its recurring timer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Leave the timer as it is.
    Keep,
    /// Cancel the existing timer, then schedule a fresh one and issue an
    /// immediate fetch.
    Restart,
    /// Cancel the existing timer; no replacement.
    Cancel,
}

/// Result of one poll cycle, as seen by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Server returned a numeric unread count.
    Count(u32),
    /// Response arrived but its count field was not numeric; ignored.
    NonNumeric,
    /// The request was aborted by the deadline. Transient: polling
    /// continues on the existing schedule.
    TimedOut,
    /// Any other failure: bad status, network error, malformed body.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPoller {
    phase: PollPhase,
    unread_count: u32,
    last_error: Option<String>,
}

impl Default for NotificationPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationPoller {
    pub fn new() -> Self {
        Self {
            phase: PollPhase::Idle,
            unread_count: 0,
            last_error: None,
        }
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// A fetch may only be issued while polling.
    pub fn should_fetch(&self) -> bool {
        self.phase == PollPhase::Polling
    }

    /// Mount-time transition. Enters `Polling` only when authenticated.
    pub fn activate(&mut self, authenticated: bool) -> TimerAction {
        if authenticated {
            self.phase = PollPhase::Polling;
            TimerAction::Restart
        } else {
            self.phase = PollPhase::Idle;
            TimerAction::Cancel
        }
    }

    /// Apply the result of one poll cycle.
    ///
    /// Outcomes that resolve after polling has already halted are
    /// discarded: the count is frozen outside `Polling`.
    pub fn apply(&mut self, outcome: PollOutcome) -> TimerAction {
        if self.phase != PollPhase::Polling {
            log::debug!("Discarding poll outcome in phase {:?}", self.phase);
            return TimerAction::Keep;
        }
        match outcome {
            PollOutcome::Count(count) => {
                self.unread_count = count;
                self.last_error = None;
                TimerAction::Keep
            }
            PollOutcome::NonNumeric => {
                log::warn!("Unread count payload was not numeric; keeping previous value");
                self.last_error = None;
                TimerAction::Keep
            }
            PollOutcome::TimedOut => {
                log::warn!("Unread count fetch timed out");
                TimerAction::Keep
            }
            PollOutcome::Failed(message) => {
                log::error!("Unread count fetch failed: {}", message);
                self.last_error = Some(message);
                self.phase = PollPhase::Stopped;
                TimerAction::Cancel
            }
        }
    }

    /// User-initiated restart from the stopped state.
    pub fn restart(&mut self) -> TimerAction {
        if self.phase != PollPhase::Stopped {
            return TimerAction::Keep;
        }
        self.last_error = None;
        self.phase = PollPhase::Polling;
        TimerAction::Restart
    }

    /// Unmount, or authentication becoming false.
    pub fn deactivate(&mut self) -> TimerAction {
        self.phase = PollPhase::Idle;
        TimerAction::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polling() -> NotificationPoller {
        let mut poller = NotificationPoller::new();
        assert_eq!(poller.activate(true), TimerAction::Restart);
        poller
    }

    #[test]
    fn unauthenticated_mount_stays_idle() {
        let mut poller = NotificationPoller::new();
        assert_eq!(poller.activate(false), TimerAction::Cancel);
        assert_eq!(poller.phase(), PollPhase::Idle);
        assert!(!poller.should_fetch());
    }

    #[test]
    fn count_is_always_the_most_recently_received_value() {
        let mut poller = polling();
        for count in [3, 0, 7, 7, 2] {
            assert_eq!(poller.apply(PollOutcome::Count(count)), TimerAction::Keep);
            assert_eq!(poller.unread_count(), count);
            assert_eq!(poller.last_error(), None);
        }
    }

    #[test]
    fn steady_server_value_keeps_badge_stable() {
        let mut poller = polling();
        for _ in 0..10 {
            poller.apply(PollOutcome::Count(3));
            assert_eq!(poller.unread_count(), 3);
            assert_eq!(poller.phase(), PollPhase::Polling);
        }
    }

    #[test]
    fn non_numeric_payload_is_ignored_but_clears_error() {
        let mut poller = polling();
        poller.apply(PollOutcome::Count(5));
        assert_eq!(poller.apply(PollOutcome::NonNumeric), TimerAction::Keep);
        assert_eq!(poller.unread_count(), 5);
        assert_eq!(poller.last_error(), None);
    }

    #[test]
    fn timeout_is_transient_and_does_not_stop_polling() {
        let mut poller = polling();
        poller.apply(PollOutcome::Count(4));
        assert_eq!(poller.apply(PollOutcome::TimedOut), TimerAction::Keep);
        assert_eq!(poller.phase(), PollPhase::Polling);
        assert_eq!(poller.unread_count(), 4);
        assert!(poller.should_fetch());
    }

    #[test]
    fn failure_stops_polling_and_retains_last_count() {
        let mut poller = polling();
        poller.apply(PollOutcome::Count(2));
        let action = poller.apply(PollOutcome::Failed("HTTP error: 500".into()));
        assert_eq!(action, TimerAction::Cancel);
        assert_eq!(poller.phase(), PollPhase::Stopped);
        assert_eq!(poller.unread_count(), 2);
        assert_eq!(poller.last_error(), Some("HTTP error: 500"));
        assert!(!poller.should_fetch());
    }

    #[test]
    fn count_is_frozen_once_stopped() {
        let mut poller = polling();
        poller.apply(PollOutcome::Failed("network error".into()));
        // A slow in-flight poll resolving after the stop must not thaw it.
        assert_eq!(poller.apply(PollOutcome::Count(9)), TimerAction::Keep);
        assert_eq!(poller.unread_count(), 0);
        assert_eq!(poller.phase(), PollPhase::Stopped);
    }

    #[test]
    fn restart_clears_error_and_resumes() {
        let mut poller = polling();
        poller.apply(PollOutcome::Failed("HTTP error: 500".into()));
        assert_eq!(poller.restart(), TimerAction::Restart);
        assert_eq!(poller.phase(), PollPhase::Polling);
        assert_eq!(poller.last_error(), None);
        assert!(poller.should_fetch());
    }

    #[test]
    fn restart_outside_stopped_is_a_no_op() {
        let mut poller = polling();
        assert_eq!(poller.restart(), TimerAction::Keep);
        assert_eq!(poller.phase(), PollPhase::Polling);

        let mut idle = NotificationPoller::new();
        assert_eq!(idle.restart(), TimerAction::Keep);
        assert_eq!(idle.phase(), PollPhase::Idle);
    }

    #[test]
    fn deactivate_always_cancels_the_timer() {
        let mut poller = polling();
        assert_eq!(poller.deactivate(), TimerAction::Cancel);
        assert_eq!(poller.phase(), PollPhase::Idle);
        assert!(!poller.should_fetch());

        let mut stopped = polling();
        stopped.apply(PollOutcome::Failed("boom".into()));
        assert_eq!(stopped.deactivate(), TimerAction::Cancel);
    }

    #[test]
    fn no_fetch_after_deactivation() {
        let mut poller = polling();
        poller.deactivate();
        assert!(!poller.should_fetch());
        // Late outcome from a request that was in flight at unmount.
        poller.apply(PollOutcome::Count(6));
        assert_eq!(poller.unread_count(), 0);
    }
}
