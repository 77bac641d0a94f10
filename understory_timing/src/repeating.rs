// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::debug;

/// Lifecycle of a [`RepeatingTimer`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TimerState {
    /// Never started.
    #[default]
    Idle,
    /// Armed; fires once `now_ms` reaches `next_due_ms`.
    Running {
        /// Timestamp of the next firing.
        next_due_ms: u64,
    },
    /// Suspended. The interval is kept; no deadline is pending.
    Paused,
    /// Permanently cancelled.
    Stopped,
}

/// A single periodic deadline driven by host timestamps.
///
/// At most one deadline is live at any time: re-starting a running timer
/// replaces its deadline rather than adding a second one.
///
/// Missed periods are coalesced. If the host polls late, [`poll`](Self::poll)
/// reports a single firing and moves the deadline to the first period boundary
/// after `now_ms`, so a stalled host never sees a burst of queued ticks.
#[derive(Clone, Debug, Default)]
pub struct RepeatingTimer {
    interval_ms: u64,
    state: TimerState,
}

impl RepeatingTimer {
    /// Creates an idle timer with no interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire every `interval_ms`, first at `now_ms + interval_ms`.
    ///
    /// An interval of zero is treated as one millisecond. Has no effect once
    /// the timer is stopped.
    pub fn start(&mut self, interval_ms: u64, now_ms: u64) {
        if self.is_stopped() {
            return;
        }
        self.interval_ms = interval_ms.max(1);
        self.state = TimerState::Running {
            next_due_ms: now_ms.saturating_add(self.interval_ms),
        };
        debug!("timer started: every {} ms", self.interval_ms);
    }

    /// Drops the pending deadline, keeping the interval for [`resume`](Self::resume).
    ///
    /// Only a running timer can be paused.
    pub fn pause(&mut self) {
        if matches!(self.state, TimerState::Running { .. }) {
            self.state = TimerState::Paused;
            debug!("timer paused");
        }
    }

    /// Re-arms a paused timer one full interval after `now_ms`.
    ///
    /// Only a paused timer can be resumed.
    pub fn resume(&mut self, now_ms: u64) {
        if self.state == TimerState::Paused {
            self.state = TimerState::Running {
                next_due_ms: now_ms.saturating_add(self.interval_ms),
            };
            debug!("timer resumed");
        }
    }

    /// Cancels the timer for good.
    pub fn stop(&mut self) {
        if !self.is_stopped() {
            self.state = TimerState::Stopped;
            debug!("timer stopped");
        }
    }

    /// Returns `true` if the deadline has been reached, and schedules the next one.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let TimerState::Running { next_due_ms } = self.state else {
            return false;
        };
        if now_ms < next_due_ms {
            return false;
        }
        let missed = (now_ms - next_due_ms) / self.interval_ms;
        let step = self.interval_ms.saturating_mul(missed.saturating_add(1));
        self.state = TimerState::Running {
            next_due_ms: next_due_ms.saturating_add(step),
        };
        true
    }

    /// Returns the timestamp of the next firing, if the timer is running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match self.state {
            TimerState::Running { next_due_ms } => Some(next_due_ms),
            _ => None,
        }
    }

    /// Returns the configured interval, or zero if the timer was never started.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Returns `true` while suspended by [`pause`](Self::pause).
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    /// Returns `true` once [`stop`](Self::stop) has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.state == TimerState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle_and_never_fires() {
        let mut timer = RepeatingTimer::new();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.next_deadline(), None);
        assert!(!timer.poll(u64::MAX));
    }

    #[test]
    fn fires_on_each_period_boundary() {
        let mut timer = RepeatingTimer::new();
        timer.start(100, 50);

        assert!(!timer.poll(149));
        assert!(timer.poll(150));
        assert!(!timer.poll(150), "a deadline fires only once");
        assert!(!timer.poll(249));
        assert!(timer.poll(250));
        assert_eq!(timer.next_deadline(), Some(350));
    }

    #[test]
    fn late_poll_coalesces_missed_periods() {
        let mut timer = RepeatingTimer::new();
        timer.start(100, 0);

        // Deadlines at 100, 200, 300 and 400 have all passed.
        assert!(timer.poll(450));
        assert_eq!(timer.next_deadline(), Some(500));
        assert!(!timer.poll(499));
    }

    #[test]
    fn late_poll_on_exact_boundary_schedules_strictly_after_now() {
        let mut timer = RepeatingTimer::new();
        timer.start(100, 0);

        assert!(timer.poll(300));
        assert_eq!(timer.next_deadline(), Some(400));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut timer = RepeatingTimer::new();
        timer.start(0, 10);
        assert_eq!(timer.interval_ms(), 1);
        assert_eq!(timer.next_deadline(), Some(11));
    }

    #[test]
    fn restart_replaces_the_pending_deadline() {
        let mut timer = RepeatingTimer::new();
        timer.start(100, 0);
        timer.start(1_000, 50);

        assert_eq!(timer.next_deadline(), Some(1_050));
        assert!(!timer.poll(100), "the old deadline must not survive");
    }

    #[test]
    fn pause_keeps_interval_and_resume_rearms_from_now() {
        let mut timer = RepeatingTimer::new();
        timer.start(100, 0);
        timer.pause();

        assert!(timer.is_paused());
        assert_eq!(timer.next_deadline(), None);
        assert!(!timer.poll(1_000));

        timer.resume(1_000);
        assert_eq!(timer.interval_ms(), 100);
        assert_eq!(timer.next_deadline(), Some(1_100));
    }

    #[test]
    fn pause_and_resume_require_matching_state() {
        let mut timer = RepeatingTimer::new();
        timer.pause();
        assert_eq!(timer.state(), TimerState::Idle);
        timer.resume(10);
        assert_eq!(timer.state(), TimerState::Idle);

        timer.start(100, 0);
        timer.resume(50);
        assert_eq!(
            timer.next_deadline(),
            Some(100),
            "resume on a running timer is a no-op"
        );
    }

    #[test]
    fn stop_is_terminal() {
        let mut timer = RepeatingTimer::new();
        timer.start(100, 0);
        timer.stop();

        assert!(!timer.poll(100));
        timer.start(100, 0);
        timer.resume(0);
        assert!(timer.is_stopped());
        assert!(!timer.poll(1_000));

        // Stopping twice is harmless.
        timer.stop();
        assert!(timer.is_stopped());
    }

    #[test]
    fn huge_timestamps_saturate() {
        let mut timer = RepeatingTimer::new();
        timer.start(100, u64::MAX - 10);
        assert_eq!(timer.next_deadline(), Some(u64::MAX));
        assert!(timer.poll(u64::MAX));
        assert_eq!(timer.next_deadline(), Some(u64::MAX));
    }
}
