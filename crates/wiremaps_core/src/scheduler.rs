//! Host-agnostic coalescing timer bookkeeping.
//!
//! The scheduler never touches a real clock. [`CoalescingScheduler::schedule`] hands out a
//! [`TimerTicket`]; the host arms a platform timer carrying that ticket and reports back through
//! [`CoalescingScheduler::fire`]. Only the most recently issued, still pending ticket is accepted,
//! so a timer that survived a cancel or a restart is ignored when it eventually fires.

/// How repeated scheduling requests interact with a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoalescePolicy {
    /// Every request replaces the pending timer (trailing-edge debounce).
    Restart,
    /// Requests made while a timer is pending are absorbed by it.
    KeepFirst,
}

/// Identity of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerTicket(u64);

impl TimerTicket {
    /// Raw ticket number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Schedule/cancel/is-pending state shared by the sort trigger, the autocomplete debounce and the
/// banner auto-dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoalescingScheduler {
    policy: CoalescePolicy,
    issued: u64,
    pending: Option<TimerTicket>,
}

impl CoalescingScheduler {
    /// Creates an idle scheduler.
    pub const fn new(policy: CoalescePolicy) -> Self {
        Self {
            policy,
            issued: 0,
            pending: None,
        }
    }

    /// Coalescing policy.
    pub const fn policy(&self) -> CoalescePolicy {
        self.policy
    }

    /// Requests a timer.
    ///
    /// Returns the ticket the host must arm, or `None` when a [`CoalescePolicy::KeepFirst`]
    /// scheduler already has a pending timer that absorbs this request.
    pub fn schedule(&mut self) -> Option<TimerTicket> {
        match (self.policy, self.pending) {
            (CoalescePolicy::KeepFirst, Some(_)) => None,
            _ => Some(self.restart()),
        }
    }

    /// Unconditionally replaces any pending timer with a fresh ticket.
    pub fn restart(&mut self) -> TimerTicket {
        self.issued += 1;
        let ticket = TimerTicket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Drops the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a timer is armed and not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Currently pending ticket.
    pub fn pending(&self) -> Option<TimerTicket> {
        self.pending
    }

    /// Reports that the timer carrying `ticket` elapsed.
    ///
    /// Returns `true` exactly once for the current ticket; stale or cancelled tickets return
    /// `false`.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
