//! Trailing-edge debounce in front of an asynchronous lookup-by-text call.

use crate::scheduler::{CoalescePolicy, CoalescingScheduler, TimerTicket};

/// A lookup the host should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Sequence number echoed back with the result.
    pub seq: u64,
    /// Text to look up.
    pub text: String,
}

/// What happened when a debounce timer elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    /// The ticket was cancelled or superseded.
    Stale,
    /// The text equals the last issued lookup.
    Unchanged,
    /// The text is shorter than the minimum length.
    TooShort,
    /// A new lookup must be issued.
    Lookup(LookupRequest),
}

/// Debounce state for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedFetcher {
    timer: CoalescingScheduler,
    delay_ms: u32,
    min_chars: usize,
    last_queried: Option<String>,
    issued: u64,
    in_flight: Option<u64>,
}

impl DebouncedFetcher {
    /// Creates a fetcher with the given quiet period and minimum text length (in characters).
    pub fn new(delay_ms: u32, min_chars: usize) -> Self {
        Self {
            timer: CoalescingScheduler::new(CoalescePolicy::Restart),
            delay_ms,
            min_chars,
            last_queried: None,
            issued: 0,
            in_flight: None,
        }
    }

    /// Debounce window in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Minimum text length.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// (Re)starts the debounce timer.
    pub fn trigger(&mut self) -> TimerTicket {
        self.timer.restart()
    }

    /// Cancels only the pending timer. Returns whether one was pending.
    pub fn cancel_timer(&mut self) -> bool {
        self.timer.cancel()
    }

    /// Cancels the pending timer and forgets the in-flight lookup so its result is dropped.
    pub fn cancel(&mut self) -> bool {
        self.in_flight = None;
        self.timer.cancel()
    }

    /// Whether a debounce timer is pending.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Whether an issued lookup is still awaited.
    pub fn is_awaiting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Text of the last issued lookup.
    pub fn last_queried(&self) -> Option<&str> {
        self.last_queried.as_deref()
    }

    /// Handles an elapsed timer for the current input `text`.
    pub fn expire(&mut self, ticket: TimerTicket, text: &str) -> Expiry {
        if !self.timer.fire(ticket) {
            return Expiry::Stale;
        }
        if text.chars().count() < self.min_chars {
            return Expiry::TooShort;
        }
        if self.last_queried.as_deref() == Some(text) {
            return Expiry::Unchanged;
        }

        self.issued += 1;
        self.last_queried = Some(text.to_string());
        self.in_flight = Some(self.issued);
        Expiry::Lookup(LookupRequest {
            seq: self.issued,
            text: text.to_string(),
        })
    }

    /// Accepts the result of lookup `seq` if it is still the one awaited.
    pub fn accept(&mut self, seq: u64) -> bool {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn burst_of_keystrokes_issues_one_lookup_with_final_text() {
        let mut fetcher = DebouncedFetcher::new(300, 3);
        let mut tickets = Vec::new();
        let mut text = String::new();
        for ch in "abcde".chars() {
            text.push(ch);
            tickets.push((fetcher.trigger(), text.clone()));
        }

        let issued = tickets
            .into_iter()
            .filter_map(|(ticket, text)| match fetcher.expire(ticket, &text) {
                Expiry::Lookup(request) => Some(request.text),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(issued, vec!["abcde".to_string()]);
    }

    #[test]
    fn short_or_repeated_text_is_not_looked_up() {
        let mut fetcher = DebouncedFetcher::new(300, 3);
        let ticket = fetcher.trigger();
        assert_eq!(fetcher.expire(ticket, "ab"), Expiry::TooShort);

        let ticket = fetcher.trigger();
        assert!(matches!(fetcher.expire(ticket, "abc"), Expiry::Lookup(_)));
        let ticket = fetcher.trigger();
        assert_eq!(fetcher.expire(ticket, "abc"), Expiry::Unchanged);
    }

    #[test]
    fn minimum_length_counts_characters() {
        let mut fetcher = DebouncedFetcher::new(300, 3);
        let ticket = fetcher.trigger();

        assert!(matches!(fetcher.expire(ticket, "été"), Expiry::Lookup(_)));
    }

    #[test]
    fn only_latest_lookup_result_is_accepted() {
        let mut fetcher = DebouncedFetcher::new(300, 3);
        let ticket = fetcher.trigger();
        let Expiry::Lookup(first) = fetcher.expire(ticket, "core") else {
            panic!("expected lookup");
        };
        let ticket = fetcher.trigger();
        let Expiry::Lookup(second) = fetcher.expire(ticket, "core-sw") else {
            panic!("expected lookup");
        };

        assert!(!fetcher.accept(first.seq));
        assert!(fetcher.accept(second.seq));
        assert!(!fetcher.accept(second.seq));
    }

    #[test]
    fn cancel_drops_in_flight_lookup() {
        let mut fetcher = DebouncedFetcher::new(300, 3);
        let ticket = fetcher.trigger();
        let Expiry::Lookup(request) = fetcher.expire(ticket, "core") else {
            panic!("expected lookup");
        };

        fetcher.cancel();
        assert!(!fetcher.accept(request.seq));
        assert_eq!(fetcher.last_queried(), Some("core"));
    }
}
