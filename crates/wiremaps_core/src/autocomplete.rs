//! Autocomplete input state machine.
//!
//! The widget owns no DOM and no timer. Key presses, timer expiries, lookup results and pointer
//! events go in; [`AutocompleteEffect`]s come out for the host to apply.

use crate::fetcher::{DebouncedFetcher, Expiry, LookupRequest};
use crate::scheduler::TimerTicket;

/// Keys the widget distinguishes, mapped from DOM key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteKey {
    /// Escape, Delete, Backspace or Enter.
    Clear,
    /// ArrowDown or Tab.
    Next,
    /// ArrowUp.
    Previous,
    /// Anything else.
    Other,
}

impl AutocompleteKey {
    /// Maps a `keydown` key code.
    pub const fn from_key_code(code: u32) -> Self {
        match code {
            27 | 46 | 8 | 13 => Self::Clear,
            40 | 9 => Self::Next,
            38 => Self::Previous,
            _ => Self::Other,
        }
    }
}

/// Widget phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompletePhase {
    /// No timer, no lookup, no list.
    Idle,
    /// Debounce timer running.
    Typing,
    /// Lookup in flight.
    Loading,
    /// Suggestion list shown.
    Showing,
}

/// Screen box of the input element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputGeometry {
    /// Left offset.
    pub left: f64,
    /// Top offset.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Where the suggestion list is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListAnchor {
    /// Left offset.
    pub left: f64,
    /// Top offset.
    pub top: f64,
    /// Width, matching the input.
    pub width: f64,
}

impl ListAnchor {
    /// Directly below the input, same width.
    pub fn below(input: InputGeometry) -> Self {
        Self {
            left: input.left,
            top: input.top + input.height,
            width: input.width,
        }
    }
}

/// Side effect requested by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteEffect {
    /// Arm the debounce timer.
    ArmTimer {
        /// Ticket to report back on expiry.
        ticket: TimerTicket,
        /// Delay in milliseconds.
        delay_ms: u32,
    },
    /// Clear the armed debounce timer.
    CancelTimer,
    /// Issue a lookup.
    Lookup(LookupRequest),
    /// Overwrite the input value.
    SetInputValue(String),
    /// Submit the enclosing form.
    Submit,
}

/// Result of a key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Effects to apply, in order.
    pub effects: Vec<AutocompleteEffect>,
    /// Whether the browser default action must be suppressed.
    pub prevent_default: bool,
}

/// One autocomplete input.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteWidget {
    fetcher: DebouncedFetcher,
    phase: AutocompletePhase,
    items: Vec<String>,
    selected: Option<usize>,
    anchor: Option<ListAnchor>,
}

impl AutocompleteWidget {
    /// Idle widget.
    pub fn new(delay_ms: u32, min_chars: usize) -> Self {
        Self {
            fetcher: DebouncedFetcher::new(delay_ms, min_chars),
            phase: AutocompletePhase::Idle,
            items: Vec::new(),
            selected: None,
            anchor: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> AutocompletePhase {
        self.phase
    }

    /// Suggestions currently listed.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Cursor position.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// List placement while showing.
    pub fn anchor(&self) -> Option<ListAnchor> {
        self.anchor
    }

    /// Whether the suggestion list is on screen.
    pub fn is_showing(&self) -> bool {
        self.phase == AutocompletePhase::Showing
    }

    /// Handles a `keydown`.
    pub fn handle_key(&mut self, key: AutocompleteKey) -> KeyOutcome {
        let mut outcome = KeyOutcome::default();
        if self.fetcher.cancel_timer() {
            outcome.effects.push(AutocompleteEffect::CancelTimer);
        }

        match key {
            AutocompleteKey::Next | AutocompleteKey::Previous => {
                if let Some(value) = self.move_cursor(key == AutocompleteKey::Next) {
                    outcome.effects.push(AutocompleteEffect::SetInputValue(value));
                    outcome.prevent_default = true;
                } else if self.phase == AutocompletePhase::Typing {
                    // The debounce timer was just cancelled.
                    self.phase = if self.fetcher.is_awaiting() {
                        AutocompletePhase::Loading
                    } else {
                        AutocompletePhase::Idle
                    };
                }
            }
            AutocompleteKey::Clear => {
                self.fetcher.cancel();
                self.reset();
            }
            AutocompleteKey::Other => {
                let ticket = self.fetcher.trigger();
                if !self.is_showing() {
                    self.phase = AutocompletePhase::Typing;
                }
                outcome.effects.push(AutocompleteEffect::ArmTimer {
                    ticket,
                    delay_ms: self.fetcher.delay_ms(),
                });
            }
        }
        outcome
    }

    /// Handles an elapsed debounce timer, given the input's current text.
    pub fn on_timer(&mut self, ticket: TimerTicket, text: &str) -> Vec<AutocompleteEffect> {
        match self.fetcher.expire(ticket, text) {
            Expiry::Stale => Vec::new(),
            Expiry::Unchanged => {
                if self.phase == AutocompletePhase::Typing {
                    self.phase = if self.items.is_empty() {
                        AutocompletePhase::Idle
                    } else {
                        AutocompletePhase::Showing
                    };
                }
                Vec::new()
            }
            Expiry::TooShort => {
                self.reset();
                Vec::new()
            }
            Expiry::Lookup(request) => {
                self.items.clear();
                self.selected = None;
                self.anchor = None;
                self.phase = AutocompletePhase::Loading;
                vec![AutocompleteEffect::Lookup(request)]
            }
        }
    }

    /// Handles a lookup completion. Failures and empty results hide the list silently.
    ///
    /// Returns whether the result was used.
    pub fn on_lookup_result<E>(
        &mut self,
        seq: u64,
        result: Result<Vec<String>, E>,
        anchor: ListAnchor,
    ) -> bool {
        if !self.fetcher.accept(seq) {
            return false;
        }
        match result {
            Ok(items) if !items.is_empty() => {
                self.items = items;
                self.selected = Some(0);
                self.anchor = Some(anchor);
                self.phase = AutocompletePhase::Showing;
            }
            _ => self.reset(),
        }
        true
    }

    /// Moves the cursor to the hovered item.
    pub fn hover(&mut self, index: usize) {
        if self.is_showing() && index < self.items.len() {
            self.selected = Some(index);
        }
    }

    /// Commits the clicked item.
    pub fn click(&mut self, index: usize) -> Vec<AutocompleteEffect> {
        if !self.is_showing() {
            return Vec::new();
        }
        let Some(value) = self.items.get(index).cloned() else {
            return Vec::new();
        };
        self.fetcher.cancel();
        self.reset();
        vec![
            AutocompleteEffect::SetInputValue(value),
            AutocompleteEffect::Submit,
        ]
    }

    /// Hides the list, for example when the input loses focus.
    pub fn dismiss(&mut self) -> Vec<AutocompleteEffect> {
        let pending = self.fetcher.cancel();
        self.reset();
        if pending {
            vec![AutocompleteEffect::CancelTimer]
        } else {
            Vec::new()
        }
    }

    fn move_cursor(&mut self, forward: bool) -> Option<String> {
        if !self.is_showing() || self.items.is_empty() {
            return None;
        }
        let len = self.items.len();
        let current = self.selected.unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.selected = Some(next);
        self.items.get(next).cloned()
    }

    fn reset(&mut self) {
        self.phase = AutocompletePhase::Idle;
        self.items.clear();
        self.selected = None;
        self.anchor = None;
    }
}
