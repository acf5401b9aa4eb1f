//! Sort keys, multi-column sort order, the coalescing sort trigger and zebra striping.

use std::cmp::Ordering;

use crate::columns::{ColumnKey, FixedColumn};
use crate::scheduler::{CoalescePolicy, CoalescingScheduler, TimerTicket};
use crate::table::PortRow;

/// Comparable value extracted from a cell.
///
/// Numbers order before text, text compares case-insensitively, and empty values always sink to
/// the bottom whatever the direction.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Numeric value.
    Number(f64),
    /// Lower-cased text.
    Text(String),
    /// No value.
    Empty,
}

impl SortValue {
    /// Classifies raw cell text.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(trimmed.to_lowercase()),
        }
    }

    fn compare_present(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Number(_), _) => Ordering::Less,
            (_, Self::Number(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Sort direction of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Opposite direction.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header class for the indicator.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Ascending => "header-sort-up",
            Self::Descending => "header-sort-down",
        }
    }
}

/// One entry of the sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn {
    /// Sorted column.
    pub key: ColumnKey,
    /// Its direction.
    pub direction: SortDirection,
}

/// Ordered list of sort columns, primary first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    columns: Vec<SortColumn>,
}

impl SortOrder {
    /// Empty order (rows keep their render order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a header click.
    ///
    /// A plain click makes `key` the only sort column, toggling its direction if it was already
    /// sorted. An additive (shift) click toggles `key` in place or appends it ascending.
    pub fn click(&mut self, key: ColumnKey, additive: bool) {
        let existing = self.direction_of(&key);
        if additive {
            match self.columns.iter_mut().find(|column| column.key == key) {
                Some(column) => column.direction = column.direction.toggled(),
                None => self.columns.push(SortColumn {
                    key,
                    direction: SortDirection::Ascending,
                }),
            }
            return;
        }

        let direction = existing
            .map(SortDirection::toggled)
            .unwrap_or(SortDirection::Ascending);
        self.columns = vec![SortColumn { key, direction }];
    }

    /// Direction of `key`, if sorted.
    pub fn direction_of(&self, key: &ColumnKey) -> Option<SortDirection> {
        self.columns
            .iter()
            .find(|column| &column.key == key)
            .map(|column| column.direction)
    }

    /// Sort columns, primary first.
    pub fn columns(&self) -> &[SortColumn] {
        &self.columns
    }

    /// Whether no column is sorted.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Forgets every sort column.
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Compares two rows column by column.
    pub fn compare(&self, keys: &impl SortKeyExtractor, a: &PortRow, b: &PortRow) -> Ordering {
        for column in &self.columns {
            let left = keys.sort_value(a, &column.key);
            let right = keys.sort_value(b, &column.key);
            let ordering = match (&left, &right) {
                (SortValue::Empty, SortValue::Empty) => Ordering::Equal,
                (SortValue::Empty, _) => Ordering::Greater,
                (_, SortValue::Empty) => Ordering::Less,
                _ => match column.direction {
                    SortDirection::Ascending => left.compare_present(&right),
                    SortDirection::Descending => right.compare_present(&left),
                },
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Pluggable per-column key extraction.
pub trait SortKeyExtractor {
    /// Sort value of `row` under `key`.
    fn sort_value(&self, row: &PortRow, key: &ColumnKey) -> SortValue;
}

/// Port index for the name column, state label for the state column, explicit sort key (else
/// display HTML) for dynamic columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSortKeys;

impl SortKeyExtractor for DefaultSortKeys {
    fn sort_value(&self, row: &PortRow, key: &ColumnKey) -> SortValue {
        match key {
            ColumnKey::Fixed(FixedColumn::Name) => SortValue::from_text(row.index().as_str()),
            ColumnKey::Fixed(FixedColumn::State) => SortValue::from_text(&row.icon().label),
            ColumnKey::Fixed(FixedColumn::Alias) => SortValue::from_text(row.record().alias_text()),
            ColumnKey::Dynamic(name) => row
                .detail(name)
                .map(|value| SortValue::from_text(value.sort_key.as_deref().unwrap_or(&value.html)))
                .unwrap_or(SortValue::Empty),
        }
    }
}

/// Zebra stripe of a row, derived from its final position only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStripe {
    /// Zero-based even positions: the first, third, ... row.
    Even,
    /// Zero-based odd positions.
    Odd,
}

impl RowStripe {
    /// Stripe for a zero-based row position.
    pub const fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    /// Row class.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

/// Coalesces table mutations into a single deferred sort pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortTrigger {
    timer: CoalescingScheduler,
    delay_ms: u32,
}

impl SortTrigger {
    /// Trigger with the given coalescing window.
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            timer: CoalescingScheduler::new(CoalescePolicy::KeepFirst),
            delay_ms,
        }
    }

    /// Coalescing window in milliseconds.
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Requests a sort pass. Returns a ticket to arm only when no pass is already pending.
    pub fn schedule_sort(&mut self) -> Option<TimerTicket> {
        self.timer.schedule()
    }

    /// Reports that the window elapsed; `true` means the pass must run now.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        self.timer.fire(ticket)
    }

    /// Drops a pending pass.
    pub fn cancel(&mut self) -> bool {
        self.timer.cancel()
    }

    /// Whether a pass is pending.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }
}
