//! Headless core of the port inspector.
//!
//! Everything here is plain data and state machines: the wire model, the dynamic column registry,
//! the port table, sorting, the coalescing scheduler, the debounced fetcher, the autocomplete
//! widget, request tagging and link classification. Nothing touches the DOM, a clock or the
//! network; hosts feed events in and apply the returned effects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod autocomplete;
pub mod columns;
pub mod fetcher;
pub mod links;
pub mod model;
pub mod scheduler;
pub mod session;
pub mod sort;
pub mod table;

pub use autocomplete::{
    AutocompleteEffect, AutocompleteKey, AutocompletePhase, AutocompleteWidget, InputGeometry,
    KeyOutcome, ListAnchor,
};
pub use columns::{Column, ColumnKey, ColumnRegistry, FixedColumn, FIXED_COLUMN_COUNT};
pub use fetcher::{DebouncedFetcher, Expiry, LookupRequest};
pub use links::{find_equipment, LinkTarget};
pub use model::{
    DetailCell, Duplex, EquipmentEntry, PortIcon, PortIndex, PortRecord, PortSpeed, PortState,
    RefreshOutcome,
};
pub use scheduler::{CoalescePolicy, CoalescingScheduler, TimerTicket};
pub use session::{RequestChannel, RequestTag, SessionTracker};
pub use sort::{
    DefaultSortKeys, RowStripe, SortColumn, SortDirection, SortKeyExtractor, SortOrder,
    SortTrigger, SortValue,
};
pub use table::{CellContent, DetailValue, PortRow, PortTable, TableError};
