//! Session state owned by the inspector runtime.

use wiremaps_core::{
    CoalescePolicy, CoalescingScheduler, EquipmentEntry, PortTable, SessionTracker, SortOrder,
    SortTrigger,
};

use crate::config::InspectorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Info,
    Ok,
    Alert,
}

impl BannerLevel {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Ok => "ok",
            Self::Alert => "alert",
        }
    }

    /// `ok` and `alert` banners dismiss themselves; `info` stays until replaced.
    pub const fn auto_dismisses(self) -> bool {
        !matches!(self, Self::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub level: BannerLevel,
    pub message: String,
}

impl Banner {
    pub fn new(level: BannerLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    pub query: String,
    /// HTML fragments, one per result item.
    pub results: Vec<String>,
}

/// Panels that can be scrolled into view after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Ports,
    SearchResults,
}

impl ScrollTarget {
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Ports => "ports",
            Self::SearchResults => "searchresults",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorState {
    pub equipment: Vec<EquipmentEntry>,
    pub selected_ip: Option<String>,
    pub description: Option<String>,
    pub table: PortTable,
    pub ports_visible: bool,
    pub expand_all_available: bool,
    pub sort_order: SortOrder,
    pub sort_trigger: SortTrigger,
    pub search: Option<SearchPanel>,
    pub banner: Option<Banner>,
    pub banner_timer: CoalescingScheduler,
    pub banner_dismiss_ms: u32,
    pub session: SessionTracker,
}

impl InspectorState {
    pub fn new(config: &InspectorConfig) -> Self {
        Self {
            equipment: Vec::new(),
            selected_ip: None,
            description: None,
            table: PortTable::new(),
            ports_visible: false,
            expand_all_available: false,
            sort_order: SortOrder::new(),
            sort_trigger: SortTrigger::new(config.table.sort_delay_ms),
            search: None,
            banner: None,
            banner_timer: CoalescingScheduler::new(CoalescePolicy::Restart),
            banner_dismiss_ms: config.banner.dismiss_ms,
            session: SessionTracker::new(),
        }
    }
}

impl Default for InspectorState {
    fn default() -> Self {
        Self::new(&InspectorConfig::default())
    }
}
