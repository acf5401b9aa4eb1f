//! Classification of anchors embedded in server HTML.

use crate::model::EquipmentEntry;

/// What an embedded link asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// `search/{term}/`.
    Search(String),
    /// `equipment/{ip-or-hostname}/`.
    Equipment(String),
    /// Anything else; carries the raw href.
    Unknown(String),
}

impl LinkTarget {
    /// Classifies an href by its last path segment.
    pub fn parse(href: &str) -> Self {
        let trimmed = href.strip_suffix('/').unwrap_or(href);
        let Some((_, last)) = trimmed.rsplit_once('/') else {
            return Self::Unknown(href.to_string());
        };
        if last.is_empty() {
            return Self::Unknown(href.to_string());
        }

        if href.starts_with("search") {
            Self::Search(last.to_string())
        } else if href.contains("equipment") {
            Self::Equipment(last.to_string())
        } else {
            Self::Unknown(href.to_string())
        }
    }
}

/// Finds the equipment named by `target`, by IP or case-insensitive hostname.
pub fn find_equipment<'a>(
    entries: &'a [EquipmentEntry],
    target: &str,
) -> Option<&'a EquipmentEntry> {
    entries.iter().find(|entry| entry.matches(target))
}
