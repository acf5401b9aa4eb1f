//! Wire records returned by the inspection endpoints and the values derived from them.
//!
//! Every endpoint answers with positional JSON arrays. The raw tuple shapes are private and
//! converted into named records through `#[serde(from = ...)]`, so callers only ever see the typed
//! form.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
                (value as i64).to_string()
            }
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value,
            Self::Flag(value) => value.to_string(),
        }
    }
}

/// Opaque port key, unique within one equipment and stable across refreshes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "RawScalar")]
pub struct PortIndex(String);

impl PortIndex {
    /// Builds a key from its textual form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the key as sent by the server.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawScalar> for PortIndex {
    fn from(raw: RawScalar) -> Self {
        Self(raw.into_text())
    }
}

impl From<&str> for PortIndex {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<i64> for PortIndex {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

impl From<i32> for PortIndex {
    fn from(raw: i32) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for PortIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable piece of equipment, decoded from a `[hostname, ip]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(Option<String>, String)")]
pub struct EquipmentEntry {
    /// Hostname as recorded by the collector (may be empty).
    pub hostname: String,
    /// Management IP used as the equipment identifier in every URL.
    pub ip: String,
}

impl EquipmentEntry {
    /// Builds an entry from owned parts.
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
        }
    }

    /// Selector label, `hostname - ip`.
    pub fn label(&self) -> String {
        if self.hostname.is_empty() {
            self.ip.clone()
        } else {
            format!("{} - {}", self.hostname, self.ip)
        }
    }

    /// Returns whether `target` names this equipment by IP or (case-insensitively) by hostname.
    pub fn matches(&self, target: &str) -> bool {
        self.ip == target
            || (!self.hostname.is_empty() && self.hostname.to_lowercase() == target.to_lowercase())
    }
}

impl From<(Option<String>, String)> for EquipmentEntry {
    fn from((hostname, ip): (Option<String>, String)) -> Self {
        Self {
            hostname: hostname.unwrap_or_default(),
            ip,
        }
    }
}

/// Operational state of a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortState {
    /// Link is up.
    Up,
    /// Link is down.
    Down,
    /// Any other state label reported by the collector.
    Other(String),
}

impl PortState {
    /// Parses the collector's state label.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "up" => Self::Up,
            "down" => Self::Down,
            other => Self::Other(other.to_string()),
        }
    }

    /// Token used in icon names and sort labels.
    pub fn token(&self) -> &str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Other(raw) if raw.is_empty() => "unknown",
            Self::Other(raw) => raw,
        }
    }
}

/// Negotiated port speed, restricted to the values that have a dedicated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSpeed {
    /// 10 Mbit/s.
    Mbps10,
    /// 100 Mbit/s.
    Mbps100,
    /// 1 Gbit/s.
    Mbps1000,
    /// 10 Gbit/s.
    Mbps10000,
    /// Missing or not one of the known speeds.
    Unknown,
}

impl PortSpeed {
    /// Maps a raw speed in Mbit/s to a known speed, everything else becomes [`Self::Unknown`].
    pub fn normalize(raw: Option<i64>) -> Self {
        match raw {
            Some(10) => Self::Mbps10,
            Some(100) => Self::Mbps100,
            Some(1000) => Self::Mbps1000,
            Some(10000) => Self::Mbps10000,
            _ => Self::Unknown,
        }
    }

    fn from_value(raw: &Value) -> Self {
        let mbps = match raw {
            Value::Number(number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.fract() == 0.0)
                    .map(|value| value as i64)
            }),
            Value::String(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        };
        Self::normalize(mbps)
    }

    /// Token used in icon names and sort labels.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mbps10 => "10",
            Self::Mbps100 => "100",
            Self::Mbps1000 => "1000",
            Self::Mbps10000 => "10000",
            Self::Unknown => "unknown",
        }
    }
}

/// Duplex mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplex {
    /// Full duplex.
    Full,
    /// Half duplex.
    Half,
    /// Not reported.
    Unknown,
}

impl Duplex {
    /// Parses the collector's duplex label.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("full") => Self::Full,
            Some("half") => Self::Half,
            _ => Self::Unknown,
        }
    }

    /// Token used in icon names and sort labels.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Unknown => "unknown",
        }
    }
}

fn flag_from_value(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_i64().map(|value| value != 0),
        Value::String(text) => match text.trim() {
            "true" | "t" | "1" => Some(true),
            "false" | "f" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[derive(Deserialize)]
struct RawPortRecord(
    PortIndex,
    Option<String>,
    Option<String>,
    Option<String>,
    Value,
    Option<String>,
    Value,
);

/// One row of the device-ports endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPortRecord")]
pub struct PortRecord {
    /// Row key.
    pub index: PortIndex,
    /// Port name shown in the name column.
    pub display_name: String,
    /// Operator-assigned alias, `None` when the collector has none.
    pub alias: Option<String>,
    /// Operational state.
    pub state: PortState,
    /// Normalized speed.
    pub speed: PortSpeed,
    /// Duplex mode.
    pub duplex: Duplex,
    /// Auto-negotiation flag, the extra icon discriminator.
    pub autoneg: Option<bool>,
}

impl From<RawPortRecord> for PortRecord {
    fn from(raw: RawPortRecord) -> Self {
        let RawPortRecord(index, name, alias, state, speed, duplex, flag) = raw;
        Self {
            index,
            display_name: name.unwrap_or_default(),
            alias,
            state: PortState::parse(state.as_deref().unwrap_or_default()),
            speed: PortSpeed::from_value(&speed),
            duplex: Duplex::parse(duplex.as_deref()),
            autoneg: flag_from_value(&flag),
        }
    }
}

impl PortRecord {
    /// Builds an `up` port with unknown speed/duplex; refine with the `with_*` helpers.
    pub fn new(index: impl Into<PortIndex>, display_name: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            display_name: display_name.into(),
            alias: None,
            state: PortState::Up,
            speed: PortSpeed::Unknown,
            duplex: Duplex::Unknown,
            autoneg: None,
        }
    }

    /// Sets the alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the state.
    pub fn with_state(mut self, state: PortState) -> Self {
        self.state = state;
        self
    }

    /// Sets the speed from a raw Mbit/s value.
    pub fn with_speed(mut self, mbps: Option<i64>) -> Self {
        self.speed = PortSpeed::normalize(mbps);
        self
    }

    /// Sets the duplex mode.
    pub fn with_duplex(mut self, duplex: Duplex) -> Self {
        self.duplex = duplex;
        self
    }

    /// Sets the auto-negotiation flag.
    pub fn with_autoneg(mut self, autoneg: Option<bool>) -> Self {
        self.autoneg = autoneg;
        self
    }

    /// Alias text for display; a missing alias is the empty string.
    pub fn alias_text(&self) -> &str {
        self.alias.as_deref().unwrap_or_default()
    }
}

/// Status icon resource selected for a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortIcon {
    /// Relative image path.
    pub resource: String,
    /// Textual state label, also used as the state column sort key.
    pub label: String,
}

impl PortIcon {
    /// Derives the icon from `(state, normalized speed, duplex, autoneg)`.
    pub fn for_port(record: &PortRecord) -> Self {
        let state = record.state.token();
        let speed = record.speed.token();
        let duplex = record.duplex.token();
        let flag = match record.autoneg {
            Some(true) => "true",
            Some(false) => "false",
            None => "unknown",
        };
        Self {
            resource: format!("static/port-{state}-{speed}-{duplex}-{flag}.png"),
            label: format!("{state} {speed} {duplex}"),
        }
    }
}

#[derive(Deserialize)]
struct RawDetailCell(String, Option<String>, Option<RawScalar>);

/// One `[columnName, html, sortKey|null]` tuple of the port-detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDetailCell")]
pub struct DetailCell {
    /// Dynamic column the value belongs to.
    pub column: String,
    /// Display HTML.
    pub html: String,
    /// Explicit sort key, distinct from the display HTML.
    pub sort_key: Option<String>,
}

impl From<RawDetailCell> for DetailCell {
    fn from(RawDetailCell(column, html, sort_key): RawDetailCell) -> Self {
        Self {
            column,
            html: html.unwrap_or_default(),
            sort_key: sort_key.map(RawScalar::into_text),
        }
    }
}

impl DetailCell {
    /// Builds a detail tuple.
    pub fn new(
        column: impl Into<String>,
        html: impl Into<String>,
        sort_key: Option<&str>,
    ) -> Self {
        Self {
            column: column.into(),
            html: html.into(),
            sort_key: sort_key.map(str::to_string),
        }
    }
}

#[derive(Deserialize)]
struct RawRefreshOutcome {
    status: i64,
    #[serde(default)]
    message: Option<String>,
}

/// Result of the refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRefreshOutcome")]
pub enum RefreshOutcome {
    /// The collector accepted the refresh.
    Refreshed,
    /// The server declined; the message is shown to the operator.
    Rejected {
        /// Server-supplied reason.
        message: String,
    },
}

impl From<RawRefreshOutcome> for RefreshOutcome {
    fn from(raw: RawRefreshOutcome) -> Self {
        if raw.status != 0 {
            Self::Refreshed
        } else {
            Self::Rejected {
                message: raw.message.unwrap_or_else(|| "unknown error".to_string()),
            }
        }
    }
}
