//! Relative endpoint paths of the inspection server.

use wiremaps_core::PortIndex;

/// One server endpoint with its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `equipment/`
    EquipmentList,
    /// `equipment/{ip}/descr/`
    Description {
        /// Equipment IP.
        ip: &'a str,
    },
    /// `equipment/{ip}/`
    Ports {
        /// Equipment IP.
        ip: &'a str,
    },
    /// `equipment/{ip}/{port}/`
    PortDetails {
        /// Equipment IP.
        ip: &'a str,
        /// Port key.
        port: &'a PortIndex,
    },
    /// `equipment/{ip}/refresh/`
    Refresh {
        /// Equipment IP.
        ip: &'a str,
    },
    /// `search/{text}/`
    Search {
        /// Search text.
        text: &'a str,
    },
    /// `complete/{text}/`
    Complete {
        /// Partial text.
        text: &'a str,
    },
}

/// Endpoint family without parameters, used to target failures and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// `equipment/`
    EquipmentList,
    /// `equipment/{ip}/descr/`
    Description,
    /// `equipment/{ip}/`
    Ports,
    /// `equipment/{ip}/{port}/`
    PortDetails,
    /// `equipment/{ip}/refresh/`
    Refresh,
    /// `search/{text}/`
    Search,
    /// `complete/{text}/`
    Complete,
}

impl Endpoint<'_> {
    /// Endpoint family.
    pub const fn kind(&self) -> EndpointKind {
        match self {
            Self::EquipmentList => EndpointKind::EquipmentList,
            Self::Description { .. } => EndpointKind::Description,
            Self::Ports { .. } => EndpointKind::Ports,
            Self::PortDetails { .. } => EndpointKind::PortDetails,
            Self::Refresh { .. } => EndpointKind::Refresh,
            Self::Search { .. } => EndpointKind::Search,
            Self::Complete { .. } => EndpointKind::Complete,
        }
    }

    /// Relative path with each dynamic segment passed through `encode`.
    pub fn path_with(&self, encode: impl Fn(&str) -> String) -> String {
        match self {
            Self::EquipmentList => "equipment/".to_string(),
            Self::Description { ip } => format!("equipment/{}/descr/", encode(ip)),
            Self::Ports { ip } => format!("equipment/{}/", encode(ip)),
            Self::PortDetails { ip, port } => {
                format!("equipment/{}/{}/", encode(ip), encode(port.as_str()))
            }
            Self::Refresh { ip } => format!("equipment/{}/refresh/", encode(ip)),
            Self::Search { text } => format!("search/{}/", encode(text)),
            Self::Complete { text } => format!("complete/{}/", encode(text)),
        }
    }

    /// Relative path with segments left as-is.
    pub fn path(&self) -> String {
        self.path_with(str::to_string)
    }
}

/// Joins an API base and a relative path. An empty base keeps the path relative to the page.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
