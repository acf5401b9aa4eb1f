//! In-memory [`WiremapsApi`] used by tests and the offline demo build.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use wiremaps_core::{DetailCell, EquipmentEntry, PortIndex, PortRecord, RefreshOutcome};

use super::service::{ApiFuture, WiremapsApi};
use crate::{ApiError, Endpoint, EndpointKind};

/// Maximum number of completion candidates returned by the server.
pub const COMPLETE_LIMIT: usize = 10;

/// Completion requests shorter than this return nothing.
pub const COMPLETE_MIN_CHARS: usize = 3;

#[derive(Debug, Default)]
struct MemoryFixture {
    equipment: Vec<EquipmentEntry>,
    descriptions: HashMap<String, String>,
    ports: HashMap<String, Vec<PortRecord>>,
    details: HashMap<(String, PortIndex), Vec<DetailCell>>,
    refresh: HashMap<String, RefreshOutcome>,
    search: HashMap<String, Vec<String>>,
    failing: HashSet<EndpointKind>,
    calls: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// Fixture-backed API. Clones share the same fixture and call log.
pub struct MemoryWiremapsApi {
    inner: Rc<RefCell<MemoryFixture>>,
}

impl MemoryWiremapsApi {
    /// Registers an equipment.
    pub fn with_equipment(self, hostname: &str, ip: &str) -> Self {
        self.inner
            .borrow_mut()
            .equipment
            .push(EquipmentEntry::new(hostname, ip));
        self
    }

    /// Sets the description HTML of `ip`.
    pub fn with_description(self, ip: &str, html: &str) -> Self {
        self.inner
            .borrow_mut()
            .descriptions
            .insert(ip.to_string(), html.to_string());
        self
    }

    /// Sets the port rows of `ip`.
    pub fn with_ports(self, ip: &str, ports: Vec<PortRecord>) -> Self {
        self.inner.borrow_mut().ports.insert(ip.to_string(), ports);
        self
    }

    /// Sets the detail tuples of one port.
    pub fn with_details(self, ip: &str, port: impl Into<PortIndex>, details: Vec<DetailCell>) -> Self {
        self.inner
            .borrow_mut()
            .details
            .insert((ip.to_string(), port.into()), details);
        self
    }

    /// Sets the refresh answer for `ip`.
    pub fn with_refresh(self, ip: &str, outcome: RefreshOutcome) -> Self {
        self.inner
            .borrow_mut()
            .refresh
            .insert(ip.to_string(), outcome);
        self
    }

    /// Sets the results of one search text.
    pub fn with_search(self, text: &str, results: Vec<String>) -> Self {
        self.inner
            .borrow_mut()
            .search
            .insert(text.to_string(), results);
        self
    }

    /// Makes every call of `kind` fail with a network error.
    pub fn fail(&self, kind: EndpointKind) {
        self.inner.borrow_mut().failing.insert(kind);
    }

    /// Undoes [`Self::fail`].
    pub fn recover(&self, kind: EndpointKind) {
        self.inner.borrow_mut().failing.remove(&kind);
    }

    /// Relative paths requested so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, endpoint: Endpoint<'_>) -> Result<(), ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(endpoint.path());
        if inner.failing.contains(&endpoint.kind()) {
            return Err(ApiError::Network(format!(
                "simulated failure for `{}`",
                endpoint.path()
            )));
        }
        Ok(())
    }

    fn completions(&self, text: &str) -> Vec<String> {
        if text.chars().count() < COMPLETE_MIN_CHARS {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        let inner = self.inner.borrow();
        let mut seen = HashSet::new();
        inner
            .equipment
            .iter()
            .map(|entry| entry.hostname.as_str())
            .chain(inner.equipment.iter().map(|entry| entry.ip.as_str()))
            .filter(|candidate| !candidate.is_empty())
            .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
            .filter(|candidate| seen.insert(candidate.to_string()))
            .take(COMPLETE_LIMIT)
            .map(str::to_string)
            .collect()
    }
}

impl WiremapsApi for MemoryWiremapsApi {
    fn list_equipment(&self) -> ApiFuture<'_, Result<Vec<EquipmentEntry>, ApiError>> {
        Box::pin(async move {
            self.record(Endpoint::EquipmentList)?;
            Ok(self.inner.borrow().equipment.clone())
        })
    }

    fn equipment_description<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<Option<String>, ApiError>> {
        Box::pin(async move {
            self.record(Endpoint::Description { ip })?;
            Ok(self.inner.borrow().descriptions.get(ip).cloned())
        })
    }

    fn list_ports<'a>(&'a self, ip: &'a str) -> ApiFuture<'a, Result<Vec<PortRecord>, ApiError>> {
        Box::pin(async move {
            let endpoint = Endpoint::Ports { ip };
            self.record(endpoint)?;
            self.inner
                .borrow()
                .ports
                .get(ip)
                .cloned()
                .ok_or_else(|| ApiError::Status {
                    status: 404,
                    path: endpoint.path(),
                })
        })
    }

    fn port_details<'a>(
        &'a self,
        ip: &'a str,
        port: &'a PortIndex,
    ) -> ApiFuture<'a, Result<Vec<DetailCell>, ApiError>> {
        Box::pin(async move {
            self.record(Endpoint::PortDetails { ip, port })?;
            Ok(self
                .inner
                .borrow()
                .details
                .get(&(ip.to_string(), port.clone()))
                .cloned()
                .unwrap_or_default())
        })
    }

    fn refresh_equipment<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<RefreshOutcome, ApiError>> {
        Box::pin(async move {
            self.record(Endpoint::Refresh { ip })?;
            let inner = self.inner.borrow();
            if let Some(outcome) = inner.refresh.get(ip) {
                return Ok(outcome.clone());
            }
            if inner.equipment.iter().any(|entry| entry.ip == ip) {
                Ok(RefreshOutcome::Refreshed)
            } else {
                Ok(RefreshOutcome::Rejected {
                    message: "Cannot find the equipment to refresh".to_string(),
                })
            }
        })
    }

    fn search<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(async move {
            self.record(Endpoint::Search { text })?;
            Ok(self
                .inner
                .borrow()
                .search
                .get(text)
                .cloned()
                .unwrap_or_default())
        })
    }

    fn complete<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(async move {
            self.record(Endpoint::Complete { text })?;
            Ok(self.completions(text))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn fixture() -> MemoryWiremapsApi {
        MemoryWiremapsApi::default()
            .with_equipment("core-sw1", "10.0.0.1")
            .with_equipment("Core-SW2", "10.0.0.2")
            .with_equipment("edge", "192.168.1.1")
            .with_ports("10.0.0.1", vec![PortRecord::new(1, "eth0")])
            .with_details(
                "10.0.0.1",
                1,
                vec![DetailCell::new("VLAN", "100", None)],
            )
    }

    #[test]
    fn completion_is_prefix_based_and_case_insensitive() {
        let api = fixture();
        let api_obj: &dyn WiremapsApi = &api;

        assert_eq!(
            block_on(api_obj.complete("CORE")).expect("complete"),
            vec!["core-sw1".to_string(), "Core-SW2".to_string()]
        );
        assert_eq!(
            block_on(api_obj.complete("10.0")).expect("complete"),
            vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()]
        );
        assert!(block_on(api_obj.complete("co")).expect("complete").is_empty());
    }

    #[test]
    fn completion_is_capped() {
        let api = (0..15).fold(MemoryWiremapsApi::default(), |api, n| {
            api.with_equipment(&format!("switch{n:02}"), &format!("10.1.0.{n}"))
        });

        assert_eq!(
            block_on(api.complete("swi")).expect("complete").len(),
            COMPLETE_LIMIT
        );
    }

    #[test]
    fn failures_are_injected_per_endpoint_and_logged() {
        let api = fixture();
        api.fail(EndpointKind::Ports);

        assert!(matches!(
            block_on(api.list_ports("10.0.0.1")),
            Err(ApiError::Network(_))
        ));
        api.recover(EndpointKind::Ports);
        assert_eq!(block_on(api.list_ports("10.0.0.1")).expect("ports").len(), 1);
        assert_eq!(
            block_on(api.port_details("10.0.0.1", &PortIndex::from(1))).expect("details"),
            vec![DetailCell::new("VLAN", "100", None)]
        );
        assert_eq!(
            api.calls(),
            vec![
                "equipment/10.0.0.1/".to_string(),
                "equipment/10.0.0.1/".to_string(),
                "equipment/10.0.0.1/1/".to_string(),
            ]
        );
    }

    #[test]
    fn refresh_of_unknown_equipment_is_rejected() {
        let api = fixture().with_refresh(
            "10.0.0.2",
            RefreshOutcome::Rejected {
                message: "SNMP timeout".to_string(),
            },
        );

        assert_eq!(
            block_on(api.refresh_equipment("10.0.0.1")),
            Ok(RefreshOutcome::Refreshed)
        );
        assert!(matches!(
            block_on(api.refresh_equipment("10.0.0.2")),
            Ok(RefreshOutcome::Rejected { message }) if message == "SNMP timeout"
        ));
        assert!(matches!(
            block_on(api.refresh_equipment("10.9.9.9")),
            Ok(RefreshOutcome::Rejected { .. })
        ));
    }

    #[test]
    fn unknown_equipment_ports_are_not_found() {
        let api = fixture();

        assert_eq!(
            block_on(api.list_ports("10.9.9.9")),
            Err(ApiError::Status {
                status: 404,
                path: "equipment/10.9.9.9/".to_string()
            })
        );
    }
}
