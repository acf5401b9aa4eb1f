use platform_host::{
    ApiError, ApiFuture, ApiStrategy, InspectorServices, MemoryWiremapsApi, WiremapsApi,
};
use wiremaps_core::{DetailCell, EquipmentEntry, PortIndex, PortRecord, RefreshOutcome};

use crate::{demo_fixture, web_wiremaps_api, WebWiremapsApi};

/// Returns the compile-time selected API strategy for the active build.
pub const fn selected_api_strategy() -> ApiStrategy {
    #[cfg(feature = "api-stub")]
    {
        ApiStrategy::Stub
    }

    #[cfg(not(feature = "api-stub"))]
    {
        ApiStrategy::Browser
    }
}

/// Returns the selected API strategy as a stable string token.
pub fn api_strategy_name() -> &'static str {
    selected_api_strategy().as_str()
}

/// Adapter enum that erases the concrete endpoint client behind [`WiremapsApi`].
#[derive(Debug, Clone)]
pub enum WiremapsApiAdapter {
    /// Browser `fetch` client.
    Browser(WebWiremapsApi),
    /// Bundled in-memory fixture.
    Stub(MemoryWiremapsApi),
}

impl WiremapsApi for WiremapsApiAdapter {
    fn list_equipment(&self) -> ApiFuture<'_, Result<Vec<EquipmentEntry>, ApiError>> {
        match self {
            Self::Browser(api) => api.list_equipment(),
            Self::Stub(api) => api.list_equipment(),
        }
    }

    fn equipment_description<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<Option<String>, ApiError>> {
        match self {
            Self::Browser(api) => api.equipment_description(ip),
            Self::Stub(api) => api.equipment_description(ip),
        }
    }

    fn list_ports<'a>(&'a self, ip: &'a str) -> ApiFuture<'a, Result<Vec<PortRecord>, ApiError>> {
        match self {
            Self::Browser(api) => api.list_ports(ip),
            Self::Stub(api) => api.list_ports(ip),
        }
    }

    fn port_details<'a>(
        &'a self,
        ip: &'a str,
        port: &'a PortIndex,
    ) -> ApiFuture<'a, Result<Vec<DetailCell>, ApiError>> {
        match self {
            Self::Browser(api) => api.port_details(ip, port),
            Self::Stub(api) => api.port_details(ip, port),
        }
    }

    fn refresh_equipment<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<RefreshOutcome, ApiError>> {
        match self {
            Self::Browser(api) => api.refresh_equipment(ip),
            Self::Stub(api) => api.refresh_equipment(ip),
        }
    }

    fn search<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        match self {
            Self::Browser(api) => api.search(text),
            Self::Stub(api) => api.search(text),
        }
    }

    fn complete<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        match self {
            Self::Browser(api) => api.complete(text),
            Self::Stub(api) => api.complete(text),
        }
    }
}

/// Builds the endpoint client for the compile-time selected strategy.
pub fn wiremaps_api(base: &str) -> WiremapsApiAdapter {
    match selected_api_strategy() {
        ApiStrategy::Browser => WiremapsApiAdapter::Browser(web_wiremaps_api(base)),
        ApiStrategy::Stub => WiremapsApiAdapter::Stub(demo_fixture()),
    }
}

/// Builds the service bundle injected into the inspector runtime.
pub fn build_inspector_services(base: &str) -> InspectorServices {
    InspectorServices::new(
        std::rc::Rc::new(wiremaps_api(base)),
        selected_api_strategy(),
    )
}
