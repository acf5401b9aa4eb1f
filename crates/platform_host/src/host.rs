//! API strategy and service bundle handed to the inspector runtime.

use std::rc::Rc;

use crate::WiremapsApi;

/// API adapter selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStrategy {
    /// Browser `fetch` against the inspection server.
    Browser,
    /// Bundled in-memory fixture.
    Stub,
}

impl ApiStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser-fetch",
            Self::Stub => "memory-stub",
        }
    }
}

/// Runtime-selected services injected into the inspector runtime.
///
/// Adapter selection happens before this bundle is built, so the runtime never depends on a
/// concrete transport.
#[derive(Clone)]
pub struct InspectorServices {
    /// Endpoint client.
    pub api: Rc<dyn WiremapsApi>,
    /// Strategy the client was built with.
    pub strategy: ApiStrategy,
}

impl InspectorServices {
    /// Bundles an API client with its strategy.
    pub fn new(api: Rc<dyn WiremapsApi>, strategy: ApiStrategy) -> Self {
        Self { api, strategy }
    }
}

impl std::fmt::Debug for InspectorServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectorServices")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}
