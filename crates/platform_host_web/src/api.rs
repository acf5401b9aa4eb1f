//! `fetch`-backed [`WiremapsApi`](platform_host::WiremapsApi) adapter.

use platform_host::{ApiError, ApiFuture, HttpWiremapsApi, TextTransport};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Text transport backed by `window.fetch` with caching disabled.
pub struct FetchTransport;

impl TextTransport for FetchTransport {
    fn get_text<'a>(&'a self, url: &'a str) -> ApiFuture<'a, Result<String, ApiError>> {
        Box::pin(bridge::get_text(url))
    }
}

/// Browser endpoint client.
pub type WebWiremapsApi = HttpWiremapsApi<FetchTransport>;

/// Builds the browser client rooted at `base`, percent-encoding every path segment.
pub fn web_wiremaps_api(base: impl Into<String>) -> WebWiremapsApi {
    HttpWiremapsApi::new(base, FetchTransport, bridge::encode_segment)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::WiremapsApi;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_client_is_unavailable_off_wasm() {
        let api = web_wiremaps_api("/wiremaps/");
        let api_obj: &dyn WiremapsApi = &api;

        assert_eq!(api.base(), "/wiremaps/");
        assert_eq!(block_on(api_obj.list_equipment()), Err(ApiError::Unavailable));
        assert_eq!(
            block_on(api_obj.complete("core")),
            Err(ApiError::Unavailable)
        );
    }
}
