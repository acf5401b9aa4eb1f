//! [`WiremapsApi`] over any text-returning GET transport.

use wiremaps_core::{DetailCell, EquipmentEntry, PortIndex, PortRecord, RefreshOutcome};

use super::service::{decode_description, decode_json, ApiFuture, WiremapsApi};
use crate::{join_url, ApiError, Endpoint};

/// Encodes one dynamic path segment.
pub type SegmentEncoder = fn(&str) -> String;

/// Leaves a segment untouched.
pub fn verbatim_segment(segment: &str) -> String {
    segment.to_string()
}

/// Minimal uncached GET returning the response body.
pub trait TextTransport {
    /// Fetches `url` and returns its body on a success status.
    fn get_text<'a>(&'a self, url: &'a str) -> ApiFuture<'a, Result<String, ApiError>>;
}

/// Endpoint client built from an API base, a transport and a segment encoder.
#[derive(Debug, Clone)]
pub struct HttpWiremapsApi<T> {
    base: String,
    transport: T,
    encode: SegmentEncoder,
}

impl<T: TextTransport> HttpWiremapsApi<T> {
    /// Creates a client rooted at `base`.
    pub fn new(base: impl Into<String>, transport: T, encode: SegmentEncoder) -> Self {
        Self {
            base: base.into(),
            transport,
            encode,
        }
    }

    /// API base the client was created with.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, endpoint: Endpoint<'_>) -> (String, String) {
        let path = endpoint.path_with(self.encode);
        (join_url(&self.base, &path), path)
    }

    async fn get_body(&self, endpoint: Endpoint<'_>) -> Result<(String, String), ApiError> {
        let (url, path) = self.url(endpoint);
        let body = self.transport.get_text(&url).await?;
        Ok((path, body))
    }

    async fn get_json<R: serde::de::DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
    ) -> Result<R, ApiError> {
        let (path, body) = self.get_body(endpoint).await?;
        decode_json(&path, &body)
    }
}

impl<T: TextTransport> WiremapsApi for HttpWiremapsApi<T> {
    fn list_equipment(&self) -> ApiFuture<'_, Result<Vec<EquipmentEntry>, ApiError>> {
        Box::pin(self.get_json(Endpoint::EquipmentList))
    }

    fn equipment_description<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<Option<String>, ApiError>> {
        Box::pin(async move {
            let (path, body) = self.get_body(Endpoint::Description { ip }).await?;
            decode_description(&path, &body)
        })
    }

    fn list_ports<'a>(&'a self, ip: &'a str) -> ApiFuture<'a, Result<Vec<PortRecord>, ApiError>> {
        Box::pin(self.get_json(Endpoint::Ports { ip }))
    }

    fn port_details<'a>(
        &'a self,
        ip: &'a str,
        port: &'a PortIndex,
    ) -> ApiFuture<'a, Result<Vec<DetailCell>, ApiError>> {
        Box::pin(self.get_json(Endpoint::PortDetails { ip, port }))
    }

    fn refresh_equipment<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<RefreshOutcome, ApiError>> {
        Box::pin(self.get_json(Endpoint::Refresh { ip }))
    }

    fn search<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(self.get_json(Endpoint::Search { text }))
    }

    fn complete<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(self.get_json(Endpoint::Complete { text }))
    }
}
