//! Endpoint contract, no-op adapter and response decoding helpers.

use std::{future::Future, pin::Pin};

use serde::de::DeserializeOwned;
use wiremaps_core::{DetailCell, EquipmentEntry, PortIndex, PortRecord, RefreshOutcome};

use crate::ApiError;

/// Object-safe boxed future used by [`WiremapsApi`].
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Read-only access to the inspection server.
///
/// Every call resolves to a typed value or an [`ApiError`]; adapters never retry.
pub trait WiremapsApi {
    /// `equipment/`: every known equipment.
    fn list_equipment(&self) -> ApiFuture<'_, Result<Vec<EquipmentEntry>, ApiError>>;

    /// `equipment/{ip}/descr/`: description HTML, `None` when the server has none.
    fn equipment_description<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<Option<String>, ApiError>>;

    /// `equipment/{ip}/`: port rows.
    fn list_ports<'a>(&'a self, ip: &'a str) -> ApiFuture<'a, Result<Vec<PortRecord>, ApiError>>;

    /// `equipment/{ip}/{port}/`: detail tuples of one port.
    fn port_details<'a>(
        &'a self,
        ip: &'a str,
        port: &'a PortIndex,
    ) -> ApiFuture<'a, Result<Vec<DetailCell>, ApiError>>;

    /// `equipment/{ip}/refresh/`: asks the collector to poll the equipment again.
    fn refresh_equipment<'a>(
        &'a self,
        ip: &'a str,
    ) -> ApiFuture<'a, Result<RefreshOutcome, ApiError>>;

    /// `search/{text}/`: HTML result items.
    fn search<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>>;

    /// `complete/{text}/`: completion candidates.
    fn complete<'a>(&'a self, text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Adapter for targets without a network transport; every call fails with
/// [`ApiError::Unavailable`].
pub struct NoopWiremapsApi;

impl WiremapsApi for NoopWiremapsApi {
    fn list_equipment(&self) -> ApiFuture<'_, Result<Vec<EquipmentEntry>, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }

    fn equipment_description<'a>(
        &'a self,
        _ip: &'a str,
    ) -> ApiFuture<'a, Result<Option<String>, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }

    fn list_ports<'a>(&'a self, _ip: &'a str) -> ApiFuture<'a, Result<Vec<PortRecord>, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }

    fn port_details<'a>(
        &'a self,
        _ip: &'a str,
        _port: &'a PortIndex,
    ) -> ApiFuture<'a, Result<Vec<DetailCell>, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }

    fn refresh_equipment<'a>(
        &'a self,
        _ip: &'a str,
    ) -> ApiFuture<'a, Result<RefreshOutcome, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }

    fn search<'a>(&'a self, _text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }

    fn complete<'a>(&'a self, _text: &'a str) -> ApiFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }
}

/// Decodes a JSON body received from `path`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when `body` does not match `T`.
pub fn decode_json<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode {
        path: path.to_string(),
        message: err.to_string(),
    })
}

/// Decodes the `[[descriptionHtml]]` body of the description endpoint.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when `body` is not a nested array of nullable strings.
pub fn decode_description(path: &str, body: &str) -> Result<Option<String>, ApiError> {
    let rows: Vec<Vec<Option<String>>> = decode_json(path, body)?;
    Ok(rows
        .into_iter()
        .next()
        .and_then(|row| row.into_iter().next())
        .flatten())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn description_takes_the_first_cell() {
        assert_eq!(
            decode_description("d", r#"[["<p>Core switch</p>"]]"#),
            Ok(Some("<p>Core switch</p>".to_string()))
        );
        assert_eq!(decode_description("d", "[]"), Ok(None));
        assert_eq!(decode_description("d", "[[null]]"), Ok(None));
    }

    #[test]
    fn decode_errors_carry_the_path() {
        let err = decode_json::<Vec<PortRecord>>("equipment/10.0.0.1/", "{\"oops\":1}")
            .expect_err("object is not a port list");
        assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "equipment/10.0.0.1/"));
    }

    #[test]
    fn noop_api_is_unavailable() {
        let api = NoopWiremapsApi;
        let api_obj: &dyn WiremapsApi = &api;

        assert_eq!(
            block_on(api_obj.list_equipment()),
            Err(ApiError::Unavailable)
        );
        assert_eq!(block_on(api_obj.complete("core")), Err(ApiError::Unavailable));
    }
}
