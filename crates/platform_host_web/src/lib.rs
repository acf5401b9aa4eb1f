//! Browser (`wasm32`) implementation of the [`platform_host`] endpoint contract.
//!
//! The crate provides the `fetch`-backed client, the bundled demo fixture, compile-time API
//! strategy selection and a `<meta>` lookup used for runtime configuration. Browser calls go
//! through `bridge`, which swaps in a native fallback outside wasm.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time API strategy selection and adapter factories for runtime wiring.
pub mod adapters;
pub mod api;
mod bridge;
pub mod demo;

pub use adapters::{
    api_strategy_name, build_inspector_services, selected_api_strategy, wiremaps_api,
    WiremapsApiAdapter,
};
pub use api::{web_wiremaps_api, FetchTransport, WebWiremapsApi};
pub use bridge::meta_content as document_meta_content;
pub use demo::demo_fixture;
