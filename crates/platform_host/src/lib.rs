//! Typed contract between the inspector runtime and the inspection server.
//!
//! This crate owns the endpoint paths, the [`WiremapsApi`] service trait, the error type shared by
//! every adapter and the adapters that run without a browser. The `fetch`-backed adapter lives in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod endpoint;
pub mod error;
pub mod host;

pub use api::{
    decode_description, decode_json, verbatim_segment, ApiFuture, HttpWiremapsApi,
    MemoryWiremapsApi, NoopWiremapsApi, SegmentEncoder, TextTransport, WiremapsApi,
    COMPLETE_LIMIT, COMPLETE_MIN_CHARS,
};
pub use endpoint::{join_url, Endpoint, EndpointKind};
pub use error::ApiError;
pub use host::{ApiStrategy, InspectorServices};
