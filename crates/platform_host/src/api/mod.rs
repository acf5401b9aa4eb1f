//! Endpoint contract and the adapters that do not need a browser.

mod http;
mod memory;
mod service;

pub use http::{verbatim_segment, HttpWiremapsApi, SegmentEncoder, TextTransport};
pub use memory::{MemoryWiremapsApi, COMPLETE_LIMIT, COMPLETE_MIN_CHARS};
pub use service::{decode_description, decode_json, ApiFuture, NoopWiremapsApi, WiremapsApi};
