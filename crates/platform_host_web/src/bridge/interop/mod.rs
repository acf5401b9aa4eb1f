//! Shared transport interop for the browser bridge.
//!
//! Calls are routed to target-specific implementations so the bridge API is identical on wasm and
//! native builds.

use platform_host::ApiError;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn get_text(url: &str) -> Result<String, ApiError> {
    imp::get_text(url).await
}

pub fn encode_segment(segment: &str) -> String {
    imp::encode_segment(segment)
}

pub fn meta_content(name: &str) -> Option<String> {
    imp::meta_content(name)
}
