//! Browser capability bridge used by the `fetch` adapter.
//!
//! The wasm implementation talks to `window.fetch` and the document; the native fallback reports
//! [`ApiError::Unavailable`] so headless builds and tests link without a browser.

mod interop;

use platform_host::ApiError;

/// Uncached GET returning the body text of a success response.
pub async fn get_text(url: &str) -> Result<String, ApiError> {
    interop::get_text(url).await
}

/// Percent-encodes one URL path segment.
pub fn encode_segment(segment: &str) -> String {
    interop::encode_segment(segment)
}

/// `content` attribute of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    interop::meta_content(name)
}
