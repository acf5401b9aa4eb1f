use super::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}

fn network(fallback: &'static str) -> impl Fn(JsValue) -> ApiError {
    move |err| ApiError::Network(js_error_message(err, fallback))
}

pub async fn get_text(url: &str) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Unavailable)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(network("invalid request"))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network("request failed"))?;
    let response: Response = response
        .dyn_into()
        .map_err(network("fetch did not return a Response"))?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            path: url.to_string(),
        });
    }

    let text = JsFuture::from(response.text().map_err(network("body unreadable"))?)
        .await
        .map_err(network("body unreadable"))?;
    text.as_string()
        .ok_or_else(|| ApiError::Network("response body is not text".to_string()))
}

pub fn encode_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}
