//! Browser dataset loader.
//!
//! Issues one `fetch` through `web-sys` and decodes the body with the shared
//! `Dataset` parser. There are no retries and no cancellation.

use gtv_data::{Dataset, FetchError};
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Await a JS promise, treating rejection as a network failure.
async fn settle(promise: Promise) -> Result<JsValue, FetchError> {
    JsFuture::from(promise)
        .await
        .map_err(|e| FetchError::Network(js_error(&e)))
}

/// Fetch and decode the dataset at `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window available".to_string()))?;

    log::info!("[GTV] Fetching dataset from {}", url);
    let response: Response = settle(window.fetch_with_str(url))
        .await?
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        log::warn!("[GTV] Bad response status: {}", response.status());
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    let text = response
        .text()
        .map_err(|e| FetchError::Network(js_error(&e)))?;
    let body = settle(text)
        .await?
        .as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;

    Dataset::from_json(&body)
}
