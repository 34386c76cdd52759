//! JSON fetching with timeout support.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Race a promise against a timeout via `Promise.race`.
///
/// The timeout arm resolves to `undefined`, which a settled fetch response
/// can never be.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let timeout = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::new();
    contenders.push(&promise);
    contenders.push(&timeout);

    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(result) if result.is_undefined() => Err(FetchError::Timeout),
        Ok(result) => Ok(result),
        Err(e) => Err(FetchError::Network(
            e.as_string().unwrap_or_else(|| format!("{:?}", e)),
        )),
    }
}

/// Fetch and parse JSON from a URL.
///
/// One-shot: no retry, no caching. Times out after `FETCH_TIMEOUT_MS`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::Request)?;

    let settled = race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await?;
    let resp: Response = settled.dyn_into().map_err(|_| FetchError::Body)?;

    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::Body)?)
        .await
        .map_err(|_| FetchError::Body)?;
    let text = text.as_string().ok_or(FetchError::Body)?;

    serde_json::from_str(&text).map_err(|e| FetchError::Json(e.to_string()))
}
