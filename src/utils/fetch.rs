//! Network transport for the API client.
//!
//! Wraps the browser Fetch API with timeout racing and maps HTTP failures
//! into the [`ApiError`] taxonomy. The endpoint wrappers in [`crate::core::api`]
//! are built on these primitives.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::ApiError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// Implements timeout behavior for any JavaScript Promise using
/// `Promise.race` against a timer that resolves to `undefined`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Primitives
// =============================================================================

/// HTTP methods the backend surface uses.
#[derive(Clone, Copy, Debug)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Issue a request and return the raw [`Response`] on any 2xx status.
///
/// Non-2xx statuses are read for their body and mapped through
/// [`ApiError::from_status`]; a request that never completes becomes
/// [`ApiError::Transport`] or [`ApiError::Timeout`].
pub async fn send(method: Method, url: &str, body: Option<&JsValue>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(ApiError::Timeout),
        RaceResult::Error(msg) => Err(ApiError::Transport(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result
                .dyn_into()
                .map_err(|_| ApiError::Transport("Not a Response object".to_string()))?;

            if resp.ok() {
                Ok(resp)
            } else {
                let status = resp.status();
                let body = read_text(&resp).await.unwrap_or_default();
                Err(ApiError::from_status(status, body))
            }
        }
    }
}

/// Read a response body as text.
pub async fn read_text(resp: &Response) -> Result<String, ApiError> {
    let text_promise = resp
        .text()
        .map_err(|_| ApiError::Malformed("Unreadable response body".to_string()))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| ApiError::Malformed("Unreadable response body".to_string()))?;
    text.as_string()
        .ok_or_else(|| ApiError::Malformed("Response body is not text".to_string()))
}

/// Read a response body as JSON into `T`.
pub async fn read_json<T: DeserializeOwned>(resp: &Response) -> Result<T, ApiError> {
    let text = read_text(resp).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Read a response body as a binary [`Blob`].
pub async fn read_blob(resp: &Response) -> Result<Blob, ApiError> {
    let blob_promise = resp
        .blob()
        .map_err(|_| ApiError::Malformed("Unreadable binary body".to_string()))?;
    let blob = JsFuture::from(blob_promise)
        .await
        .map_err(|_| ApiError::Malformed("Unreadable binary body".to_string()))?;
    blob.dyn_into::<Blob>()
        .map_err(|_| ApiError::Malformed("Binary body is not a Blob".to_string()))
}

/// GET a URL and parse the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = send(Method::Get, url, None).await?;
    read_json(&resp).await
}

/// GET a URL and return the binary body.
pub async fn get_blob(url: &str) -> Result<Blob, ApiError> {
    let resp = send(Method::Get, url, None).await?;
    read_blob(&resp).await
}
