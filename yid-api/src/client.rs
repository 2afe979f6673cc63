//! The fetch-based HTTP client and its typed endpoint wrappers.
//!
//! Built directly on the browser `fetch` API through `web-sys`. The fixed
//! request timeout is enforced with an `AbortController` armed by a
//! `window.setTimeout`; an abort surfaces as [`ApiError::Timeout`], every
//! other rejection as [`ApiError::Network`].

use crate::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};
use yid_data::records::{
    DistinctBook, GenericRecord, GithubRecord, ReadingRecord, SleepRecord, WorkoutRecord,
};

/// Base URL of the backend API. Overridable at build time via `YID_API_BASE`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT_MS: u32 = 5_000;

/// A thin GET-only JSON client bound to one base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client against the process-wide base URL.
    pub fn new() -> Self {
        Self::with_base_url(option_env!("YID_API_BASE").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiClient {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window object".to_string()))?;

        let controller = AbortController::new()
            .map_err(|err| ApiError::Network(describe_js_error(&err)))?;
        let signal = controller.signal();

        // Arm the timeout; the closure must outlive the fetch await.
        let abort = controller.clone();
        let on_timeout = Closure::once(move || abort.abort());
        let timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.as_ref().unchecked_ref(),
                REQUEST_TIMEOUT_MS as i32,
            )
            .map_err(|err| ApiError::Network(describe_js_error(&err)))?;

        let headers =
            Headers::new().map_err(|err| ApiError::Network(describe_js_error(&err)))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|err| ApiError::Network(describe_js_error(&err)))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_headers(headers.as_ref());
        opts.set_signal(Some(&signal));

        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");
        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|err| ApiError::Network(describe_js_error(&err)))?;

        let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
        window.clear_timeout_with_handle(timer);
        drop(on_timeout);

        let response = fetched.map_err(|err| {
            if is_abort_error(&err) {
                ApiError::Timeout(REQUEST_TIMEOUT_MS)
            } else {
                ApiError::Network(describe_js_error(&err))
            }
        })?;
        let response: Response = response
            .dyn_into()
            .map_err(|err| ApiError::Network(describe_js_error(&err)))?;

        if !response.ok() {
            return Err(ApiError::Network(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let text_promise = response
            .text()
            .map_err(|err| ApiError::Network(describe_js_error(&err)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|err| ApiError::Network(describe_js_error(&err)))?;
        text.as_string()
            .ok_or_else(|| ApiError::Decode("response body was not text".to_string()))
    }
}

/// Typed wrappers, one per backend endpoint.
impl ApiClient {
    pub async fn fetch_workouts(&self) -> Result<Vec<WorkoutRecord>> {
        self.get_json("/workout-data").await
    }

    pub async fn fetch_reading(&self, year: i32) -> Result<Vec<ReadingRecord>> {
        self.get_json(&format!("/kindle-data?year={year}")).await
    }

    pub async fn fetch_distinct_books(&self, year: i32) -> Result<Vec<DistinctBook>> {
        self.get_json(&format!("/distinct-kindle-books?year={year}"))
            .await
    }

    pub async fn fetch_github(&self) -> Result<Vec<GithubRecord>> {
        self.get_json("/github-data").await
    }

    pub async fn fetch_sleep(&self) -> Result<Vec<SleepRecord>> {
        self.get_json("/sleep-data").await
    }

    /// Fetch a generic time-series endpoint (steps, calories, running) and
    /// normalize its per-category value column to (date, value) records.
    pub async fn fetch_series(&self, path: &str, value_col: &str) -> Result<Vec<GenericRecord>> {
        let rows: Vec<serde_json::Value> = self.get_json(path).await?;
        Ok(GenericRecord::from_rows(&rows, value_col))
    }
}

fn is_abort_error(err: &JsValue) -> bool {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .map(|name| name == "AbortError")
        .unwrap_or(false)
}

fn describe_js_error(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_configurable() {
        let client = ApiClient::with_base_url("https://data.example.com");
        assert_eq!(client.base_url(), "https://data.example.com");
    }

    #[test]
    fn test_error_messages_name_the_failure() {
        assert_eq!(
            ApiError::Timeout(REQUEST_TIMEOUT_MS).to_string(),
            "request timed out after 5000 ms"
        );
        assert!(ApiError::Network("HTTP 500".to_string())
            .to_string()
            .contains("HTTP 500"));
    }
}
