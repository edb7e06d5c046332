// SPDX-License-Identifier: MPL-2.0
//! Location lookup through the Gemini `generateContent` endpoint with the
//! Google Maps grounding tool enabled.

mod response;

pub use response::parse_response;

use crate::application::port::{LocationError, LocationLookup};
use crate::domain::location::LocationReport;
use futures_util::future::{BoxFuture, FutureExt};
use std::time::Duration;

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings of the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// [`LocationLookup`] adapter backed by Gemini.
#[derive(Debug, Clone)]
pub struct GeminiLocator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiLocator {
    /// Builds the adapter. Fails when the API key is empty or the HTTP
    /// client cannot be created.
    pub fn new(settings: GeminiSettings) -> Result<Self, LocationError> {
        if settings.api_key.trim().is_empty() {
            return Err(LocationError::Unavailable("missing API key".to_string()));
        }

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("VerticalCor/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint(&settings.base_url, &settings.model),
            api_key: settings.api_key,
        })
    }

    /// Full URL of the `generateContent` call.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LocationLookup for GeminiLocator {
    fn locate(&self, query: &str) -> BoxFuture<'static, Result<LocationReport, LocationError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();
        let body = request_body(query);

        async move {
            tracing::debug!(%endpoint, "requesting location");
            let response = client
                .post(&endpoint)
                .header("x-goog-api-key", api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| LocationError::Transport(e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| LocationError::Transport(e.to_string()))?;

            if !status.is_success() {
                return Err(LocationError::Status {
                    status: status.as_u16(),
                    message: text.chars().take(200).collect(),
                });
            }

            parse_response(&text)
        }
        .boxed()
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

/// Prompt sent for a free-text address.
#[must_use]
pub fn prompt(query: &str) -> String {
    format!("Find the location for: {query}. return a brief confirmation of the address and a link.")
}

fn request_body(query: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt(query) }] }],
        "tools": [{ "googleMaps": {} }],
    })
}
