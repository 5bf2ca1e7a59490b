use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use shared_config::ClientConfig;
use shared_models::error::ApiError;

const AI_MODEL_HEADER: &str = "x-ai-model";

/// HTTP client for the booking backend. Every request carries the JSON content
/// type and the configured model header; authenticated calls add a bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    ai_model: String,
    cancel: Option<CancellationToken>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            ai_model: config.ai_model.clone(),
            cancel: None,
        }
    }

    /// Copy of this client whose requests resolve to `ApiError::Cancelled` once
    /// `token` fires.
    pub fn scoped(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers(&self, auth_token: Option<&str>) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(AI_MODEL_HEADER),
            HeaderValue::from_str(&self.ai_model)
                .map_err(|e| ApiError::InvalidRequest(format!("invalid model header: {}", e)))?,
        );

        if let Some(token) = auth_token.filter(|t| !t.is_empty()) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::InvalidRequest(format!("invalid auth token: {}", e)))?,
            );
        }

        Ok(headers)
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request_with_query(method, path, auth_token, &[], body).await
    }

    pub async fn request_with_query<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let headers = self.get_headers(auth_token)?;

        let mut req = self.client.request(method, &url).headers(headers);

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let send = async {
            let response = req.send().await.map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                ApiError::Network(e.to_string())
            })?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !status.is_success() {
                error!("API error ({}): {}", status, text);
                return Err(ApiError::from_status(status.as_u16(), error_message(&text)));
            }

            // Empty bodies (204, bare 200) decode as JSON null so unit, Option
            // and Value targets all work.
            let payload = if text.trim().is_empty() { "null" } else { text.as_str() };
            serde_json::from_str::<T>(payload).map_err(|e| {
                error!("Failed to decode response from {}: {}", url, e);
                ApiError::Decode(e.to_string())
            })
        };

        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => {
                        debug!("Request to {} cancelled", url);
                        Err(ApiError::Cancelled)
                    }
                    result = send => result,
                }
            }
            None => send.await,
        }
    }
}

/// Pulls the `message` field out of a JSON error body, falling back to the raw text.
fn error_message(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| text.to_string())
}

/// Lists come back either bare or wrapped in an object under one of `keys`.
/// Anything else yields an empty list; items that fail to decode are skipped.
pub fn extract_list<T: DeserializeOwned>(value: Value, keys: &[&str]) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => keys
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping malformed list item: {}", e);
                None
            }
        })
        .collect()
}
