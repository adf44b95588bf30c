//! HTTP helpers for the auth endpoints. One request per call, no retries and no
//! caching. Failure bodies are reduced to a short message the UI can render.

use super::{
    config::{ApiConfig, ConfigError},
    errors::{classify, ApiError, Endpoint, ServerFailure, GENERIC_FAILURE},
    types::FailureBody,
};
use crate::APP_USER_AGENT;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, Instrument};
use url::Url;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Builds the shared client from the base configuration.
///
/// # Errors
/// Returns an error if the TLS backend or client settings cannot be initialized.
pub fn build_client(config: &ApiConfig) -> Result<Client, ConfigError> {
    let mut builder = Client::builder()
        .user_agent(APP_USER_AGENT)
        .default_headers(config.headers.clone());

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|err| ConfigError::Client(err.to_string()))
}

/// Posts a JSON body and returns the JSON response, `null` for an empty body.
///
/// # Errors
/// Returns a classified `ApiError` for transport failures or non-success statuses.
pub async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    endpoint: Endpoint,
    url: Url,
    body: &B,
) -> Result<Value, ApiError> {
    let span = tracing::info_span!(
        "auth.request",
        http.method = "POST",
        endpoint = endpoint.name(),
        url = %url
    );

    let response = client
        .post(url)
        .json(body)
        .send()
        .instrument(span)
        .await
        .map_err(map_request_error)?;

    handle_json_response(endpoint, response).await
}

fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Network("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Request(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

async fn handle_json_response(endpoint: Endpoint, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Network(format!("Failed to read response: {err}")))?;

    if status.is_success() {
        debug!(endpoint = endpoint.name(), status = status.as_u16(), "request succeeded");
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()));
    }

    let failure = server_failure(status.as_u16(), &body);
    debug!(
        endpoint = endpoint.name(),
        status = failure.status,
        code = failure.code.as_deref().unwrap_or(""),
        "request failed"
    );
    Err(classify(endpoint, failure))
}

/// Extracts the message from a failure body: JSON `message`, then JSON `error`,
/// then the raw text.
pub fn server_failure(status: u16, body: &str) -> ServerFailure {
    let parsed = serde_json::from_str::<FailureBody>(body).ok();

    let (message, code) = match parsed {
        Some(FailureBody {
            message, error, code,
        }) => (
            message
                .or(error)
                .filter(|text| !text.trim().is_empty())
                .map_or_else(|| GENERIC_FAILURE.to_string(), |text| sanitize_body(&text)),
            code,
        ),
        None => (sanitize_body(body), None),
    };

    ServerFailure {
        status,
        message,
        code,
    }
}

/// Sanitizes failure bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
