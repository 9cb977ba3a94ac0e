use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;
use tracing::debug;

use crate::cli::error::{CliError, CliResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Envelope every exam platform endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

/// Collection payloads come either bare or as one page of a server-side
/// paged listing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CollectionPayload<T> {
    List(Vec<T>),
    Paged { content: Vec<T> },
}

/// API client for communicating with the exam platform REST API
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. EXD_API_URL environment variable
    /// 3. Default: http://localhost:8080/api
    ///
    /// The bearer token comes from `token` or EXD_TOKEN. Quotes around it
    /// are dropped.
    pub fn new(api_url: Option<String>, token: Option<String>) -> Self {
        let base_url = api_url
            .or_else(|| env::var("EXD_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token = token
            .or_else(|| env::var("EXD_TOKEN").ok())
            .map(|t| t.replace('"', ""))
            .filter(|t| !t.is_empty());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Create a GET request builder, authorized when a token is configured
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request = self.client.get(&url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch every record of a resource, e.g. `users`.
    pub async fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> CliResult<Vec<T>> {
        debug!(base_url = %self.base_url, path, "Fetching collection");
        let response = self.get(path).send().await?;
        let body: serde_json::Value = Self::handle_response(response).await?;
        decode_collection(body)
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// or a CliError::ApiError on non-success status codes.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(CliError::ApiError {
                status,
                message: error_text,
            })
        }
    }
}

/// Unwrap a `{ success, data }` response into its records.
pub fn decode_collection<T: DeserializeOwned>(body: serde_json::Value) -> CliResult<Vec<T>> {
    let envelope: ApiEnvelope<CollectionPayload<T>> = serde_json::from_value(body)?;

    if !envelope.success {
        return Err(CliError::InvalidResponse {
            message: envelope
                .message
                .unwrap_or_else(|| "request was not successful".to_string()),
        });
    }

    match envelope.data {
        Some(CollectionPayload::List(items)) | Some(CollectionPayload::Paged { content: items }) => {
            Ok(items)
        }
        None => Ok(Vec::new()),
    }
}
