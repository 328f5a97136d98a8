// crates/listing-api-client/src/client.rs
// ============================================================================
// Module: Listing HTTP Client
// Description: JSON HTTP client for the marketplace listing API.
// Purpose: Issue create/read/delete calls and record a transcript.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! [`ListingApiClient`] wraps one `reqwest::Client` configured with JSON
//! `Content-Type` and `Accept` headers. Every call returns an [`ApiResponse`]
//! holding the status code and the raw body; status codes are never turned
//! into errors, so callers can assert on rejections.
//! Invariants:
//! - One underlying client (and connection pool) per [`ListingApiClient`].
//! - Calls are not retried; transport failures surface immediately.
//! - Every exchange, including transport failures, lands in the transcript.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ListingApiError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path prefix of the read/create API generation.
pub const API_V1: &str = "/api/1";
/// Path prefix of the delete API generation.
pub const API_V2: &str = "/api/2";
/// Media type sent in `Content-Type` and `Accept`.
const JSON_MEDIA_TYPE: &str = "application/json";

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRecord {
    /// 1-based position in the transcript.
    pub sequence: u64,
    /// HTTP method.
    pub method: String,
    /// Request path relative to the base URL.
    pub path: String,
    /// JSON request body, when one was sent.
    pub request: Option<Value>,
    /// Response status code, when a response arrived.
    pub status: Option<u16>,
    /// Response body text, when a response arrived.
    pub response: Option<String>,
    /// Transport error text, when no response arrived.
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Status code and body of one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError::Decode`] when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ListingApiError> {
        serde_json::from_str(&self.body).map_err(|err| ListingApiError::Decode {
            target: std::any::type_name::<T>(),
            message: err.to_string(),
        })
    }

    /// Returns true when the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// JSON HTTP client for the listing API.
pub struct ListingApiClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Underlying HTTP client with JSON default headers.
    client: Client,
    /// Recorded exchanges.
    transcript: Arc<Mutex<Vec<ExchangeRecord>>>,
}

impl ListingApiClient {
    /// Builds a client for `base_url` with JSON default headers and a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError::ClientBuild`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ListingApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|err| ListingApiError::ClientBuild(err.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the recorded exchanges.
    ///
    /// A poisoned lock still yields the exchanges recorded so far.
    #[must_use]
    pub fn transcript(&self) -> Vec<ExchangeRecord> {
        self.transcript.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// `POST /api/1/item`: creates a listing from any JSON-serializable body.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError`] when the body cannot be encoded or the call fails.
    pub async fn create_item<T: Serialize + ?Sized>(
        &self,
        body: &T,
    ) -> Result<ApiResponse, ListingApiError> {
        let body =
            serde_json::to_value(body).map_err(|err| ListingApiError::Encode(err.to_string()))?;
        self.send(Method::POST, format!("{API_V1}/item"), Some(body)).await
    }

    /// `GET /api/1/{seller_id}/item`: lists a seller's listings.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError::Transport`] when no response arrives.
    pub async fn items_by_seller(&self, seller_id: i64) -> Result<ApiResponse, ListingApiError> {
        self.send(Method::GET, format!("{API_V1}/{seller_id}/item"), None).await
    }

    /// `GET /api/1/item/{id}`: fetches one listing. The id is sent as given.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError::Transport`] when no response arrives.
    pub async fn item(&self, id: &str) -> Result<ApiResponse, ListingApiError> {
        self.send(Method::GET, format!("{API_V1}/item/{id}"), None).await
    }

    /// `GET /api/1/statistic/{id}`: fetches a listing's counters.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError::Transport`] when no response arrives.
    pub async fn statistic(&self, id: &str) -> Result<ApiResponse, ListingApiError> {
        self.send(Method::GET, format!("{API_V1}/statistic/{id}"), None).await
    }

    /// `DELETE /api/2/item/{id}`: deletes a listing.
    ///
    /// # Errors
    ///
    /// Returns [`ListingApiError::Transport`] when no response arrives.
    pub async fn delete_item(&self, id: &str) -> Result<ApiResponse, ListingApiError> {
        self.send(Method::DELETE, format!("{API_V2}/item/{id}"), None).await
    }

    /// Sends one request and records the exchange.
    async fn send(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<ApiResponse, ListingApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = &body {
            request = request.json(body);
        }
        let outcome = match request.send().await {
            Ok(response) => {
                let status = response.status();
                response.text().await.map(|body| ApiResponse {
                    status,
                    body,
                })
            }
            Err(err) => Err(err),
        };
        match outcome {
            Ok(response) => {
                self.record(&method, path, body, Ok(&response));
                Ok(response)
            }
            Err(err) => {
                let message = err.to_string();
                self.record(&method, path.clone(), body, Err(message.as_str()));
                Err(ListingApiError::Transport {
                    method: method.as_str().to_string(),
                    path,
                    message,
                })
            }
        }
    }

    /// Appends an exchange to the transcript.
    fn record(
        &self,
        method: &Method,
        path: String,
        request: Option<Value>,
        outcome: Result<&ApiResponse, &str>,
    ) {
        let mut guard = self.transcript.lock().unwrap_or_else(PoisonError::into_inner);
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        let (status, response, error) = match outcome {
            Ok(response) => (Some(response.status.as_u16()), Some(response.body.clone()), None),
            Err(message) => (None, None, Some(message.to_string())),
        };
        guard.push(ExchangeRecord {
            sequence,
            method: method.as_str().to_string(),
            path,
            request,
            status,
            response,
            error,
        });
    }
}
