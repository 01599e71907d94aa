//! HTTP API Client
//!
//! Functions for communicating with the Pulseboard record API.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

/// Collection URL used when `PULSEBOARD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "/api/data";

/// Collection URL baked in at build time
pub fn api_url() -> String {
    normalize_url(option_env!("PULSEBOARD_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn record_url(base: &str, id: &str) -> String {
    format!("{}/{}", base, id)
}

// ============ Types ============

/// A stored record as returned by the API
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Record {
    pub id: String,
    pub category: String,
    pub value: f64,
}

/// Body of a create request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRecord {
    pub category: String,
    pub value: f64,
}

/// Confirmation returned by the delete routes
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default)]
    pub deleted: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Errors surfaced by the API client
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Request build error: {0}")]
    Build(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Build a status error from a non-2xx response body
    fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.trim().to_string()
                }
            });

        ClientError::Status { status, message }
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_status(response.status(), &body))
}

async fn send(request: Request) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    ensure_ok(response).await
}

// ============ API Functions ============

/// Fetch every record, oldest first
pub async fn fetch_records() -> Result<Vec<Record>, ClientError> {
    let response = send(Request::get(&api_url()).build().map_err(build_error)?).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Create a record and return it with its assigned id
pub async fn create_record(record: &NewRecord) -> Result<Record, ClientError> {
    let request = Request::post(&api_url()).json(record).map_err(build_error)?;
    let response = send(request).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Delete one record by id
pub async fn delete_record(id: &str) -> Result<MessageResponse, ClientError> {
    let url = record_url(&api_url(), id);
    let response = send(Request::delete(&url).build().map_err(build_error)?).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

fn build_error(e: gloo_net::Error) -> ClientError {
    ClientError::Build(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("/api/data/"), "/api/data");
        assert_eq!(normalize_url(" http://localhost:5000/api/data "), "http://localhost:5000/api/data");
        assert_eq!(record_url("/api/data", "abc"), "/api/data/abc");
    }

    #[test]
    fn test_status_error_uses_server_message() {
        let err = ClientError::from_status(404, r#"{"message":"Item not found","code":"NOT_FOUND"}"#);
        assert_eq!(
            err,
            ClientError::Status {
                status: 404,
                message: "Item not found".to_string()
            }
        );
        assert_eq!(err.to_string(), "Item not found (HTTP 404)");
    }

    #[test]
    fn test_status_error_falls_back_to_body() {
        let err = ClientError::from_status(502, "Bad Gateway\n");
        assert!(matches!(err, ClientError::Status { status: 502, ref message } if message == "Bad Gateway"));

        let err = ClientError::from_status(500, "");
        assert!(matches!(err, ClientError::Status { ref message, .. } if message == "Unknown error"));
    }

    #[test]
    fn test_record_deserializes() {
        let record: Record =
            serde_json::from_str(r#"{"id":"x1","category":"sales","value":100}"#).unwrap();
        assert_eq!(record.category, "sales");
        assert_eq!(record.value, 100.0);
    }
}
