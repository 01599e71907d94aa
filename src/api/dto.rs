//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! Records themselves go over the wire as `store::Record`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::store::NewRecord;

/// Message returned when either required field is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Category and value are required";

// ============================================
// RECORD DTOs
// ============================================

/// Create record request
///
/// Fields stay loosely typed so that absent, null and wrongly typed
/// values all surface as validation errors rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRecordRequest {
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl CreateRecordRequest {
    /// Presence check plus scalar coercion into a storable record
    pub fn validate(self) -> ApiResult<NewRecord> {
        let category = match self.category {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(other) => {
                return Err(ApiError::Validation(format!(
                    "Category must be a string, got {}",
                    json_type(&other)
                )))
            }
        };

        let value = match self.value {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => Some(parse_number(&s)?),
            Some(other) => {
                return Err(ApiError::Validation(format!(
                    "Value must be a number, got {}",
                    json_type(&other)
                )))
            }
        };

        match (category, value) {
            (Some(category), Some(value)) => Ok(NewRecord::new(category, value)),
            _ => Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn parse_number(raw: &str) -> ApiResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::Validation(format!("Value \"{}\" is not a valid number", raw)))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Confirmation for delete operations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    /// Number of records removed (bulk delete only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<u64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            deleted: None,
        }
    }

    pub fn with_deleted(mut self, deleted: u64) -> Self {
        self.deleted = Some(deleted);
        self
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Store backend name and state, e.g. "sqlite: ok"
    pub store: String,
    /// Record count, when the store answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<u64>,
    pub uptime_seconds: u64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateRecordRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let record = request(json!({"category": "sales", "value": 100})).validate().unwrap();
        assert_eq!(record, NewRecord::new("sales", 100.0));
    }

    #[test]
    fn test_zero_value_is_present() {
        let record = request(json!({"category": "a", "value": 0})).validate().unwrap();
        assert_eq!(record.value, 0.0);
    }

    #[test]
    fn test_missing_fields() {
        for body in [
            json!({"value": 1}),
            json!({"category": "a"}),
            json!({"category": "", "value": 1}),
            json!({"category": "a", "value": null}),
            json!({}),
        ] {
            let err = request(body).validate().unwrap_err();
            assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_scalar_coercion() {
        let record = request(json!({"category": 42, "value": " 7.5 "})).validate().unwrap();
        assert_eq!(record, NewRecord::new("42", 7.5));
    }

    #[test]
    fn test_uncoercible_values() {
        for body in [
            json!({"category": "a", "value": "abc"}),
            json!({"category": "a", "value": ""}),
            json!({"category": "a", "value": "NaN"}),
            json!({"category": "a", "value": true}),
            json!({"category": ["a"], "value": 1}),
        ] {
            assert!(matches!(
                request(body).validate(),
                Err(ApiError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_bulk_message_shape() {
        let json = serde_json::to_value(MessageResponse::new("ok").with_deleted(3)).unwrap();
        assert_eq!(json, json!({"message": "ok", "deleted": 3}));

        let json = serde_json::to_value(MessageResponse::new("ok")).unwrap();
        assert_eq!(json, json!({"message": "ok"}));
    }
}
