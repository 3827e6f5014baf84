//! Response envelope types.
//!
//! Every shop API endpoint wraps its payload the same way:
//!
//! ```json
//! { "success": true, "message": "Customer created", "data": { "customer": { ... } } }
//! ```
//!
//! The `data` object is keyed by entity (`customers`, `sale`, `stats`, ...),
//! so each endpoint module defines its own payload struct and unwraps it
//! through [`ApiResponse::into_data`].

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

fn default_success() -> bool {
    true
}

/// The standard envelope around every API payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,

    /// Human-readable outcome, mostly set on writes and failures.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload, turning an empty `data` into an error naming
    /// what was expected.
    pub fn into_data(self, expected: &str) -> ClientResult<T> {
        self.data.ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "missing {} in response{}",
                expected,
                self.message
                    .map(|m| format!(": {m}"))
                    .unwrap_or_default()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn test_envelope_with_data() {
        let resp: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success":true,"data":{"value":7}}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.into_data("payload").unwrap().value, 7);
    }

    #[test]
    fn test_envelope_missing_data_is_error() {
        let resp: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success":false,"message":"no such customer"}"#).unwrap();
        assert!(!resp.success);
        let err = resp.into_data("customer").unwrap_err();
        assert!(err.to_string().contains("customer"));
        assert!(err.to_string().contains("no such customer"));
    }

    #[test]
    fn test_success_defaults_to_true() {
        let resp: ApiResponse<Payload> =
            serde_json::from_str(r#"{"data":{"value":1}}"#).unwrap();
        assert!(resp.success);
    }
}
