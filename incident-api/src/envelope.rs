use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Wrapper around every backend response. Failed calls usually omit `body`,
/// so every field decodes as optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEnvelope<T> {
    pub execution_status: Option<String>,
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub output_kpis: Option<serde_json::Value>,
    pub body: Option<T>,
}

impl<T> Default for ApiEnvelope<T> {
    fn default() -> Self {
        Self {
            execution_status: None,
            status_code: None,
            message: None,
            error_code: None,
            error_message: None,
            output_kpis: None,
            body: None,
        }
    }
}

impl<T> ApiEnvelope<T>
where
    T: for<'de> Deserialize<'de>,
{
    pub fn decode(raw: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl<T> ApiEnvelope<T> {
    /// Succeeds when the transport said ok and the envelope carries the
    /// expected application status.
    pub fn require(self, http_ok: bool, expected: u16) -> Result<Self, ApiError> {
        if http_ok && self.status_code == Some(expected) {
            return Ok(self);
        }
        log::debug!(
            "envelope rejected: http_ok={http_ok} status_code={:?} error_code={:?}",
            self.status_code,
            self.error_code
        );
        Err(ApiError::Status {
            status: self.status_code.unwrap_or_default(),
            message: self.message.or(self.error_message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Deserialize)]
    struct Body {
        value: u32,
    }

    #[test]
    fn missing_fields_decode_as_none() {
        let env: ApiEnvelope<Body> = ApiEnvelope::decode("{}").expect("decode");
        assert_eq!(env, ApiEnvelope::default());
    }

    #[test]
    fn failure_envelope_keeps_message() {
        let raw = json!({
            "execution_status": "Failed",
            "status_code": 404,
            "message": "No Recent Incidents found",
            "error_code": "NO_DATA",
            "output_kpis": { "execution_time": 0.01 }
        })
        .to_string();
        let env: ApiEnvelope<Body> = ApiEnvelope::decode(&raw).expect("decode");
        assert!(env.body.is_none());
        let err = env.require(false, 200).expect_err("404 is a failure");
        assert_eq!(err.server_message(), Some("No Recent Incidents found"));
    }

    #[test]
    fn require_checks_both_transport_and_status() {
        let ok: ApiEnvelope<Body> = ApiEnvelope {
            status_code: Some(201),
            body: Some(Body { value: 1 }),
            ..ApiEnvelope::default()
        };
        assert!(ok.clone().require(true, 201).is_ok());
        assert!(ok.clone().require(true, 200).is_err());
        assert!(ok.require(false, 201).is_err());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = ApiEnvelope::<Body>::decode("<html>").expect_err("not json");
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
