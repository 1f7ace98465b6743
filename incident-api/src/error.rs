use thiserror::Error;

/// Rejected before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both email and password.")]
    MissingCredentials,
    #[error("Please fill all fields.")]
    MissingRegistrationFields,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please provide a description and location.")]
    MissingReportFields,
}

impl ValidationError {
    /// Toast heading for this failure.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials
            | ValidationError::MissingRegistrationFields
            | ValidationError::MissingReportFields => "Missing Fields",
            ValidationError::PasswordTooShort => "Invalid Password",
            ValidationError::PasswordMismatch => "Error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server answered {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// The two user-facing categories: validation failed, or the request did.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// Backend-supplied message, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_its_own_category() {
        let err: ApiError = ValidationError::PasswordMismatch.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Passwords do not match");
        assert!(!ApiError::Request("offline".into()).is_validation());
    }

    #[test]
    fn status_error_carries_server_message() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.to_string(), "server answered 401: Invalid credentials");
    }

    #[test]
    fn titles_group_missing_fields() {
        assert_eq!(ValidationError::MissingCredentials.title(), "Missing Fields");
        assert_eq!(ValidationError::PasswordTooShort.title(), "Invalid Password");
    }
}
