use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ghumfir_core::GhumfirError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
            details: None,
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
            details: None,
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<GhumfirError> for ApiError {
    fn from(err: GhumfirError) -> Self {
        match &err {
            GhumfirError::InvalidCredentials => Self::unauthorized(err.to_string()),
            GhumfirError::StateMismatch | GhumfirError::ExternalAuthFailed { .. } => {
                Self::unauthorized("Login failed").with_details(err.to_string())
            }
            GhumfirError::RegistrationRejected { rule } => Self::unprocessable(rule.message()),
            GhumfirError::MethodDisabled { .. } => Self::forbidden(err.to_string()),
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghumfir_core::error::RegistrationRule;

    #[test]
    fn test_auth_failures_map_to_401() {
        let err: ApiError = GhumfirError::InvalidCredentials.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let err: ApiError = GhumfirError::StateMismatch.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_registration_rejection_maps_to_422() {
        let err: ApiError = GhumfirError::RegistrationRejected {
            rule: RegistrationRule::PasswordTooShort,
        }
        .into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "password must be at least 6 characters");
    }

    #[test]
    fn test_disabled_method_maps_to_403() {
        let err: ApiError = GhumfirError::MethodDisabled {
            method: "google".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
