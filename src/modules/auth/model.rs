//! Request and response DTOs for the auth endpoints.

use devicegate_auth::Role;
use devicegate_core::MAX_PASSWORD_BYTES;
use devicegate_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long").with_message(
            format!("password must be at most {} bytes", MAX_PASSWORD_BYTES).into(),
        ));
    }
    Ok(())
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(
        length(min = 1, message = "password is required"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
    /// Defaults to `<username>@example.local` when omitted.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
}

/// Missing fields deserialize as empty strings so that an incomplete login
/// is rejected as bad credentials rather than as a malformed request.
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of `accessToken` in seconds.
    pub expires_in_sec: i64,
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct MeResponse {
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_blank_email_is_absent() {
        let dto: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw","email":""}"#).unwrap();
        assert!(dto.email.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_malformed_email() {
        let dto: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw","email":"nope"}"#)
                .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_empty_username() {
        let dto: RegisterRequest =
            serde_json::from_str(r#"{"username":"","password":"pw"}"#).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_register_request_password_limit_counts_bytes() {
        // 36 two-byte chars: 36 characters but 72 bytes.
        let dto = RegisterRequest {
            username: "alice".to_string(),
            password: "é".repeat(36),
            email: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let dto = RegisterRequest {
            username: "alice".to_string(),
            password: "a".repeat(MAX_PASSWORD_BYTES),
            email: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_login_request_missing_fields_default_to_empty() {
        let dto: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(dto.username.is_empty());
        assert!(dto.password.is_empty());
    }

    #[test]
    fn test_token_response_is_camel_case() {
        let value = serde_json::to_value(TokenResponse {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_in_sec: 900,
        })
        .unwrap();
        assert_eq!(value["accessToken"], "a");
        assert_eq!(value["refreshToken"], "r");
        assert_eq!(value["expiresInSec"], 900);
    }
}
