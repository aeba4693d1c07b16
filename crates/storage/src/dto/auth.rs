use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_not_blank;
use crate::models::UserRole;

/// Request payload for creating an account
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(custom(function = "validate_registration_role"))]
    pub role: String,

    #[validate(length(max = 50))]
    pub gender: Option<String>,

    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub region: Option<String>,

    /// Sport id from the sports lookup
    pub sport: Option<i32>,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,
}

fn validate_registration_role(role: &str) -> Result<(), validator::ValidationError> {
    match UserRole::parse(role) {
        Some(role) if role.is_self_assignable() => Ok(()),
        _ => {
            let mut error = validator::ValidationError::new("invalid_role");
            error.message = Some("Role must be athlete, organizer or scout".into());
            Err(error)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    pub token: Uuid,

    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ana Reyes".to_string(),
            email: "ana@example.com".to_string(),
            password: password.to_string(),
            role: role.to_string(),
            gender: None,
            birth_date: None,
            region: None,
            sport: None,
            bio: None,
        }
    }

    #[test]
    fn test_register_accepts_athlete() {
        assert!(request("athlete", "long-enough").validate().is_ok());
    }

    #[test]
    fn test_register_rejects_admin_role() {
        let errors = request("admin", "long-enough").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let errors = request("scout", "short").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
