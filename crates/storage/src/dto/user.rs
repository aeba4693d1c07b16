use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_not_blank;
use crate::models::{Achievement, Event, User, UserDetails};

/// Row of the admin user table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub sport: Option<String>,
    pub role: String,
    pub registration_date: chrono::NaiveDateTime,
    pub verification_status: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            name: user.fullname,
            sport: user.sport_name,
            role: user.role,
            registration_date: user.registration_date,
            verification_status: user.verification_status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct VerifyUserRequest {
    #[validate(custom(function = "validate_verification_status"))]
    pub status: Option<String>,
}

impl VerifyUserRequest {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("verified")
    }
}

fn validate_verification_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["unverified", "pending", "verified", "rejected"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_verification_status"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserVerifiedResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Public profile page for any user, organizers in particular
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub avatar_url: Option<String>,
    pub events: Vec<Event>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponse {
    #[serde(flatten)]
    pub user: User,
    pub details: Option<UserDetails>,
}

/// Request payload for the account settings form; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub fullname: Option<String>,

    pub sport_id: Option<i32>,

    pub birthdate: Option<NaiveDate>,

    #[validate(length(max = 50))]
    pub gender: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    pub height_cm: Option<Decimal>,

    pub weight_kg: Option<Decimal>,

    #[validate(length(max = 100))]
    pub position: Option<String>,

    #[validate(range(min = 0, max = 999))]
    pub jersey_number: Option<i32>,

    #[validate(length(max = 50))]
    pub contact_num: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub video_url: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_defaults_to_verified() {
        assert_eq!(VerifyUserRequest::default().status(), "verified");
    }

    #[test]
    fn test_verify_rejects_unknown_status() {
        let req = VerifyUserRequest {
            status: Some("banned".to_string()),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_settings_rejects_bad_avatar_url() {
        let req = UpdateSettingsRequest {
            avatar_url: Some("not a url".to_string()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("avatar_url"));
    }
}
