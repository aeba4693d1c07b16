use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub fullname: String,
    pub role: String,
    pub sport_id: Option<i32>,
    pub sport_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub verification_status: String,
    pub registration_date: chrono::NaiveDateTime,
}

impl User {
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Athlete,
    Organizer,
    Admin,
    Scout,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Athlete => "athlete",
            Self::Organizer => "organizer",
            Self::Admin => "admin",
            Self::Scout => "scout",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "athlete" => Some(Self::Athlete),
            "organizer" => Some(Self::Organizer),
            "admin" => Some(Self::Admin),
            "scout" => Some(Self::Scout),
            _ => None,
        }
    }

    /// Roles an account may pick for itself at registration.
    pub fn is_self_assignable(&self) -> bool {
        !matches!(self, Self::Admin)
    }

    pub fn can_organize(&self) -> bool {
        matches!(self, Self::Organizer | Self::Admin)
    }
}

/// Whole years between `birthdate` and `today`, counted from the birthday.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age.max(0)
}

pub fn age_today(birthdate: Option<NaiveDate>) -> Option<i32> {
    birthdate.map(|b| age_on(b, chrono::Utc::now().date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(age_on(date(2000, 6, 15), date(2024, 6, 14)), 23);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_age_never_negative() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            UserRole::Athlete,
            UserRole::Organizer,
            UserRole::Admin,
            UserRole::Scout,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("coach"), None);
    }

    #[test]
    fn test_admin_is_not_self_assignable() {
        assert!(!UserRole::Admin.is_self_assignable());
        assert!(UserRole::Scout.is_self_assignable());
    }
}
