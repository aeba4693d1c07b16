use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Achievement, AthleteStats, Education, User, UserDetails, age_today};

/// Card shown in the athlete directory
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteListItem {
    pub id: Uuid,
    pub name: String,
    pub sport: String,
    pub position: String,
    pub age: Option<i32>,
    pub gender: String,
    pub location: String,
    pub height: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub achievements: i64,
    pub stats: Vec<StatLabel>,
    pub verification_status: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatLabel {
    pub label: String,
    pub value: String,
}

/// Athlete row joined with details, stats and achievement count
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AthleteListRow {
    pub user_id: Uuid,
    pub fullname: String,
    pub sport_name: Option<String>,
    pub birthdate: Option<chrono::NaiveDate>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub verification_status: String,
    pub position: Option<String>,
    pub height_cm: Option<Decimal>,
    pub weight_kg: Option<Decimal>,
    pub avatar_url: Option<String>,
    pub ppg: Option<Decimal>,
    pub rpg: Option<Decimal>,
    pub apg: Option<Decimal>,
    pub achievement_count: i64,
}

impl From<AthleteListRow> for AthleteListItem {
    fn from(row: AthleteListRow) -> Self {
        let line = StatLine::new(row.ppg, row.rpg, row.apg);
        Self {
            id: row.user_id,
            name: row.fullname,
            sport: row.sport_name.unwrap_or_default(),
            position: row.position.unwrap_or_default(),
            age: age_today(row.birthdate),
            gender: row.gender.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            height: row.height_cm,
            weight: row.weight_kg,
            achievements: row.achievement_count,
            stats: line.labels(),
            verification_status: row.verification_status,
            image_url: row.avatar_url,
        }
    }
}

/// Points, rebounds and assists per game, zero when no stats row exists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatLine {
    pub ppg: Decimal,
    pub rpg: Decimal,
    pub apg: Decimal,
}

impl StatLine {
    pub fn new(ppg: Option<Decimal>, rpg: Option<Decimal>, apg: Option<Decimal>) -> Self {
        Self {
            ppg: ppg.unwrap_or_default(),
            rpg: rpg.unwrap_or_default(),
            apg: apg.unwrap_or_default(),
        }
    }

    fn entries(&self) -> [(&'static str, Decimal, u32); 3] {
        [
            ("PPG", self.ppg, 50),
            ("RPG", self.rpg, 20),
            ("APG", self.apg, 20),
        ]
    }

    pub fn labels(&self) -> Vec<StatLabel> {
        self.entries()
            .into_iter()
            .map(|(label, value, _)| StatLabel {
                label: label.to_string(),
                value: value.normalize().to_string(),
            })
            .collect()
    }

    pub fn gauges(&self) -> Vec<StatGauge> {
        self.entries()
            .into_iter()
            .map(|(label, value, max)| StatGauge {
                label: label.to_string(),
                value: value.to_f64().unwrap_or_default(),
                max,
            })
            .collect()
    }
}

impl From<Option<AthleteStats>> for StatLine {
    fn from(stats: Option<AthleteStats>) -> Self {
        match stats {
            Some(s) => Self::new(Some(s.ppg), Some(s.rpg), Some(s.apg)),
            None => Self::new(None, None, None),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatGauge {
    pub label: String,
    pub value: f64,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileStats {
    pub overall: Vec<StatGauge>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoLink {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationEntry {
    pub school: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub year: Option<String>,
}

impl From<Education> for EducationEntry {
    fn from(education: Education) -> Self {
        Self {
            school: education.school,
            degree: education.degree,
            field: education.field,
            year: education.end_year.map(|y| y.to_string()),
        }
    }
}

/// Full athlete profile page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub sport: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub gender: String,
    pub location: String,
    pub bio: String,
    #[serde(rename = "verification_status")]
    pub verification_status: String,
    pub height: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub jersey_number: Option<i32>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub contact_num: Option<String>,
    pub videos: Vec<VideoLink>,
    pub achievements: Vec<Achievement>,
    pub education: Vec<EducationEntry>,
    pub stats: ProfileStats,
}

impl AthleteProfileResponse {
    pub fn assemble(
        user: User,
        details: Option<UserDetails>,
        achievements: Vec<Achievement>,
        education: Vec<Education>,
        stats: Option<AthleteStats>,
    ) -> Self {
        let details = details.unwrap_or_default();
        let not_available = || "N/A".to_string();

        Self {
            id: user.user_id,
            name: user.fullname,
            sport: user.sport_name.unwrap_or_else(not_available),
            position: details.position,
            age: age_today(user.birthdate),
            gender: user.gender.unwrap_or_else(not_available),
            location: user.location.unwrap_or_else(not_available),
            bio: user.bio.unwrap_or_default(),
            verification_status: user.verification_status,
            height: details.height_cm,
            weight: details.weight_kg,
            jersey_number: details.jersey_number,
            email: details.email,
            image_url: details.avatar_url,
            contact_num: details.contact_num,
            videos: details
                .video_url
                .map(|url| vec![VideoLink { url }])
                .unwrap_or_default(),
            achievements,
            education: education.into_iter().map(EducationEntry::from).collect(),
            stats: ProfileStats {
                overall: StatLine::from(stats).gauges(),
            },
        }
    }
}

/// Request payload for setting an athlete's per-game stats; missing values become zero
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertStatsRequest {
    #[validate(custom(function = "validate_stat"))]
    pub ppg: Option<Decimal>,

    #[validate(custom(function = "validate_stat"))]
    pub rpg: Option<Decimal>,

    #[validate(custom(function = "validate_stat"))]
    pub apg: Option<Decimal>,
}

fn validate_stat(value: &Decimal) -> Result<(), validator::ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
        let mut error = validator::ValidationError::new("out_of_range");
        error.message = Some("Stats must be between 0 and 100".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatsUpdatedResponse {
    pub message: String,
    pub stats: AthleteStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_missing_stats_default_to_zero() {
        let labels = StatLine::from(None).labels();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|l| l.value == "0"));
        assert_eq!(labels[0].label, "PPG");
    }

    #[test]
    fn test_gauges_carry_maximums() {
        let line = StatLine::new(Some(Decimal::from_str("21.5").unwrap()), None, None);
        let gauges = line.gauges();
        assert_eq!(gauges[0].value, 21.5);
        assert_eq!(gauges[0].max, 50);
        assert_eq!(gauges[1].max, 20);
    }

    #[test]
    fn test_stat_range_validation() {
        let req = UpsertStatsRequest {
            ppg: Some(Decimal::from(101)),
            rpg: None,
            apg: Some(Decimal::from(5)),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("ppg"));
        assert!(!errors.field_errors().contains_key("apg"));
    }
}
