use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{ParticipantWithUser, age_today};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipationRequest {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantEntry {
    pub participant_no: usize,
    pub user_id: Uuid,
    pub name: String,
    pub sport: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub joined_at: NaiveDateTime,
}

impl ParticipantEntry {
    /// Rosters are numbered from one in join order.
    pub fn numbered(rows: Vec<ParticipantWithUser>) -> Vec<Self> {
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| Self {
                participant_no: index + 1,
                user_id: row.user_id,
                name: row.fullname,
                sport: row.sport_name,
                location: row.location,
                age: age_today(row.birthdate),
                joined_at: row.joined_at,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantsResponse {
    pub participants: Vec<ParticipantEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HasJoinedResponse {
    #[serde(rename = "hasJoined")]
    pub has_joined: bool,
}
