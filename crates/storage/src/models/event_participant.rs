use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventParticipant {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub joined_at: chrono::NaiveDateTime,
}

/// Participant row joined with the user columns shown on the roster.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantWithUser {
    pub user_id: Uuid,
    pub joined_at: chrono::NaiveDateTime,
    pub fullname: String,
    pub sport_name: Option<String>,
    pub location: Option<String>,
    pub birthdate: Option<NaiveDate>,
}
