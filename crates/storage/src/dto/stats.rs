use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Platform-wide counters for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlatformStats {
    pub users: i64,
    pub athletes: i64,
    pub organizers: i64,
    pub scouts: i64,
    pub events: i64,
    pub news: i64,
}
