use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserDetails {
    pub user_id: Uuid,
    pub height_cm: Option<Decimal>,
    pub weight_kg: Option<Decimal>,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub contact_num: Option<String>,
    pub email: Option<String>,
    pub video_url: Option<String>,
    pub avatar_url: Option<String>,
}
