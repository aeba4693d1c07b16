use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteStats {
    pub user_id: Uuid,
    pub ppg: Decimal,
    pub rpg: Decimal,
    pub apg: Decimal,
    pub updated_at: chrono::NaiveDateTime,
}
