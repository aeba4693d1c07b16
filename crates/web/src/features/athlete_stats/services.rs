use sqlx::PgPool;
use storage::{
    dto::athlete::UpsertStatsRequest, error::Result, models::AthleteStats,
    repository::AthleteRepository,
};
use uuid::Uuid;

pub async fn list_stats(pool: &PgPool) -> Result<Vec<AthleteStats>> {
    AthleteRepository::new(pool).list_stats().await
}

pub async fn upsert_stats(
    pool: &PgPool,
    athlete_id: Uuid,
    req: &UpsertStatsRequest,
) -> Result<AthleteStats> {
    AthleteRepository::new(pool)
        .upsert_stats(athlete_id, req)
        .await
}
