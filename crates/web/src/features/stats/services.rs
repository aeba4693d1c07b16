use sqlx::PgPool;
use storage::{dto::stats::PlatformStats, error::Result, repository::StatsRepository};

pub async fn platform_stats(pool: &PgPool) -> Result<PlatformStats> {
    StatsRepository::new(pool).platform().await
}
