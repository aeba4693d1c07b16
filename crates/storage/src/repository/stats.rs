use sqlx::PgPool;

use crate::dto::stats::PlatformStats;
use crate::error::Result;

pub struct StatsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn platform(&self) -> Result<PlatformStats> {
        let stats = sqlx::query_as::<_, PlatformStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS users,
                (SELECT COUNT(*) FROM users WHERE role = 'athlete') AS athletes,
                (SELECT COUNT(*) FROM users WHERE role = 'organizer') AS organizers,
                (SELECT COUNT(*) FROM users WHERE role = 'scout') AS scouts,
                (SELECT COUNT(*) FROM events) AS events,
                (SELECT COUNT(*) FROM news_published) AS news
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(stats)
    }
}
